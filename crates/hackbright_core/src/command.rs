//! Command-line parsing for the tracker prompt.
//!
//! # Invariants
//! - Tokens are split on any whitespace; empty tokens never appear.
//! - A known command with the wrong number of arguments is rejected, never
//!   reinterpreted.
//! - `quit` accepts and ignores any arguments.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// One parsed prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Student {
        github: String,
    },
    NewStudent {
        first_name: String,
        last_name: String,
        github: String,
    },
    ProjectTitle {
        title: String,
    },
    GradeOnProject {
        github: String,
        title: String,
    },
    GiveGrade {
        github: String,
        title: String,
        grade: String,
    },
}

/// One prompt line: either a record operation or the request to leave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Quit,
    Run(Command),
}

impl Command {
    /// Command keyword as typed at the prompt.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Student { .. } => "student",
            Self::NewStudent { .. } => "new_student",
            Self::ProjectTitle { .. } => "project_title",
            Self::GradeOnProject { .. } => "grade_on_project",
            Self::GiveGrade { .. } => "give_grade",
        }
    }
}

/// Reason a prompt line is not a runnable command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Empty,
    /// The line is not valid UTF-8.
    InvalidEncoding,
    Unknown(String),
    WrongArity {
        command: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::InvalidEncoding => write!(f, "command line is not valid UTF-8"),
            Self::Unknown(name) => write!(f, "unknown command `{name}`"),
            Self::WrongArity {
                command,
                expected,
                actual,
            } => write!(
                f,
                "`{command}` expects {expected} argument(s), got {actual}"
            ),
        }
    }
}

impl Error for CommandError {}

/// Parses one line typed at the prompt.
pub fn parse_command(line: &str) -> Result<ParsedLine, CommandError> {
    let mut tokens = line.split_whitespace();
    let Some(name) = tokens.next() else {
        return Err(CommandError::Empty);
    };
    let args: Vec<&str> = tokens.collect();

    let command = match name {
        "quit" => return Ok(ParsedLine::Quit),
        "student" => {
            let [github] = take_args::<1>("student", &args)?;
            Command::Student { github }
        }
        "new_student" => {
            let [first_name, last_name, github] = take_args::<3>("new_student", &args)?;
            Command::NewStudent {
                first_name,
                last_name,
                github,
            }
        }
        "project_title" => {
            let [title] = take_args::<1>("project_title", &args)?;
            Command::ProjectTitle { title }
        }
        "grade_on_project" => {
            let [github, title] = take_args::<2>("grade_on_project", &args)?;
            Command::GradeOnProject { github, title }
        }
        "give_grade" => {
            let [github, title, grade] = take_args::<3>("give_grade", &args)?;
            Command::GiveGrade {
                github,
                title,
                grade,
            }
        }
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(ParsedLine::Run(command))
}

fn take_args<const N: usize>(
    command: &'static str,
    args: &[&str],
) -> Result<[String; N], CommandError> {
    let fixed: &[&str; N] = args.try_into().map_err(|_| CommandError::WrongArity {
        command,
        expected: N,
        actual: args.len(),
    })?;
    Ok(fixed.map(|arg| arg.to_string()))
}
