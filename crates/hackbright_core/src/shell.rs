//! Read-eval-print loop for the tracker prompt.
//!
//! # Responsibility
//! - Read one line at a time, dispatch it to one record operation, print the
//!   outcome.
//! - Recover locally from malformed input, missing rows and store errors.
//!
//! # Invariants
//! - The loop never touches the store directly.
//! - `quit` and end of input are the only ways out; both return normally so
//!   the caller's connection is always released.

use crate::command::{parse_command, Command, CommandError, ParsedLine};
use crate::repo::tracker_repo::{RepoResult, TrackerRepository};
use crate::service::tracker_service::{RecordOutcome, TrackerService};
use log::{debug, info, warn};
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "HBA Database> ";
pub const INVALID_ENTRY: &str = "Invalid Entry. Try again.";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    EndOfInput,
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub end: SessionEnd,
    /// Lines dispatched to a record operation.
    pub operations: usize,
    /// Lines answered with the invalid-entry message.
    pub rejected: usize,
    /// Operations that failed in the store.
    pub failed: usize,
}

/// Interactive shell over one tracker service.
pub struct Shell<R: TrackerRepository> {
    service: TrackerService<R>,
}

impl<R: TrackerRepository> Shell<R> {
    pub fn new(service: TrackerService<R>) -> Self {
        Self { service }
    }

    /// Runs the prompt loop until `quit` or end of input.
    ///
    /// # Errors
    /// - Returns I/O errors from `input`/`output`. Store errors are printed
    ///   and do not end the session.
    pub fn run(
        &self,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> io::Result<SessionSummary> {
        let mut summary = SessionSummary {
            end: SessionEnd::EndOfInput,
            operations: 0,
            rejected: 0,
            failed: 0,
        };
        let mut line = Vec::new();

        loop {
            output.write_all(PROMPT.as_bytes())?;
            output.flush()?;

            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                writeln!(output)?;
                break;
            }

            let parsed = std::str::from_utf8(&line)
                .map_err(|_| CommandError::InvalidEncoding)
                .and_then(parse_command);
            let command = match parsed {
                Ok(ParsedLine::Quit) => {
                    summary.end = SessionEnd::Quit;
                    break;
                }
                Ok(ParsedLine::Run(command)) => command,
                Err(err) => {
                    debug!("event=command_rejected module=shell reason=\"{err}\"");
                    summary.rejected += 1;
                    writeln!(output, "{INVALID_ENTRY}")?;
                    continue;
                }
            };

            debug!("event=command_dispatch module=shell command={}", command.name());
            summary.operations += 1;
            match self.dispatch(&command) {
                Ok(outcome) => writeln!(output, "{outcome}")?,
                Err(err) => {
                    warn!(
                        "event=command_failed module=shell command={} error={err}",
                        command.name()
                    );
                    summary.failed += 1;
                    writeln!(output, "Database error: {err}")?;
                }
            }
        }

        info!(
            "event=session_end module=shell end={:?} operations={} rejected={} failed={}",
            summary.end, summary.operations, summary.rejected, summary.failed
        );
        Ok(summary)
    }

    fn dispatch(&self, command: &Command) -> RepoResult<RecordOutcome> {
        match command {
            Command::Student { github } => self.service.get_student_by_github(github),
            Command::NewStudent {
                first_name,
                last_name,
                github,
            } => self.service.make_new_student(first_name, last_name, github),
            Command::ProjectTitle { title } => self.service.get_project_by_title(title),
            Command::GradeOnProject { github, title } => {
                self.service.get_grade_by_github_title(github, title)
            }
            Command::GiveGrade {
                github,
                title,
                grade,
            } => self.service.assign_grade(github, title, grade),
        }
    }
}
