//! Tracker record operations.
//!
//! # Responsibility
//! - Provide the five record operations used by the command shell.
//! - Map missing rows to explicit not-found outcomes.
//!
//! # Invariants
//! - Operations never print; rendering is `RecordOutcome`'s `Display`.
//! - Log events carry the operation name and status only, never user values.

use crate::model::grade::{Grade, GradeValue};
use crate::model::project::Project;
use crate::model::student::Student;
use crate::repo::tracker_repo::{RepoResult, TrackerRepository};
use log::{error, info};
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Result of one record operation that reached the store successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    StudentFound(Student),
    StudentCreated(Student),
    StudentNotFound { github: String },
    ProjectFound(Project),
    ProjectNotFound { title: String },
    GradeFound(Grade),
    GradeAssigned(Grade),
    GradeNotFound { github: String, title: String },
}

impl RecordOutcome {
    /// Returns whether the operation found or wrote the requested row.
    pub fn is_hit(&self) -> bool {
        !matches!(
            self,
            Self::StudentNotFound { .. } | Self::ProjectNotFound { .. } | Self::GradeNotFound { .. }
        )
    }

    fn status(&self) -> &'static str {
        match self {
            Self::StudentCreated(_) | Self::GradeAssigned(_) => "committed",
            _ if self.is_hit() => "found",
            _ => "not_found",
        }
    }
}

impl Display for RecordOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StudentFound(student) => write!(
                f,
                "Student: {} {}\nGitHub account: {}",
                student.first_name, student.last_name, student.github
            ),
            Self::StudentCreated(student) => write!(
                f,
                "Successfully added student {} {}",
                student.first_name, student.last_name
            ),
            Self::StudentNotFound { github } => {
                write!(f, "No student found with GitHub account {github}")
            }
            Self::ProjectFound(project) => write!(
                f,
                "The {} project involves {} and has a max grade of {}",
                project.title, project.description, project.max_grade
            ),
            Self::ProjectNotFound { title } => write!(f, "No project found with title {title}"),
            Self::GradeFound(grade) => write!(
                f,
                "{}'s grade for the {} project was {}",
                grade.student_github, grade.project_title, grade.grade
            ),
            Self::GradeAssigned(grade) => {
                write!(f, "Successfully added grade for {}", grade.student_github)
            }
            Self::GradeNotFound { github, title } => {
                write!(f, "No grade found for {github} on the {title} project")
            }
        }
    }
}

/// Record operations over a tracker repository.
pub struct TrackerService<R: TrackerRepository> {
    repo: R,
}

impl<R: TrackerRepository> TrackerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Looks up one student by GitHub account.
    pub fn get_student_by_github(&self, github: &str) -> RepoResult<RecordOutcome> {
        observe("student_lookup", || {
            Ok(match self.repo.get_student_by_github(github)? {
                Some(student) => RecordOutcome::StudentFound(student),
                None => RecordOutcome::StudentNotFound {
                    github: github.to_string(),
                },
            })
        })
    }

    /// Adds a student. Duplicate GitHub accounts are accepted.
    pub fn make_new_student(
        &self,
        first_name: &str,
        last_name: &str,
        github: &str,
    ) -> RepoResult<RecordOutcome> {
        observe("student_insert", || {
            let student = Student::new(first_name, last_name, github);
            self.repo.create_student(&student)?;
            Ok(RecordOutcome::StudentCreated(student))
        })
    }

    /// Looks up one project by title.
    pub fn get_project_by_title(&self, title: &str) -> RepoResult<RecordOutcome> {
        observe("project_lookup", || {
            Ok(match self.repo.get_project_by_title(title)? {
                Some(project) => RecordOutcome::ProjectFound(project),
                None => RecordOutcome::ProjectNotFound {
                    title: title.to_string(),
                },
            })
        })
    }

    /// Looks up the grade a student received on a project.
    pub fn get_grade_by_github_title(
        &self,
        github: &str,
        title: &str,
    ) -> RepoResult<RecordOutcome> {
        observe("grade_lookup", || {
            Ok(match self.repo.get_grade_by_github_title(github, title)? {
                Some(grade) => RecordOutcome::GradeFound(grade),
                None => RecordOutcome::GradeNotFound {
                    github: github.to_string(),
                    title: title.to_string(),
                },
            })
        })
    }

    /// Records a grade. The student and project are not checked for existence.
    pub fn assign_grade(
        &self,
        github: &str,
        title: &str,
        grade: &str,
    ) -> RepoResult<RecordOutcome> {
        observe("grade_insert", || {
            let grade = Grade::new(github, title, GradeValue::parse(grade));
            self.repo.create_grade(&grade)?;
            Ok(RecordOutcome::GradeAssigned(grade))
        })
    }
}

fn observe(
    event: &str,
    operation: impl FnOnce() -> RepoResult<RecordOutcome>,
) -> RepoResult<RecordOutcome> {
    let started_at = Instant::now();
    let result = operation();
    match &result {
        Ok(outcome) => info!(
            "event={event} module=service status={} duration_ms={}",
            outcome.status(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event={event} module=service status=error duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        ),
    }
    result
}
