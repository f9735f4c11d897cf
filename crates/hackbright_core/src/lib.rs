//! Core of the Hackbright project tracker.
//! Students, projects and grades in SQLite, driven by a line-oriented prompt.

pub mod command;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod shell;

pub use command::{parse_command, Command, CommandError, ParsedLine};
pub use config::{ConfigError, TrackerConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::grade::{Grade, GradeValue};
pub use model::project::Project;
pub use model::student::Student;
pub use model::ModelValidationError;
pub use repo::tracker_repo::{RepoError, RepoResult, SqliteTrackerRepository, TrackerRepository};
pub use service::tracker_service::{RecordOutcome, TrackerService};
pub use shell::{SessionEnd, SessionSummary, Shell, INVALID_ENTRY, PROMPT};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
