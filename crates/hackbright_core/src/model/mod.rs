//! Record types for students, projects and grades.
//!
//! # Responsibility
//! - Define the row shapes returned and accepted by the tracker repository.
//! - Validate caller-built records before they are written.
//!
//! # Invariants
//! - Students are looked up by `github`, projects by `title`.
//! - Records are append-only; nothing here models updates or deletes.

pub mod grade;
pub mod project;
pub mod student;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation error for records about to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelValidationError {
    /// A required text field is empty or whitespace only.
    EmptyField(&'static str),
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "`{field}` cannot be empty"),
        }
    }
}

impl Error for ModelValidationError {}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ModelValidationError> {
    if value.trim().is_empty() {
        return Err(ModelValidationError::EmptyField(field));
    }
    Ok(())
}
