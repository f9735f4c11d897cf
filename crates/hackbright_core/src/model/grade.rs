//! Grade record and its loosely typed value.
//!
//! # Invariants
//! - A grade value is bound exactly as entered: integer-looking input as an
//!   integer, anything else as text.
//! - Spelling survives the round trip only with the untyped `grades.grade`
//!   column created by `db::schema`. An existing `INTEGER`/`NUMERIC` column
//!   applies SQLite type affinity, so `007` reads back as `7`.
//! - Rendering never adds quotes or type decoration.

use super::{require_text, ModelValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Value of the unstructured `grades.grade` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GradeValue {
    Integer(i64),
    Text(String),
}

impl GradeValue {
    /// Interprets raw command input.
    ///
    /// Only canonical integers become `Integer`; `007` or `+5` stay `Text`.
    /// Whether the store keeps that spelling depends on the column's type
    /// affinity.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(value) if value.to_string() == raw => Self::Integer(value),
            _ => Self::Text(raw.to_string()),
        }
    }
}

impl Display for GradeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for GradeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// One row of the `grades` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub student_github: String,
    pub project_title: String,
    pub grade: GradeValue,
}

impl Grade {
    pub fn new(
        student_github: impl Into<String>,
        project_title: impl Into<String>,
        grade: GradeValue,
    ) -> Self {
        Self {
            student_github: student_github.into(),
            project_title: project_title.into(),
            grade,
        }
    }

    /// Checks the reference fields. Referenced rows are not checked.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        require_text("student_github", &self.student_github)?;
        require_text("project_title", &self.project_title)?;
        if let GradeValue::Text(value) = &self.grade {
            require_text("grade", value)?;
        }
        Ok(())
    }
}
