//! Student record.

use super::{require_text, ModelValidationError};
use serde::{Deserialize, Serialize};

/// One row of the `students` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    /// GitHub account name, used as the lookup key.
    pub github: String,
}

impl Student {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        github: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            github: github.into(),
        }
    }

    /// Checks that every field carries text.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        require_text("first_name", &self.first_name)?;
        require_text("last_name", &self.last_name)?;
        require_text("github", &self.github)
    }
}
