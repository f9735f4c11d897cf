//! Project record. Projects are read-only from the command line.

use serde::{Deserialize, Serialize};

/// One row of the `projects` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project title, used as the lookup key.
    pub title: String,
    pub description: String,
    pub max_grade: i64,
}
