//! Session configuration.
//!
//! # Responsibility
//! - Hold the database path and logging settings chosen by the entry point.
//! - Fill defaults and normalize paths before anything is opened.
//!
//! # Invariants
//! - `db_path` is never empty.
//! - `log_level` is one of `trace|debug|info|warn|error`.
//! - `log_dir`, when set, is absolute.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const DEFAULT_DB_FILE_NAME: &str = "hackbright.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyDbPath,
    InvalidLogLevel(String),
    WorkingDir(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDbPath => write!(f, "database path cannot be empty"),
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
            Self::WorkingDir(message) => {
                write!(f, "cannot resolve working directory: {message}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Resolved settings for one tracker session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub db_path: PathBuf,
    pub log_level: &'static str,
    /// File logging is disabled when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl TrackerConfig {
    /// Builds a config from optional overrides, resolving a relative log
    /// directory against `working_dir`.
    pub fn resolve(
        db_path: Option<PathBuf>,
        log_level: Option<&str>,
        log_dir: Option<PathBuf>,
        working_dir: &Path,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let db_path = db_path.unwrap_or(defaults.db_path);
        if db_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDbPath);
        }

        let log_level = match log_level {
            Some(level) => normalize_level(level).map_err(ConfigError::InvalidLogLevel)?,
            None => defaults.log_level,
        };

        let log_dir = log_dir
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(|dir| {
                if dir.is_absolute() {
                    dir
                } else {
                    working_dir.join(dir)
                }
            });

        Ok(Self {
            db_path,
            log_level,
            log_dir,
        })
    }

    /// Same as [`TrackerConfig::resolve`] using the process working directory.
    pub fn from_overrides(
        db_path: Option<PathBuf>,
        log_level: Option<&str>,
        log_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let working_dir =
            std::env::current_dir().map_err(|err| ConfigError::WorkingDir(err.to_string()))?;
        Self::resolve(db_path, log_level, log_dir, &working_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, TrackerConfig, DEFAULT_DB_FILE_NAME};
    use crate::logging::default_log_level;
    use std::path::{Path, PathBuf};

    #[test]
    fn resolve_without_overrides_uses_defaults() {
        let config = TrackerConfig::resolve(None, None, None, Path::new("/work")).unwrap();
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_FILE_NAME));
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn resolve_makes_relative_log_dir_absolute() {
        let config = TrackerConfig::resolve(
            Some(PathBuf::from("school.db")),
            Some("WARNING"),
            Some(PathBuf::from("logs")),
            Path::new("/work"),
        )
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("school.db"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/work/logs")));
    }

    #[test]
    fn resolve_treats_empty_log_dir_as_disabled() {
        let config =
            TrackerConfig::resolve(None, None, Some(PathBuf::new()), Path::new("/work")).unwrap();
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn resolve_rejects_empty_db_path_and_bad_level() {
        let work = Path::new("/work");
        let err = TrackerConfig::resolve(Some(PathBuf::new()), None, None, work).unwrap_err();
        assert_eq!(err, ConfigError::EmptyDbPath);

        let err = TrackerConfig::resolve(None, Some("loud"), None, work).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(_)));
    }
}
