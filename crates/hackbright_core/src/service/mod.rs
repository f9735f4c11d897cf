//! Record operations behind the tracker commands.
//!
//! # Responsibility
//! - Run exactly one repository call per operation.
//! - Turn the result into an explicit outcome the shell can print.

pub mod tracker_service;
