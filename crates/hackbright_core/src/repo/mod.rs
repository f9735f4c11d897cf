//! Repository layer for tracker records.
//!
//! # Responsibility
//! - Define the store contract used by record operations.
//! - Isolate SQL text and parameter binding from the operations and the shell.
//!
//! # Invariants
//! - Every statement binds its inputs as `:name` parameters.
//! - Lookups return `Ok(None)` for a missing row; they never fail on absence.

pub mod tracker_repo;
