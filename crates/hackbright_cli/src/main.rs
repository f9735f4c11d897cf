//! `hackbright` command-line entry point.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment.
//! - Own the database connection for the whole session and release it on
//!   every exit path.

use clap::Parser;
use hackbright_core::db::open_db;
use hackbright_core::{init_logging, Shell, SqliteTrackerRepository, TrackerConfig, TrackerService};
use log::info;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Query and update students, projects and grades from a prompt.
#[derive(Debug, Parser)]
#[command(name = "hackbright", version)]
struct Args {
    /// SQLite database file; created when missing.
    #[arg(long = "db", env = "HACKBRIGHT_DB")]
    db_path: Option<PathBuf>,

    /// One of trace|debug|info|warn|error.
    #[arg(long, env = "HACKBRIGHT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Directory for rolling log files. Logging is off when unset.
    #[arg(long, env = "HACKBRIGHT_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("hackbright: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), String> {
    let config =
        TrackerConfig::from_overrides(args.db_path, args.log_level.as_deref(), args.log_dir)
            .map_err(|err| err.to_string())?;

    if let Some(log_dir) = &config.log_dir {
        init_logging(config.log_level, log_dir)?;
    }

    let conn = open_db(&config.db_path).map_err(|err| {
        format!(
            "cannot open database `{}`: {err}",
            config.db_path.display()
        )
    })?;

    let shell = Shell::new(TrackerService::new(SqliteTrackerRepository::new(&conn)));
    let stdin = io::stdin();
    let summary = shell
        .run(&mut stdin.lock(), &mut io::stdout().lock())
        .map_err(|err| format!("terminal I/O failed: {err}"))?;
    drop(shell);

    conn.close().map_err(|(_, err)| format!("failed to close database: {err}"))?;
    info!("event=app_exit module=cli status=ok end={:?}", summary.end);
    Ok(())
}
