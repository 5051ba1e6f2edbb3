//! Logging infrastructure for Job Board Viewer.
//!
//! This module provides:
//! - Global `tracing` subscriber setup honouring `RUST_LOG`
//! - Optional daily-rolling log file next to the stderr output
//! - `LogLevel`, the serializable level used in the config file
//!
//! # Example
//!
//! ```no_run
//! use jobboard_core::logging::{init_tracing_with_file, LogLevel};
//!
//! // Keep the guard alive for the lifetime of the program so the
//! // background writer flushes on exit.
//! let _guard = init_tracing_with_file(LogLevel::Info, ".logs");
//! tracing::info!("Application started");
//! ```

mod types;

pub use types::LogLevel;

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File name prefix for rolling log files.
const LOG_FILE_PREFIX: &str = "job-board-viewer.log";

/// Initialize global tracing subscriber for application-wide logging.
///
/// This sets up a subscriber that:
/// - Respects RUST_LOG environment variable
/// - Falls back to the provided default level
/// - Outputs to stderr with timestamps
///
/// Should be called once at application startup.
pub fn init_tracing(default_level: LogLevel) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(env_filter(default_level))
        .init();
}

/// Initialize tracing with stderr output plus a daily log file in `log_dir`.
///
/// Returns the writer guard; dropping it flushes and stops the file writer.
/// Falls back to stderr-only logging if the directory cannot be created.
pub fn init_tracing_with_file(
    default_level: LogLevel,
    log_dir: impl AsRef<Path>,
) -> Option<WorkerGuard> {
    let log_dir = log_dir.as_ref();

    if let Err(e) = fs::create_dir_all(log_dir) {
        eprintln!(
            "Warning: Failed to create log directory {}: {}. Logging to stderr only.",
            log_dir.display(),
            e
        );
        init_tracing(default_level);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(file_writer),
        )
        .with(env_filter(default_level))
        .init();

    Some(guard)
}

/// Initialize tracing for tests (only logs warnings and above).
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

fn env_filter(default_level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_to_filter_str(default_level)))
}

/// Convert LogLevel to filter string.
fn level_to_filter_str(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
    }
}
