//! Structured logging for the calculator service.
//!
//! Builds the `tracing` subscriber once at startup with three sinks:
//!
//! - console (stdout) in the configured format,
//! - `combined.log`: every entry at or above the configured level, JSON,
//! - `error.log`: error entries only, JSON.
//!
//! File sinks are append-only and written through non-blocking workers, so a
//! slow disk drops entries instead of stalling a response.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use crate::config::LoggingConfig;
use crate::error::{CalculatorError, Result};
use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Keeps the background log writers alive. Dropping it flushes pending entries.
#[must_use = "dropping the guard stops the file log writers"]
pub struct LogGuard {
    _combined: WorkerGuard,
    _error: WorkerGuard,
}

/// Initializes the global tracing subscriber for the application.
///
/// Creates the log directory if it does not exist. Log levels come from
/// `RUST_LOG` when set, otherwise from `LoggingConfig::level`.
pub fn init(config: &LoggingConfig) -> Result<LogGuard> {
    fs::create_dir_all(&config.directory)?;

    let (combined_writer, combined_guard) = file_writer(&config.combined_path())?;
    let (error_writer, error_guard) = file_writer(&config.error_path())?;

    let console = match config.format.as_str() {
        "json" => fmt::layer().json().boxed(),
        "pretty" => fmt::layer().pretty().boxed(),
        _ => fmt::layer().compact().boxed(),
    };

    tracing_subscriber::registry()
        .with(console.with_filter(level_filter(&config.level)))
        .with(
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(combined_writer)
                .with_filter(level_filter(&config.level)),
        )
        .with(
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(error_writer)
                .with_filter(LevelFilter::ERROR),
        )
        .try_init()
        .map_err(|e| CalculatorError::Logging(e.to_string()))?;

    Ok(LogGuard {
        _combined: combined_guard,
        _error: error_guard,
    })
}

fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Append-only, never rotated. The returned writer is lossy: entries are dropped
/// rather than blocking the caller when the worker falls behind.
fn file_writer(path: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    let directory = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| CalculatorError::Logging(format!("invalid log file {}", path.display())))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .map_err(|e| CalculatorError::Logging(format!("cannot open {}: {}", path.display(), e)))?;
    Ok(tracing_appender::non_blocking(appender))
}

/// Formats a result for log lines: `8` rather than `8.0`, `NaN` and `Infinity` spelled out.
pub fn display_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        value.to_string()
    }
}
