//! Configuration data structures for the calculator service.
//!
//! This module defines the schema for the application settings: the HTTP
//! listener and the log sinks.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP server settings (host, port, workers).
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging sinks and output format.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the built-in HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The IP address or hostname the server should bind to.
    /// Default: `0.0.0.0`
    #[serde(default = "default_host")]
    pub host: String,

    /// The port number the server should listen on.
    /// Default: `3000`
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of tokio worker threads.
    /// Default: Number of logical CPU cores.
    #[serde(default = "default_workers")]
    pub workers: usize,
}

/// Settings for application logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Overridden by `RUST_LOG` when set.
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console output format (`pretty`, `compact`, `json`).
    /// File sinks always write JSON.
    /// Default: `compact`
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory holding the log files. Created at startup if missing.
    /// Default: `logs`
    #[serde(default = "default_log_directory")]
    pub directory: String,

    /// File receiving every entry at or above `level`.
    /// Default: `combined.log`
    #[serde(default = "default_combined_file")]
    pub combined_file: String,

    /// File receiving error entries only.
    /// Default: `error.log`
    #[serde(default = "default_error_file")]
    pub error_file: String,

    /// Constant `service` tag attached to request and computation entries.
    /// Default: `calculator-microservice`
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

impl LoggingConfig {
    pub fn combined_path(&self) -> PathBuf {
        PathBuf::from(&self.directory).join(&self.combined_file)
    }

    pub fn error_path(&self) -> PathBuf {
        PathBuf::from(&self.directory).join(&self.error_file)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            directory: default_log_directory(),
            combined_file: default_combined_file(),
            error_file: default_error_file(),
            service_name: default_service_name(),
        }
    }
}

// Helper functions for serde defaults
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_workers() -> usize {
    num_cpus::get()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

fn default_log_directory() -> String {
    "logs".to_string()
}

fn default_combined_file() -> String {
    "combined.log".to_string()
}

fn default_error_file() -> String {
    "error.log".to_string()
}

fn default_service_name() -> String {
    "calculator-microservice".to_string()
}
