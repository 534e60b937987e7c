//! Utility functions and helpers for the calculator service.
//!
//! # Submodules
//!
//! - `logging`: Tracing initialization with console and file sinks.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;
