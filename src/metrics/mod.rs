// Metrics module for Prometheus observability
// Author: kelexine (https://github.com/kelexine)

mod registry;

pub use registry::{gather_metrics, CALCULATIONS_TOTAL, REQUESTS_TOTAL, REQUEST_DURATION};

use crate::error::CalculatorError;

/// Helper to record request metrics
pub fn record_request(method: &str, endpoint: &str, status_code: u16, duration_secs: f64) {
    let status = status_code.to_string();

    REQUESTS_TOTAL
        .with_label_values(&[method, endpoint, &status])
        .inc();

    REQUEST_DURATION
        .with_label_values(&[method, endpoint, &status])
        .observe(duration_secs);
}

/// Helper to record the outcome of one calculation
pub fn record_calculation(operation: &str, outcome: Result<(), &CalculatorError>) {
    let outcome = match outcome {
        Ok(()) => "success",
        Err(e) if e.is_domain_error() => "domain_error",
        Err(_) => "invalid_input",
    };
    CALCULATIONS_TOTAL
        .with_label_values(&[operation, outcome])
        .inc();
}
