// Error types for calculator-microservice
// Author: kelexine (https://github.com/kelexine)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalculatorError {
    /// Missing or non-numeric operand. Carries the route-specific message.
    #[error("{0}")]
    InvalidInput(&'static str),

    #[error("You cannot divide by zero!")]
    DivisionByZero,

    #[error("Cannot calculate square root of a negative number.")]
    NegativeSquareRoot,

    #[error("Modulo by zero is not allowed.")]
    ModuloByZero,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CalculatorError {
    /// True for mathematically invalid operations on well-formed operands.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            CalculatorError::DivisionByZero
                | CalculatorError::NegativeSquareRoot
                | CalculatorError::ModuloByZero
        )
    }

    /// True for every error a calculation route can produce.
    pub fn is_client_error(&self) -> bool {
        matches!(self, CalculatorError::InvalidInput(_)) || self.is_domain_error()
    }

    pub fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

// Convert CalculatorError to HTTP responses for Axum
impl IntoResponse for CalculatorError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = json!({ "error": self.to_string() });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
