// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::calculator::{operands_for, Operation};
use crate::error::CalculatorError;
use crate::metrics;
use crate::utils::logging::display_number;
use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use tracing::{error, info};

/// 2^53: integral values up to this magnitude are written as JSON integers.
const MAX_INTEGRAL_RESULT: f64 = 9_007_199_254_740_992.0;

/// Successful calculation body: `{"result": <number>}`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CalculationResponse {
    #[serde(serialize_with = "serialize_result")]
    pub result: f64,
}

/// Integral values are written without a fraction (`8`, not `8.0`) and
/// non-finite values become `null`.
fn serialize_result<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !value.is_finite() {
        serializer.serialize_none()
    } else if value.fract() == 0.0 && value.abs() <= MAX_INTEGRAL_RESULT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

/// Shared pipeline behind every calculation route:
/// extract → validate → compute → log → respond.
pub async fn calculate(
    op: Operation,
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<CalculationResponse>, CalculatorError> {
    let service = state.service_name();
    let raw: Vec<&str> = op
        .params()
        .iter()
        .map(|name| query.get(*name).map(String::as_str).unwrap_or("undefined"))
        .collect();
    let operands = describe_operands(op, &raw);

    let outcome = operands_for(op, &query).and_then(|values| op.apply(&values));
    metrics::record_calculation(op.name(), outcome.as_ref().map(|_| ()));

    match outcome {
        Ok(result) => {
            let message = format!(
                "{}: {} = {}",
                op.label(),
                op.expression(&raw),
                display_number(result)
            );
            log_success(service, op, &raw, result, &message);
            Ok(Json(CalculationResponse { result }))
        }
        Err(e) => {
            let message = format!(
                "{} Error: {} | {}",
                op.label(),
                op.failure_reason(&e),
                operands
            );
            log_failure(service, op, &raw, &e, &message);
            Err(e)
        }
    }
}

// Field names are static in `tracing`, so each operand shape gets its own call.
fn log_success(service: &str, op: Operation, raw: &[&str], result: f64, message: &str) {
    let operation = op.name();
    match (op, raw) {
        (Operation::Power, [base, exp]) => {
            info!(service, operation, base = %base, exp = %exp, result, "{}", message)
        }
        (Operation::Sqrt, [num]) => info!(service, operation, num = %num, result, "{}", message),
        (_, [num1, num2]) => {
            info!(service, operation, num1 = %num1, num2 = %num2, result, "{}", message)
        }
        _ => info!(service, operation, result, "{}", message),
    }
}

fn log_failure(service: &str, op: Operation, raw: &[&str], e: &CalculatorError, message: &str) {
    let operation = op.name();
    match (op, raw) {
        (Operation::Power, [base, exp]) => {
            error!(service, operation, base = %base, exp = %exp, error = %e, "{}", message)
        }
        (Operation::Sqrt, [num]) => error!(service, operation, num = %num, error = %e, "{}", message),
        (_, [num1, num2]) => {
            error!(service, operation, num1 = %num1, num2 = %num2, error = %e, "{}", message)
        }
        _ => error!(service, operation, error = %e, "{}", message),
    }
}

/// `num1=5, num2=3`
fn describe_operands(op: Operation, raw: &[&str]) -> String {
    op.params()
        .iter()
        .zip(raw)
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join(", ")
}

pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("index.html"))
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.service_name().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Prometheus text exposition of all registered metrics
pub async fn metrics_handler() -> Response {
    match metrics::gather_metrics() {
        Ok(body) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(e) => {
            error!("Failed to encode metrics: {}", e);
            CalculatorError::Internal(e).into_response()
        }
    }
}
