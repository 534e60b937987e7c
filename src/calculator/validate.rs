// Operand parsing and validation
// Author: kelexine (https://github.com/kelexine)

use super::Operation;
use crate::error::{CalculatorError, Result};
use std::collections::HashMap;

/// Parse a single raw operand.
///
/// Accepts anything `f64::from_str` understands once surrounding whitespace is
/// trimmed (integers, decimals, signs, exponents). Missing, empty and
/// non-finite values (`inf`, `NaN`) are rejected.
pub fn parse_operand(raw: Option<&str>) -> Option<f64> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Validate a group of raw inputs, failing with `message` if any is not a number.
pub fn validate(inputs: &[Option<&str>], message: &'static str) -> Result<Vec<f64>> {
    inputs
        .iter()
        .map(|raw| parse_operand(*raw))
        .collect::<Option<Vec<f64>>>()
        .ok_or(CalculatorError::InvalidInput(message))
}

/// Pull the operation's parameters out of a query map and validate them.
pub fn operands_for(op: Operation, query: &HashMap<String, String>) -> Result<Vec<f64>> {
    let raw: Vec<Option<&str>> = op
        .params()
        .iter()
        .map(|name| query.get(*name).map(String::as_str))
        .collect();

    validate(&raw, op.invalid_input_message())
}
