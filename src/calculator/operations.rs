// Arithmetic operations and their route descriptors
// Author: kelexine (https://github.com/kelexine)

use crate::error::{CalculatorError, Result};

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(CalculatorError::DivisionByZero);
    }
    Ok(a / b)
}

/// No domain restriction: a negative base with a fractional exponent yields NaN.
pub fn power(base: f64, exp: f64) -> f64 {
    base.powf(exp)
}

pub fn sqrt(n: f64) -> Result<f64> {
    if n < 0.0 {
        return Err(CalculatorError::NegativeSquareRoot);
    }
    Ok(n.sqrt())
}

/// Floating remainder; the sign follows the dividend.
pub fn modulo(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(CalculatorError::ModuloByZero);
    }
    Ok(a % b)
}

const BINARY_PARAMS: &[&str] = &["num1", "num2"];
const POWER_PARAMS: &[&str] = &["base", "exp"];
const SQRT_PARAMS: &[&str] = &["num"];

const BOTH_INPUTS_MESSAGE: &str = "Both inputs must be numbers.";
const POWER_INPUTS_MESSAGE: &str = "Both base and exponent must be numbers.";
const SINGLE_INPUT_MESSAGE: &str = "Input must be a number.";

/// Descriptor driving the shared request pipeline: one variant per route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Sqrt,
    Modulo,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::Sqrt,
        Operation::Modulo,
    ];

    /// Short name used in metrics labels and structured log fields.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::Sqrt => "sqrt",
            Operation::Modulo => "modulo",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Operation::Add => "/add",
            Operation::Subtract => "/subtract",
            Operation::Multiply => "/multiply",
            Operation::Divide => "/divide",
            Operation::Power => "/power",
            Operation::Sqrt => "/sqrt",
            Operation::Modulo => "/modulo",
        }
    }

    /// Human-readable prefix of the computation log line.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
            Operation::Divide => "Division",
            Operation::Power => "Power",
            Operation::Sqrt => "Sqrt",
            Operation::Modulo => "Modulo",
        }
    }

    /// Query parameter names, in operand order.
    pub fn params(self) -> &'static [&'static str] {
        match self {
            Operation::Power => POWER_PARAMS,
            Operation::Sqrt => SQRT_PARAMS,
            _ => BINARY_PARAMS,
        }
    }

    pub fn arity(self) -> usize {
        self.params().len()
    }

    pub fn invalid_input_message(self) -> &'static str {
        match self {
            Operation::Power => POWER_INPUTS_MESSAGE,
            Operation::Sqrt => SINGLE_INPUT_MESSAGE,
            _ => BOTH_INPUTS_MESSAGE,
        }
    }

    /// Reason written to the error log line. Shorter than the response message
    /// for a few failures; everything else reuses the message as is.
    pub fn failure_reason(self, error: &CalculatorError) -> String {
        match (self, error) {
            (Operation::Power | Operation::Modulo, CalculatorError::InvalidInput(_)) => {
                "Inputs must be numbers".to_string()
            }
            (Operation::Sqrt, CalculatorError::InvalidInput(_)) => "Invalid number".to_string(),
            (_, CalculatorError::NegativeSquareRoot) => {
                "Cannot take square root of negative".to_string()
            }
            (_, CalculatorError::ModuloByZero) => "Modulo by zero is not allowed".to_string(),
            _ => error.to_string(),
        }
    }

    /// Run the operation on validated operands.
    ///
    /// The operand slice must hold exactly [`Operation::arity`] values.
    pub fn apply(self, operands: &[f64]) -> Result<f64> {
        match (self, operands) {
            (Operation::Add, &[a, b]) => Ok(add(a, b)),
            (Operation::Subtract, &[a, b]) => Ok(subtract(a, b)),
            (Operation::Multiply, &[a, b]) => Ok(multiply(a, b)),
            (Operation::Divide, &[a, b]) => divide(a, b),
            (Operation::Power, &[base, exp]) => Ok(power(base, exp)),
            (Operation::Sqrt, &[n]) => sqrt(n),
            (Operation::Modulo, &[a, b]) => modulo(a, b),
            _ => Err(CalculatorError::Internal(format!(
                "{} expects {} operand(s), got {}",
                self.name(),
                self.arity(),
                operands.len()
            ))),
        }
    }

    /// Render the expression for the success log line, e.g. `5 + 3` or `sqrt(16)`.
    pub fn expression(self, raw: &[&str]) -> String {
        match (self, raw) {
            (Operation::Add, [a, b]) => format!("{} + {}", a, b),
            (Operation::Subtract, [a, b]) => format!("{} - {}", a, b),
            (Operation::Multiply, [a, b]) => format!("{} * {}", a, b),
            (Operation::Divide, [a, b]) => format!("{} / {}", a, b),
            (Operation::Power, [base, exp]) => format!("{}^{}", base, exp),
            (Operation::Sqrt, [n]) => format!("sqrt({})", n),
            (Operation::Modulo, [a, b]) => format!("{} % {}", a, b),
            _ => raw.join(", "),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
