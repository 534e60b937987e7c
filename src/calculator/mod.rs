//! Arithmetic core of the calculator service.
//!
//! Everything here is pure: operands come in as already-extracted query
//! values, results go out as `f64` or a [`CalculatorError`](crate::error::CalculatorError).
//! Logging and HTTP mapping live in the `server` module.
//!
//! # Submodules
//!
//! - `operations`: the seven operations and the [`Operation`] descriptor.
//! - `validate`: operand parsing and validation.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod operations;
mod validate;

pub use operations::{add, divide, modulo, multiply, power, sqrt, subtract, Operation};
pub use validate::{operands_for, parse_operand, validate};
