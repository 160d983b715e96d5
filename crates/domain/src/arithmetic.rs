//! Basic arithmetic over dynamic operands
//!
//! Operands arrive as dynamic values and are type-checked before any
//! computation. [`calculator`] dispatches on a named [`Operation`];
//! [`multiply`] and [`divide`] are standalone forms with the same guards.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::common::{as_number, non_empty_str};
use crate::error::DomainError;

/// A named arithmetic operation.
///
/// Parsing is case-insensitive: `"add"`, `"ADD"`, and `"Add"` all resolve to
/// [`Operation::Add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Returns the lowercase operation name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Applies the operation to two operands.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DivisionByZero` when dividing by zero.
    pub fn apply(&self, a: f64, b: f64) -> Result<f64, DomainError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    return Err(DomainError::DivisionByZero);
                }
                Ok(a / b)
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            "multiply" => Ok(Self::Multiply),
            "divide" => Ok(Self::Divide),
            _ => Err(DomainError::unsupported(
                "Invalid operation. Must be: add, subtract, multiply, or divide",
            )),
        }
    }
}

/// Both operands must be numbers; shared guard for every arithmetic entry point.
fn require_numbers(a: &Value, b: &Value) -> Result<(f64, f64), DomainError> {
    match (as_number(a), as_number(b)) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(DomainError::invalid_input("Both arguments must be numbers")),
    }
}

/// Performs a named arithmetic operation on two dynamic operands.
///
/// The operation name must be a non-empty string and is matched
/// case-insensitively.
///
/// # Errors
///
/// - "Both arguments must be numbers" if either operand is not a number
/// - "Operation must be a string" if the operation is missing, empty, or not
///   a string
/// - "Invalid operation. Must be: add, subtract, multiply, or divide" for an
///   unrecognized name
/// - "Cannot divide by zero" when dividing by zero
pub fn calculator(a: &Value, b: &Value, operation: &Value) -> Result<f64, DomainError> {
    let (a, b) = require_numbers(a, b)?;
    let name = non_empty_str(operation)
        .ok_or_else(|| DomainError::invalid_input("Operation must be a string"))?;
    name.parse::<Operation>()?.apply(a, b)
}

/// Multiplies two dynamic operands.
///
/// # Errors
///
/// Returns "Both arguments must be numbers" if either operand is not a number.
pub fn multiply(a: &Value, b: &Value) -> Result<f64, DomainError> {
    let (a, b) = require_numbers(a, b)?;
    Ok(a * b)
}

/// Divides the first dynamic operand by the second.
///
/// # Errors
///
/// Returns "Both arguments must be numbers" if either operand is not a
/// number, and "Cannot divide by zero" when the divisor is zero.
pub fn divide(a: &Value, b: &Value) -> Result<f64, DomainError> {
    let (a, b) = require_numbers(a, b)?;
    Operation::Divide.apply(a, b)
}
