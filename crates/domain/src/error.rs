//! Unified error types for the domain layer
//!
//! Provides a common error type used across all operations, enabling callers
//! to branch on the kind of failure without matching on message strings.
//!
//! Display output is part of the public contract: each guard produces a fixed,
//! descriptive message that test suites assert verbatim.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone)]
pub enum DomainError {
    /// An argument had the wrong type or was missing entirely
    #[error("{0}")]
    InvalidInput(String),

    /// A numeric argument fell outside its allowed range
    #[error("{0}")]
    OutOfRange(String),

    /// Division by zero
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// A named operation or method was not recognized
    #[error("{0}")]
    Unsupported(String),

    /// A business rule was violated
    #[error("{0}")]
    Constraint(String),
}

impl DomainError {
    /// Creates an invalid-input error for type and presence guards.
    ///
    /// Use this when an argument fails its type check before any computation:
    /// - Required arguments are missing
    /// - Values have the wrong dynamic type
    /// - Required fields are empty
    ///
    /// # Example
    /// ```ignore
    /// let Some(num) = as_number(value) else {
    ///     return Err(DomainError::invalid_input("Input must be a number"));
    /// };
    /// ```
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an out-of-range error for values of the right type but outside
    /// their allowed bounds
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }

    /// Creates an unsupported error for string-to-variant lookups that fail.
    ///
    /// Use this in `FromStr` implementations when the input string doesn't
    /// match any known variant:
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for PaymentMethod {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "credit" => Ok(Self::Credit),
    ///             _ => Err(DomainError::unsupported("Unsupported payment method")),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Create a constraint violation error for inputs that are well-typed and
    /// in range but break a business rule
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_error() {
        let err = DomainError::invalid_input("Input must be a number");
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(err.to_string(), "Input must be a number");
    }

    #[test]
    fn test_out_of_range_error() {
        let err = DomainError::out_of_range("Score must be between 0 and 100");
        assert!(matches!(err, DomainError::OutOfRange(_)));
        assert_eq!(err.to_string(), "Score must be between 0 and 100");
    }

    #[test]
    fn test_division_by_zero_display() {
        let err = DomainError::DivisionByZero;
        assert_eq!(err.to_string(), "Cannot divide by zero");
    }

    #[test]
    fn test_unsupported_error() {
        let err = DomainError::unsupported("Unsupported payment method");
        assert!(matches!(err, DomainError::Unsupported(_)));
        assert_eq!(err.to_string(), "Unsupported payment method");
    }

    #[test]
    fn test_constraint_error() {
        let err = DomainError::constraint("User must be authenticated");
        assert!(matches!(err, DomainError::Constraint(_)));
        assert_eq!(err.to_string(), "User must be authenticated");
    }

    #[test]
    fn test_errors_are_cloneable() {
        let err = DomainError::invalid_input("Invalid amount");
        let cloned = err.clone();
        assert_eq!(cloned.to_string(), "Invalid amount");
    }
}
