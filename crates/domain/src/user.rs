//! User validation with result-object reporting.
//!
//! Unlike the rest of the crate, [`validate_user`] never fails: callers
//! branch on the returned [`ValidationResult`] rather than handle an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::{as_number, is_truthy, non_empty_str};

/// Minimum accepted account age.
const MIN_AGE: f64 = 13.0;

/// Oldest age accepted as plausible.
const MAX_AGE: f64 = 120.0;

/// A user record as supplied by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub email: String,
    pub age: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_authenticated: Option<bool>,
}

/// Outcome of validating a user record, discriminated by `valid`.
///
/// On success `user` echoes the validated record and `error` is absent; on
/// failure `error` carries a human-readable reason and `user` is absent.
/// Absent fields are omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

impl ValidationResult {
    /// Builds a passing result carrying the validated user.
    pub fn valid(user: User) -> Self {
        Self {
            valid: true,
            error: None,
            user: Some(user),
        }
    }

    /// Builds a failing result with a reason.
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
            user: None,
        }
    }

    /// Returns true if validation passed.
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Validates a dynamic user record.
///
/// Checks run in order and stop at the first failure: the record itself,
/// then `name`, `email`, and `age` (present, correctly typed, non-empty /
/// nonzero), then the age bounds. A passing record is echoed back as a typed
/// [`User`], including `isAuthenticated` when present as a boolean.
///
/// This function reports failure through the result, never through `Err`.
pub fn validate_user(input: &Value) -> ValidationResult {
    if !is_truthy(input) {
        return ValidationResult::invalid("User object is required");
    }

    let name = match input.get("name").and_then(non_empty_str) {
        Some(name) => name,
        None => return ValidationResult::invalid("Valid name is required"),
    };

    let email = match input.get("email").and_then(non_empty_str) {
        Some(email) => email,
        None => return ValidationResult::invalid("Valid email is required"),
    };

    let age = match input.get("age").and_then(as_number) {
        Some(age) if age != 0.0 => age,
        _ => return ValidationResult::invalid("Valid age is required"),
    };

    if age < MIN_AGE {
        return ValidationResult::invalid("User must be at least 13 years old");
    }

    if age > MAX_AGE {
        return ValidationResult::invalid("Invalid age");
    }

    ValidationResult::valid(User {
        name: name.to_string(),
        email: email.to_string(),
        age,
        is_authenticated: input.get("isAuthenticated").and_then(Value::as_bool),
    })
}
