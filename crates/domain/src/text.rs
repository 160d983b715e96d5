//! String transformation helpers.

use serde_json::Value;

use crate::common::as_text;
use crate::error::DomainError;

/// Reverses a string character by character.
///
/// The empty string is valid input and reverses to itself.
///
/// # Errors
///
/// Returns "Input must be a string" if the value is not a string.
pub fn reverse_string(value: &Value) -> Result<String, DomainError> {
    let text = as_text(value).ok_or_else(|| DomainError::invalid_input("Input must be a string"))?;
    Ok(text.chars().rev().collect())
}
