//! Type guards over dynamic JSON values.
//!
//! Operations in this crate accept caller-supplied `serde_json::Value`
//! arguments and validate them before computing anything. These helpers
//! centralize the guards so every operation classifies values the same way.

use serde_json::Value;

/// Extracts a number from a dynamic value, if it is one.
///
/// # Examples
///
/// ```
/// use kata_domain::common::as_number;
/// use serde_json::json;
///
/// assert_eq!(as_number(&json!(2.5)), Some(2.5));
/// assert_eq!(as_number(&json!(7)), Some(7.0));
/// assert_eq!(as_number(&json!("7")), None);
/// ```
pub fn as_number(value: &Value) -> Option<f64> {
    value.as_f64()
}

/// Extracts a string slice from a dynamic value, if it is a string.
///
/// # Examples
///
/// ```
/// use kata_domain::common::as_text;
/// use serde_json::json;
///
/// assert_eq!(as_text(&json!("hello")), Some("hello"));
/// assert_eq!(as_text(&json!("")), Some(""));
/// assert_eq!(as_text(&json!(42)), None);
/// ```
pub fn as_text(value: &Value) -> Option<&str> {
    value.as_str()
}

/// Extracts a non-empty string slice from a dynamic value.
///
/// Empty strings count as missing. Whitespace-only strings are not empty;
/// whether to trim is the caller's decision.
///
/// # Examples
///
/// ```
/// use kata_domain::common::non_empty_str;
/// use serde_json::json;
///
/// assert_eq!(non_empty_str(&json!("John")), Some("John"));
/// assert_eq!(non_empty_str(&json!("  ")), Some("  "));
/// assert_eq!(non_empty_str(&json!("")), None);
/// assert_eq!(non_empty_str(&json!(null)), None);
/// ```
pub fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

/// Reports whether a dynamic value is truthy.
///
/// Follows the conventional loose-typing rules: `null`, `false`, `0`, and
/// `""` are falsy; everything else, including empty arrays and objects, is
/// truthy.
///
/// # Examples
///
/// ```
/// use kata_domain::common::is_truthy;
/// use serde_json::json;
///
/// assert!(is_truthy(&json!(true)));
/// assert!(is_truthy(&json!(1)));
/// assert!(is_truthy(&json!({})));
/// assert!(!is_truthy(&json!(0)));
/// assert!(!is_truthy(&json!("")));
/// assert!(!is_truthy(&json!(null)));
/// ```
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_as_number_integers_and_floats() {
        assert_eq!(as_number(&json!(3)), Some(3.0));
        assert_eq!(as_number(&json!(-2)), Some(-2.0));
        assert_eq!(as_number(&json!(0.5)), Some(0.5));
    }

    #[test]
    fn test_as_number_rejects_non_numbers() {
        assert_eq!(as_number(&json!("3")), None);
        assert_eq!(as_number(&json!(true)), None);
        assert_eq!(as_number(&json!(null)), None);
        assert_eq!(as_number(&json!([3])), None);
    }

    #[test]
    fn test_as_text_rejects_non_strings() {
        assert_eq!(as_text(&json!(7)), None);
        assert_eq!(as_text(&json!(null)), None);
    }

    #[test]
    fn test_non_empty_str_filters_empty() {
        assert_eq!(non_empty_str(&json!("a")), Some("a"));
        assert_eq!(non_empty_str(&json!("")), None);
        assert_eq!(non_empty_str(&json!(0)), None);
    }

    #[test]
    fn test_truthiness_falsy_values() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
    }

    #[test]
    fn test_truthiness_truthy_values() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("false")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }
}
