//! Number predicates and batch processing over mixed-type sequences.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::as_number;
use crate::error::DomainError;

/// Result of filtering and transforming a mixed-type sequence.
///
/// `original` echoes the input unchanged; `filtered` keeps only the numeric
/// elements in their original order; `doubled` is `filtered` scaled by two;
/// `sum` totals `doubled`; `count` is the number of numeric elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedNumbers {
    pub original: Vec<Value>,
    pub filtered: Vec<f64>,
    pub doubled: Vec<f64>,
    pub sum: f64,
    pub count: usize,
}

/// Reports whether a dynamic value is an even number.
///
/// Fractional values are simply not even.
///
/// # Errors
///
/// Returns "Input must be a number" if the value is not numeric.
pub fn is_even(value: &Value) -> Result<bool, DomainError> {
    let num =
        as_number(value).ok_or_else(|| DomainError::invalid_input("Input must be a number"))?;
    Ok(num % 2.0 == 0.0)
}

/// Filters the numeric elements out of a sequence and derives doubled values,
/// their sum, and the numeric count. Non-numeric elements are dropped from
/// `filtered` silently; the input itself is echoed untouched.
///
/// # Errors
///
/// Returns "Input must be an array" if the value is not an array.
pub fn process_numbers(input: &Value) -> Result<ProcessedNumbers, DomainError> {
    let items = input
        .as_array()
        .ok_or_else(|| DomainError::invalid_input("Input must be an array"))?;

    let filtered: Vec<f64> = items.iter().filter_map(as_number).collect();
    let doubled: Vec<f64> = filtered.iter().map(|n| n * 2.0).collect();
    let sum = doubled.iter().sum();

    Ok(ProcessedNumbers {
        original: items.clone(),
        count: filtered.len(),
        filtered,
        doubled,
        sum,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    mod even {
        use super::*;

        #[test]
        fn even_numbers() {
            assert!(is_even(&json!(2)).unwrap());
            assert!(is_even(&json!(0)).unwrap());
            assert!(is_even(&json!(-4)).unwrap());
        }

        #[test]
        fn odd_numbers() {
            assert!(!is_even(&json!(3)).unwrap());
            assert!(!is_even(&json!(-7)).unwrap());
        }

        #[test]
        fn fractional_numbers_are_not_even() {
            assert!(!is_even(&json!(2.5)).unwrap());
        }

        #[test]
        fn rejects_non_numbers() {
            let err = is_even(&json!("2")).unwrap_err();
            assert!(matches!(err, DomainError::InvalidInput(_)));
            assert_eq!(err.to_string(), "Input must be a number");
        }
    }

    mod batch {
        use super::*;

        #[test]
        fn processes_mixed_sequence() {
            let result = process_numbers(&json!([1, 2, 3, "invalid", 4])).unwrap();
            assert_eq!(result.original, vec![json!(1), json!(2), json!(3), json!("invalid"), json!(4)]);
            assert_eq!(result.filtered, vec![1.0, 2.0, 3.0, 4.0]);
            assert_eq!(result.doubled, vec![2.0, 4.0, 6.0, 8.0]);
            assert_eq!(result.sum, 20.0);
            assert_eq!(result.count, 4);
        }

        #[test]
        fn empty_sequence() {
            let result = process_numbers(&json!([])).unwrap();
            assert!(result.original.is_empty());
            assert!(result.filtered.is_empty());
            assert!(result.doubled.is_empty());
            assert_eq!(result.sum, 0.0);
            assert_eq!(result.count, 0);
        }

        #[test]
        fn drops_every_non_numeric_element() {
            let result =
                process_numbers(&json!([null, true, "5", [1], {"n": 2}])).unwrap();
            assert_eq!(result.original.len(), 5);
            assert!(result.filtered.is_empty());
            assert_eq!(result.count, 0);
        }

        #[test]
        fn negative_and_fractional_elements() {
            let result = process_numbers(&json!([-1, 0.5])).unwrap();
            assert_eq!(result.doubled, vec![-2.0, 1.0]);
            assert_eq!(result.sum, -1.0);
        }

        #[test]
        fn rejects_non_array_input() {
            let err = process_numbers(&json!("1,2,3")).unwrap_err();
            assert!(matches!(err, DomainError::InvalidInput(_)));
            assert_eq!(err.to_string(), "Input must be an array");

            let err = process_numbers(&json!(null)).unwrap_err();
            assert_eq!(err.to_string(), "Input must be an array");
        }
    }
}
