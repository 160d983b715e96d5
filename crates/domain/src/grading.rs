//! Letter grading for numeric scores.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::common::as_number;
use crate::error::DomainError;

/// A letter grade on the standard A-F scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Returns the single-letter representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// Maps a score already known to be in range onto the grade thresholds.
    fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Self::A
        } else if score >= 80.0 {
            Self::B
        } else if score >= 70.0 {
            Self::C
        } else if score >= 60.0 {
            Self::D
        } else {
            Self::F
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Grades a score on the 0-100 scale.
///
/// Thresholds: >=90 A, >=80 B, >=70 C, >=60 D, otherwise F.
///
/// # Errors
///
/// - "Score must be a number" if the value is not numeric
/// - "Score must be between 0 and 100" if it falls outside the scale
pub fn letter_grade(value: &Value) -> Result<Grade, DomainError> {
    let score =
        as_number(value).ok_or_else(|| DomainError::invalid_input("Score must be a number"))?;

    if !(0.0..=100.0).contains(&score) {
        return Err(DomainError::out_of_range("Score must be between 0 and 100"));
    }

    Ok(Grade::from_score(score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scores_90_to_100_are_a() {
        assert_eq!(letter_grade(&json!(90)).unwrap(), Grade::A);
        assert_eq!(letter_grade(&json!(95)).unwrap(), Grade::A);
        assert_eq!(letter_grade(&json!(100)).unwrap(), Grade::A);
    }

    #[test]
    fn scores_80_to_89_are_b() {
        assert_eq!(letter_grade(&json!(80)).unwrap(), Grade::B);
        assert_eq!(letter_grade(&json!(85)).unwrap(), Grade::B);
        assert_eq!(letter_grade(&json!(89)).unwrap(), Grade::B);
    }

    #[test]
    fn scores_70_to_79_are_c() {
        assert_eq!(letter_grade(&json!(70)).unwrap(), Grade::C);
        assert_eq!(letter_grade(&json!(79.9)).unwrap(), Grade::C);
    }

    #[test]
    fn scores_60_to_69_are_d() {
        assert_eq!(letter_grade(&json!(60)).unwrap(), Grade::D);
        assert_eq!(letter_grade(&json!(69)).unwrap(), Grade::D);
    }

    #[test]
    fn scores_below_60_are_f() {
        assert_eq!(letter_grade(&json!(59)).unwrap(), Grade::F);
        assert_eq!(letter_grade(&json!(0)).unwrap(), Grade::F);
    }

    #[test]
    fn rejects_out_of_range_scores() {
        let err = letter_grade(&json!(-1)).unwrap_err();
        assert!(matches!(err, DomainError::OutOfRange(_)));
        assert_eq!(err.to_string(), "Score must be between 0 and 100");

        let err = letter_grade(&json!(101)).unwrap_err();
        assert_eq!(err.to_string(), "Score must be between 0 and 100");
    }

    #[test]
    fn rejects_non_numeric_scores() {
        let err = letter_grade(&json!("90")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(err.to_string(), "Score must be a number");
    }

    #[test]
    fn grade_display() {
        assert_eq!(Grade::A.to_string(), "A");
        assert_eq!(Grade::F.as_str(), "F");
    }

    #[test]
    fn grade_serde_roundtrip() {
        let json = serde_json::to_string(&Grade::B).unwrap();
        assert_eq!(json, "\"B\"");
        let parsed: Grade = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Grade::B);
    }
}
