//! Weekday lookup by day number.
//!
//! Days are numbered 1-7 starting at Monday, matching ISO-8601 ordering.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::common::as_number;
use crate::error::DomainError;

/// A day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All days in week order, Monday first.
    pub const ALL: [Weekday; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Returns the English day name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Returns the 1-based day number (Monday = 1, Sunday = 7).
    pub fn number(&self) -> u8 {
        match self {
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
            Self::Sunday => 7,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Looks up the weekday for a dynamic day number.
///
/// # Errors
///
/// - "Day number must be a number" if the value is not numeric
/// - "Day number must be between 1 and 7" if it falls outside the week
/// - "Invalid day number" for in-range values that are not whole days
///   (e.g. `1.5`)
pub fn day_name(value: &Value) -> Result<Weekday, DomainError> {
    let day = as_number(value)
        .ok_or_else(|| DomainError::invalid_input("Day number must be a number"))?;

    if !(1.0..=7.0).contains(&day) {
        return Err(DomainError::out_of_range(
            "Day number must be between 1 and 7",
        ));
    }

    if day.fract() != 0.0 {
        return Err(DomainError::unsupported("Invalid day number"));
    }

    match day as u8 {
        1 => Ok(Weekday::Monday),
        2 => Ok(Weekday::Tuesday),
        3 => Ok(Weekday::Wednesday),
        4 => Ok(Weekday::Thursday),
        5 => Ok(Weekday::Friday),
        6 => Ok(Weekday::Saturday),
        7 => Ok(Weekday::Sunday),
        _ => Err(DomainError::unsupported("Invalid day number")),
    }
}
