//! User profile construction.
//!
//! Profiles are built once per call and never mutated afterwards. The current
//! instant is injected by the caller; this layer never reads the system clock
//! itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::common::{as_number, is_truthy, non_empty_str};
use crate::error::DomainError;

/// Age at which an account holder counts as an adult.
const ADULT_AGE: f64 = 18.0;

/// A constructed user profile.
///
/// The optional flags are presence-only: they are either `Some(true)` or
/// absent, never `Some(false)`, and absent flags are omitted from the
/// serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: f64,
    pub preferences: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscribed_to_newsletter: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketing_consent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_adult: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_minor: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_parental_consent: Option<bool>,
}

/// Builds a profile from a dynamic user record.
///
/// `name` is trimmed, `email` lowercased, and `preferences` echoed as-is
/// (missing or non-object preferences become an empty map). The profile id is
/// the millisecond timestamp of `now`; the caller supplies the instant, this
/// layer never reads the clock.
///
/// Flags are set only when they apply: `subscribedToNewsletter` and
/// `marketingConsent` when the matching preference is truthy; `isAdult` for
/// ages of 18 and up, otherwise `isMinor` together with
/// `requiresParentalConsent`.
///
/// # Errors
///
/// Returns "Name, email, and age are required" when any of the three is
/// missing, mistyped, empty, or zero.
pub fn create_user_profile(data: &Value, now: DateTime<Utc>) -> Result<UserProfile, DomainError> {
    let name = data.get("name").and_then(non_empty_str);
    let email = data.get("email").and_then(non_empty_str);
    let age = data.get("age").and_then(as_number).filter(|age| *age != 0.0);

    let (name, email, age) = match (name, email, age) {
        (Some(name), Some(email), Some(age)) => (name, email, age),
        _ => {
            return Err(DomainError::invalid_input(
                "Name, email, and age are required",
            ))
        }
    };

    let preferences = data
        .get("preferences")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    let mut profile = UserProfile {
        id: now.timestamp_millis().to_string(),
        name: name.trim().to_string(),
        email: email.to_lowercase(),
        age,
        preferences,
        created_at: now,
        subscribed_to_newsletter: None,
        marketing_consent: None,
        is_adult: None,
        is_minor: None,
        requires_parental_consent: None,
    };

    if profile.preferences.get("newsletter").map(is_truthy) == Some(true) {
        profile.subscribed_to_newsletter = Some(true);
    }

    if profile.preferences.get("marketing").map(is_truthy) == Some(true) {
        profile.marketing_consent = Some(true);
    }

    if age >= ADULT_AGE {
        profile.is_adult = Some(true);
    } else {
        profile.is_minor = Some(true);
        profile.requires_parental_consent = Some(true);
    }

    Ok(profile)
}
