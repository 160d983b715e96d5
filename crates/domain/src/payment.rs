//! Payment processing with per-method limits.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::common::{as_number, is_truthy, non_empty_str};
use crate::error::DomainError;

/// Highest amount accepted on a credit card.
const CREDIT_LIMIT: f64 = 1000.0;

/// Highest amount accepted on a debit card.
const DEBIT_LIMIT: f64 = 500.0;

/// Smallest amount accepted over paypal.
const PAYPAL_MINIMUM: f64 = 1.0;

/// A supported payment method.
///
/// Method names are matched exactly: `"credit"` parses, `"Credit"` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Credit,
    Debit,
    Paypal,
}

impl PaymentMethod {
    /// Returns the lowercase method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
            Self::Paypal => "paypal",
        }
    }

    /// Checks the amount against this method's limit.
    fn authorize(&self, amount: f64) -> Result<(), DomainError> {
        match self {
            Self::Credit if amount > CREDIT_LIMIT => {
                Err(DomainError::constraint("Credit card limit exceeded"))
            }
            Self::Debit if amount > DEBIT_LIMIT => {
                Err(DomainError::constraint("Debit card limit exceeded"))
            }
            Self::Paypal if amount < PAYPAL_MINIMUM => {
                Err(DomainError::constraint("Minimum payment amount is $1"))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credit" => Ok(Self::Credit),
            "debit" => Ok(Self::Debit),
            "paypal" => Ok(Self::Paypal),
            _ => Err(DomainError::unsupported("Unsupported payment method")),
        }
    }
}

/// A settled payment.
///
/// `success` is always true on construction; failed payments are reported
/// through `Err` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResult {
    pub success: bool,
    pub method: PaymentMethod,
    pub amount: f64,
}

/// Processes a payment for an authenticated user.
///
/// Guards run in order: the amount must be a positive number, the method a
/// non-empty string, the user authenticated, the method recognized, and the
/// amount within the method's limit.
///
/// # Errors
///
/// - "Invalid amount" for non-numeric or non-positive amounts
/// - "Invalid payment method" for missing or non-string methods
/// - "User must be authenticated" when `user.isAuthenticated` is not truthy
/// - "Unsupported payment method" for unrecognized method names
/// - "Credit card limit exceeded" / "Debit card limit exceeded" /
///   "Minimum payment amount is $1" for limit violations
pub fn process_payment(
    amount: &Value,
    method: &Value,
    user: &Value,
) -> Result<PaymentResult, DomainError> {
    let amount = match as_number(amount) {
        Some(a) if a > 0.0 => a,
        _ => return Err(DomainError::invalid_input("Invalid amount")),
    };

    let method = non_empty_str(method)
        .ok_or_else(|| DomainError::invalid_input("Invalid payment method"))?;

    let authenticated = user.get("isAuthenticated").map(is_truthy).unwrap_or(false);
    if !authenticated {
        return Err(DomainError::constraint("User must be authenticated"));
    }

    let method: PaymentMethod = method.parse()?;
    method.authorize(amount)?;

    Ok(PaymentResult {
        success: true,
        method,
        amount,
    })
}
