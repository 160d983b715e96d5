//! Kata Domain - strictly validated practice operations.
//!
//! Every operation validates its inputs first, computes second, and never
//! mutates what the caller passed in. Most operations report failure through
//! `Result`; [`validate_user`] is the one exception and reports through a
//! returned [`ValidationResult`] instead.

pub mod arithmetic;
pub mod calendar;
pub mod common;
pub mod error;
pub mod exec;
pub mod grading;
pub mod numbers;
pub mod payment;
pub mod profile;
pub mod text;
pub mod user;

pub use arithmetic::{calculator, divide, multiply, Operation};
pub use calendar::{day_name, Weekday};
pub use error::DomainError;
pub use exec::{safe_execute, Fallback};
pub use grading::{letter_grade, Grade};
pub use numbers::{is_even, process_numbers, ProcessedNumbers};
pub use payment::{process_payment, PaymentMethod, PaymentResult};
pub use profile::{create_user_profile, UserProfile};
pub use text::reverse_string;
pub use user::{validate_user, User, ValidationResult};
