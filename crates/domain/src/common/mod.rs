//! Shared helpers for inspecting dynamic values at the validation boundary.

mod value;

pub use value::{as_number, as_text, is_truthy, non_empty_str};
