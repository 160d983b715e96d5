//! Guarded execution of fallible callbacks.
//!
//! [`safe_execute`] runs a callback and converts its failure into a fallback
//! outcome instead of propagating it. The fallback is either a plain value or
//! a handler that receives the caught error, mirroring the two shapes callers
//! pass in practice.

use crate::error::DomainError;

/// What to produce when the guarded callback fails.
pub enum Fallback<T> {
    /// A ready value returned as-is.
    Value(T),
    /// A handler invoked with the caught error.
    Handler(Box<dyn FnOnce(DomainError) -> T>),
}

impl<T> Fallback<T> {
    /// Wraps a handler closure without the caller spelling out the box.
    pub fn handler(handler: impl FnOnce(DomainError) -> T + 'static) -> Self {
        Self::Handler(Box::new(handler))
    }

    /// Resolves the fallback against the caught error.
    fn resolve(self, error: DomainError) -> T {
        match self {
            Self::Value(value) => value,
            Self::Handler(handler) => handler(error),
        }
    }
}

/// Runs a callback, substituting the fallback outcome if it fails.
///
/// A missing callback (`op` of `None`) is an error in its own right and is
/// never absorbed by the fallback.
///
/// # Errors
///
/// Returns "First argument must be a function" when `op` is `None`. A
/// callback that runs never produces `Err`: its failure is absorbed by the
/// fallback.
pub fn safe_execute<T, F>(op: Option<F>, fallback: Fallback<T>) -> Result<T, DomainError>
where
    F: FnOnce() -> Result<T, DomainError>,
{
    let op =
        op.ok_or_else(|| DomainError::invalid_input("First argument must be a function"))?;

    match op() {
        Ok(value) => Ok(value),
        Err(error) => Ok(fallback.resolve(error)),
    }
}
