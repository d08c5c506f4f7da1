//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_envelope::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`fail!`], [`attempt!`]
//! - **Types**: [`Error`], [`Outcome`], [`UnitOutcome`], [`ErrorResponse`], [`Failure`]
//! - **Traits**: [`OutcomeLike`], [`OutcomeResultExt`]
//! - **Constructors**: [`success`], [`fail()`], [`null_result`], [`DEFAULT_RESULT`]
//!
//! # Examples
//!
//! ```
//! use error_envelope::prelude::*;
//!
//! fn find_user(id: u64) -> Outcome<String> {
//!     if id == 0 {
//!         return fail!(codes::BAD_ARGUMENT, "id must be positive");
//!     }
//!     success(format!("user-{}", id))
//! }
//!
//! fn handler(id: u64) -> Result<String, Failure> {
//!     find_user(id).value_or_fault()
//! }
//!
//! assert_eq!(handler(3).unwrap(), "user-3");
//! assert_eq!(handler(0).unwrap_err().to_string(), "id must be positive");
//! ```

// Macros
pub use crate::{attempt, fail};

// Core types
pub use crate::response::ErrorResponse;
pub use crate::types::{codes, Error, Failure, Outcome, UnitOutcome, DEFAULT_RESULT};

// Traits
pub use crate::traits::{OutcomeLike, OutcomeResultExt};

/// Wraps `value` in a `Success`.
#[inline]
pub fn success<T>(value: T) -> Outcome<T> {
    Outcome::Success(value)
}

/// Wraps `error` in a `Fail`.
#[inline]
pub fn fail<T>(error: Error) -> Outcome<T> {
    Outcome::Fail(error)
}

/// A success whose value is absent.
#[inline]
pub fn null_result<T>() -> Outcome<Option<T>> {
    Outcome::null()
}
