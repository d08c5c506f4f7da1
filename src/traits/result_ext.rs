//! Extension trait for lifting foreign `Result` types into [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use error_envelope::traits::OutcomeResultExt;
//!
//! let parsed = "12x".parse::<u32>().or_fail("bad_number");
//! assert_eq!(parsed.error().code(), "bad_number");
//! assert_eq!(parsed.error().message(), Some("invalid digit found in string"));
//! ```

use crate::types::alloc_type::ToString;
use crate::types::{Error, Outcome};
use core::fmt::Display;

/// Converts any `Result<T, E>` into an [`Outcome<T>`].
pub trait OutcomeResultExt<T, E> {
    /// Maps `Err(e)` to a `Fail` with the given code and `e`'s display text as message.
    fn or_fail(self, code: &str) -> Outcome<T>
    where
        E: Display;

    /// Maps `Err(e)` to a `Fail` built by `f`. The closure only runs on error.
    fn or_fail_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(E) -> Error;
}

impl<T, E> OutcomeResultExt<T, E> for Result<T, E> {
    #[inline]
    fn or_fail(self, code: &str) -> Outcome<T>
    where
        E: Display,
    {
        self.or_fail_with(|e| Error::new(code).with_message(e.to_string()))
    }

    #[inline]
    fn or_fail_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(E) -> Error,
    {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Fail(f(error)),
        }
    }
}
