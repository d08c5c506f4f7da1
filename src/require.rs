//! Guards that turn absent or empty inputs into fixed-code [`Error`]s.
//!
//! # Examples
//!
//! ```
//! use error_envelope::codes;
//! use error_envelope::require::{require_argument, require_guid};
//!
//! let name = require_argument(Some("ada"), "name");
//! assert_eq!(*name.value(), "ada");
//!
//! let missing = require_argument(None::<&str>, "name");
//! assert_eq!(missing.error().code(), codes::NULL_ARGUMENT_DISALLOWED);
//!
//! assert!(require_guid(Some(&[0u8; 16][..])).is_fail());
//! ```

use crate::types::{Error, Outcome, UnitOutcome, DEFAULT_RESULT};

/// `Success(value)`, or `null_value_disallowed` when the value is absent.
#[inline]
pub fn require_value<T>(value: Option<T>) -> Outcome<T> {
    match value {
        Some(value) => Outcome::Success(value),
        None => Outcome::Fail(Error::null_value_disallowed()),
    }
}

/// `Success(argument)`, or `null_argument_disallowed` targeting `name` when absent.
#[inline]
pub fn require_argument<T>(argument: Option<T>, name: &str) -> Outcome<T> {
    match argument {
        Some(argument) => Outcome::Success(argument),
        None => Outcome::Fail(Error::null_argument_disallowed(name)),
    }
}

/// Checks an identifier given as its raw bytes (for example a UUID's `as_bytes()`).
///
/// An absent identifier fails with `null_value_disallowed`. An empty or all-zero
/// identifier fails with `empty_guid_disallowed`.
pub fn require_guid(id: Option<&[u8]>) -> UnitOutcome {
    match id {
        None => Outcome::Fail(Error::null_value_disallowed()),
        Some(bytes) if bytes.iter().all(|b| *b == 0) => {
            Outcome::Fail(Error::empty_guid_disallowed())
        }
        Some(_) => DEFAULT_RESULT,
    }
}
