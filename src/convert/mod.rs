//! Conversion helpers between [`Outcome`], std `Result`, and `(value, error)` parts.
//!
//! These adapters let code that already returns `Result<T, Error>` adopt
//! `Outcome` incrementally, and let generic call sites branch on any
//! [`OutcomeLike`] without naming its payload type.
//!
//! # Examples
//!
//! ```
//! use error_envelope::convert::*;
//! use error_envelope::{Error, Outcome};
//!
//! let result: Result<i32, Error> = Ok(42);
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_success());
//!
//! let (value, error) = into_parts(outcome);
//! assert_eq!(value, Some(42));
//! assert!(error.is_none());
//! ```

use crate::traits::OutcomeLike;
use crate::types::{Error, Outcome};

/// Converts an `Outcome` into a std `Result`.
///
/// # Examples
///
/// ```
/// use error_envelope::convert::outcome_to_result;
/// use error_envelope::{Error, Outcome};
///
/// assert_eq!(outcome_to_result(Outcome::success(7)), Ok(7));
///
/// let failed: Outcome<i32> = Outcome::fail(Error::new("boom"));
/// assert_eq!(outcome_to_result(failed), Err(Error::new("boom")));
/// ```
#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<T, Error> {
    outcome.into()
}

/// Converts a std `Result` into an `Outcome`.
#[inline]
pub fn result_to_outcome<T>(result: Result<T, Error>) -> Outcome<T> {
    result.into()
}

/// Builds an outcome from a value and an optional error.
///
/// A present error wins: the outcome is `Fail` and the value is dropped.
/// Otherwise the outcome is `Success(value)`.
///
/// # Examples
///
/// ```
/// use error_envelope::convert::from_parts;
/// use error_envelope::Error;
///
/// assert!(from_parts(1, None).is_success());
/// assert!(from_parts(1, Some(Error::new("late"))).is_fail());
/// ```
#[inline]
pub fn from_parts<T>(value: T, error: Option<Error>) -> Outcome<T> {
    match error {
        Some(error) => Outcome::Fail(error),
        None => Outcome::Success(value),
    }
}

/// Splits an outcome into `(Some(value), None)` or `(None, Some(error))`.
#[inline]
pub fn into_parts<T>(outcome: Outcome<T>) -> (Option<T>, Option<Error>) {
    match outcome {
        Outcome::Success(value) => (Some(value), None),
        Outcome::Fail(error) => (None, Some(error)),
    }
}

/// Applies exactly one of the two functions to any [`OutcomeLike`].
///
/// # Examples
///
/// ```
/// use error_envelope::convert::match_outcome;
/// use error_envelope::Error;
///
/// let result: Result<u8, Error> = Err(Error::new("denied"));
/// let code = match_outcome(result, |_| "ok".to_string(), |e| e.code().to_string());
/// assert_eq!(code, "denied");
/// ```
#[inline]
pub fn match_outcome<O, R, S, F>(outcome: O, on_success: S, on_fail: F) -> R
where
    O: OutcomeLike,
    S: FnOnce(O::Value) -> R,
    F: FnOnce(Error) -> R,
{
    outcome.match_outcome(on_success, on_fail)
}

/// Runs exactly one of the two effects on any [`OutcomeLike`].
#[inline]
pub fn switch_outcome<O, S, F>(outcome: &O, on_success: S, on_fail: F)
where
    O: OutcomeLike,
    S: FnOnce(&O::Value),
    F: FnOnce(&Error),
{
    outcome.switch_outcome(on_success, on_fail)
}

/// Re-types the error of any failed [`OutcomeLike`].
///
/// # Panics
///
/// Panics if the outcome is a success.
#[track_caller]
#[inline]
pub fn cast_fail<O, U>(outcome: O) -> Outcome<U>
where
    O: OutcomeLike,
{
    outcome.cast_fail()
}
