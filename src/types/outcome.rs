//! The `Success`/`Fail` discriminated union.
//!
//! [`Outcome<T>`] holds exactly one of a success value or an [`Error`]. No third
//! state is reachable: there is no "uninitialized" outcome, and a `Fail` always
//! carries an error.
//!
//! # Examples
//!
//! ```
//! use error_envelope::{Error, Outcome};
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     match raw.parse() {
//!         Ok(port) => Outcome::success(port),
//!         Err(_) => Error::bad_argument("port").with_message("not a number").into(),
//!     }
//! }
//!
//! assert_eq!(parse_port("8080").match_with(|p| p + 1, |_| 0), 8081);
//! assert_eq!(parse_port("http").match_with(|p| p + 1, |_| 0), 0);
//! ```

use crate::types::error::Error;
use crate::types::fault::{raise, Failure, Fault, Variant};
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Either a success value or a domain [`Error`].
///
/// # Serde Support
///
/// With the `serde` feature the outcome is externally tagged:
/// `{"success": value}` or `{"fail": error}`.
///
/// # Panics
///
/// The wrong-branch accessors ([`value`](Self::value), [`error`](Self::error),
/// [`cast`](Self::cast) and their `into_` forms) panic with a [`Fault`] message that
/// names the misused accessor. Use the `try_` forms to get the fault as a value.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome<T> {
    Success(T),
    Fail(Error),
}

/// Outcome of an operation that reports nothing on success.
pub type UnitOutcome = Outcome<()>;

/// The shared default success of a [`UnitOutcome`].
pub const DEFAULT_RESULT: UnitOutcome = Outcome::Success(());


impl<T> Outcome<T> {
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    #[inline]
    pub fn fail(error: Error) -> Self {
        Self::Fail(error)
    }

    #[must_use]
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    #[inline]
    pub const fn is_fail(&self) -> bool {
        !self.is_success()
    }

    #[must_use]
    #[inline]
    pub const fn variant(&self) -> Variant {
        match self {
            Self::Success(_) => Variant::Success,
            Self::Fail(_) => Variant::Fail,
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with an invalid-state fault naming `value` if the outcome is `Fail`.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_envelope::Outcome;
    ///
    /// assert_eq!(*Outcome::success(5).value(), 5);
    /// ```
    #[track_caller]
    #[inline]
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Fail(_) => raise(Fault::invalid_state("value", Variant::Fail)),
        }
    }

    /// Returns the success value, or the fault describing the misuse.
    #[inline]
    pub fn try_value(&self) -> Result<&T, Fault> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Fail(_) => Err(Fault::invalid_state("value", Variant::Fail)),
        }
    }

    /// Consumes the outcome, returning the success value.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Fail`.
    #[track_caller]
    #[inline]
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Fail(_) => raise(Fault::invalid_state("into_value", Variant::Fail)),
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics with an invalid-state fault naming `error` if the outcome is `Success`.
    #[track_caller]
    #[inline]
    pub fn error(&self) -> &Error {
        match self {
            Self::Fail(error) => error,
            Self::Success(_) => raise(Fault::invalid_state("error", Variant::Success)),
        }
    }

    #[inline]
    pub fn try_error(&self) -> Result<&Error, Fault> {
        match self {
            Self::Fail(error) => Ok(error),
            Self::Success(_) => Err(Fault::invalid_state("error", Variant::Success)),
        }
    }

    /// Consumes the outcome, returning the error.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Success`.
    #[track_caller]
    #[inline]
    pub fn into_error(self) -> Error {
        match self {
            Self::Fail(error) => error,
            Self::Success(_) => raise(Fault::invalid_state("into_error", Variant::Success)),
        }
    }

    #[inline]
    pub fn as_success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Fail(_) => None,
        }
    }

    #[inline]
    pub fn as_fail(&self) -> Option<&Error> {
        match self {
            Self::Success(_) => None,
            Self::Fail(error) => Some(error),
        }
    }

    /// Converts into the success value, discarding any error.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Fail(_) => None,
        }
    }

    /// Converts into the error, discarding any success value.
    #[inline]
    pub fn err(self) -> Option<Error> {
        match self {
            Self::Success(_) => None,
            Self::Fail(error) => Some(error),
        }
    }

    /// Applies exactly one of the two functions, chosen by the current variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_envelope::{Error, Outcome};
    ///
    /// assert_eq!(Outcome::success(123).match_with(|v| v + 1, |_| -1), 124);
    ///
    /// let failed: Outcome<i32> = Outcome::fail(Error::new("boom"));
    /// assert_eq!(failed.match_with(|v| v + 1, |_| -1), -1);
    /// ```
    #[inline]
    pub fn match_with<R, S, F>(self, on_success: S, on_fail: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Error) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Fail(error) => on_fail(error),
        }
    }

    /// Borrowing form of [`match_with`](Self::match_with).
    #[inline]
    pub fn match_ref<'a, R, S, F>(&'a self, on_success: S, on_fail: F) -> R
    where
        S: FnOnce(&'a T) -> R,
        F: FnOnce(&'a Error) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Fail(error) => on_fail(error),
        }
    }

    /// Runs exactly one of the two effects, chosen by the current variant.
    #[inline]
    pub fn switch<S, F>(&self, on_success: S, on_fail: F)
    where
        S: FnOnce(&T),
        F: FnOnce(&Error),
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Fail(error) => on_fail(error),
        }
    }

    /// Re-types a `Fail`, carrying the same error unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Success`: a value cannot be converted to an
    /// unrelated payload type.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_envelope::{Error, Outcome};
    ///
    /// let failed: Outcome<u8> = Outcome::fail(Error::new("io"));
    /// let recast: Outcome<String> = failed.cast();
    /// assert_eq!(recast.error().code(), "io");
    /// ```
    #[track_caller]
    #[inline]
    pub fn cast<U>(self) -> Outcome<U> {
        match self {
            Self::Fail(error) => Outcome::Fail(error),
            Self::Success(_) => raise(Fault::invalid_state("cast", Variant::Success)),
        }
    }

    /// Re-types a `Fail`, or hands the `Success` back unchanged.
    #[inline]
    pub fn try_cast<U>(self) -> Result<Outcome<U>, Self> {
        match self {
            Self::Fail(error) => Ok(Outcome::Fail(error)),
            success @ Self::Success(_) => Err(success),
        }
    }

    /// Returns the success value, or raises the error as a [`Failure`].
    ///
    /// The failure carries the original error unmodified, so `?` can propagate it.
    #[inline]
    pub fn value_or_fault(self) -> Result<T, Failure> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Fail(error) => Err(Failure::new(error)),
        }
    }

    /// Does nothing on `Success`. On `Fail`, raises the same [`Failure`] as
    /// [`value_or_fault`](Self::value_or_fault) without extracting a value.
    #[inline]
    pub fn ensure_success(&self) -> Result<(), Failure> {
        match self {
            Self::Success(_) => Ok(()),
            Self::Fail(error) => Err(Failure::new(error.clone())),
        }
    }

    /// Borrows the success value.
    ///
    /// The `Fail` branch clones its [`Error`], since an outcome owns its error. To
    /// inspect either branch without cloning, use [`match_ref`](Self::match_ref) or
    /// [`as_fail`](Self::as_fail).
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Fail(error) => Outcome::Fail(error.clone()),
        }
    }

    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Fail(error) => Outcome::Fail(error),
        }
    }

    /// Chains a computation that may fail, short-circuiting on `Fail`.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Fail(error) => Outcome::Fail(error),
        }
    }

    /// Rewrites the error of a `Fail`. A `Success` passes through.
    #[inline]
    pub fn map_error<F>(self, f: F) -> Self
    where
        F: FnOnce(Error) -> Error,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Fail(error) => Self::Fail(f(error)),
        }
    }

    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(Error) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Fail(error) => f(error),
        }
    }

    /// Drops the success payload, keeping only whether the operation failed.
    #[inline]
    pub fn as_unit(self) -> UnitOutcome {
        match self {
            Self::Success(_) => DEFAULT_RESULT,
            Self::Fail(error) => Outcome::Fail(error),
        }
    }
}

impl<T> Outcome<Option<T>> {
    /// A success whose value is absent.
    #[inline]
    pub fn null() -> Self {
        Self::Success(None)
    }
}

impl Default for Outcome<()> {
    #[inline]
    fn default() -> Self {
        DEFAULT_RESULT
    }
}

impl Error {
    /// Wraps the error in a `Fail` of any payload type.
    #[inline]
    pub fn into_fail<T>(self) -> Outcome<T> {
        Outcome::Fail(self)
    }
}

impl<T> From<Error> for Outcome<T> {
    #[inline]
    fn from(error: Error) -> Self {
        Self::Fail(error)
    }
}

impl<T> From<Result<T, Error>> for Outcome<T> {
    #[inline]
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Fail(error),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Error> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Fail(error) => Err(error),
        }
    }
}

/// Unwraps the error of a `Fail`, handing a `Success` back unchanged.
impl<T> TryFrom<Outcome<T>> for Error {
    type Error = Outcome<T>;

    #[inline]
    fn try_from(outcome: Outcome<T>) -> Result<Self, Self::Error> {
        match outcome {
            Outcome::Fail(error) => Ok(error),
            success @ Outcome::Success(_) => Err(success),
        }
    }
}

impl<T: Display> Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => Display::fmt(value, f),
            Self::Fail(error) => Display::fmt(error, f),
        }
    }
}
