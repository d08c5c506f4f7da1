//! Programmer-error faults and the fail-fast bridge type.
//!
//! Two failure classes never mix:
//!
//! - [`Fault`] describes misuse of the API (wrong-branch access, a missing required
//!   argument). Panicking accessors format a `Fault` into their panic message, and the
//!   `try_*` variants hand it back as a value.
//! - [`Error`] describes a domain failure and travels inside
//!   [`Outcome::Fail`](crate::Outcome::Fail).
//!
//! [`Failure`] is how a domain failure crosses into `?`-propagation. It carries the
//! original [`Error`] unchanged.

use crate::types::alloc_type::String;
use crate::types::error::Error;
use core::fmt::{self, Display};

/// Which branch of an [`Outcome`](crate::Outcome) was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Success,
    Fail,
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("Success"),
            Self::Fail => f.write_str("Fail"),
        }
    }
}

/// Misuse of the API. A bug in the caller, never a business outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fault {
    /// An accessor was called on the branch that cannot serve it.
    InvalidState {
        accessor: &'static str,
        variant: Variant,
    },
    /// A required argument was absent.
    MissingArgument { name: &'static str },
    /// An error was built with an empty code.
    EmptyCode,
}

impl Fault {
    #[inline]
    pub(crate) const fn invalid_state(accessor: &'static str, variant: Variant) -> Self {
        Self::InvalidState { accessor, variant }
    }
}

impl Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState { accessor, variant } => {
                write!(f, "cannot call `{}` on a {} outcome", accessor, variant)
            }
            Self::MissingArgument { name } => write!(f, "required argument `{}` is absent", name),
            Self::EmptyCode => f.write_str("error code must not be empty"),
        }
    }
}

impl core::error::Error for Fault {}

#[cold]
#[track_caller]
pub(crate) fn raise(fault: Fault) -> ! {
    panic!("{}", fault)
}

/// A domain [`Error`] raised out of an [`Outcome`](crate::Outcome) by
/// [`value_or_fault`](crate::Outcome::value_or_fault) or
/// [`ensure_success`](crate::Outcome::ensure_success).
///
/// The error is kept exactly as it was. The display message is derived from its
/// `message`, or empty when it has none.
///
/// # Examples
///
/// ```
/// use error_envelope::{Error, Outcome};
///
/// fn load() -> Result<u32, error_envelope::Failure> {
///     let outcome: Outcome<u32> = Error::new("not_found").with_message("no such row").into();
///     let value = outcome.value_or_fault()?;
///     Ok(value)
/// }
///
/// let failure = load().unwrap_err();
/// assert_eq!(failure.error().code(), "not_found");
/// assert_eq!(failure.to_string(), "no such row");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    error: Error,
    message: String,
}

impl Failure {
    /// Wraps `error`, deriving the display message from it.
    pub fn new(error: Error) -> Self {
        let message = String::from(error.message().unwrap_or_default());

        #[cfg(feature = "tracing")]
        tracing::debug!(code = error.code(), reason = %message, "outcome raised as failure");

        Self { error, message }
    }

    /// The original error.
    #[inline]
    pub fn error(&self) -> &Error {
        &self.error
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the failure, returning the original error.
    #[inline]
    pub fn into_error(self) -> Error {
        self.error
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for Failure {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl From<Error> for Failure {
    #[inline]
    fn from(error: Error) -> Self {
        Self::new(error)
    }
}

impl From<Failure> for Error {
    #[inline]
    fn from(failure: Failure) -> Self {
        failure.error
    }
}
