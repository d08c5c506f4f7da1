//! Immutable, tree-shaped failure descriptor.
//!
//! An [`Error`] always carries a `code`. It can optionally carry a human readable
//! `message`, the `target` (field or argument name) it refers to, ordered child
//! `details`, and a chained `inner_error` that narrows the cause.
//!
//! # Examples
//!
//! ```
//! use error_envelope::Error;
//!
//! let err = Error::new("validation_failed")
//!     .with_message("request body is invalid")
//!     .with_detail(Error::bad_argument("age").with_message("must be positive"))
//!     .with_inner_error(Error::new("range_check"));
//!
//! assert_eq!(err.code(), "validation_failed");
//! assert_eq!(err.details().len(), 1);
//! assert_eq!(err.root_cause().code(), "range_check");
//! ```

use crate::types::alloc_type::{Box, String, Vec};
use crate::types::fault::{raise, Fault};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod codes;
mod display;

/// Failure descriptor carried by [`Outcome::Fail`](crate::Outcome::Fail).
///
/// Fields are private and only set while building, so a shared `Error` never changes.
/// Equality and hashing are structural over every field.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_code"))]
    code: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    message: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    target: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    details: Option<Vec<Error>>,
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "innererror",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    inner_error: Option<Box<Error>>,
}

impl Error {
    /// Creates an error carrying only a code.
    ///
    /// # Panics
    ///
    /// Panics with [`Fault::EmptyCode`] if `code` is empty. Use
    /// [`try_new`](Self::try_new) for codes that come from outside the program.
    #[track_caller]
    #[inline]
    pub fn new(code: impl Into<String>) -> Self {
        match Self::try_new(code) {
            Ok(error) => error,
            Err(fault) => raise(fault),
        }
    }

    /// Creates an error carrying only a code, or [`Fault::EmptyCode`] if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_envelope::{Error, Fault};
    ///
    /// assert_eq!(Error::try_new("timeout").map(|e| e.code().len()), Ok(7));
    /// assert_eq!(Error::try_new(""), Err(Fault::EmptyCode));
    /// ```
    pub fn try_new(code: impl Into<String>) -> Result<Self, Fault> {
        let code = code.into();
        if code.is_empty() {
            return Err(Fault::EmptyCode);
        }
        Ok(Self {
            code,
            message: None,
            target: None,
            details: None,
            inner_error: None,
        })
    }

    /// Creates an error with every field given explicitly.
    ///
    /// # Panics
    ///
    /// Panics if `code` is empty, like [`new`](Self::new).
    ///
    /// # Examples
    ///
    /// ```
    /// use error_envelope::Error;
    ///
    /// let err = Error::from_parts("conflict", Some("already exists".into()), None, None, None);
    /// assert_eq!(err.message(), Some("already exists"));
    /// assert!(err.target().is_none());
    /// ```
    #[track_caller]
    pub fn from_parts(
        code: impl Into<String>,
        message: Option<String>,
        target: Option<String>,
        details: Option<Vec<Error>>,
        inner_error: Option<Error>,
    ) -> Self {
        Self {
            message,
            target,
            details,
            inner_error: inner_error.map(Box::new),
            ..Self::new(code)
        }
    }

    /// Sets the human readable message.
    #[inline]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the field or argument name this error refers to.
    #[inline]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Replaces the child errors with the given sequence, keeping its order.
    #[inline]
    pub fn with_details<I>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = Error>,
    {
        self.details = Some(details.into_iter().collect());
        self
    }

    /// Appends a single child error.
    #[inline]
    pub fn with_detail(mut self, detail: Error) -> Self {
        self.details.get_or_insert_with(Vec::new).push(detail);
        self
    }

    /// Sets the chained cause.
    #[inline]
    pub fn with_inner_error(mut self, inner: Error) -> Self {
        self.inner_error = Some(Box::new(inner));
        self
    }

    /// Code identifying the failure class.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[inline]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Child errors in insertion order. Empty when none were attached.
    #[inline]
    pub fn details(&self) -> &[Error] {
        self.details.as_deref().unwrap_or(&[])
    }

    /// Returns `true` if a details sequence was attached, even an empty one.
    #[inline]
    pub fn has_details(&self) -> bool {
        self.details.is_some()
    }

    #[inline]
    pub fn inner_error(&self) -> Option<&Error> {
        self.inner_error.as_deref()
    }

    /// Iterates the inner error chain, nearest cause first. `self` is not included.
    #[inline]
    pub fn inner_errors(&self) -> InnerErrors<'_> {
        InnerErrors {
            next: self.inner_error(),
        }
    }

    /// Returns the deepest error of the inner chain, or `self` if there is none.
    pub fn root_cause(&self) -> &Error {
        self.inner_errors().last().unwrap_or(self)
    }

    /// Error for an argument that was present but unacceptable.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_envelope::{codes, Error};
    ///
    /// let err = Error::bad_argument("page_size").with_message("must be at most 100");
    /// assert_eq!(err.code(), codes::BAD_ARGUMENT);
    /// assert_eq!(err.target(), Some("page_size"));
    /// ```
    #[inline]
    pub fn bad_argument(argument_name: impl Into<String>) -> Self {
        Self::new(codes::BAD_ARGUMENT).with_target(argument_name)
    }

    /// Error for a required argument that was absent.
    #[inline]
    pub fn null_argument_disallowed(argument_name: impl Into<String>) -> Self {
        Self::new(codes::NULL_ARGUMENT_DISALLOWED)
            .with_target(argument_name)
    }

    /// Error for a required value that was absent.
    #[inline]
    pub fn null_value_disallowed() -> Self {
        Self::new(codes::NULL_VALUE_DISALLOWED)
    }

    /// Error for an identifier that was present but empty.
    #[inline]
    pub fn empty_guid_disallowed() -> Self {
        Self::new(codes::EMPTY_GUID_DISALLOWED)
    }

    /// Error for a failure nobody classified.
    #[inline]
    pub fn unhandled() -> Self {
        Self::new(codes::UNHANDLED)
    }
}

/// Iterator over an error's inner chain, created by [`Error::inner_errors`].
#[derive(Debug, Clone)]
pub struct InnerErrors<'a> {
    next: Option<&'a Error>,
}

impl<'a> Iterator for InnerErrors<'a> {
    type Item = &'a Error;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.inner_error();
        Some(current)
    }
}

impl core::iter::FusedIterator for InnerErrors<'_> {}

#[cfg(feature = "serde")]
fn deserialize_code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let code = String::deserialize(deserializer)?;
    if code.is_empty() {
        return Err(serde::de::Error::invalid_value(
            serde::de::Unexpected::Str(""),
            &"a non-empty error code",
        ));
    }
    Ok(code)
}
