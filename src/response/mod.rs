//! Wire envelopes for surfacing an [`Error`] at a serialization boundary.
//!
//! - [`ErrorResponse`]: the canonical `{ "error": ... }` envelope
//! - [`HttpProblem`] / [`HttpProblemError`]: adapter from RFC 7807 problem details
//!
//! # Examples
//!
//! ```
//! use error_envelope::Error;
//!
//! let response = Error::new("Test").with_message("Test").into_response();
//! let json = serde_json::to_string(&response).unwrap();
//! assert_eq!(json, r#"{"error":{"code":"Test","message":"Test"}}"#);
//! ```

use crate::types::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod problem;

pub use problem::{HttpProblem, HttpProblemError};

/// Envelope that wraps exactly one error under the key `error`.
///
/// The default payload is [`Error`]. [`HttpProblemError`] uses the same envelope so
/// its extension fields reach the wire.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorResponse<E = Error> {
    error: E,
}

impl<E> ErrorResponse<E> {
    #[inline]
    pub fn new(error: E) -> Self {
        Self { error }
    }

    #[inline]
    pub fn error(&self) -> &E {
        &self.error
    }

    #[inline]
    pub fn into_error(self) -> E {
        self.error
    }
}

impl From<Error> for ErrorResponse {
    #[inline]
    fn from(error: Error) -> Self {
        Self::new(error)
    }
}

impl Error {
    /// Wraps a copy of this error in the wire envelope.
    #[inline]
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.clone())
    }

    /// Wraps this error in the wire envelope.
    #[inline]
    pub fn into_response(self) -> ErrorResponse {
        ErrorResponse::new(self)
    }
}
