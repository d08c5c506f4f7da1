//! Recoverable failures as data, with a canonical JSON error envelope.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_envelope::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Success or Fail
//!
//! ```
//! use error_envelope::{Error, Outcome};
//!
//! let ok = Outcome::success(123);
//! assert_eq!(ok.match_with(|v| v + 1, |_| -1), 124);
//!
//! let failed: Outcome<i32> = Error::new("not_found").with_target("id").into();
//! assert!(failed.is_fail());
//! assert_eq!(failed.error().target(), Some("id"));
//! ```
//!
//! ## Wire Envelope
//!
//! ```
//! use error_envelope::{Error, ErrorResponse};
//!
//! let response = Error::new("Test").with_message("Test").into_response();
//! let json = serde_json::to_string(&response).unwrap();
//! assert_eq!(json, r#"{"error":{"code":"Test","message":"Test"}}"#);
//!
//! let back: ErrorResponse = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, response);
//! ```
//!
//! ## Fail Fast
//!
//! ```
//! use error_envelope::{Error, Failure, Outcome};
//!
//! fn run(outcome: Outcome<u8>) -> Result<u8, Failure> {
//!     let value = outcome.value_or_fault()?;
//!     Ok(value * 2)
//! }
//!
//! assert_eq!(run(Outcome::success(4)).unwrap(), 8);
//! assert_eq!(run(Error::new("io").into()).unwrap_err().error().code(), "io");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Outcome, std Result, and value/error parts
pub mod convert;
/// Macros for building and propagating failed outcomes
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Guards for absent or empty inputs
pub mod require;
/// ErrorResponse envelope and HTTP problem adapter
pub mod response;
/// Capability traits over outcomes
pub mod traits;
/// Error, Outcome, and fault types
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
#[cfg_attr(docsrs, doc(cfg(feature = "tracing")))]
pub mod tracing_ext;

pub use response::{ErrorResponse, HttpProblem, HttpProblemError};
pub use traits::*;
pub use types::{
    codes, Error, ErrorAccumulator, ErrorVec, Failure, Fault, InnerErrors, Outcome, UnitOutcome,
    Variant, DEFAULT_RESULT,
};

#[doc(hidden)]
pub mod __private {
    #[cfg(not(feature = "std"))]
    pub use alloc::format;
    #[cfg(feature = "std")]
    pub use std::format;
}
