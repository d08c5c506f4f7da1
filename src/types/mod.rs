//! Value types: the error model, the outcome union, and the fault types.
//!
//! # Examples
//!
//! ```
//! use error_envelope::{Error, Outcome};
//!
//! let outcome: Outcome<u32> = Error::new("timeout")
//!     .with_message("upstream did not answer")
//!     .with_inner_error(Error::new("connect"))
//!     .into();
//!
//! assert!(outcome.is_fail());
//! println!("{:#}", outcome.error());
//! // timeout: upstream did not answer
//! // caused by: connect
//! ```
use smallvec::SmallVec;

pub mod accumulator;
pub mod alloc_type;
pub mod error;
pub mod fault;
pub mod outcome;

pub use accumulator::ErrorAccumulator;
pub use error::{codes, Error, InnerErrors};
pub use fault::{Failure, Fault, Variant};
pub use outcome::{Outcome, UnitOutcome, DEFAULT_RESULT};

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for one element, the common case of a single failed field.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
