//! Traits layered on top of [`Outcome`](crate::Outcome).
//!
//! - [`OutcomeLike`]: payload-agnostic capability shared by `Outcome<T>` and
//!   `Result<T, Error>`
//! - [`OutcomeResultExt`]: lifts any foreign `Result` into an `Outcome`
//!
//! # Examples
//!
//! ```
//! use error_envelope::traits::{OutcomeLike, OutcomeResultExt};
//!
//! let outcome = "42".parse::<i32>().or_fail("bad_number");
//! assert_eq!(outcome.match_outcome(|v| v * 2, |_| 0), 84);
//! ```

pub mod outcome_like;
pub mod result_ext;

pub use outcome_like::OutcomeLike;
pub use result_ext::OutcomeResultExt;
