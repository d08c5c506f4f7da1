//! Shorthand macros for building and propagating failed outcomes.
//!
//! - [`macro@crate::fail`] - Builds an [`Outcome::Fail`](crate::Outcome::Fail) from a code
//!   and an optional `format!`-style message.
//! - [`macro@crate::attempt`] - Unwraps a success, or returns early with the failure.
//!   `?` for outcomes.
//!
//! # Examples
//!
//! ```
//! use error_envelope::{attempt, fail, Outcome};
//!
//! fn parse(raw: &str) -> Outcome<i64> {
//!     match raw.parse() {
//!         Ok(v) => Outcome::success(v),
//!         Err(_) => fail!("bad_number", "`{}` is not a number", raw),
//!     }
//! }
//!
//! fn sum(a: &str, b: &str) -> Outcome<i64> {
//!     let a = attempt!(parse(a));
//!     let b = attempt!(parse(b));
//!     Outcome::success(a + b)
//! }
//!
//! assert_eq!(sum("2", "3").into_value(), 5);
//! assert_eq!(sum("2", "x").error().message(), Some("`x` is not a number"));
//! ```

/// Builds an [`Outcome::Fail`](crate::Outcome::Fail).
///
/// # Syntax
///
/// - `fail!(code)` - an error carrying only the code
/// - `fail!(code, "fmt", args...)` - the message is formatted like `format!`
///
/// # Examples
///
/// ```
/// use error_envelope::{fail, UnitOutcome};
///
/// let outcome: UnitOutcome = fail!("conflict", "user {} exists", 7);
/// assert_eq!(outcome.error().code(), "conflict");
/// assert_eq!(outcome.error().message(), Some("user 7 exists"));
/// ```
#[macro_export]
macro_rules! fail {
    ($code:expr $(,)?) => {
        $crate::Outcome::Fail($crate::Error::new($code))
    };
    ($code:expr, $($arg:tt)+) => {
        $crate::Outcome::Fail(
            $crate::Error::new($code).with_message($crate::__private::format!($($arg)+)),
        )
    };
}

/// Unwraps the success value of any [`OutcomeLike`](crate::OutcomeLike), or returns
/// early with its error.
///
/// The error is returned through `From<Error>`, so the enclosing function may return
/// an `Outcome<U>` for any `U`, or any other type that converts from
/// [`Error`](crate::Error).
///
/// # Examples
///
/// ```
/// use error_envelope::{attempt, Error, Outcome};
///
/// fn lookup(id: u32) -> Outcome<u32> {
///     let found: Result<u32, Error> = if id == 0 { Err(Error::new("not_found")) } else { Ok(id) };
///     Outcome::success(attempt!(found) * 10)
/// }
///
/// assert_eq!(lookup(4).into_value(), 40);
/// assert_eq!(lookup(0).error().code(), "not_found");
/// ```
#[macro_export]
macro_rules! attempt {
    ($expr:expr $(,)?) => {
        match $crate::OutcomeLike::into_outcome($expr) {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Fail(error) => return ::core::convert::From::from(error),
        }
    };
}
