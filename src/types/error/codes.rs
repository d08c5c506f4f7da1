//! Stable error codes shared by the fixed-code constructors on [`Error`](super::Error).
//!
//! These strings are part of the wire contract. Clients match on them, so they
//! never change once published.

/// An argument was present but had an unacceptable value.
pub const BAD_ARGUMENT: &str = "bad_argument";

/// A required argument was absent.
pub const NULL_ARGUMENT_DISALLOWED: &str = "null_argument_disallowed";

/// A required value was absent.
pub const NULL_VALUE_DISALLOWED: &str = "null_value_disallowed";

/// An identifier was present but empty (all zero).
pub const EMPTY_GUID_DISALLOWED: &str = "empty_guid_disallowed";

/// A failure nobody classified.
pub const UNHANDLED: &str = "Unhandled";

/// Code used by [`HttpProblemError`](crate::response::HttpProblemError) when a problem has no `type`.
pub const ABOUT_BLANK: &str = "about:blank";
