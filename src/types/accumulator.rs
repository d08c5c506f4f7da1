use crate::types::alloc_type::String;
use crate::types::error::Error;
use crate::types::outcome::{Outcome, UnitOutcome, DEFAULT_RESULT};
use crate::types::ErrorVec;

/// Collects child errors of a multi-part validation into one parent [`Error`].
///
/// Errors are kept in insertion order and become the parent's `details`.
///
/// # Examples
///
/// ```
/// use error_envelope::{Error, ErrorAccumulator, Outcome};
///
/// let mut acc = ErrorAccumulator::new();
/// let name = acc.check(Outcome::success("ada"));
/// let age: Option<u8> = acc.check(Error::bad_argument("age").into());
///
/// assert_eq!(name, Some("ada"));
/// assert_eq!(age, None);
///
/// let outcome = acc.finish("validation_failed", "request is invalid");
/// assert_eq!(outcome.error().details()[0].target(), Some("age"));
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorAccumulator {
    items: ErrorVec<Error>,
}

impl ErrorAccumulator {
    #[inline]
    pub fn new() -> Self {
        Self {
            items: ErrorVec::new(),
        }
    }

    #[inline]
    pub fn push(&mut self, error: Error) {
        self.items.push(error);
    }

    /// Records the error of a `Fail`, or yields the value of a `Success`.
    pub fn check<T>(&mut self, outcome: Outcome<T>) -> Option<T> {
        match outcome {
            Outcome::Success(value) => Some(value),
            Outcome::Fail(error) => {
                self.items.push(error);
                None
            }
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Error> {
        self.items.iter()
    }

    /// Builds the parent error, or `None` if nothing was accumulated.
    pub fn into_error(self, code: impl Into<String>, message: impl Into<String>) -> Option<Error> {
        if self.items.is_empty() {
            return None;
        }
        let parent = Error::new(code).with_message(message);
        Some(parent.with_details(self.items))
    }

    /// `Success` when nothing was accumulated, otherwise a `Fail` whose details are
    /// the accumulated errors.
    pub fn finish(self, code: impl Into<String>, message: impl Into<String>) -> UnitOutcome {
        match self.into_error(code, message) {
            Some(error) => Outcome::Fail(error),
            None => DEFAULT_RESULT,
        }
    }

    #[inline]
    pub fn into_inner(self) -> ErrorVec<Error> {
        self.items
    }
}

impl From<ErrorVec<Error>> for ErrorAccumulator {
    fn from(items: ErrorVec<Error>) -> Self {
        Self { items }
    }
}

impl FromIterator<Error> for ErrorAccumulator {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Error> for ErrorAccumulator {
    fn extend<I: IntoIterator<Item = Error>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for ErrorAccumulator {
    type Item = Error;
    type IntoIter = smallvec::IntoIter<[Error; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
