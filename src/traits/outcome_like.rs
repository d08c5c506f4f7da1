use crate::response::ErrorResponse;
use crate::types::{Error, Failure, Outcome, UnitOutcome};

mod sealed {
    pub trait Sealed {}

    impl<T> Sealed for crate::types::Outcome<T> {}
    impl<T> Sealed for Result<T, crate::types::Error> {}
}

/// Capability of "being an outcome over some payload type".
///
/// Code that only needs to branch on success or failure can be generic over
/// `O: OutcomeLike` instead of naming a concrete payload. It is implemented for
/// [`Outcome<T>`] and for `Result<T, Error>`. Each implementor holds exactly one
/// branch: `as_success` and `as_fail` never both return `Some`, and never both
/// return `None`.
///
/// # Examples
///
/// ```
/// use error_envelope::{Error, Outcome, OutcomeLike};
///
/// fn describe<O: OutcomeLike>(outcome: &O) -> String {
///     outcome.as_fail().map_or_else(|| "ok".to_string(), |e| e.code().to_string())
/// }
///
/// assert_eq!(describe(&Outcome::success(1)), "ok");
/// assert_eq!(describe(&Err::<(), _>(Error::new("denied"))), "denied");
/// ```
pub trait OutcomeLike: sealed::Sealed + Sized {
    /// The success payload type.
    type Value;

    fn as_success(&self) -> Option<&Self::Value>;

    fn as_fail(&self) -> Option<&Error>;

    fn into_outcome(self) -> Outcome<Self::Value>;

    #[inline]
    fn is_success(&self) -> bool {
        self.as_fail().is_none()
    }

    #[inline]
    fn is_fail(&self) -> bool {
        self.as_fail().is_some()
    }

    /// Applies exactly one of the two functions, chosen by the current variant.
    #[inline]
    fn match_outcome<R, S, F>(self, on_success: S, on_fail: F) -> R
    where
        S: FnOnce(Self::Value) -> R,
        F: FnOnce(Error) -> R,
    {
        self.into_outcome().match_with(on_success, on_fail)
    }

    /// Runs exactly one of the two effects, chosen by the current variant.
    fn switch_outcome<S, F>(&self, on_success: S, on_fail: F)
    where
        S: FnOnce(&Self::Value),
        F: FnOnce(&Error),
    {
        match (self.as_success(), self.as_fail()) {
            (Some(value), None) => on_success(value),
            (None, Some(error)) => on_fail(error),
            _ => unreachable!("an outcome holds exactly one branch"),
        }
    }

    /// Re-types a failed outcome. See [`Outcome::cast`].
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    #[track_caller]
    #[inline]
    fn cast_fail<U>(self) -> Outcome<U> {
        self.into_outcome().cast()
    }

    /// Drops the success payload.
    #[inline]
    fn into_unit(self) -> UnitOutcome {
        self.into_outcome().as_unit()
    }

    /// See [`Outcome::value_or_fault`].
    #[inline]
    fn value_or_fault(self) -> Result<Self::Value, Failure> {
        self.into_outcome().value_or_fault()
    }

    /// Wraps the error of a failed outcome in the wire envelope.
    ///
    /// Returns `None` for a success, which has nothing to report.
    #[inline]
    fn to_error_response(&self) -> Option<ErrorResponse> {
        self.as_fail().map(Error::to_response)
    }
}

impl<T> OutcomeLike for Outcome<T> {
    type Value = T;

    #[inline]
    fn as_success(&self) -> Option<&T> {
        Outcome::as_success(self)
    }

    #[inline]
    fn as_fail(&self) -> Option<&Error> {
        Outcome::as_fail(self)
    }

    #[inline]
    fn into_outcome(self) -> Outcome<T> {
        self
    }
}

impl<T> OutcomeLike for Result<T, Error> {
    type Value = T;

    #[inline]
    fn as_success(&self) -> Option<&T> {
        self.as_ref().ok()
    }

    #[inline]
    fn as_fail(&self) -> Option<&Error> {
        self.as_ref().err()
    }

    #[inline]
    fn into_outcome(self) -> Outcome<T> {
        self.into()
    }
}
