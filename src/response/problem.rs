use super::ErrorResponse;
use crate::types::alloc_type::String;
use crate::types::{codes, Error, Fault};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RFC 7807 problem details, as produced by HTTP services.
///
/// # Examples
///
/// ```
/// use error_envelope::HttpProblem;
///
/// let problem = HttpProblem::new()
///     .with_type("https://example.com/probs/out-of-credit")
///     .with_title("You do not have enough credit.")
///     .with_status(403);
///
/// let json = serde_json::to_value(&problem).unwrap();
/// assert_eq!(json["type"], "https://example.com/probs/out-of-credit");
/// assert!(json.get("detail").is_none());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HttpProblem {
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", default, skip_serializing_if = "Option::is_none")
    )]
    pub problem_type: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub title: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub status: Option<u16>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub detail: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub instance: Option<String>,
}

impl HttpProblem {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_type(mut self, problem_type: impl Into<String>) -> Self {
        self.problem_type = Some(problem_type.into());
        self
    }

    #[inline]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[inline]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    #[inline]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    #[inline]
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }
}

/// An [`Error`] derived from an [`HttpProblem`], extended with `status` and `instance`.
///
/// - `type` becomes `code` (`about:blank` when absent or empty)
/// - `title` and `detail` are joined with `\n` into `message`; an absent part is empty
/// - `status` and `instance` are carried as extension fields next to the error fields
///
/// # Examples
///
/// ```
/// use error_envelope::{HttpProblem, HttpProblemError};
///
/// let problem = HttpProblem::new()
///     .with_type("about:blank")
///     .with_title("T")
///     .with_detail("D")
///     .with_status(400);
///
/// let err = HttpProblemError::from(&problem);
/// assert_eq!(err.error().code(), "about:blank");
/// assert_eq!(err.error().message(), Some("T\nD"));
/// assert_eq!(err.status(), Some(400));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HttpProblemError {
    #[cfg_attr(feature = "serde", serde(flatten))]
    error: Error,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    status: Option<u16>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    instance: Option<String>,
}

impl HttpProblemError {
    /// Adapts a problem that may be absent.
    ///
    /// An absent problem is a precondition violation, reported as
    /// [`Fault::MissingArgument`], never as a defaulted error.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_envelope::{Fault, HttpProblemError};
    ///
    /// let missing = HttpProblemError::from_problem(None);
    /// assert_eq!(missing, Err(Fault::MissingArgument { name: "problem" }));
    /// ```
    pub fn from_problem(problem: Option<&HttpProblem>) -> Result<Self, Fault> {
        problem
            .map(Self::from)
            .ok_or(Fault::MissingArgument { name: "problem" })
    }

    /// The derived error.
    #[inline]
    pub fn error(&self) -> &Error {
        &self.error
    }

    #[inline]
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    #[inline]
    pub fn instance(&self) -> Option<&str> {
        self.instance.as_deref()
    }

    /// Drops the extension fields, returning the derived error.
    #[inline]
    pub fn into_error(self) -> Error {
        self.error
    }

    /// Wraps this error, extension fields included, in the wire envelope.
    #[inline]
    pub fn into_response(self) -> ErrorResponse<Self> {
        ErrorResponse::new(self)
    }
}

impl From<&HttpProblem> for HttpProblemError {
    fn from(problem: &HttpProblem) -> Self {
        let code = problem
            .problem_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(codes::ABOUT_BLANK);
        let title = problem.title.as_deref().unwrap_or_default();
        let detail = problem.detail.as_deref().unwrap_or_default();

        let mut message = String::with_capacity(title.len() + detail.len() + 1);
        message.push_str(title);
        message.push('\n');
        message.push_str(detail);

        Self {
            error: Error::new(code).with_message(message),
            status: problem.status,
            instance: problem.instance.clone(),
        }
    }
}

impl From<HttpProblem> for HttpProblemError {
    #[inline]
    fn from(problem: HttpProblem) -> Self {
        Self::from(&problem)
    }
}

impl From<HttpProblemError> for Error {
    #[inline]
    fn from(problem: HttpProblemError) -> Self {
        problem.error
    }
}
