//! Tracing integration for error-envelope.
//!
//! Logs failed outcomes as structured `tracing` events, with the error's code,
//! message, and target as fields. Successful outcomes pass through silently.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-envelope = { version = "0.3", features = ["tracing"] }
//! ```

use tracing::Level;

use crate::traits::OutcomeLike;
use crate::types::Error;

/// Extension trait that records failed outcomes as tracing events.
///
/// # Example
///
/// ```rust,ignore
/// use error_envelope::tracing_ext::OutcomeTraceExt;
///
/// let user = repository.find(id).trace_fail("repository::find");
/// ```
pub trait OutcomeTraceExt: OutcomeLike {
    /// Emits a `WARN` event if the outcome failed, then returns it unchanged.
    #[inline]
    fn trace_fail(self, operation: &'static str) -> Self {
        self.trace_fail_at(Level::WARN, operation)
    }

    /// Emits an event at `level` if the outcome failed, then returns it unchanged.
    fn trace_fail_at(self, level: Level, operation: &'static str) -> Self {
        if let Some(error) = self.as_fail() {
            record(level, operation, error);
        }
        self
    }
}

impl<O: OutcomeLike> OutcomeTraceExt for O {}

fn record(level: Level, operation: &'static str, error: &Error) {
    let code = error.code();
    let reason = error.message().unwrap_or_default();
    let target = error.target().unwrap_or_default();
    let details = error.details().len();

    if level == Level::ERROR {
        tracing::error!(
            operation,
            code,
            reason,
            target,
            details,
            "operation failed"
        );
    } else if level == Level::WARN {
        tracing::warn!(
            operation,
            code,
            reason,
            target,
            details,
            "operation failed"
        );
    } else if level == Level::INFO {
        tracing::info!(
            operation,
            code,
            reason,
            target,
            details,
            "operation failed"
        );
    } else if level == Level::DEBUG {
        tracing::debug!(
            operation,
            code,
            reason,
            target,
            details,
            "operation failed"
        );
    } else {
        tracing::trace!(
            operation,
            code,
            reason,
            target,
            details,
            "operation failed"
        );
    }
}
