//! Tracing integration for etl.
//!
//! Outcomes never log on their own. This module adds opt-in hooks that
//! emit a `tracing` event as an outcome passes through, leaving the
//! outcome itself unchanged.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! etl = { version = "0.3", features = ["tracing"] }
//! ```

use core::fmt::Debug;

use tracing::Span;

use crate::traits::ErrorInfo;
use crate::types::Outcome;

/// Extension trait that records outcomes as `tracing` events.
///
/// # Example
///
/// ```rust,ignore
/// use etl::trace::TraceOutcome;
///
/// let user = load_user(id).trace_err("load_user").trace_ok("load_user");
/// ```
pub trait TraceOutcome<T, E>: Sized {
    /// Emits a `WARN` event carrying the error's `msg` and `info` when the
    /// outcome is a failure.
    fn trace_err(self, operation: &str) -> Self;

    /// Emits a `DEBUG` event carrying the success value when the outcome
    /// is a success.
    fn trace_ok(self, operation: &str) -> Self
    where
        T: Debug;
}

impl<T, E: ErrorInfo> TraceOutcome<T, E> for Outcome<T, E> {
    fn trace_err(self, operation: &str) -> Self {
        self.inspect_err(|error| {
            tracing::warn!(
                operation,
                msg = %error.msg(),
                info = %error.info(),
                "operation failed"
            );
        })
    }

    fn trace_ok(self, operation: &str) -> Self
    where
        T: Debug,
    {
        self.inspect(|value| {
            tracing::debug!(operation, value = ?value, "operation succeeded");
        })
    }
}

/// Records `error` as a `WARN` event and returns it.
///
/// The event belongs to whatever span is current. Handy inside `map_err`
/// closures.
pub fn record_error<E: ErrorInfo>(error: E) -> E {
    tracing::warn!(msg = %error.msg(), info = %error.info(), "error recorded");
    error
}

/// Like [`record_error`], but records the event inside `span` instead of
/// the current one.
pub fn record_error_in<E: ErrorInfo>(span: &Span, error: E) -> E {
    span.in_scope(|| {
        tracing::warn!(msg = %error.msg(), info = %error.info(), "error recorded");
    });
    error
}
