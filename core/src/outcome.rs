//! Tagged result wrapper returned by every repository dispatch.
//!
//! # Design
//! `Outcome<T>` gives every dispatch call a uniform, exhaustively-matchable
//! result so callers never branch on raw errors. Exactly one variant is
//! active, instances are immutable once constructed, and each call produces
//! an independent instance.
//!
//! `Pending` exists for presentation code that wants a loading state before
//! awaiting a dispatch; the repository itself never resolves to it.

use crate::error::ApiError;

/// Message used when the underlying failure displays as an empty string.
pub const GENERIC_FAILURE: &str = "operation failed";

/// Outcome of a dispatched API operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The call has been started but not yet resolved. Emitted by callers,
    /// never returned by the dispatch boundary.
    Pending,

    /// The call succeeded with the decoded response payload.
    Ok(T),

    /// The call failed. `message` is always non-empty and human-readable;
    /// `cause` retains the original error for diagnostics.
    Err {
        message: String,
        cause: Option<ApiError>,
    },
}

impl<T> Outcome<T> {
    /// Wrap a failure, deriving the display message from the cause. Falls
    /// back to [`GENERIC_FAILURE`] when the cause displays as empty, so the
    /// non-empty-message invariant holds for every constructed `Err`.
    pub fn err(cause: ApiError) -> Self {
        let message = cause.to_string();
        let message = if message.trim().is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            message
        };
        Outcome::Err {
            message,
            cause: Some(cause),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Outcome::Pending)
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err { .. })
    }

    /// The success payload, discarding pending and failed outcomes.
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, if this outcome is an `Err`.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Err { message, .. } => Some(message),
            _ => None,
        }
    }

    /// The original failure, if this outcome is an `Err` carrying one.
    pub fn cause(&self) -> Option<&ApiError> {
        match self {
            Outcome::Err { cause, .. } => cause.as_ref(),
            _ => None,
        }
    }

    /// Convert into a plain `Result` for callers that have already awaited
    /// the dispatch and want `?`-style handling. An `Err` constructed
    /// without a retained cause yields a `Transport` error carrying the
    /// display message. `Pending` carries no payload and no cause, so it
    /// converts to the generic failure.
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err {
                cause: Some(cause), ..
            } => Err(cause),
            Outcome::Err {
                message,
                cause: None,
            } => Err(ApiError::Transport(message)),
            Outcome::Pending => Err(ApiError::Transport(GENERIC_FAILURE.to_string())),
        }
    }
}

impl<T> From<Result<T, ApiError>> for Outcome<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(err) => Outcome::err(err),
        }
    }
}
