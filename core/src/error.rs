//! Error types for the study-cafe API client.
//!
//! # Design
//! Statuses that callers routinely branch on get dedicated variants:
//! `Unauthorized` (bad credentials), `NotFound` (unknown cafe/seat/session,
//! or no active session), and `Conflict` (reserving a seat that is not
//! available, ending a session twice). Every other non-success response
//! lands in `Http` with the raw status and body for debugging.
//!
//! `Transport` displays as the underlying transport's own message, with no
//! prefix, so a transport that fails without saying anything produces an
//! empty display — the `Outcome` wrapper substitutes its generic fallback
//! in that case.

use thiserror::Error;

/// Errors produced while building, executing, or parsing an API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server returned 401 — the supplied credentials were rejected.
    #[error("authentication failed")]
    Unauthorized,

    /// The server returned 404 — the requested resource does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned 409 — the reservation state conflicts with the
    /// request (seat already taken, session already ended).
    #[error("conflicting reservation state")]
    Conflict,

    /// The server returned a non-success status with no dedicated variant.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    #[error("request encoding failed: {0}")]
    Encode(String),

    /// The response body could not be deserialized into the expected type.
    #[error("response decoding failed: {0}")]
    Decode(String),

    /// The transport failed before a response was obtained (connectivity,
    /// timeout, malformed URL).
    #[error("{0}")]
    Transport(String),
}
