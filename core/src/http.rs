//! Plain-data HTTP types crossing the transport seam.
//!
//! # Design
//! Requests and responses are described as plain data so the client can
//! build and parse them without touching the network, and so any `Transport`
//! implementation (reqwest, a test fake) can execute them. Query parameters
//! are carried separately from the path; the transport is responsible for
//! encoding them onto the URL.
//!
//! All fields use owned types (`String`, `Vec`) so values can move freely
//! across async boundaries without lifetime concerns.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `CafeClient::build_*` methods and executed by a [`Transport`]
/// implementation.
///
/// [`Transport`]: crate::transport::Transport
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport` after executing an `HttpRequest`, then passed
/// to `CafeClient::parse_*` methods for status checking and deserialization.
/// Non-success statuses are data here, not errors; interpretation belongs to
/// the parse side.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
