//! API client core for the study-cafe seat-reservation service.
//!
//! # Overview
//! Maps each backend operation (login, cafe directory, seat listing,
//! reservations, sessions) onto exactly one HTTP call and returns a tagged
//! [`Outcome`] instead of raising errors, so presentation code gets one
//! uniform result shape to match on.
//!
//! # Design
//! - `CafeClient` is stateless — it holds only `base_url` and splits every
//!   operation into `build_*` (produces a request) and `parse_*` (consumes a
//!   response), keeping request construction and interpretation free of I/O.
//! - `Transport` is the injected seam that executes requests; `HttpTransport`
//!   implements it over reqwest, tests substitute fakes.
//! - `CafeRepository` is the dispatch boundary: one transport call per
//!   invocation, every failure normalized into `Outcome::Err`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod outcome;
pub mod repository;
pub mod transport;
pub mod types;

pub use client::CafeClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use outcome::{Outcome, GENERIC_FAILURE};
pub use repository::CafeRepository;
pub use transport::{HttpTransport, Transport};
pub use types::{
    Cafe, CreateCafe, Credentials, ReserveSeat, Seat, SeatStatus, Session, UpdateCafe, UserRole,
    UserSummary,
};
