//! Wire DTOs for the study-cafe reservation API.
//!
//! # Design
//! These types mirror the backend schema but are defined independently of
//! the mock-server crate; integration tests catch any drift between the two.
//! Cafes, seats, sessions, and users are opaque payloads — the client passes
//! them through unmodified and attaches no behavior beyond (de)serialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Login request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Role attached to an authenticated user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Member,
    Admin,
}

/// User summary returned by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
}

/// A study cafe listed by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cafe {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub seats_total: u32,
}

/// Request payload for registering a new cafe (admin operation). The server
/// creates `seats_total` seats numbered from 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCafe {
    pub name: String,
    pub address: String,
    pub seats_total: u32,
}

/// Request payload for updating a cafe (admin operation). Only the fields
/// present in the JSON are applied; omitted fields remain unchanged on the
/// server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCafe {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Availability state of a single seat.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeatStatus {
    Available,
    Occupied,
    OutOfService,
}

impl SeatStatus {
    /// Wire form used as a `status` query parameter when listing seats.
    pub fn as_query(self) -> &'static str {
        match self {
            SeatStatus::Available => "available",
            SeatStatus::Occupied => "occupied",
            SeatStatus::OutOfService => "out_of_service",
        }
    }
}

/// A seat inside a cafe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seat {
    pub id: Uuid,
    pub cafe_id: Uuid,
    pub number: u32,
    pub status: SeatStatus,
}

/// Request payload for reserving a seat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReserveSeat {
    pub user_id: Uuid,
    /// Requested duration of the session in minutes.
    pub minutes: u32,
}

/// A study session created by reserving a seat. `ended_at` is `None` while
/// the session is active.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    pub user_id: Uuid,
    pub cafe_id: Uuid,
    pub seat_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}
