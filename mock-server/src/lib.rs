//! In-memory implementation of the study-cafe backend schema.
//!
//! Serves the same routes and status codes the production backend defines:
//! login against seeded accounts, cafe CRUD, seat listing with an optional
//! status filter, seat reservation, and session lifecycle. State lives in a
//! single `RwLock`; nothing is persisted.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Seeded admin account accepted by `POST /auth/login`.
pub const ADMIN_EMAIL: &str = "admin@studycafe.test";
pub const ADMIN_PASSWORD: &str = "admin-pw";

/// Seeded member account accepted by `POST /auth/login`.
pub const MEMBER_EMAIL: &str = "minji@studycafe.test";
pub const MEMBER_PASSWORD: &str = "hunter2";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub role: String,
    #[serde(skip)]
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Cafe {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub seats_total: u32,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeatStatus {
    Available,
    Occupied,
    OutOfService,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Seat {
    pub id: Uuid,
    pub cafe_id: Uuid,
    pub number: u32,
    pub status: SeatStatus,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub user_id: Uuid,
    pub cafe_id: Uuid,
    pub seat_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreateCafe {
    pub name: String,
    pub address: String,
    pub seats_total: u32,
}

#[derive(Deserialize)]
pub struct UpdateCafe {
    pub name: Option<String>,
    pub address: Option<String>,
}

#[derive(Deserialize)]
pub struct ReserveSeat {
    pub user_id: Uuid,
    pub minutes: u32,
}

#[derive(Deserialize)]
pub struct SeatFilter {
    pub status: Option<SeatStatus>,
}

#[derive(Default)]
pub struct Store {
    users: Vec<User>,
    cafes: HashMap<Uuid, Cafe>,
    seats: HashMap<Uuid, Seat>,
    sessions: HashMap<Uuid, Session>,
}

impl Store {
    fn seeded() -> Self {
        let mut store = Self::default();
        store.users.push(User {
            id: Uuid::new_v4(),
            email: ADMIN_EMAIL.to_string(),
            display_name: "Admin".to_string(),
            role: "admin".to_string(),
            password: ADMIN_PASSWORD.to_string(),
        });
        store.users.push(User {
            id: Uuid::new_v4(),
            email: MEMBER_EMAIL.to_string(),
            display_name: "Minji".to_string(),
            role: "member".to_string(),
            password: MEMBER_PASSWORD.to_string(),
        });
        store
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::seeded()));
    Router::new()
        .route("/auth/login", post(login))
        .route("/cafes", get(list_cafes).post(register_cafe))
        .route(
            "/cafes/{id}",
            get(get_cafe).put(update_cafe).delete(delete_cafe),
        )
        .route("/cafes/{id}/seats", get(list_seats))
        .route("/cafes/{cafe_id}/seats/{seat_id}/reserve", post(reserve_seat))
        .route("/users/{id}/session", get(active_session))
        .route("/sessions/{id}/end", post(end_session))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn login(
    State(db): State<Db>,
    Json(input): Json<LoginRequest>,
) -> Result<Json<User>, StatusCode> {
    let store = db.read().await;
    store
        .users
        .iter()
        .find(|u| u.email == input.email && u.password == input.password)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::UNAUTHORIZED)
}

async fn list_cafes(State(db): State<Db>) -> Json<Vec<Cafe>> {
    let store = db.read().await;
    let mut cafes: Vec<Cafe> = store.cafes.values().cloned().collect();
    cafes.sort_by(|a, b| a.name.cmp(&b.name));
    Json(cafes)
}

async fn register_cafe(
    State(db): State<Db>,
    Json(input): Json<CreateCafe>,
) -> (StatusCode, Json<Cafe>) {
    let cafe = Cafe {
        id: Uuid::new_v4(),
        name: input.name,
        address: input.address,
        seats_total: input.seats_total,
    };
    let mut store = db.write().await;
    for number in 1..=input.seats_total {
        let seat = Seat {
            id: Uuid::new_v4(),
            cafe_id: cafe.id,
            number,
            status: SeatStatus::Available,
        };
        store.seats.insert(seat.id, seat);
    }
    store.cafes.insert(cafe.id, cafe.clone());
    (StatusCode::CREATED, Json(cafe))
}

async fn get_cafe(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<Json<Cafe>, StatusCode> {
    let store = db.read().await;
    store.cafes.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_cafe(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateCafe>,
) -> Result<Json<Cafe>, StatusCode> {
    let mut store = db.write().await;
    let cafe = store.cafes.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(name) = input.name {
        cafe.name = name;
    }
    if let Some(address) = input.address {
        cafe.address = address;
    }
    Ok(Json(cafe.clone()))
}

async fn delete_cafe(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .cafes
        .remove(&id)
        .map(|_| {
            store.seats.retain(|_, seat| seat.cafe_id != id);
            StatusCode::NO_CONTENT
        })
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_seats(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Query(filter): Query<SeatFilter>,
) -> Result<Json<Vec<Seat>>, StatusCode> {
    let store = db.read().await;
    if !store.cafes.contains_key(&id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let mut seats: Vec<Seat> = store
        .seats
        .values()
        .filter(|seat| seat.cafe_id == id)
        .filter(|seat| filter.status.map_or(true, |status| seat.status == status))
        .cloned()
        .collect();
    seats.sort_by_key(|seat| seat.number);
    Ok(Json(seats))
}

async fn reserve_seat(
    State(db): State<Db>,
    Path((cafe_id, seat_id)): Path<(Uuid, Uuid)>,
    Json(input): Json<ReserveSeat>,
) -> Result<(StatusCode, Json<Session>), StatusCode> {
    let mut store = db.write().await;
    let seat = store.seats.get_mut(&seat_id).ok_or(StatusCode::NOT_FOUND)?;
    if seat.cafe_id != cafe_id {
        return Err(StatusCode::NOT_FOUND);
    }
    if seat.status != SeatStatus::Available {
        return Err(StatusCode::CONFLICT);
    }
    seat.status = SeatStatus::Occupied;

    let started_at = Utc::now();
    let session = Session {
        id: Uuid::new_v4(),
        user_id: input.user_id,
        cafe_id,
        seat_id,
        started_at,
        ends_at: started_at + Duration::minutes(i64::from(input.minutes)),
        ended_at: None,
    };
    store.sessions.insert(session.id, session.clone());
    Ok((StatusCode::CREATED, Json(session)))
}

async fn active_session(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, StatusCode> {
    let store = db.read().await;
    store
        .sessions
        .values()
        .find(|s| s.user_id == id && s.ended_at.is_none())
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn end_session(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, StatusCode> {
    let mut store = db.write().await;
    let session = store.sessions.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if session.ended_at.is_some() {
        return Err(StatusCode::CONFLICT);
    }
    session.ended_at = Some(Utc::now());
    let session = session.clone();
    if let Some(seat) = store.seats.get_mut(&session.seat_id) {
        seat.status = SeatStatus::Available;
    }
    Ok(Json(session))
}
