//! Dispatch boundary: one domain operation, one transport call, one Outcome.
//!
//! # Design
//! `CafeRepository` exposes one async method per backend operation. Each
//! invocation builds the request, executes it exactly once on the injected
//! transport, parses the response, and normalizes every failure (transport,
//! non-success status, encode, decode) into `Outcome::Err`. No error escapes
//! as a panic or a raw `Err`; `Outcome` is the only return channel, and the
//! boundary never resolves to `Outcome::Pending`.
//!
//! The repository holds no retry, cache, or rate-limiting behavior and
//! spawns no background work; its futures run wherever the caller awaits
//! them. Collaborators arrive by constructor injection from the composition
//! root.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use crate::client::CafeClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::outcome::Outcome;
use crate::transport::Transport;
use crate::types::{
    Cafe, CreateCafe, Credentials, ReserveSeat, Seat, SeatStatus, Session, UpdateCafe,
    UserSummary,
};

/// Repository mapping domain operations one-to-one onto transport calls.
pub struct CafeRepository {
    client: CafeClient,
    transport: Arc<dyn Transport>,
}

impl CafeRepository {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            client: CafeClient::new(base_url),
            transport,
        }
    }

    // --- auth ---

    pub async fn login(&self, credentials: &Credentials) -> Outcome<UserSummary> {
        let request = match self.client.build_login(credentials) {
            Ok(request) => request,
            Err(err) => return fail("login", err),
        };
        self.dispatch("login", request, |r| self.client.parse_login(r))
            .await
    }

    // --- cafes ---

    pub async fn list_cafes(&self) -> Outcome<Vec<Cafe>> {
        let request = self.client.build_list_cafes();
        self.dispatch("list_cafes", request, |r| self.client.parse_list_cafes(r))
            .await
    }

    pub async fn get_cafe(&self, id: Uuid) -> Outcome<Cafe> {
        let request = self.client.build_get_cafe(id);
        self.dispatch("get_cafe", request, |r| self.client.parse_get_cafe(r))
            .await
    }

    pub async fn register_cafe(&self, input: &CreateCafe) -> Outcome<Cafe> {
        let request = match self.client.build_register_cafe(input) {
            Ok(request) => request,
            Err(err) => return fail("register_cafe", err),
        };
        self.dispatch("register_cafe", request, |r| {
            self.client.parse_register_cafe(r)
        })
        .await
    }

    pub async fn update_cafe(&self, id: Uuid, input: &UpdateCafe) -> Outcome<Cafe> {
        let request = match self.client.build_update_cafe(id, input) {
            Ok(request) => request,
            Err(err) => return fail("update_cafe", err),
        };
        self.dispatch("update_cafe", request, |r| self.client.parse_update_cafe(r))
            .await
    }

    pub async fn delete_cafe(&self, id: Uuid) -> Outcome<()> {
        let request = self.client.build_delete_cafe(id);
        self.dispatch("delete_cafe", request, |r| self.client.parse_delete_cafe(r))
            .await
    }

    // --- seats ---

    pub async fn list_seats(
        &self,
        cafe_id: Uuid,
        status: Option<SeatStatus>,
    ) -> Outcome<Vec<Seat>> {
        let request = self.client.build_list_seats(cafe_id, status);
        self.dispatch("list_seats", request, |r| self.client.parse_list_seats(r))
            .await
    }

    pub async fn reserve_seat(
        &self,
        cafe_id: Uuid,
        seat_id: Uuid,
        input: &ReserveSeat,
    ) -> Outcome<Session> {
        let request = match self.client.build_reserve_seat(cafe_id, seat_id, input) {
            Ok(request) => request,
            Err(err) => return fail("reserve_seat", err),
        };
        self.dispatch("reserve_seat", request, |r| {
            self.client.parse_reserve_seat(r)
        })
        .await
    }

    // --- sessions ---

    pub async fn active_session(&self, user_id: Uuid) -> Outcome<Session> {
        let request = self.client.build_active_session(user_id);
        self.dispatch("active_session", request, |r| {
            self.client.parse_active_session(r)
        })
        .await
    }

    pub async fn end_session(&self, session_id: Uuid) -> Outcome<Session> {
        let request = self.client.build_end_session(session_id);
        self.dispatch("end_session", request, |r| self.client.parse_end_session(r))
            .await
    }

    /// Execute one transport call and parse its response. All failures are
    /// normalized here; this is the only place an `Outcome` is produced from
    /// a live call, and it never yields `Pending`.
    async fn dispatch<T>(
        &self,
        operation: &'static str,
        request: HttpRequest,
        parse: impl FnOnce(HttpResponse) -> Result<T, ApiError>,
    ) -> Outcome<T> {
        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(err) => return fail(operation, err),
        };
        match parse(response) {
            Ok(payload) => Outcome::Ok(payload),
            Err(err) => fail(operation, err),
        }
    }
}

fn fail<T>(operation: &'static str, cause: ApiError) -> Outcome<T> {
    warn!(operation, error = %cause, "api call failed");
    Outcome::err(cause)
}
