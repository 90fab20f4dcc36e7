//! Stateless HTTP request builder and response parser for the study-cafe API.
//!
//! # Design
//! `CafeClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! A `Transport` executes the actual round-trip between the two, keeping
//! request construction and response interpretation deterministic and free
//! of I/O.

use uuid::Uuid;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    Cafe, CreateCafe, Credentials, ReserveSeat, Seat, SeatStatus, Session, UpdateCafe,
    UserSummary,
};

/// Stateless client for the study-cafe API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The dispatch boundary (`CafeRepository`) executes
/// the HTTP round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct CafeClient {
    base_url: String,
}

impl CafeClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn get(&self, path: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path,
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    fn json_request<T: serde::Serialize>(
        &self,
        method: HttpMethod,
        path: String,
        payload: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path,
            query: Vec::new(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    // --- auth ---

    pub fn build_login(&self, credentials: &Credentials) -> Result<HttpRequest, ApiError> {
        self.json_request(
            HttpMethod::Post,
            format!("{}/auth/login", self.base_url),
            credentials,
        )
    }

    pub fn parse_login(&self, response: HttpResponse) -> Result<UserSummary, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    // --- cafes ---

    pub fn build_list_cafes(&self) -> HttpRequest {
        self.get(format!("{}/cafes", self.base_url))
    }

    pub fn parse_list_cafes(&self, response: HttpResponse) -> Result<Vec<Cafe>, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn build_get_cafe(&self, id: Uuid) -> HttpRequest {
        self.get(format!("{}/cafes/{id}", self.base_url))
    }

    pub fn parse_get_cafe(&self, response: HttpResponse) -> Result<Cafe, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn build_register_cafe(&self, input: &CreateCafe) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, format!("{}/cafes", self.base_url), input)
    }

    pub fn parse_register_cafe(&self, response: HttpResponse) -> Result<Cafe, ApiError> {
        check_status(&response, 201)?;
        decode(&response.body)
    }

    pub fn build_update_cafe(&self, id: Uuid, input: &UpdateCafe) -> Result<HttpRequest, ApiError> {
        self.json_request(
            HttpMethod::Put,
            format!("{}/cafes/{id}", self.base_url),
            input,
        )
    }

    pub fn parse_update_cafe(&self, response: HttpResponse) -> Result<Cafe, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn build_delete_cafe(&self, id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/cafes/{id}", self.base_url),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_delete_cafe(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)?;
        Ok(())
    }

    // --- seats ---

    pub fn build_list_seats(&self, cafe_id: Uuid, status: Option<SeatStatus>) -> HttpRequest {
        let mut request = self.get(format!("{}/cafes/{cafe_id}/seats", self.base_url));
        if let Some(status) = status {
            request.query.push(("status".to_string(), status.as_query().to_string()));
        }
        request
    }

    pub fn parse_list_seats(&self, response: HttpResponse) -> Result<Vec<Seat>, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn build_reserve_seat(
        &self,
        cafe_id: Uuid,
        seat_id: Uuid,
        input: &ReserveSeat,
    ) -> Result<HttpRequest, ApiError> {
        self.json_request(
            HttpMethod::Post,
            format!("{}/cafes/{cafe_id}/seats/{seat_id}/reserve", self.base_url),
            input,
        )
    }

    pub fn parse_reserve_seat(&self, response: HttpResponse) -> Result<Session, ApiError> {
        check_status(&response, 201)?;
        decode(&response.body)
    }

    // --- sessions ---

    pub fn build_active_session(&self, user_id: Uuid) -> HttpRequest {
        self.get(format!("{}/users/{user_id}/session", self.base_url))
    }

    pub fn parse_active_session(&self, response: HttpResponse) -> Result<Session, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn build_end_session(&self, session_id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/sessions/{session_id}/end", self.base_url),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_end_session(&self, response: HttpResponse) -> Result<Session, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    match response.status {
        401 => Err(ApiError::Unauthorized),
        404 => Err(ApiError::NotFound),
        409 => Err(ApiError::Conflict),
        status => Err(ApiError::Http {
            status,
            body: response.body.clone(),
        }),
    }
}
