use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Cafe, Seat, SeatStatus, Session, User, ADMIN_EMAIL, ADMIN_PASSWORD};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- login ---

#[tokio::test]
async fn login_with_seeded_admin_succeeds() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/auth/login",
            &format!(r#"{{"email":"{ADMIN_EMAIL}","password":"{ADMIN_PASSWORD}"}}"#),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let user: User = body_json(resp).await;
    assert_eq!(user.email, ADMIN_EMAIL);
    assert_eq!(user.role, "admin");
    assert!(!user.id.is_nil());
}

#[tokio::test]
async fn login_with_wrong_password_returns_401() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/auth/login",
            &format!(r#"{{"email":"{ADMIN_EMAIL}","password":"nope"}}"#),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_missing_password_field_returns_422() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/auth/login",
            &format!(r#"{{"email":"{ADMIN_EMAIL}"}}"#),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- cafes ---

#[tokio::test]
async fn list_cafes_empty() {
    let app = app();
    let resp = app.oneshot(get_request("/cafes")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let cafes: Vec<Cafe> = body_json(resp).await;
    assert!(cafes.is_empty());
}

#[tokio::test]
async fn register_cafe_returns_201() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/cafes",
            r#"{"name":"Dawn Study","address":"12 Lakeview Rd","seats_total":4}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let cafe: Cafe = body_json(resp).await;
    assert_eq!(cafe.name, "Dawn Study");
    assert_eq!(cafe.seats_total, 4);
}

#[tokio::test]
async fn get_cafe_not_found() {
    let app = app();
    let resp = app
        .oneshot(get_request("/cafes/00000000-0000-0000-0000-000000000000"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_cafe_bad_uuid_returns_400() {
    let app = app();
    let resp = app.oneshot(get_request("/cafes/not-a-uuid")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_seats_of_unknown_cafe_returns_404() {
    let app = app();
    let resp = app
        .oneshot(get_request(
            "/cafes/00000000-0000-0000-0000-000000000000/seats",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- reservations ---

#[tokio::test]
async fn reserve_unknown_seat_returns_404() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/cafes/00000000-0000-0000-0000-000000000000/seats/00000000-0000-0000-0000-000000000000/reserve",
            r#"{"user_id":"00000000-0000-0000-0000-000000000001","minutes":60}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn end_unknown_session_returns_404() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/sessions/00000000-0000-0000-0000-000000000000/end",
            "",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn active_session_for_idle_user_returns_404() {
    let app = app();
    let resp = app
        .oneshot(get_request(
            "/users/00000000-0000-0000-0000-000000000001/session",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full reservation lifecycle ---

#[tokio::test]
async fn reservation_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // register a cafe with two seats
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/cafes",
            r#"{"name":"Dawn Study","address":"12 Lakeview Rd","seats_total":2}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let cafe: Cafe = body_json(resp).await;

    // seats are numbered from 1 and all available
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!("/cafes/{}/seats", cafe.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let seats: Vec<Seat> = body_json(resp).await;
    assert_eq!(seats.len(), 2);
    assert_eq!(seats[0].number, 1);
    assert!(seats.iter().all(|s| s.status == SeatStatus::Available));
    let seat = seats[0].clone();

    // reserve the first seat
    let user_id = "00000000-0000-0000-0000-000000000001";
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            &format!("/cafes/{}/seats/{}/reserve", cafe.id, seat.id),
            &format!(r#"{{"user_id":"{user_id}","minutes":90}}"#),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let session: Session = body_json(resp).await;
    assert_eq!(session.seat_id, seat.id);
    assert!(session.ended_at.is_none());
    assert!(session.ends_at > session.started_at);

    // the seat is now occupied and filtered out of available listings
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!(
            "/cafes/{}/seats?status=available",
            cafe.id
        )))
        .await
        .unwrap();
    let available: Vec<Seat> = body_json(resp).await;
    assert_eq!(available.len(), 1);
    assert_ne!(available[0].id, seat.id);

    // reserving the same seat again conflicts
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            &format!("/cafes/{}/seats/{}/reserve", cafe.id, seat.id),
            &format!(r#"{{"user_id":"{user_id}","minutes":30}}"#),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // the user has an active session
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!("/users/{user_id}/session")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let active: Session = body_json(resp).await;
    assert_eq!(active.id, session.id);

    // end the session; the seat frees up
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            &format!("/sessions/{}/end", session.id),
            "",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let ended: Session = body_json(resp).await;
    assert!(ended.ended_at.is_some());

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!(
            "/cafes/{}/seats?status=available",
            cafe.id
        )))
        .await
        .unwrap();
    let available: Vec<Seat> = body_json(resp).await;
    assert_eq!(available.len(), 2);

    // no more active session; ending twice conflicts
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!("/users/{user_id}/session")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            &format!("/sessions/{}/end", session.id),
            "",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // update the cafe partially; address unchanged
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PUT",
            &format!("/cafes/{}", cafe.id),
            r#"{"name":"Dusk Study"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Cafe = body_json(resp).await;
    assert_eq!(updated.name, "Dusk Study");
    assert_eq!(updated.address, "12 Lakeview Rd");

    // delete the cafe; its seats disappear with it
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("DELETE")
                .uri(format!("/cafes/{}", cafe.id))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let body = body_bytes(resp).await;
    assert!(body.is_empty());

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request(&format!("/cafes/{}/seats", cafe.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
