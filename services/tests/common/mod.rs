//! Shared fixtures for integration tests.

#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use chrono::{TimeZone, Utc};
use keyrace_business::{RaceResult, Role, Snippet, User};
use keyrace_services::{
    config::Config, races::MockRaceStorage, routes, session::issue_session_token,
};
use tower::ServiceExt;

pub const ADMIN_ID: &str = "user-admin";
pub const RACER_ID: &str = "user-racer";
pub const OTHER_ID: &str = "user-other";

pub fn user(id: &str, name: &str, role: Role) -> User {
    User {
        id: id.to_owned(),
        name: name.to_owned(),
        image: Some(format!("https://avatars.test/{id}.png")),
        role,
    }
}

/// A finished race created `minute` minutes after a fixed epoch.
pub fn race(id: &str, user_id: &str, cpm: i32, taken_time: f64, minute: u32) -> RaceResult {
    RaceResult {
        id: id.to_owned(),
        user_id: user_id.to_owned(),
        accuracy: 0.9,
        cpm,
        error_count: 2,
        taken_time,
        created_at: Utc
            .with_ymd_and_hms(2024, 5, 1, 12, minute, 0)
            .single()
            .expect("valid timestamp"),
        snippet_id: "snippet-1".to_owned(),
    }
}

pub fn snippet(id: &str, code: &str, rating: i32) -> Snippet {
    Snippet {
        id: id.to_owned(),
        code: code.to_owned(),
        rating,
        user_id: OTHER_ID.to_owned(),
        created_at: Utc
            .with_ymd_and_hms(2024, 4, 1, 0, 0, 0)
            .single()
            .expect("valid timestamp"),
    }
}

/// An admin, a racer with three results, another racer with one, and two
/// snippets.
pub fn seeded_storage() -> MockRaceStorage {
    MockRaceStorage::new()
        .with_user(user(ADMIN_ID, "Grace", Role::Admin))
        .with_user(user(RACER_ID, "Ada", Role::User))
        .with_user(user(OTHER_ID, "Linus", Role::User))
        .with_result(race("result-aaaa-0001", RACER_ID, 250, 40.0, 1))
        .with_result(race("result-bbbb-0002", RACER_ID, 310, 35.5, 2))
        .with_result(race("result-cccc-0003", RACER_ID, 180, 52.0, 3))
        .with_result(race("result-dddd-0004", OTHER_ID, 400, 20.0, 4))
        .with_snippet(snippet("snippet-1", "fn main() {}", -3))
        .with_snippet(snippet("snippet-2", "let x = 1;", 4))
}

pub fn test_config() -> Config {
    Config::new_for_test()
}

pub fn token_for(user_id: &str) -> String {
    issue_session_token(user_id, test_config().jwt_secret()).expect("token signs")
}

pub fn app(storage: MockRaceStorage) -> Router {
    routes(storage, test_config())
}

/// Sends one request and returns the status and raw body.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
) -> (StatusCode, Vec<u8>) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header("authorization", format!("Bearer {token}"));
    }

    let response = app
        .oneshot(request.body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, body.to_vec())
}

pub async fn get_json(app: Router, uri: &str, token: Option<&str>) -> serde_json::Value {
    let (status, body) = send(app, Method::GET, uri, token).await;
    assert_eq!(status, StatusCode::OK, "GET {uri}");
    serde_json::from_slice(&body).expect("JSON body")
}
