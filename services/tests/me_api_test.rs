//! Integration tests for `/v1/me`.

mod common;

use axum::http::{Method, StatusCode};
use common::{RACER_ID, app, get_json, seeded_storage, send, token_for};

#[tokio::test]
async fn me_returns_the_session_user() {
    let body = get_json(app(seeded_storage()), "/api/v1/me", Some(&token_for(RACER_ID))).await;

    assert_eq!(body["id"], RACER_ID);
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["role"], "USER");
}

#[tokio::test]
async fn delete_account_removes_user_and_results() {
    let storage = seeded_storage();
    let token = token_for(RACER_ID);

    let (status, body) = send(
        app(storage.clone()),
        Method::DELETE,
        "/api/v1/me",
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(&body).expect("JSON body");
    assert_eq!(body["userId"], RACER_ID);
    assert_eq!(body["deleted"], true);

    assert_eq!(storage.user_count(), 2);
    assert_eq!(storage.result_count(), 1);

    // The token outlives the account.
    let (status, _) = send(app(storage), Method::GET, "/api/v1/me", Some(&token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn delete_account_requires_a_session() {
    let storage = seeded_storage();
    let (status, _) = send(app(storage.clone()), Method::DELETE, "/api/v1/me", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(storage.user_count(), 3);
}
