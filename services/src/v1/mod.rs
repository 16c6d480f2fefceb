//! Versioned API.
//!
//! - `results`: public and per-user result tables
//! - `me`: the signed-in account
//! - `review`: the moderation queue, hidden from non-admins

pub mod me;
pub mod results;
pub mod review;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use keyrace_business::ErrorResponse;

use crate::races::{RaceStorage, StorageError};
use crate::{AppState, not_found};

pub fn routes<S>() -> Router<AppState<S>>
where
    S: RaceStorage,
{
    Router::new()
        .route("/results", get(results::list::<S>))
        .route("/me", get(me::get::<S>).delete(me::delete::<S>))
        .route("/me/results", get(results::list_mine::<S>))
        // Review routes answer every other method with the same 404 as an
        // unknown path.
        .route(
            "/review/snippets",
            get(review::list::<S>).fallback(not_found_handler),
        )
        .route(
            "/review/snippets/{id}/{decision}",
            post(review::decide::<S>).fallback(not_found_handler),
        )
}

async fn not_found_handler() -> Response {
    not_found()
}

pub(crate) fn error_response(
    status: StatusCode,
    error: &str,
    message: impl Into<String>,
) -> Response {
    (status, Json(ErrorResponse::new(error, message))).into_response()
}

/// Logs a storage failure and answers 500.
pub(crate) fn storage_failure(context: &str, err: &StorageError) -> Response {
    tracing::error!(error = %err, "{context}");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", context)
}
