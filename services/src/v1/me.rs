//! `/v1/me`: the signed-in account.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use keyrace_business::{DeleteAccountResponse, MeResponse};

use super::{error_response, storage_failure};
use crate::AppState;
use crate::races::RaceStorage;
use crate::session::RequireAuth;

fn unknown_user() -> Response {
    error_response(
        StatusCode::UNAUTHORIZED,
        "unknown_user",
        "Session user no longer exists",
    )
}

/// `GET /v1/me`
pub async fn get<S>(State(state): State<AppState<S>>, auth: RequireAuth) -> Response
where
    S: RaceStorage,
{
    match state.storage.get_user(auth.user_id()).await {
        Ok(Some(user)) => Json::<MeResponse>(user).into_response(),
        Ok(None) => unknown_user(),
        Err(e) => storage_failure("Failed to get user", &e),
    }
}

/// `DELETE /v1/me`: removes the account and everything it owns.
pub async fn delete<S>(State(state): State<AppState<S>>, auth: RequireAuth) -> Response
where
    S: RaceStorage,
{
    let user_id = auth.user_id();
    match state.storage.delete_user(user_id).await {
        Ok(true) => {
            tracing::info!(user_id, "Account deleted");
            Json(DeleteAccountResponse {
                user_id: user_id.to_owned(),
                deleted: true,
            })
            .into_response()
        }
        Ok(false) => unknown_user(),
        Err(e) => storage_failure("Failed to delete account", &e),
    }
}
