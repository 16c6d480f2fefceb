//! Moderation queue.
//!
//! Every handler here answers non-admins, including anonymous callers and
//! callers with a bad token, with [`not_found`], so the queue's existence is
//! never revealed.

use axum::{
    Json,
    extract::{Extension, Path, State},
    response::{IntoResponse, Response},
};
use keyrace_business::{
    FlagPolicy, ReviewAccess, ReviewActionResponse, ReviewDecision, ReviewItem,
    ReviewQueueResponse, User, review_access,
};

use super::storage_failure;
use crate::config::Config;
use crate::races::RaceStorage;
use crate::session::RequireAuth;
use crate::{AppState, not_found};

/// Resolves the caller to an administrator, or to the 404 they must see.
async fn require_admin<S>(storage: &S, auth: Option<RequireAuth>) -> Result<User, Response>
where
    S: RaceStorage,
{
    let Some(auth) = auth else {
        return Err(not_found());
    };

    let user = match storage.get_user(auth.user_id()).await {
        Ok(user) => user,
        Err(e) => {
            // Lookup failures look the same as a missing route.
            tracing::error!(error = %e, "Failed to look up reviewer");
            return Err(not_found());
        }
    };

    match (review_access(user.as_ref()), user) {
        (ReviewAccess::Granted, Some(user)) => Ok(user),
        _ => {
            tracing::debug!(user_id = auth.user_id(), "Review queue hidden from non-admin");
            Err(not_found())
        }
    }
}

/// `GET /v1/review/snippets`
pub async fn list<S>(
    State(state): State<AppState<S>>,
    Extension(config): Extension<Config>,
    auth: Option<RequireAuth>,
) -> Response
where
    S: RaceStorage,
{
    if let Err(response) = require_admin(&state.storage, auth).await {
        return response;
    }

    let policy = FlagPolicy::from_threshold(config.review_rating_threshold());
    match state.storage.list_flagged_snippets(policy).await {
        Ok(snippets) => Json(ReviewQueueResponse {
            items: snippets.iter().map(ReviewItem::from).collect(),
        })
        .into_response(),
        Err(e) => storage_failure("Failed to list snippets for review", &e),
    }
}

/// `POST /v1/review/snippets/{id}/{accept|reject}`
pub async fn decide<S>(
    State(state): State<AppState<S>>,
    Path((snippet_id, decision)): Path<(String, String)>,
    auth: Option<RequireAuth>,
) -> Response
where
    S: RaceStorage,
{
    let reviewer = match require_admin(&state.storage, auth).await {
        Ok(user) => user,
        Err(response) => return response,
    };
    let Ok(decision) = decision.parse::<ReviewDecision>() else {
        return not_found();
    };

    match state.storage.review_snippet(&snippet_id, decision).await {
        Ok(true) => {
            tracing::info!(
                reviewer = %reviewer.id,
                snippet_id = %snippet_id,
                decision = %decision,
                "Snippet reviewed"
            );
            Json(ReviewActionResponse {
                snippet_id,
                decision,
            })
            .into_response()
        }
        Ok(false) => not_found(),
        Err(e) => storage_failure("Failed to apply review decision", &e),
    }
}
