//! Paginated result tables.
//!
//! Both endpoints read `page`, `per_page`, and `sort` with the same rules the
//! front end uses, so a URL the browser shows and the rows it receives always
//! agree.

use axum::{
    Json,
    extract::{RawQuery, State},
    response::{IntoResponse, Response},
};
use keyrace_business::table::{
    RECENT_RACES_COLUMNS, RECENT_RACES_DEFAULTS, RESULTS_COLUMNS, RESULTS_DEFAULTS,
    TableDefaults, TableSchema, page_count,
};
use keyrace_business::{QueryParams, ResultsPageResponse, TableViewState};

use super::storage_failure;
use crate::AppState;
use crate::races::{RaceStorage, ResultsPage};
use crate::session::RequireAuth;

fn view_state(query: Option<&str>, schema: &TableSchema, defaults: &TableDefaults) -> TableViewState {
    let params = QueryParams::parse(query.unwrap_or_default());
    TableViewState::from_query(&params, schema, defaults)
}

fn page_response<T>(page: ResultsPage<T>, per_page: u32) -> ResultsPageResponse<T> {
    ResultsPageResponse {
        rows: page.rows,
        page_count: page_count(page.total, per_page),
    }
}

/// `GET /v1/results`
pub async fn list<S>(State(state): State<AppState<S>>, RawQuery(query): RawQuery) -> Response
where
    S: RaceStorage,
{
    let view = view_state(query.as_deref(), &RESULTS_COLUMNS, &RESULTS_DEFAULTS);
    let per_page = view.per_page();
    tracing::debug!(page = view.page(), per_page, sort = %view.sort, "Listing results");

    match state.storage.list_results(view.into()).await {
        Ok(page) => Json(page_response(page, per_page)).into_response(),
        Err(e) => storage_failure("Failed to list results", &e),
    }
}

/// `GET /v1/me/results`
pub async fn list_mine<S>(
    State(state): State<AppState<S>>,
    auth: RequireAuth,
    RawQuery(query): RawQuery,
) -> Response
where
    S: RaceStorage,
{
    let view = view_state(
        query.as_deref(),
        &RECENT_RACES_COLUMNS,
        &RECENT_RACES_DEFAULTS,
    );
    let per_page = view.per_page();

    match state
        .storage
        .list_user_results(auth.user_id(), view.into())
        .await
    {
        Ok(page) => Json(page_response(page, per_page)).into_response(),
        Err(e) => storage_failure("Failed to list user results", &e),
    }
}
