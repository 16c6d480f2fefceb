//! Wire types and endpoint paths shared by the service and its clients.

use serde::{Deserialize, Serialize};

use crate::models::User;
use crate::query::QueryParams;
use crate::review::{ReviewDecision, ReviewItem};

/// A page of table rows plus the total page count at the requested size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsPageResponse<T> {
    pub rows: Vec<T>,
    pub page_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewQueueResponse {
    pub items: Vec<ReviewItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewActionResponse {
    pub snippet_id: String,
    pub decision: ReviewDecision,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAccountResponse {
    pub user_id: String,
    pub deleted: bool,
}

/// `GET /v1/me`
pub type MeResponse = User;

/// Error body returned by API endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

/// Failure of a client-side API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("{0}")]
    Network(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

pub const RESULTS_PATH: &str = "/v1/results";
pub const ME_PATH: &str = "/v1/me";
pub const MY_RESULTS_PATH: &str = "/v1/me/results";
pub const REVIEW_SNIPPETS_PATH: &str = "/v1/review/snippets";

fn with_query(api_url: &str, path: &str, query: &QueryParams) -> String {
    if query.is_empty() {
        format!("{api_url}{path}")
    } else {
        format!("{api_url}{path}?{query}")
    }
}

/// Public results, forwarding the page's query string as-is.
pub fn results_url(api_url: &str, query: &QueryParams) -> String {
    with_query(api_url, RESULTS_PATH, query)
}

pub fn my_results_url(api_url: &str, query: &QueryParams) -> String {
    with_query(api_url, MY_RESULTS_PATH, query)
}

pub fn me_url(api_url: &str) -> String {
    format!("{api_url}{ME_PATH}")
}

pub fn review_queue_url(api_url: &str) -> String {
    format!("{api_url}{REVIEW_SNIPPETS_PATH}")
}

pub fn review_action_url(api_url: &str, snippet_id: &str, decision: ReviewDecision) -> String {
    format!(
        "{api_url}{REVIEW_SNIPPETS_PATH}/{}/{decision}",
        urlencoding::encode(snippet_id)
    )
}
