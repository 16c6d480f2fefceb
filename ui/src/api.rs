//! Calls to the Keyrace API.
//!
//! Requests run on `ehttp`'s executor. Each one reports back by sending an
//! [`ApiEvent`] over a `flume` channel and asking egui for a repaint; the
//! frame loop drains the channel in [`State::poll_events`].
//!
//! [`State::poll_events`]: crate::state::State::poll_events

use egui::Context;
use flume::Sender;
use keyrace_business::{
    ApiError, BusinessConfig, DeleteAccountResponse, MeResponse, QueryParams, RaceResult,
    ResultWithUser, ResultsPageResponse, ReviewActionResponse, ReviewDecision,
    ReviewQueueResponse, api,
};
use serde::de::DeserializeOwned;

/// A finished request.
#[derive(Debug)]
pub enum ApiEvent {
    Results {
        request: u64,
        result: Result<ResultsPageResponse<ResultWithUser>, ApiError>,
    },
    MyResults {
        request: u64,
        result: Result<ResultsPageResponse<RaceResult>, ApiError>,
    },
    Me(Result<MeResponse, ApiError>),
    ReviewQueue(Result<ReviewQueueResponse, ApiError>),
    ReviewDecision {
        snippet_id: String,
        result: Result<ReviewActionResponse, ApiError>,
    },
    AccountDeleted(Result<DeleteAccountResponse, ApiError>),
}

fn request(method: &str, url: String, config: &BusinessConfig) -> ehttp::Request {
    let mut request = ehttp::Request::get(url);
    method.clone_into(&mut request.method);
    if let Some(authorization) = config.authorization() {
        request
            .headers
            .insert("Authorization".to_owned(), authorization);
    }
    request
}

fn fetch_json<T, F>(request: ehttp::Request, ctx: Context, on_done: F)
where
    T: DeserializeOwned,
    F: FnOnce(Result<T, ApiError>) + Send + 'static,
{
    let label = format!("{} {}", request.method, request.url);
    ehttp::fetch(request, move |result| {
        let outcome = match result {
            Ok(response) if response.ok => serde_json::from_slice::<T>(&response.bytes)
                .map_err(|err| ApiError::Decode(err.to_string())),
            Ok(response) => Err(ApiError::Status(response.status)),
            Err(err) => Err(ApiError::Network(err)),
        };
        match &outcome {
            Ok(_) => log::debug!("{label} ok"),
            Err(err) => log::warn!("{label} failed: {err}"),
        }
        on_done(outcome);
        ctx.request_repaint();
    });
}

fn deliver(sender: &Sender<ApiEvent>, event: ApiEvent) {
    if sender.send(event).is_err() {
        log::debug!("API event dropped: receiver is gone");
    }
}

/// `GET /v1/results`, forwarding the page's query string.
pub fn fetch_results(
    config: &BusinessConfig,
    query: &QueryParams,
    request_id: u64,
    sender: Sender<ApiEvent>,
    ctx: Context,
) {
    let url = api::results_url(&config.api_url(), query);
    fetch_json(request("GET", url, config), ctx, move |result| {
        deliver(
            &sender,
            ApiEvent::Results {
                request: request_id,
                result,
            },
        );
    });
}

/// `GET /v1/me/results`, forwarding the page's query string.
pub fn fetch_my_results(
    config: &BusinessConfig,
    query: &QueryParams,
    request_id: u64,
    sender: Sender<ApiEvent>,
    ctx: Context,
) {
    let url = api::my_results_url(&config.api_url(), query);
    fetch_json(request("GET", url, config), ctx, move |result| {
        deliver(
            &sender,
            ApiEvent::MyResults {
                request: request_id,
                result,
            },
        );
    });
}

pub fn fetch_me(config: &BusinessConfig, sender: Sender<ApiEvent>, ctx: Context) {
    let url = api::me_url(&config.api_url());
    fetch_json(request("GET", url, config), ctx, move |result| {
        deliver(&sender, ApiEvent::Me(result));
    });
}

pub fn delete_account(config: &BusinessConfig, sender: Sender<ApiEvent>, ctx: Context) {
    let url = api::me_url(&config.api_url());
    fetch_json(request("DELETE", url, config), ctx, move |result| {
        deliver(&sender, ApiEvent::AccountDeleted(result));
    });
}

pub fn fetch_review_queue(config: &BusinessConfig, sender: Sender<ApiEvent>, ctx: Context) {
    let url = api::review_queue_url(&config.api_url());
    fetch_json(request("GET", url, config), ctx, move |result| {
        deliver(&sender, ApiEvent::ReviewQueue(result));
    });
}

pub fn review_snippet(
    config: &BusinessConfig,
    snippet_id: &str,
    decision: ReviewDecision,
    sender: Sender<ApiEvent>,
    ctx: Context,
) {
    let url = api::review_action_url(&config.api_url(), snippet_id, decision);
    let snippet_id = snippet_id.to_owned();
    fetch_json(request("POST", url, config), ctx, move |result| {
        deliver(&sender, ApiEvent::ReviewDecision { snippet_id, result });
    });
}
