//! Integration tests for the public results page.
//!
//! Tests cover:
//! - First load with the default view state
//! - Page navigation through the footer buttons
//! - A failed load rendering the error label and the empty row
//!
//! Clicks inside egui_extras `TableBuilder` rows do not reach the widgets in
//! kittest, so interactions here go through the footer, which is drawn
//! below the table.

mod common;

use common::{TestCtx, page_json, result_with_user_json, user_json, wait_for_label, wait_until};
use keyrace_business::Router;
use keyrace_ui::widgets::NO_RESULTS;
use kittest::Queryable;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn results_server() -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/results"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![result_with_user_json(
                "result-3",
                user_json("user-3", "Grace", "USER"),
                52.0,
            )],
            2,
        )))
        .with_priority(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/results"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![
                result_with_user_json("result-1", user_json("user-1", "Ada", "USER"), 20.0),
                result_with_user_json("result-2", user_json("user-2", "Linus", "USER"), 35.5),
            ],
            2,
        )))
        .with_priority(2)
        .mount(&mock_server)
        .await;

    mock_server
}

#[tokio::test]
async fn first_page_loads_on_open() {
    let mut ctx = TestCtx::anonymous(results_server().await, "/results");
    let harness = ctx.harness_mut();

    assert!(
        wait_for_label(harness, "Page 1 of 2").await,
        "first page should load"
    );
    for label in ["Ada", "Linus", "20s", "35.5s", "Taken time", "Not signed in"] {
        assert!(harness.query_by_label(label).is_some(), "{label} should be shown");
    }
}

#[tokio::test]
async fn next_button_navigates_and_loads_the_page() {
    let mut ctx = TestCtx::anonymous(results_server().await, "/results");
    let harness = ctx.harness_mut();
    assert!(wait_for_label(harness, "Page 1 of 2").await);

    let next = harness.query_by_label("Next");
    assert!(next.is_some(), "Next button should be present");
    next.unwrap().click();
    harness.step();

    let router = &harness.state().state().router;
    assert_eq!(router.pathname(), "/results");
    assert_eq!(router.search_params().get("page"), Some("2"));
    assert_eq!(router.search_params().get("per_page"), Some("5"));
    assert_eq!(router.search_params().get("sort"), Some("takenTime.asc"));

    assert!(
        wait_for_label(harness, "Page 2 of 2").await,
        "second page should load"
    );
    assert!(harness.query_by_label("Grace").is_some(), "row from page 2");
    assert!(harness.query_by_label("Ada").is_none(), "rows from page 1 are gone");
}

#[tokio::test]
async fn failed_load_shows_error_and_empty_table() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/results"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let mut ctx = TestCtx::anonymous(mock_server, "/results");
    let harness = ctx.harness_mut();

    assert!(
        wait_for_label(harness, "Error: API returned status: 500").await,
        "error label should be shown"
    );
    assert!(harness.query_by_label(NO_RESULTS).is_some());
    assert!(
        wait_until(harness, |state| !state.results.adapter.is_pending()).await,
        "table returns to idle"
    );
}

#[tokio::test]
async fn url_state_is_forwarded_to_the_api() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/results"))
        .and(query_param("page", "3"))
        .and(query_param("per_page", "15"))
        .and(query_param("sort", "takenTime.desc"))
        .and(query_param("ref", "home"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(Vec::new(), 3)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut ctx = TestCtx::anonymous(
        mock_server,
        "/results?ref=home&page=3&per_page=15&sort=takenTime.desc",
    );
    let harness = ctx.harness_mut();

    assert!(wait_for_label(harness, "Page 3 of 3").await);
    assert!(harness.query_by_label(NO_RESULTS).is_some());
}
