//! Integration tests for the profile menu and the account deletion dialog.
//!
//! egui menus pop up in a separate area that kittest cannot always reach, so
//! choosing the menu entry goes through the app state, the same way the
//! button's click handler does. Everything after that is driven through the
//! dialog's buttons.

mod common;

use common::{TOKEN, TestCtx, mount_me, user_json, wait_for_label, wait_until};
use keyrace_business::{DeleteDialog, Router};
use keyrace_ui::state::Session;
use keyrace_ui::widgets::DELETE_DIALOG_TITLE;
use kittest::Queryable;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn signed_in_server() -> MockServer {
    let mock_server = MockServer::start().await;
    mount_me(&mock_server, user_json("user-ada-0001", "Ada", "USER")).await;
    mock_server
}

/// Frames for a freshly opened window to finish fading in. Buttons ignore
/// clicks until it has.
const WINDOW_SETTLE_FRAMES: usize = 30;

fn open_dialog(ctx: &mut TestCtx<'_>) {
    let harness = ctx.harness_mut();
    if let Some(menu) = &mut harness.state_mut().state_mut().profile_menu {
        menu.select_delete_account();
    }
    for _ in 0..WINDOW_SETTLE_FRAMES {
        harness.step();
    }
}

#[tokio::test]
async fn dialog_is_not_built_before_the_menu_entry_is_chosen() {
    let mut ctx = TestCtx::signed_in(signed_in_server().await, "/dashboard");
    let harness = ctx.harness_mut();

    assert!(
        wait_for_label(harness, "👤 Ada").await,
        "profile menu button should appear"
    );
    assert!(
        harness.query_by_label(DELETE_DIALOG_TITLE).is_none(),
        "dialog should not be shown yet"
    );
    let menu = harness.state().state().profile_menu.as_ref();
    assert!(menu.is_some_and(|menu| !menu.is_dialog_loaded()));
}

#[tokio::test]
async fn cancel_closes_the_dialog() {
    let mut ctx = TestCtx::signed_in(signed_in_server().await, "/dashboard");
    assert!(wait_for_label(ctx.harness_mut(), "👤 Ada").await);

    open_dialog(&mut ctx);
    let harness = ctx.harness_mut();
    assert!(
        harness.query_by_label(DELETE_DIALOG_TITLE).is_some(),
        "dialog should open"
    );
    assert!(harness.query_by_label("User id: user-ada-0001").is_some());

    let cancel = harness.query_by_label("Cancel");
    assert!(cancel.is_some(), "Cancel button should be present");
    cancel.unwrap().click();
    harness.step();
    harness.step();

    assert!(
        harness.query_by_label(DELETE_DIALOG_TITLE).is_none(),
        "dialog should close"
    );
    let menu = harness.state().state().profile_menu.as_ref();
    assert!(menu.is_some_and(|menu| menu.dialog() == DeleteDialog::Hidden));
    assert!(menu.is_some_and(|menu| menu.is_dialog_loaded()));
}

#[tokio::test]
async fn delete_signs_out_and_returns_to_results() {
    let mock_server = signed_in_server().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/me"))
        .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "userId": "user-ada-0001",
            "deleted": true,
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/results"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::page_json(Vec::new(), 1)))
        .mount(&mock_server)
        .await;

    let mut ctx = TestCtx::signed_in(mock_server, "/dashboard");
    assert!(wait_for_label(ctx.harness_mut(), "👤 Ada").await);

    open_dialog(&mut ctx);
    let harness = ctx.harness_mut();
    let delete = harness.query_by_label("Delete");
    assert!(delete.is_some(), "Delete button should be present");
    delete.unwrap().click();
    harness.step();

    assert!(
        wait_until(harness, |state| state.session == Session::Anonymous).await,
        "account deletion should sign the user out"
    );
    let state = harness.state().state();
    assert!(state.profile_menu.is_none());
    assert!(state.config.session_token().is_none());
    assert_eq!(state.router.pathname(), "/results");

    assert!(wait_for_label(harness, "Not signed in").await);
    assert!(harness.query_by_label(DELETE_DIALOG_TITLE).is_none());
}

#[tokio::test]
async fn failed_delete_keeps_the_dialog_open_with_the_error() {
    let mock_server = signed_in_server().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/me"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let mut ctx = TestCtx::signed_in(mock_server, "/dashboard");
    assert!(wait_for_label(ctx.harness_mut(), "👤 Ada").await);

    open_dialog(&mut ctx);
    let harness = ctx.harness_mut();
    let delete = harness.query_by_label("Delete");
    assert!(delete.is_some(), "Delete button should be present");
    delete.unwrap().click();
    harness.step();

    assert!(
        wait_for_label(harness, "Error: API returned status: 500").await,
        "error should be shown in the dialog"
    );
    let state = harness.state().state();
    assert!(matches!(state.session, Session::SignedIn(_)));
    assert!(
        state
            .profile_menu
            .as_ref()
            .is_some_and(|menu| menu.dialog() == DeleteDialog::Open)
    );
}
