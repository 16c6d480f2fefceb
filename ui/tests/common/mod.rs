#![allow(dead_code)]

use std::time::Duration;

use egui_kittest::Harness;
use keyrace_ui::KeyraceApp;
use keyrace_ui::state::State;
use kittest::Queryable;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "test-session-token";

/// Maximum frames to wait for a network response.
pub const MAX_WAIT_FRAMES: usize = 50;

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, KeyraceApp>,
}

impl<'a> TestCtx<'a> {
    /// App opened at `href` with no session.
    pub fn anonymous(mock_server: MockServer, href: &str) -> Self {
        let state = State::new(
            keyrace_business::BusinessConfig::new(mock_server.uri()),
            href,
        );
        Self::with_state(mock_server, state)
    }

    /// App opened at `href` presenting [`TOKEN`].
    pub fn signed_in(mock_server: MockServer, href: &str) -> Self {
        let state = State::test_signed_in(mock_server.uri(), TOKEN, href);
        Self::with_state(mock_server, state)
    }

    fn with_state(mock_server: MockServer, state: State) -> Self {
        let app = KeyraceApp::new(state);
        let harness = Harness::new_eframe(|_| app);
        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, KeyraceApp> {
        &mut self.harness
    }

    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }
}

/// Steps frames until `label` is on screen. Returns whether it appeared.
pub async fn wait_for_label(harness: &mut Harness<'_, KeyraceApp>, label: &str) -> bool {
    for _ in 0..MAX_WAIT_FRAMES {
        harness.step();
        if harness.query_by_label(label).is_some() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    false
}

/// Steps frames until `done` holds for the app state.
pub async fn wait_until(
    harness: &mut Harness<'_, KeyraceApp>,
    done: impl Fn(&State) -> bool,
) -> bool {
    for _ in 0..MAX_WAIT_FRAMES {
        harness.step();
        if done(harness.state().state()) {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    false
}

pub fn user_json(id: &str, name: &str, role: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "image": null,
        "role": role,
    })
}

pub fn race_json(id: &str, snippet_id: &str, accuracy: f64, cpm: i32) -> Value {
    json!({
        "id": id,
        "userId": "user-racer",
        "accuracy": accuracy,
        "cpm": cpm,
        "errorCount": 2,
        "takenTime": 41.5,
        "createdAt": "2024-01-05T13:00:00Z",
        "snippetId": snippet_id,
    })
}

pub fn result_with_user_json(id: &str, user: Value, taken_time: f64) -> Value {
    let mut row = race_json(id, "snippet-1", 0.9, 300);
    row["takenTime"] = json!(taken_time);
    row["userId"] = user["id"].clone();
    row["user"] = user;
    row
}

pub fn page_json(rows: Vec<Value>, page_count: u32) -> Value {
    json!({ "rows": rows, "pageCount": page_count })
}

/// Mounts `GET /api/v1/me` answering with `user`.
pub async fn mount_me(mock_server: &MockServer, user: Value) {
    Mock::given(method("GET"))
        .and(path("/api/v1/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user))
        .mount(mock_server)
        .await;
}
