use egui::Context;
use flume::{Receiver, Sender};
use keyrace_business::table::{
    RECENT_RACES_COLUMNS, RECENT_RACES_DEFAULTS, RESULTS_COLUMNS, RESULTS_DEFAULTS,
};
use keyrace_business::{
    ApiError, BusinessConfig, Location, MemoryRouter, ProfileMenu, RaceResult, ResultWithUser,
    ResultsPageResponse, ReviewDecision, ReviewQueue, Router, TableAdapter, TableDefaults,
    TableEvent, TableSchema, User,
};

use crate::api::{self, ApiEvent};
use crate::pages::Page;

/// Who is using the app.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// No session token configured, or the token was rejected.
    #[default]
    Anonymous,
    /// `GET /v1/me` is in flight.
    Loading,
    SignedIn(User),
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::SignedIn(user) => Some(user),
            _ => None,
        }
    }
}

/// A server-paginated table plus the bookkeeping for its page requests.
#[derive(Debug)]
pub struct RemoteTable<R> {
    pub adapter: TableAdapter<R>,
    /// Message of the last failed load.
    pub error: Option<String>,
    /// Id of the newest request; older responses are dropped.
    request: u64,
}

impl<R> RemoteTable<R> {
    pub fn new(schema: TableSchema, defaults: TableDefaults) -> Self {
        Self {
            adapter: TableAdapter::new(schema, defaults),
            error: None,
            request: 0,
        }
    }

    /// Starts a load for the current view state and returns its request id.
    pub fn begin_load(&mut self) -> u64 {
        self.request += 1;
        self.adapter.mark_pending();
        self.request
    }

    /// Applies a response. Returns `false` when a newer request superseded it.
    pub fn finish(&mut self, request: u64, result: Result<ResultsPageResponse<R>, ApiError>) -> bool {
        if request != self.request {
            log::debug!("dropping stale page response {request} (latest {})", self.request);
            return false;
        }
        match result {
            Ok(page) => {
                self.error = None;
                self.adapter.set_data(page.rows, page.page_count);
            }
            Err(err) => {
                self.error = Some(err.to_string());
                self.adapter.clear();
            }
        }
        true
    }

    /// Routes a table interaction through the router.
    pub fn handle(&mut self, event: &TableEvent, router: &mut dyn Router) -> bool {
        self.adapter.dispatch(event, router)
    }
}

/// What the review page shows.
#[derive(Debug, Clone, Default)]
pub enum ReviewView {
    #[default]
    Idle,
    Loading,
    Ready(ReviewQueue),
    /// The caller may not see the queue.
    NotFound,
    Failed(String),
}

/// The main application state.
///
/// Note: We manually implement Default because the API event channel
/// doesn't implement Default.
pub struct State {
    pub config: BusinessConfig,
    pub router: MemoryRouter,
    pub session: Session,
    /// Present once a user is signed in.
    pub profile_menu: Option<ProfileMenu>,
    pub results: RemoteTable<ResultWithUser>,
    pub recent_races: RemoteTable<RaceResult>,
    pub review: ReviewView,
    /// Message of the last failed review decision.
    pub review_error: Option<String>,
    events: Sender<ApiEvent>,
    event_receiver: Receiver<ApiEvent>,
    /// Router generation the page data was last loaded for.
    synced_generation: Option<u64>,
    session_requested: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default(), "/results")
    }
}

impl State {
    pub fn new(config: BusinessConfig, href: &str) -> Self {
        let (events, event_receiver) = flume::unbounded();
        Self {
            config,
            router: MemoryRouter::new(href),
            session: Session::Anonymous,
            profile_menu: None,
            results: RemoteTable::new(RESULTS_COLUMNS, RESULTS_DEFAULTS),
            recent_races: RemoteTable::new(RECENT_RACES_COLUMNS, RECENT_RACES_DEFAULTS),
            review: ReviewView::Idle,
            review_error: None,
            events,
            event_receiver,
            synced_generation: None,
            session_requested: false,
        }
    }

    pub fn test(base_url: String) -> Self {
        Self::new(BusinessConfig::new(base_url), "/results")
    }

    /// Test state with a session token, opened at `href`.
    pub fn test_signed_in(base_url: String, token: &str, href: &str) -> Self {
        Self::new(BusinessConfig::new(base_url).with_session_token(token), href)
    }

    pub fn page(&self) -> Page {
        Page::from_path(self.router.pathname())
    }

    pub fn navigate(&mut self, href: &str) {
        self.router.push(Location::parse(href));
    }

    /// Per-frame bookkeeping: apply finished requests, then load whatever the
    /// current URL needs.
    pub fn update(&mut self, ctx: &Context) {
        self.poll_events();
        self.ensure_session(ctx);
        self.sync_route(ctx);
    }

    /// Drains the API event channel.
    pub fn poll_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.apply(event);
        }
    }

    fn ensure_session(&mut self, ctx: &Context) {
        if self.session_requested {
            return;
        }
        self.session_requested = true;
        if self.config.session_token().is_some() {
            self.session = Session::Loading;
            api::fetch_me(&self.config, self.events.clone(), ctx.clone());
        }
    }

    /// Loads data for the current location once per navigation.
    fn sync_route(&mut self, ctx: &Context) {
        let generation = self.router.generation();
        if self.synced_generation == Some(generation) {
            return;
        }
        self.synced_generation = Some(generation);

        match self.page() {
            Page::Results => {
                self.results.adapter.sync_from_query(self.router.search_params());
                let request = self.results.begin_load();
                api::fetch_results(
                    &self.config,
                    self.router.search_params(),
                    request,
                    self.events.clone(),
                    ctx.clone(),
                );
            }
            Page::Dashboard if self.config.session_token().is_some() => {
                self.recent_races
                    .adapter
                    .sync_from_query(self.router.search_params());
                let request = self.recent_races.begin_load();
                api::fetch_my_results(
                    &self.config,
                    self.router.search_params(),
                    request,
                    self.events.clone(),
                    ctx.clone(),
                );
            }
            Page::Review if self.config.session_token().is_some() => {
                self.review = ReviewView::Loading;
                self.review_error = None;
                api::fetch_review_queue(&self.config, self.events.clone(), ctx.clone());
            }
            Page::Review => self.review = ReviewView::NotFound,
            Page::Dashboard | Page::NotFound => {}
        }
    }

    fn apply(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Results { request, result } => {
                self.results.finish(request, result);
            }
            ApiEvent::MyResults { request, result } => {
                self.recent_races.finish(request, result);
            }
            ApiEvent::Me(Ok(user)) => {
                log::info!("signed in as {}", user.name);
                self.profile_menu = Some(ProfileMenu::new(user.name.clone(), user.id.clone()));
                self.session = Session::SignedIn(user);
            }
            ApiEvent::Me(Err(err)) => {
                log::warn!("session rejected: {err}");
                self.session = Session::Anonymous;
                self.profile_menu = None;
            }
            ApiEvent::ReviewQueue(Ok(response)) => {
                self.review = ReviewView::Ready(ReviewQueue::new(response.items));
            }
            ApiEvent::ReviewQueue(Err(ApiError::Status(404))) => {
                self.review = ReviewView::NotFound;
            }
            ApiEvent::ReviewQueue(Err(err)) => {
                self.review = ReviewView::Failed(err.to_string());
            }
            ApiEvent::ReviewDecision { snippet_id, result } => {
                let ReviewView::Ready(queue) = &mut self.review else {
                    return;
                };
                match result {
                    Ok(action) => {
                        log::info!("snippet {} -> {}", action.snippet_id, action.decision);
                        self.review_error = None;
                        queue.decision_applied(&snippet_id);
                    }
                    Err(err) => {
                        self.review_error = Some(err.to_string());
                        queue.decision_failed(&snippet_id);
                    }
                }
            }
            ApiEvent::AccountDeleted(Ok(response)) => {
                log::info!("account {} deleted", response.user_id);
                if let Some(menu) = &mut self.profile_menu {
                    menu.delete_finished();
                }
                self.profile_menu = None;
                self.session = Session::Anonymous;
                self.config.session_token = None;
                self.recent_races.adapter.clear();
                self.navigate("/results");
            }
            ApiEvent::AccountDeleted(Err(err)) => {
                if let Some(menu) = &mut self.profile_menu {
                    menu.delete_failed(err.to_string());
                }
            }
        }
    }

    /// The user confirmed account deletion in the dialog.
    pub fn confirm_delete_account(&mut self, ctx: &Context) {
        let Some(menu) = &mut self.profile_menu else {
            return;
        };
        if menu.begin_delete() {
            api::delete_account(&self.config, self.events.clone(), ctx.clone());
        }
    }

    /// Sends an accept or reject for one queued snippet.
    pub fn decide(&mut self, snippet_id: &str, decision: ReviewDecision, ctx: &Context) {
        let ReviewView::Ready(queue) = &mut self.review else {
            return;
        };
        if queue.begin_decision(snippet_id) {
            api::review_snippet(
                &self.config,
                snippet_id,
                decision,
                self.events.clone(),
                ctx.clone(),
            );
        }
    }

    #[cfg(test)]
    pub(crate) fn apply_for_test(&mut self, event: ApiEvent) {
        self.apply(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyrace_business::{ReviewItem, Role};

    fn user(role: Role) -> User {
        User {
            id: "user-1".to_owned(),
            name: "Ada".to_owned(),
            image: None,
            role,
        }
    }

    #[test]
    fn stale_page_responses_are_dropped() {
        let mut table: RemoteTable<u32> = RemoteTable::new(RESULTS_COLUMNS, RESULTS_DEFAULTS);
        let first = table.begin_load();
        let second = table.begin_load();

        let page = |rows: Vec<u32>| {
            Ok(ResultsPageResponse {
                rows,
                page_count: 3,
            })
        };
        assert!(!table.finish(first, page(vec![1])));
        assert!(table.adapter.is_pending());

        assert!(table.finish(second, page(vec![2])));
        assert_eq!(table.adapter.rows(), &[2]);
        assert!(!table.adapter.is_pending());
    }

    #[test]
    fn failed_load_clears_rows_and_keeps_message() {
        let mut table: RemoteTable<u32> = RemoteTable::new(RESULTS_COLUMNS, RESULTS_DEFAULTS);
        let request = table.begin_load();
        table.finish(request, Err(ApiError::Status(500)));

        assert_eq!(table.error.as_deref(), Some("API returned status: 500"));
        assert!(table.adapter.rows().is_empty());
        assert!(!table.adapter.is_pending());
    }

    #[test]
    fn signing_in_creates_profile_menu() {
        let mut state = State::test(String::new());
        state.apply_for_test(ApiEvent::Me(Ok(user(Role::User))));

        assert_eq!(state.session.user().map(|u| u.name.as_str()), Some("Ada"));
        assert!(state.profile_menu.is_some());
    }

    #[test]
    fn review_404_means_not_found() {
        let mut state = State::test(String::new());
        state.apply_for_test(ApiEvent::ReviewQueue(Err(ApiError::Status(404))));
        assert!(matches!(state.review, ReviewView::NotFound));
    }

    #[test]
    fn failed_decision_keeps_item() {
        let mut state = State::test(String::new());
        state.review = ReviewView::Ready(ReviewQueue::new(vec![ReviewItem {
            snippet_id: "s1".to_owned(),
            code: "let x = 1;".to_owned(),
            rating: -2,
            total_characters: 10,
        }]));
        if let ReviewView::Ready(queue) = &mut state.review {
            queue.begin_decision("s1");
        }

        state.apply_for_test(ApiEvent::ReviewDecision {
            snippet_id: "s1".to_owned(),
            result: Err(ApiError::Status(500)),
        });

        let ReviewView::Ready(queue) = &state.review else {
            panic!("queue should still be shown");
        };
        assert_eq!(queue.items().len(), 1);
        assert!(!queue.is_in_flight("s1"));
        assert_eq!(state.review_error.as_deref(), Some("API returned status: 500"));
    }

    #[test]
    fn account_deletion_signs_out_and_leaves_dashboard() {
        let mut state = State::test_signed_in(String::new(), "jwt", "/dashboard");
        state.apply_for_test(ApiEvent::Me(Ok(user(Role::User))));
        if let Some(menu) = &mut state.profile_menu {
            menu.select_delete_account();
            menu.begin_delete();
        }

        state.apply_for_test(ApiEvent::AccountDeleted(Ok(
            keyrace_business::DeleteAccountResponse {
                user_id: "user-1".to_owned(),
                deleted: true,
            },
        )));

        assert_eq!(state.session, Session::Anonymous);
        assert!(state.profile_menu.is_none());
        assert!(state.config.session_token().is_none());
        assert_eq!(state.router.pathname(), "/results");
    }
}
