//! Storage abstraction for race data.
//!
//! Handlers only see [`RaceStorage`]; production runs on
//! [`PgRaceStorage`](super::pg::PgRaceStorage) and tests on
//! [`MockRaceStorage`](super::mock::MockRaceStorage).

use std::future::Future;

use keyrace_business::table::{Pagination, TableViewState};
use keyrace_business::{
    ColumnSort, FlagPolicy, RaceResult, ResultWithUser, ReviewDecision, Snippet, User,
};

/// Which page to read and in what order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsQuery {
    pub pagination: Pagination,
    /// Column id as used in the URL, e.g. `takenTime`.
    pub sort: ColumnSort,
}

impl From<TableViewState> for ResultsQuery {
    fn from(state: TableViewState) -> Self {
        Self {
            pagination: state.pagination,
            sort: state.sort,
        }
    }
}

/// One page of rows plus the total row count across all pages.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsPage<T> {
    pub rows: Vec<T>,
    pub total: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The requested sort column has no backing column.
    #[error("Unsupported sort column: {0}")]
    UnsupportedSort(String),

    #[error("Storage error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        Self::Backend(err.to_string())
    }
}

/// Everything the HTTP layer reads or writes.
pub trait RaceStorage: Clone + Send + Sync + 'static {
    fn is_connected(&self) -> impl Future<Output = bool> + Send;

    /// Public results joined with their racer.
    fn list_results(
        &self,
        query: ResultsQuery,
    ) -> impl Future<Output = Result<ResultsPage<ResultWithUser>, StorageError>> + Send;

    /// Results raced by `user_id`.
    fn list_user_results(
        &self,
        user_id: &str,
        query: ResultsQuery,
    ) -> impl Future<Output = Result<ResultsPage<RaceResult>, StorageError>> + Send;

    fn get_user(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Option<User>, StorageError>> + Send;

    /// Removes the account and everything it owns. Returns `false` when the
    /// user did not exist.
    fn delete_user(&self, user_id: &str) -> impl Future<Output = Result<bool, StorageError>> + Send;

    /// Snippets flagged by `policy`, lowest rating first.
    fn list_flagged_snippets(
        &self,
        policy: FlagPolicy,
    ) -> impl Future<Output = Result<Vec<Snippet>, StorageError>> + Send;

    /// Applies a moderation decision. Returns `false` when the snippet did
    /// not exist.
    fn review_snippet(
        &self,
        snippet_id: &str,
        decision: ReviewDecision,
    ) -> impl Future<Output = Result<bool, StorageError>> + Send;
}
