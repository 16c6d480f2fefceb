//! In-memory [`RaceStorage`] for tests and local runs without a database.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use keyrace_business::{
    ColumnSort, FlagPolicy, RaceResult, ResultWithUser, ReviewDecision, Snippet, User,
};

use super::storage::{RaceStorage, ResultsPage, ResultsQuery, StorageError};

#[derive(Debug, Default)]
struct MockData {
    users: HashMap<String, User>,
    results: Vec<RaceResult>,
    snippets: Vec<Snippet>,
}

#[derive(Clone)]
pub struct MockRaceStorage {
    connected: bool,
    data: Arc<RwLock<MockData>>,
}

impl Default for MockRaceStorage {
    fn default() -> Self {
        Self {
            connected: true,
            data: Arc::default(),
        }
    }
}

impl MockRaceStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A storage whose health probe fails.
    pub fn disconnected() -> Self {
        Self {
            connected: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_user(self, user: User) -> Self {
        self.write(|data| {
            data.users.insert(user.id.clone(), user);
        });
        self
    }

    #[must_use]
    pub fn with_result(self, result: RaceResult) -> Self {
        self.write(|data| data.results.push(result));
        self
    }

    #[must_use]
    pub fn with_snippet(self, snippet: Snippet) -> Self {
        self.write(|data| data.snippets.push(snippet));
        self
    }

    pub fn user_count(&self) -> usize {
        self.read(|data| data.users.len())
    }

    pub fn snippet(&self, snippet_id: &str) -> Option<Snippet> {
        self.read(|data| data.snippets.iter().find(|s| s.id == snippet_id).cloned())
    }

    pub fn result_count(&self) -> usize {
        self.read(|data| data.results.len())
    }

    fn read<T>(&self, f: impl FnOnce(&MockData) -> T) -> T {
        let guard = self.data.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&guard)
    }

    fn write<T>(&self, f: impl FnOnce(&mut MockData) -> T) -> T {
        let mut guard = self.data.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}

type ResultOrdering = fn(&RaceResult, &RaceResult) -> Ordering;

fn ordering_for(column: &str) -> Result<ResultOrdering, StorageError> {
    let ordering: ResultOrdering = match column {
        "takenTime" => |a, b| a.taken_time.total_cmp(&b.taken_time),
        "createdAt" => |a, b| a.created_at.cmp(&b.created_at),
        "cpm" => |a, b| a.cpm.cmp(&b.cpm),
        "accuracy" => |a, b| a.accuracy.total_cmp(&b.accuracy),
        "errorCount" => |a, b| a.error_count.cmp(&b.error_count),
        other => return Err(StorageError::UnsupportedSort(other.to_owned())),
    };
    Ok(ordering)
}

/// Sorts and slices `results` the way the SQL query would.
fn page_of(
    mut results: Vec<RaceResult>,
    query: &ResultsQuery,
) -> Result<ResultsPage<RaceResult>, StorageError> {
    let sort: &ColumnSort = &query.sort;
    let ordering = ordering_for(&sort.column)?;

    results.sort_by(|a, b| {
        let primary = if sort.direction.is_desc() {
            ordering(a, b).reverse()
        } else {
            ordering(a, b)
        };
        primary.then_with(|| a.id.cmp(&b.id))
    });

    let total = results.len() as u64;
    let offset = usize::try_from(query.pagination.offset()).unwrap_or(usize::MAX);
    let rows = results
        .into_iter()
        .skip(offset)
        .take(query.pagination.per_page as usize)
        .collect();

    Ok(ResultsPage { rows, total })
}

impl RaceStorage for MockRaceStorage {
    async fn is_connected(&self) -> bool {
        self.connected
    }

    async fn list_results(
        &self,
        query: ResultsQuery,
    ) -> Result<ResultsPage<ResultWithUser>, StorageError> {
        let (results, users) = self.read(|data| (data.results.clone(), data.users.clone()));
        let page = page_of(results, &query)?;

        let rows = page
            .rows
            .into_iter()
            .filter_map(|result| {
                let user = users.get(&result.user_id)?.clone();
                Some(ResultWithUser { result, user })
            })
            .collect();

        Ok(ResultsPage {
            rows,
            total: page.total,
        })
    }

    async fn list_user_results(
        &self,
        user_id: &str,
        query: ResultsQuery,
    ) -> Result<ResultsPage<RaceResult>, StorageError> {
        let results: Vec<RaceResult> = self.read(|data| {
            data.results
                .iter()
                .filter(|result| result.user_id == user_id)
                .cloned()
                .collect()
        });
        page_of(results, &query)
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>, StorageError> {
        Ok(self.read(|data| data.users.get(user_id).cloned()))
    }

    async fn delete_user(&self, user_id: &str) -> Result<bool, StorageError> {
        Ok(self.write(|data| {
            let existed = data.users.remove(user_id).is_some();
            data.results.retain(|result| result.user_id != user_id);
            data.snippets.retain(|snippet| snippet.user_id != user_id);
            existed
        }))
    }

    async fn list_flagged_snippets(&self, policy: FlagPolicy) -> Result<Vec<Snippet>, StorageError> {
        let mut snippets: Vec<Snippet> = self.read(|data| {
            data.snippets
                .iter()
                .filter(|snippet| policy.is_flagged(snippet))
                .cloned()
                .collect()
        });
        snippets.sort_by(|a, b| {
            a.rating
                .cmp(&b.rating)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });
        Ok(snippets)
    }

    async fn review_snippet(
        &self,
        snippet_id: &str,
        decision: ReviewDecision,
    ) -> Result<bool, StorageError> {
        Ok(self.write(|data| match decision {
            ReviewDecision::Accept => match data.snippets.iter_mut().find(|s| s.id == snippet_id) {
                Some(snippet) => {
                    snippet.rating = 0;
                    true
                }
                None => false,
            },
            ReviewDecision::Reject => {
                let before = data.snippets.len();
                data.snippets.retain(|s| s.id != snippet_id);
                data.snippets.len() != before
            }
        }))
    }
}
