//! PostgreSQL-backed [`RaceStorage`].
//!
//! Expected tables:
//!
//! ```text
//! users    (id text pk, name text, image text null, role text)
//! snippets (id text pk, code text, rating int, user_id text fk users on delete cascade,
//!           created_at timestamptz)
//! results  (id text pk, user_id text fk users on delete cascade, accuracy float8, cpm int,
//!           error_count int, taken_time float8, created_at timestamptz,
//!           snippet_id text fk snippets on delete cascade)
//! ```

use chrono::{DateTime, Utc};
use keyrace_business::{
    ColumnSort, FlagPolicy, RaceResult, ResultWithUser, ReviewDecision, Role, Snippet, User,
};
use sqlx::postgres::PgPool;

use super::storage::{RaceStorage, ResultsPage, ResultsQuery, StorageError};

#[derive(Clone)]
pub struct PgRaceStorage {
    pool: PgPool,
}

impl PgRaceStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ResultRow {
    id: String,
    user_id: String,
    accuracy: f64,
    cpm: i32,
    error_count: i32,
    taken_time: f64,
    created_at: DateTime<Utc>,
    snippet_id: String,
}

impl From<ResultRow> for RaceResult {
    fn from(row: ResultRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            accuracy: row.accuracy,
            cpm: row.cpm,
            error_count: row.error_count,
            taken_time: row.taken_time,
            created_at: row.created_at,
            snippet_id: row.snippet_id,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ResultWithUserRow {
    #[sqlx(flatten)]
    result: ResultRow,
    user_name: String,
    user_image: Option<String>,
    user_role: String,
}

impl From<ResultWithUserRow> for ResultWithUser {
    fn from(row: ResultWithUserRow) -> Self {
        let user = User {
            id: row.result.user_id.clone(),
            name: row.user_name,
            image: row.user_image,
            role: Role::from_db(&row.user_role),
        };
        Self {
            result: row.result.into(),
            user,
        }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    name: String,
    image: Option<String>,
    role: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            image: row.image,
            role: Role::from_db(&row.role),
        }
    }
}

#[derive(sqlx::FromRow)]
struct SnippetRow {
    id: String,
    code: String,
    rating: i32,
    user_id: String,
    created_at: DateTime<Utc>,
}

impl From<SnippetRow> for Snippet {
    fn from(row: SnippetRow) -> Self {
        Self {
            id: row.id,
            code: row.code,
            rating: row.rating,
            user_id: row.user_id,
            created_at: row.created_at,
        }
    }
}

const RESULT_COLUMNS: &str =
    "r.id, r.user_id, r.accuracy, r.cpm, r.error_count, r.taken_time, r.created_at, r.snippet_id";

/// `ORDER BY` clause for a URL sort. Only whitelisted columns reach SQL.
fn order_by(sort: &ColumnSort) -> Result<String, StorageError> {
    let column = match sort.column.as_str() {
        "takenTime" => "r.taken_time",
        "createdAt" => "r.created_at",
        "cpm" => "r.cpm",
        "accuracy" => "r.accuracy",
        "errorCount" => "r.error_count",
        other => return Err(StorageError::UnsupportedSort(other.to_owned())),
    };
    let direction = if sort.direction.is_desc() { "DESC" } else { "ASC" };
    // Tie-break on id so pages never overlap.
    Ok(format!("ORDER BY {column} {direction}, r.id ASC"))
}

fn limit_offset(query: &ResultsQuery) -> Result<(i64, i64), StorageError> {
    let limit = i64::from(query.pagination.per_page);
    let offset = i64::try_from(query.pagination.offset())
        .map_err(|_| StorageError::Backend("page offset out of range".to_owned()))?;
    Ok((limit, offset))
}

fn to_total(count: i64) -> u64 {
    u64::try_from(count).unwrap_or_default()
}

impl RaceStorage for PgRaceStorage {
    async fn is_connected(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }

    async fn list_results(
        &self,
        query: ResultsQuery,
    ) -> Result<ResultsPage<ResultWithUser>, StorageError> {
        let order = order_by(&query.sort)?;
        let (limit, offset) = limit_offset(&query)?;

        let sql = format!(
            "SELECT {RESULT_COLUMNS}, u.name AS user_name, u.image AS user_image, \
             u.role AS user_role \
             FROM results r JOIN users u ON u.id = r.user_id \
             {order} LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, ResultWithUserRow>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM results")
            .fetch_one(&self.pool)
            .await?;

        Ok(ResultsPage {
            rows: rows.into_iter().map(ResultWithUser::from).collect(),
            total: to_total(total),
        })
    }

    async fn list_user_results(
        &self,
        user_id: &str,
        query: ResultsQuery,
    ) -> Result<ResultsPage<RaceResult>, StorageError> {
        let order = order_by(&query.sort)?;
        let (limit, offset) = limit_offset(&query)?;

        let sql = format!(
            "SELECT {RESULT_COLUMNS} FROM results r WHERE r.user_id = $1 \
             {order} LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, ResultRow>(&sql)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM results WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(ResultsPage {
            rows: rows.into_iter().map(RaceResult::from).collect(),
            total: to_total(total),
        })
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>, StorageError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, image, role FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn delete_user(&self, user_id: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_flagged_snippets(&self, policy: FlagPolicy) -> Result<Vec<Snippet>, StorageError> {
        let rows = match policy {
            FlagPolicy::All => {
                sqlx::query_as::<_, SnippetRow>(
                    "SELECT id, code, rating, user_id, created_at FROM snippets \
                     ORDER BY rating ASC, created_at ASC",
                )
                .fetch_all(&self.pool)
                .await?
            }
            FlagPolicy::RatingAtMost(threshold) => {
                sqlx::query_as::<_, SnippetRow>(
                    "SELECT id, code, rating, user_id, created_at FROM snippets \
                     WHERE rating <= $1 ORDER BY rating ASC, created_at ASC",
                )
                .bind(threshold)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows.into_iter().map(Snippet::from).collect())
    }

    async fn review_snippet(
        &self,
        snippet_id: &str,
        decision: ReviewDecision,
    ) -> Result<bool, StorageError> {
        let sql = match decision {
            ReviewDecision::Accept => "UPDATE snippets SET rating = 0 WHERE id = $1",
            ReviewDecision::Reject => "DELETE FROM snippets WHERE id = $1",
        };
        let result = sqlx::query(sql).bind(snippet_id).execute(&self.pool).await?;

        Ok(result.rows_affected() > 0)
    }
}
