//! Records owned by the data layer. Read-only from the front end.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role. Only administrators may see the review queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
        }
    }

    /// Parses the stored form; anything unrecognised is an ordinary user.
    pub fn from_db(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("ADMIN") {
            Self::Admin
        } else {
            Self::User
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    /// Display name.
    pub name: String,
    /// Avatar URL.
    pub image: Option<String>,
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// One finished race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceResult {
    pub id: String,
    pub user_id: String,
    /// Fraction of correctly typed characters, `0.0..=1.0`.
    pub accuracy: f64,
    /// Characters per minute.
    pub cpm: i32,
    pub error_count: i32,
    /// Seconds from first keystroke to finish.
    pub taken_time: f64,
    pub created_at: DateTime<Utc>,
    pub snippet_id: String,
}

/// A result joined with the user who raced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultWithUser {
    #[serde(flatten)]
    pub result: RaceResult,
    pub user: User,
}

/// Race source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub id: String,
    pub code: String,
    /// Community vote total.
    pub rating: i32,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl Snippet {
    /// Length in characters, not bytes.
    pub fn char_count(&self) -> usize {
        self.code.chars().count()
    }
}
