//! Moderation review queue: who may see it, what it lists, and what can be
//! done with each entry.

use std::collections::HashSet;
use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{Snippet, User};

/// Outcome of the review-queue access check.
///
/// A caller who may not see the queue is told it does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAccess {
    Granted,
    NotFound,
}

pub fn review_access(actor: Option<&User>) -> ReviewAccess {
    match actor {
        Some(user) if user.is_admin() => ReviewAccess::Granted,
        _ => ReviewAccess::NotFound,
    }
}

/// Which snippets are flagged for review.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlagPolicy {
    /// Every snippet is listed.
    #[default]
    All,
    /// Snippets whose rating is at or below the threshold.
    RatingAtMost(i32),
}

impl FlagPolicy {
    pub fn from_threshold(threshold: Option<i32>) -> Self {
        threshold.map_or(Self::All, Self::RatingAtMost)
    }

    pub fn is_flagged(&self, snippet: &Snippet) -> bool {
        match self {
            Self::All => true,
            Self::RatingAtMost(threshold) => snippet.rating <= *threshold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    /// Keep the snippet and reset its rating.
    Accept,
    /// Remove the snippet.
    Reject,
}

impl ReviewDecision {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Reject => "reject",
        }
    }
}

impl Display for ReviewDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewDecision {
    type Err = UnknownDecision;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accept" => Ok(Self::Accept),
            "reject" => Ok(Self::Reject),
            other => Err(UnknownDecision(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown review decision: {0}")]
pub struct UnknownDecision(pub String);

/// One card in the review queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub snippet_id: String,
    pub code: String,
    pub rating: i32,
    pub total_characters: usize,
}

impl ReviewItem {
    pub fn total_characters_label(&self) -> String {
        format!("Total characters: {}", self.total_characters)
    }
}

impl From<&Snippet> for ReviewItem {
    fn from(snippet: &Snippet) -> Self {
        Self {
            snippet_id: snippet.id.clone(),
            code: snippet.code.clone(),
            rating: snippet.rating,
            total_characters: snippet.char_count(),
        }
    }
}

/// Client-side queue: the listed items plus decisions still in flight.
#[derive(Debug, Clone, Default)]
pub struct ReviewQueue {
    items: Vec<ReviewItem>,
    in_flight: HashSet<String>,
}

impl ReviewQueue {
    pub fn new(items: Vec<ReviewItem>) -> Self {
        Self {
            items,
            in_flight: HashSet::new(),
        }
    }

    pub fn items(&self) -> &[ReviewItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_in_flight(&self, snippet_id: &str) -> bool {
        self.in_flight.contains(snippet_id)
    }

    /// Marks a decision as sent. Returns `false` if one is already in flight
    /// for this snippet or the snippet is not listed.
    pub fn begin_decision(&mut self, snippet_id: &str) -> bool {
        if !self.items.iter().any(|item| item.snippet_id == snippet_id) {
            return false;
        }
        self.in_flight.insert(snippet_id.to_owned())
    }

    /// A decision was applied server-side; the item leaves the queue.
    pub fn decision_applied(&mut self, snippet_id: &str) {
        self.in_flight.remove(snippet_id);
        self.items.retain(|item| item.snippet_id != snippet_id);
    }

    /// A decision failed; the item stays and its controls re-enable.
    pub fn decision_failed(&mut self, snippet_id: &str) {
        self.in_flight.remove(snippet_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use chrono::Utc;

    fn user(role: Role) -> User {
        User {
            id: "u1".to_owned(),
            name: "ada".to_owned(),
            image: None,
            role,
        }
    }

    fn snippet(id: &str, rating: i32) -> Snippet {
        Snippet {
            id: id.to_owned(),
            code: "let x = 1;".to_owned(),
            rating,
            user_id: "u2".to_owned(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn only_admins_are_granted() {
        assert_eq!(review_access(Some(&user(Role::Admin))), ReviewAccess::Granted);
        assert_eq!(review_access(Some(&user(Role::User))), ReviewAccess::NotFound);
        assert_eq!(review_access(None), ReviewAccess::NotFound);
    }

    #[test]
    fn default_policy_lists_everything() {
        let policy = FlagPolicy::from_threshold(None);
        assert_eq!(policy, FlagPolicy::All);
        assert!(policy.is_flagged(&snippet("a", 100)));
    }

    #[test]
    fn threshold_policy_is_inclusive() {
        let policy = FlagPolicy::from_threshold(Some(-10));
        assert!(policy.is_flagged(&snippet("a", -10)));
        assert!(policy.is_flagged(&snippet("b", -11)));
        assert!(!policy.is_flagged(&snippet("c", -9)));
    }

    #[test]
    fn decisions_round_trip_through_strings() {
        assert_eq!("accept".parse(), Ok(ReviewDecision::Accept));
        assert_eq!(ReviewDecision::Reject.to_string(), "reject");
        assert!("maybe".parse::<ReviewDecision>().is_err());
    }

    #[test]
    fn item_reports_total_characters() {
        let item = ReviewItem::from(&snippet("a", 0));
        assert_eq!(item.total_characters_label(), "Total characters: 10");
    }

    #[test]
    fn queue_tracks_in_flight_decisions() {
        let mut queue = ReviewQueue::new(vec![
            ReviewItem::from(&snippet("a", 0)),
            ReviewItem::from(&snippet("b", 0)),
        ]);

        assert!(queue.begin_decision("a"));
        assert!(!queue.begin_decision("a"));
        assert!(!queue.begin_decision("missing"));
        assert!(queue.is_in_flight("a"));

        queue.decision_failed("a");
        assert!(!queue.is_in_flight("a"));
        assert_eq!(queue.items().len(), 2);

        queue.begin_decision("b");
        queue.decision_applied("b");
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].snippet_id, "a");
    }
}
