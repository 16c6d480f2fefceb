//! Cell formatting for derived fields.

use chrono::{DateTime, Utc};

/// Visual treatment of an accuracy value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccuracyTier {
    High,
    Medium,
    /// Rendered with the error colour.
    Low,
}

/// Thresholds are exclusive: exactly 0.8 is `Medium`, exactly 0.5 is `Low`.
pub fn accuracy_tier(accuracy: f64) -> AccuracyTier {
    if accuracy > 0.8 {
        AccuracyTier::High
    } else if accuracy > 0.5 {
        AccuracyTier::Medium
    } else {
        AccuracyTier::Low
    }
}

/// `cl9x2abc1234wxyz` -> `cl9x...wxyz`. Ids of eight characters or fewer
/// are shown whole.
pub fn truncate_id(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() <= 8 {
        return id.to_owned();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// `January 5, 2024`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// `41.5s`, `30s`.
pub fn format_seconds(seconds: f64) -> String {
    let rounded = (seconds * 100.0).round() / 100.0;
    format!("{rounded}s")
}
