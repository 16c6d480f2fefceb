//! Single-column sort state and its `<column>.<direction>` URL form.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn is_desc(self) -> bool {
        matches!(self, Self::Desc)
    }
}

/// The one active sort column of a table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnSort {
    pub column: String,
    pub direction: SortDirection,
}

impl ColumnSort {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    pub fn asc(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Asc)
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self::new(column, SortDirection::Desc)
    }

    /// Makes `column` the active sort column.
    ///
    /// A different column always starts ascending; the active column keeps
    /// its direction.
    #[must_use]
    pub fn by_column(&self, column: &str) -> Self {
        if self.column == column {
            self.clone()
        } else {
            Self::asc(column)
        }
    }

    /// Flips the direction of the active column.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self::new(self.column.clone(), self.direction.flipped())
    }
}

/// Parses `<column>.<direction>`.
///
/// Mirrors the lenient browser behaviour: anything other than `desc` after the
/// separator (including nothing at all) sorts ascending. An empty column is
/// rejected.
impl FromStr for ColumnSort {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, direction) = s.split_once('.').unwrap_or((s, ""));
        if column.is_empty() {
            return Err(SortParseError(s.to_owned()));
        }
        let direction = if direction == "desc" {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Ok(Self::new(column, direction))
    }
}

impl Display for ColumnSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.column, self.direction.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid sort parameter: {0:?}")]
pub struct SortParseError(pub String);
