//! Page / page-size state and navigation-control enablement.

use serde::{Deserialize, Serialize};

/// Rows-per-page choices offered by the page-size selector.
pub const PAGE_SIZE_CHOICES: [u32; 4] = [5, 10, 15, 20];

/// Largest `per_page` honoured from a URL; anything above falls back to the
/// view default.
pub const MAX_PER_PAGE: u32 = 100;

/// Current page (1-based) and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Zero-based index of the current page.
    pub fn page_index(&self) -> u32 {
        self.page.saturating_sub(1)
    }

    /// Row offset of the first row on this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page_index()) * u64::from(self.per_page)
    }

    /// Which navigation controls may be used, given the collaborator's page
    /// count.
    pub fn controls(&self, page_count: u32) -> NavControls {
        let can_go_back = self.page > 1;
        let can_go_forward = self.page < page_count;
        NavControls {
            first: can_go_back,
            previous: can_go_back,
            next: can_go_forward,
            last: can_go_forward,
        }
    }
}

/// Enabled flags for the first / previous / next / last buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavControls {
    pub first: bool,
    pub previous: bool,
    pub next: bool,
    pub last: bool,
}

impl NavControls {
    pub const DISABLED: Self = Self {
        first: false,
        previous: false,
        next: false,
        last: false,
    };
}

/// Reads a `page` parameter. Missing, non-numeric, or non-positive values
/// become page 1.
pub fn coerce_page(raw: Option<&str>) -> u32 {
    raw.and_then(parse_positive).unwrap_or(1)
}

/// Reads a `per_page` parameter, falling back to `default` when it is
/// missing, malformed, zero, or above [`MAX_PER_PAGE`].
pub fn coerce_per_page(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(parse_positive)
        .filter(|per_page| *per_page <= MAX_PER_PAGE)
        .unwrap_or(default)
}

/// Number of pages needed for `total_rows` at `per_page` rows each.
pub fn page_count(total_rows: u64, per_page: u32) -> u32 {
    let per_page = u64::from(per_page.max(1));
    u32::try_from(total_rows.div_ceil(per_page)).unwrap_or(u32::MAX)
}

fn parse_positive(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    let value = match raw.parse::<u32>() {
        Ok(value) => value,
        // "3.0" is still page 3; "2.5" is not a page.
        Err(_) => {
            let float = raw.parse::<f64>().ok()?;
            if float.fract() != 0.0 || !(1.0..=f64::from(u32::MAX)).contains(&float) {
                return None;
            }
            float as u32
        }
    };
    (value > 0).then_some(value)
}
