//! Table view state as carried in the URL.

use crate::query::{QueryParams, QueryUpdate};

use super::column::TableSchema;
use super::pagination::{Pagination, coerce_page, coerce_per_page};
use super::sort::{ColumnSort, SortDirection};

pub const PAGE_PARAM: &str = "page";
pub const PER_PAGE_PARAM: &str = "per_page";
pub const SORT_PARAM: &str = "sort";

/// Per-view defaults applied when the URL does not say otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDefaults {
    pub per_page: u32,
    pub sort_column: &'static str,
    pub sort_direction: SortDirection,
}

impl TableDefaults {
    pub fn sort(&self) -> ColumnSort {
        ColumnSort::new(self.sort_column, self.sort_direction)
    }
}

pub const RESULTS_DEFAULTS: TableDefaults = TableDefaults {
    per_page: 5,
    sort_column: "takenTime",
    sort_direction: SortDirection::Asc,
};

pub const RECENT_RACES_DEFAULTS: TableDefaults = TableDefaults {
    per_page: 10,
    sort_column: "createdAt",
    sort_direction: SortDirection::Asc,
};

/// Page, page size, and sort of one table, rebuilt from the URL on every
/// render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableViewState {
    pub pagination: Pagination,
    pub sort: ColumnSort,
}

impl TableViewState {
    /// Reconstructs the state from a query string.
    ///
    /// Malformed values fall back to `defaults`; a sort on a column the
    /// schema does not declare sortable falls back to the default sort.
    pub fn from_query(params: &QueryParams, schema: &TableSchema, defaults: &TableDefaults) -> Self {
        let page = coerce_page(params.get(PAGE_PARAM));
        let per_page = coerce_per_page(params.get(PER_PAGE_PARAM), defaults.per_page);
        let sort = params
            .get(SORT_PARAM)
            .and_then(|raw| raw.parse::<ColumnSort>().ok())
            .filter(|sort| schema.is_sortable(&sort.column))
            .unwrap_or_else(|| defaults.sort());

        Self {
            pagination: Pagination::new(page, per_page),
            sort,
        }
    }

    pub fn page(&self) -> u32 {
        self.pagination.page
    }

    pub fn per_page(&self) -> u32 {
        self.pagination.per_page
    }

    /// Every parameter this table owns, in URL order.
    pub fn query_updates(&self) -> [QueryUpdate<'static>; 3] {
        [
            (PAGE_PARAM, Some(self.pagination.page.to_string())),
            (PER_PAGE_PARAM, Some(self.pagination.per_page.to_string())),
            (SORT_PARAM, Some(self.sort.to_string())),
        ]
    }

    /// Merges this state into `current`, keeping unrelated parameters.
    pub fn encode_into(&self, current: &QueryParams) -> QueryParams {
        current.merged(self.query_updates())
    }
}
