//! Paginated, sortable tables driven by URL state.
//!
//! - `column`: fixed column schemas
//! - `sort`: single-column sort and its `<column>.<direction>` form
//! - `pagination`: page / page-size coercion and navigation controls
//! - `view_state`: the table state as read from and written to the URL
//! - `adapter`: the interaction state machine tying them to a router

pub mod adapter;
pub mod column;
pub mod pagination;
pub mod sort;
pub mod view_state;

pub use adapter::{BodyContent, TableAdapter, TableEvent, TablePhase};
pub use column::{ColumnDef, RECENT_RACES_COLUMNS, RESULTS_COLUMNS, TableSchema};
pub use pagination::{
    MAX_PER_PAGE, NavControls, PAGE_SIZE_CHOICES, Pagination, coerce_page, coerce_per_page,
    page_count,
};
pub use sort::{ColumnSort, SortDirection, SortParseError};
pub use view_state::{
    PAGE_PARAM, PER_PAGE_PARAM, RECENT_RACES_DEFAULTS, RESULTS_DEFAULTS, SORT_PARAM,
    TableDefaults, TableViewState,
};
