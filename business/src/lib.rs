//! Toolkit-free logic for the Keyrace front end and service.
//!
//! Nothing in this crate renders or performs IO; views and handlers hand it
//! the current URL, session, and data, and act on what it returns.

pub mod api;
pub mod config;
pub mod format;
pub mod models;
pub mod profile_menu;
pub mod query;
pub mod review;
pub mod router;
pub mod table;

pub use api::{
    ApiError, DeleteAccountResponse, ErrorResponse, MeResponse, ResultsPageResponse,
    ReviewActionResponse, ReviewQueueResponse,
};
pub use config::BusinessConfig;
pub use format::{AccuracyTier, accuracy_tier, format_date, format_seconds, truncate_id};
pub use models::{RaceResult, ResultWithUser, Role, Snippet, User};
pub use profile_menu::{DELETE_ACCOUNT_LABEL, DeleteConfirmation, DeleteDialog, ProfileMenu};
pub use query::{QueryParams, QueryUpdate};
pub use review::{
    FlagPolicy, ReviewAccess, ReviewDecision, ReviewItem, ReviewQueue, review_access,
};
pub use router::{Location, MemoryRouter, Router};
pub use table::{
    BodyContent, ColumnDef, ColumnSort, NavControls, PAGE_SIZE_CHOICES, Pagination,
    SortDirection, TableAdapter, TableDefaults, TableEvent, TablePhase, TableSchema,
    TableViewState,
};
