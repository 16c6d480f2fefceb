//! The sortable, paginated table adapter.
//!
//! Sorting and pagination are both "manual": the adapter never reorders or
//! slices the rows it is given. Every user interaction is turned into a new
//! [`Location`] for the router, and the data collaborator is trusted to hand
//! back the right page, already sorted, together with the page count.
//!
//! ```text
//! Idle --(page / sort / page-size event)--> Pending --(rows delivered)--> Idle
//! ```

use crate::query::QueryParams;
use crate::router::{Location, Router};

use super::column::TableSchema;
use super::pagination::{NavControls, PAGE_SIZE_CHOICES};
use super::sort::ColumnSort;
use super::view_state::{PAGE_PARAM, PER_PAGE_PARAM, SORT_PARAM, TableDefaults, TableViewState};

/// Rendering phase of a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TablePhase {
    #[default]
    Idle,
    /// A navigation is in flight; cells render as placeholders.
    Pending,
}

/// A user interaction with the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// A column header was clicked.
    HeaderClicked(String),
    /// Flip the direction of the active sort column.
    ToggleSortDirection,
    FirstPage,
    PreviousPage,
    NextPage,
    LastPage,
    PageSizeSelected(u32),
}

/// What the table body should show this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyContent {
    Rows,
    /// One placeholder per cell while pending.
    Placeholder,
    /// A single full-width "No results." row.
    Empty,
}

/// Table state synchronised with the URL.
#[derive(Debug, Clone)]
pub struct TableAdapter<R> {
    schema: TableSchema,
    defaults: TableDefaults,
    state: TableViewState,
    rows: Vec<R>,
    page_count: u32,
    phase: TablePhase,
}

impl<R> TableAdapter<R> {
    pub fn new(schema: TableSchema, defaults: TableDefaults) -> Self {
        Self {
            state: TableViewState::from_query(&QueryParams::new(), &schema, &defaults),
            schema,
            defaults,
            rows: Vec::new(),
            page_count: 0,
            phase: TablePhase::Idle,
        }
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    pub fn state(&self) -> &TableViewState {
        &self.state
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    pub fn phase(&self) -> TablePhase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase == TablePhase::Pending
    }

    /// Rebuilds the view state from the router's current query string.
    ///
    /// Returns `true` when the state changed, i.e. new data is needed.
    pub fn sync_from_query(&mut self, params: &QueryParams) -> bool {
        let next = TableViewState::from_query(params, &self.schema, &self.defaults);
        if next == self.state {
            false
        } else {
            self.state = next;
            true
        }
    }

    /// Enters the pending phase without navigating (e.g. the initial load).
    pub fn mark_pending(&mut self) {
        self.phase = TablePhase::Pending;
    }

    /// Accepts a page of rows from the data collaborator.
    pub fn set_data(&mut self, rows: Vec<R>, page_count: u32) {
        self.rows = rows;
        self.page_count = page_count;
        self.phase = TablePhase::Idle;
    }

    /// Drops the rows after a failed load; the table goes back to idle and
    /// renders as empty.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.page_count = 0;
        self.phase = TablePhase::Idle;
    }

    /// Navigation controls enabled for the current page. Everything is
    /// disabled while pending.
    pub fn controls(&self) -> NavControls {
        match self.phase {
            TablePhase::Pending => NavControls::DISABLED,
            TablePhase::Idle => self.state.pagination.controls(self.page_count),
        }
    }

    pub fn body(&self) -> BodyContent {
        match self.phase {
            TablePhase::Pending => BodyContent::Placeholder,
            TablePhase::Idle if self.rows.is_empty() => BodyContent::Empty,
            TablePhase::Idle => BodyContent::Rows,
        }
    }

    /// Footer label, e.g. `Page 2 of 7`.
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.state.page(), self.page_count)
    }

    /// The sort state in effect if `column`'s header were clicked, or `None`
    /// when the click does nothing.
    fn sort_after_header_click(&self, column: &str) -> Option<ColumnSort> {
        if !self.schema.is_sortable(column) {
            return None;
        }
        if self.state.sort.column == column {
            Some(self.state.sort.toggled())
        } else {
            Some(self.state.sort.by_column(column))
        }
    }

    /// Computes where `event` navigates to from `current`, without side
    /// effects. `None` means the event is a no-op (disabled control,
    /// unsortable column, unknown page size, or a pending table).
    pub fn navigation_for(&self, event: &TableEvent, current: &Location) -> Option<Location> {
        if self.is_pending() {
            return None;
        }

        let controls = self.controls();
        let page = self.state.page();
        let per_page = self.state.per_page().to_string();
        let sort = self.state.sort.to_string();

        let updates = match event {
            TableEvent::HeaderClicked(column) => {
                let next = self.sort_after_header_click(column)?;
                vec![
                    (PAGE_PARAM, Some(page.to_string())),
                    (SORT_PARAM, Some(next.to_string())),
                ]
            }
            TableEvent::ToggleSortDirection => vec![
                (PAGE_PARAM, Some(page.to_string())),
                (SORT_PARAM, Some(self.state.sort.toggled().to_string())),
            ],
            TableEvent::PageSizeSelected(size) => {
                if !PAGE_SIZE_CHOICES.contains(size) {
                    return None;
                }
                vec![
                    (PAGE_PARAM, Some("1".to_owned())),
                    (PER_PAGE_PARAM, Some(size.to_string())),
                    (SORT_PARAM, Some(sort)),
                ]
            }
            TableEvent::FirstPage => {
                if !controls.first {
                    return None;
                }
                page_updates(1, per_page, sort)
            }
            TableEvent::PreviousPage => {
                if !controls.previous {
                    return None;
                }
                page_updates(page - 1, per_page, sort)
            }
            TableEvent::NextPage => {
                if !controls.next {
                    return None;
                }
                page_updates(page + 1, per_page, sort)
            }
            TableEvent::LastPage => {
                if !controls.last {
                    return None;
                }
                page_updates(self.page_count, per_page, sort)
            }
        };

        Some(Location::new(
            current.path.clone(),
            current.query.merged(updates),
        ))
    }

    /// Handles `event`: navigates through `router`, adopts the new URL state,
    /// and enters the pending phase. Returns whether a navigation was issued.
    pub fn dispatch(&mut self, event: &TableEvent, router: &mut dyn Router) -> bool {
        let current = Location::new(router.pathname(), router.search_params().clone());
        let Some(next) = self.navigation_for(event, &current) else {
            return false;
        };

        log::debug!("table event {event:?} -> {next}");
        self.state = TableViewState::from_query(&next.query, &self.schema, &self.defaults);
        self.phase = TablePhase::Pending;
        router.push(next);
        true
    }
}

fn page_updates(
    page: u32,
    per_page: String,
    sort: String,
) -> Vec<(&'static str, Option<String>)> {
    vec![
        (PAGE_PARAM, Some(page.to_string())),
        (PER_PAGE_PARAM, Some(per_page)),
        (SORT_PARAM, Some(sort)),
    ]
}
