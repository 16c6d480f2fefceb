//! Pages module for the application.
//!
//! The page is picked from the router's current path on every frame:
//! - `results_page`: public results table (`/` and `/results`)
//! - `dashboard_page`: the signed-in user's recent races (`/dashboard`)
//! - `review_page`: moderation queue (`/review`), administrators only
//! - `not_found_page`: everything else, and the review page for anyone
//!   who may not see it

mod dashboard_page;
mod not_found_page;
mod results_page;
mod review_page;

pub use dashboard_page::{SIGNED_OUT_MESSAGE, dashboard_page};
pub use not_found_page::{NOT_FOUND_HEADING, NOT_FOUND_MESSAGE, not_found_page};
pub use results_page::results_page;
pub use review_page::review_page;

use keyrace_business::{Location, MemoryRouter, Router};

use crate::state::RemoteTable;
use crate::widgets::DataTableOutput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Results,
    Dashboard,
    Review,
    NotFound,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" | "/results" => Self::Results,
            "/dashboard" => Self::Dashboard,
            "/review" => Self::Review,
            _ => Self::NotFound,
        }
    }
}

/// Routes a table's interactions: table events go through the adapter, link
/// clicks straight to the router.
fn handle_table_output<R>(
    table: &mut RemoteTable<R>,
    router: &mut MemoryRouter,
    output: DataTableOutput,
) {
    if let Some(event) = output.event {
        table.handle(&event, router);
    }
    if let Some(href) = output.navigate {
        router.push(Location::parse(&href));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_map_to_pages() {
        assert_eq!(Page::from_path("/"), Page::Results);
        assert_eq!(Page::from_path("/results"), Page::Results);
        assert_eq!(Page::from_path("/results/"), Page::Results);
        assert_eq!(Page::from_path("/dashboard"), Page::Dashboard);
        assert_eq!(Page::from_path("/review"), Page::Review);
        assert_eq!(Page::from_path("/race"), Page::NotFound);
        assert_eq!(Page::from_path("/review/extra"), Page::NotFound);
    }
}
