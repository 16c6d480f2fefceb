//! Routing collaborator.
//!
//! Views never look the router up ambiently; whoever owns the frame loop
//! passes a `&mut dyn Router` into the table adapter and pages.

use std::fmt::{self, Display};

use crate::query::QueryParams;

/// A path plus its query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: QueryParams,
}

impl Location {
    pub fn new(path: impl Into<String>, query: QueryParams) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    /// Splits `href` at the first `?`. A fragment, if any, is dropped.
    pub fn parse(href: &str) -> Self {
        let href = href.split_once('#').map_or(href, |(before, _)| before);
        let (path, search) = href.split_once('?').unwrap_or((href, ""));
        let path = if path.is_empty() { "/" } else { path };
        Self::new(path, QueryParams::parse(search))
    }

    /// `path?query`, or just `path` when the query is empty.
    pub fn href(&self) -> String {
        self.to_string()
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            f.write_str(&self.path)
        } else {
            write!(f, "{}?{}", self.path, self.query)
        }
    }
}

/// The host's navigation primitives.
pub trait Router {
    /// Current path, without the query string.
    fn pathname(&self) -> &str;

    /// Current query parameters.
    fn search_params(&self) -> &QueryParams;

    /// Navigates to `location`. Fire-and-forget: the caller never awaits it.
    fn push(&mut self, location: Location);
}

/// An in-process router with a back stack.
#[derive(Debug, Clone, Default)]
pub struct MemoryRouter {
    current: Location,
    history: Vec<Location>,
    /// Bumped on every navigation so consumers can tell a new location from a
    /// re-render of the same one.
    generation: u64,
}

impl MemoryRouter {
    pub fn new(href: &str) -> Self {
        Self {
            current: Location::parse(href),
            history: Vec::new(),
            generation: 0,
        }
    }

    pub fn location(&self) -> &Location {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn history(&self) -> &[Location] {
        &self.history
    }

    /// Returns to the previous location, if any.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                self.generation += 1;
                true
            }
            None => false,
        }
    }
}

impl Router for MemoryRouter {
    fn pathname(&self) -> &str {
        &self.current.path
    }

    fn search_params(&self) -> &QueryParams {
        &self.current.query
    }

    fn push(&mut self, location: Location) {
        log::debug!("navigate: {} -> {}", self.current, location);
        let previous = std::mem::replace(&mut self.current, location);
        self.history.push(previous);
        self.generation += 1;
    }
}
