//! Race results, accounts, and snippets as seen by the HTTP layer.

pub mod mock;
pub mod pg;
pub mod storage;

pub use mock::MockRaceStorage;
pub use pg::PgRaceStorage;
pub use storage::{RaceStorage, ResultsPage, ResultsQuery, StorageError};
