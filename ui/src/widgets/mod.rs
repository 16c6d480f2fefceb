pub mod data_table;
pub mod delete_confirmation;
mod error_label;
mod profile_menu;
pub mod recent_races_table;
pub mod results_table;
pub mod review_queue;

pub use data_table::{DataTableOutput, NO_RESULTS, data_table};
pub use delete_confirmation::{DELETE_DIALOG_TITLE, DeleteChoice, delete_confirmation};
pub use error_label::error_label;
pub use profile_menu::profile_menu;
pub use recent_races_table::recent_races_table;
pub use results_table::results_table;
pub use review_queue::review_queue;
