use egui::Ui;

use super::handle_table_output;
use crate::state::State;
use crate::widgets::{error_label, results_table};

pub fn results_page(state: &mut State, ui: &mut Ui) {
    ui.heading("Results");
    ui.add_space(8.0);

    if let Some(error) = &state.results.error {
        error_label(ui, error);
    }

    let output = results_table(ui, &state.results.adapter);
    handle_table_output(&mut state.results, &mut state.router, output);
}
