//! Dashboard for signed-in users: their recent races.

use egui::Ui;

use super::handle_table_output;
use crate::state::State;
use crate::widgets::{error_label, recent_races_table};

pub const SIGNED_OUT_MESSAGE: &str = "Sign in to see your recent races.";

pub fn dashboard_page(state: &mut State, ui: &mut Ui) {
    ui.heading("Recent races");
    ui.add_space(8.0);

    if state.config.session_token().is_none() {
        ui.label(SIGNED_OUT_MESSAGE);
        return;
    }

    if let Some(error) = &state.recent_races.error {
        error_label(ui, error);
    }

    let output = recent_races_table(ui, &state.recent_races.adapter);
    handle_table_output(&mut state.recent_races, &mut state.router, output);
}
