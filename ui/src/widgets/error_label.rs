use egui::{Response, RichText, Ui};

use crate::utils::colors::COLOR_RED;

/// `Error: <message>` in the error colour.
pub fn error_label(ui: &mut Ui, message: &str) -> Response {
    ui.label(RichText::new(format!("Error: {message}")).color(COLOR_RED))
}
