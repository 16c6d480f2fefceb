use egui::{RichText, Ui};

pub const NOT_FOUND_HEADING: &str = "404";
pub const NOT_FOUND_MESSAGE: &str = "This page could not be found.";

/// The page shown for unknown paths. The review page renders exactly this
/// for anyone who may not see the queue.
pub fn not_found_page(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(RichText::new(NOT_FOUND_HEADING).heading().strong());
        ui.label(NOT_FOUND_MESSAGE);
    });
}
