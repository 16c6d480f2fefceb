//! Cell rendering shared by the race tables.
//!
//! Each function renders one kind of cell; links return `true` when clicked
//! so the caller can navigate.

use egui::{Color32, CornerRadius, RichText, Sense, Ui, vec2};

use crate::utils::colors::COLOR_PLACEHOLDER;

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: impl Into<RichText>) {
    let text: RichText = text.into();
    ui.label(text);
}

#[inline]
pub fn render_colored_cell(ui: &mut Ui, text: &str, color: Color32) {
    ui.label(RichText::new(text).color(color));
}

#[inline]
pub fn render_monospace_cell(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).monospace());
}

/// Renders an in-app link. Returns whether it was clicked.
#[inline]
pub fn render_link_cell(ui: &mut Ui, text: &str) -> bool {
    ui.link(text).clicked()
}

/// A grey bar standing in for content that is still loading.
#[inline]
pub fn render_placeholder_cell(ui: &mut Ui) {
    let width = (ui.available_width() * 0.7).max(24.0);
    let (rect, _) = ui.allocate_exact_size(vec2(width, 12.0), Sense::hover());
    ui.painter()
        .rect_filled(rect, CornerRadius::same(4), COLOR_PLACEHOLDER);
}

/// Full-width row shown when an idle table has no rows.
#[inline]
pub fn render_empty_row(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.label(RichText::new(super::NO_RESULTS).weak());
        ui.add_space(8.0);
    });
}
