//! Moderation queue cards.

use egui::{Button, Frame, Margin, RichText, ScrollArea, Ui};
use keyrace_business::{ReviewDecision, ReviewItem, ReviewQueue};

use crate::utils::colors::{COLOR_GREEN, COLOR_RED};

pub const EMPTY_QUEUE: &str = "Nothing to review.";

/// Renders every queued snippet. Returns the decision clicked this frame.
pub fn review_queue(ui: &mut Ui, queue: &ReviewQueue) -> Option<(String, ReviewDecision)> {
    if queue.is_empty() {
        ui.label(RichText::new(EMPTY_QUEUE).weak());
        return None;
    }

    let mut decision = None;
    ScrollArea::vertical().show(ui, |ui| {
        for item in queue.items() {
            let in_flight = queue.is_in_flight(&item.snippet_id);
            if let Some(chosen) = render_review_card(ui, item, in_flight) {
                decision = Some((item.snippet_id.clone(), chosen));
            }
            ui.add_space(8.0);
        }
    });
    decision
}

fn render_review_card(ui: &mut Ui, item: &ReviewItem, in_flight: bool) -> Option<ReviewDecision> {
    let mut decision = None;

    Frame::group(ui.style())
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            Frame::NONE
                .fill(ui.visuals().extreme_bg_color)
                .inner_margin(Margin::same(8))
                .corner_radius(4.0)
                .show(ui, |ui| {
                    ui.label(RichText::new(&item.code).monospace());
                });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(item.total_characters_label());
                ui.separator();
                ui.label(format!("Rating: {}", item.rating));
            });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let accept = Button::new(RichText::new("Accept").color(COLOR_GREEN));
                if ui.add_enabled(!in_flight, accept).clicked() {
                    decision = Some(ReviewDecision::Accept);
                }
                let reject = Button::new(RichText::new("Reject").color(COLOR_RED));
                if ui.add_enabled(!in_flight, reject).clicked() {
                    decision = Some(ReviewDecision::Reject);
                }
                if in_flight {
                    ui.spinner();
                }
            });
        });

    decision
}
