//! Moderation review page.

use egui::Ui;

use super::not_found_page;
use crate::state::{ReviewView, State};
use crate::widgets::{error_label, review_queue};

pub fn review_page(state: &mut State, ui: &mut Ui) {
    // Until the queue arrives the page looks exactly like an unknown route.
    let user = state.session.user();
    let is_admin = user.is_some_and(|user| user.is_admin());
    let known_non_admin = user.is_some_and(|user| !user.is_admin());

    let clicked = match &state.review {
        ReviewView::Ready(queue) if !known_non_admin => {
            ui.heading("Review queue");
            ui.add_space(8.0);
            if let Some(error) = &state.review_error {
                error_label(ui, error);
            }
            review_queue(ui, queue)
        }
        ReviewView::Failed(message) if is_admin => {
            error_label(ui, message);
            None
        }
        _ => {
            not_found_page(ui);
            None
        }
    };

    if let Some((snippet_id, decision)) = clicked {
        let ctx = ui.ctx().clone();
        state.decide(&snippet_id, decision, &ctx);
    }
}
