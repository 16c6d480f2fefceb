//! Account deletion confirmation window.

use egui::{Align2, Button, Context, RichText, Vec2, Window};
use keyrace_business::{DeleteDialog, ProfileMenu};

use crate::utils::colors::COLOR_RED;

pub const DELETE_DIALOG_TITLE: &str = "Delete account";

/// What the user chose in the dialog this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteChoice {
    Cancel,
    Delete,
}

/// Draws the dialog if it is open. Never draws anything before the menu
/// entry was first chosen.
pub fn delete_confirmation(ctx: &Context, menu: &ProfileMenu) -> Option<DeleteChoice> {
    if !menu.is_dialog_loaded() {
        return None;
    }
    let confirmation = menu.confirmation()?;
    let deleting = menu.dialog() == DeleteDialog::Deleting;
    let mut choice = None;

    Window::new(DELETE_DIALOG_TITLE)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(format!(
                "This permanently deletes the account of {} and all of its races.",
                confirmation.display_name
            ));
            ui.label(
                RichText::new(format!("User id: {}", confirmation.user_id))
                    .monospace()
                    .weak(),
            );

            if let Some(error) = menu.error() {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("Error: {error}")).color(COLOR_RED));
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.add_enabled(!deleting, Button::new("Cancel")).clicked() {
                    choice = Some(DeleteChoice::Cancel);
                }
                let label = if deleting { "Deleting..." } else { "Delete" };
                let delete = Button::new(RichText::new(label).color(COLOR_RED));
                if ui.add_enabled(!deleting, delete).clicked() {
                    choice = Some(DeleteChoice::Delete);
                }
                if deleting {
                    ui.spinner();
                }
            });
        });

    choice
}
