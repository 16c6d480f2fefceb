//! Profile action menu in the top bar.
//!
//! The menu holds one entry. Choosing it only flips the dialog state; the
//! confirmation window is drawn by [`delete_confirmation`] and only once it
//! has been asked for.
//!
//! [`delete_confirmation`]: super::delete_confirmation

use egui::{RichText, Ui};
use keyrace_business::{DELETE_ACCOUNT_LABEL, ProfileMenu};

use crate::utils::colors::COLOR_RED;

pub fn profile_menu(ui: &mut Ui, display_name: &str, menu: &mut ProfileMenu) {
    ui.menu_button(format!("👤 {display_name}"), |ui| {
        if ui
            .button(RichText::new(DELETE_ACCOUNT_LABEL).color(COLOR_RED))
            .clicked()
        {
            menu.select_delete_account();
            ui.close();
        }
    });
}
