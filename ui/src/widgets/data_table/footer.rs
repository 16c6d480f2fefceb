//! Footer: rows-per-page selector, page label and navigation buttons.

use egui::{Button, ComboBox, Ui};
use keyrace_business::{PAGE_SIZE_CHOICES, TableAdapter, TableEvent};

pub const ROWS_PER_PAGE_LABEL: &str = "Rows per page";

#[inline]
pub fn render_table_footer<R>(ui: &mut Ui, table: &TableAdapter<R>) -> Option<TableEvent> {
    let controls = table.controls();
    let enabled = !table.is_pending();
    let mut event = None;

    ui.horizontal(|ui| {
        ui.label(ROWS_PER_PAGE_LABEL);

        let current = table.state().per_page();
        let mut selected = current;
        ui.add_enabled_ui(enabled, |ui| {
            ComboBox::from_id_salt("per_page")
                .selected_text(current.to_string())
                .show_ui(ui, |ui| {
                    for size in PAGE_SIZE_CHOICES {
                        ui.selectable_value(&mut selected, size, size.to_string());
                    }
                });
        });
        if selected != current {
            event = Some(TableEvent::PageSizeSelected(selected));
        }

        ui.separator();
        ui.label(table.page_label());
        ui.separator();

        let buttons = [
            ("First", controls.first, TableEvent::FirstPage),
            ("Previous", controls.previous, TableEvent::PreviousPage),
            ("Next", controls.next, TableEvent::NextPage),
            ("Last", controls.last, TableEvent::LastPage),
        ];
        for (label, allowed, target) in buttons {
            if ui.add_enabled(allowed, Button::new(label)).clicked() {
                event = Some(target);
            }
        }
    });

    event
}
