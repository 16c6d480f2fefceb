//! Header row: sortable columns are clickable, the active one carries a
//! direction toggle.

use egui::{Button, RichText, Ui};
use egui_extras::TableRow;
use keyrace_business::{ColumnDef, ColumnSort, TableAdapter, TableEvent};

#[inline]
pub fn render_table_header<R>(
    header: &mut TableRow<'_, '_>,
    table: &TableAdapter<R>,
) -> Option<TableEvent> {
    let active = &table.state().sort;
    let enabled = !table.is_pending();
    let mut event = None;

    for column in table.schema().columns {
        header.col(|ui| {
            if let Some(clicked) = render_header_cell(ui, column, active, enabled) {
                event = Some(clicked);
            }
        });
    }

    event
}

fn render_header_cell(
    ui: &mut Ui,
    column: &ColumnDef,
    active: &ColumnSort,
    enabled: bool,
) -> Option<TableEvent> {
    let mut event = None;

    let mut response = if column.sortable {
        ui.add_enabled(
            enabled,
            Button::new(RichText::new(column.header).strong()).frame(false),
        )
    } else {
        ui.strong(column.header)
    };
    if let Some(tooltip) = column.tooltip {
        response = response.on_hover_text(tooltip);
    }
    if column.sortable && response.clicked() {
        event = Some(TableEvent::HeaderClicked(column.id.to_owned()));
    }

    if column.sortable && active.column == column.id {
        let arrow = if active.direction.is_desc() { "⬇" } else { "⬆" };
        if ui
            .add_enabled(enabled, Button::new(arrow).small())
            .on_hover_text("Toggle sort direction")
            .clicked()
        {
            event = Some(TableEvent::ToggleSortDirection);
        }
    }

    event
}
