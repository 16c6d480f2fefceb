//! Rendering for [`TableAdapter`]-driven tables.
//!
//! The widget never sorts or slices: it draws whatever rows the adapter holds
//! and reports interactions back to the caller, who routes them through
//! [`TableAdapter::dispatch`].
//!
//! - `columns`: column sizing
//! - `header`: sortable header row
//! - `footer`: page size selector and navigation buttons
//! - `cells`: cell rendering helpers

pub mod cells;
pub mod columns;
pub mod footer;
pub mod header;

use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;
use keyrace_business::{BodyContent, ColumnDef, TableAdapter, TableEvent};

use self::cells::{render_empty_row, render_placeholder_cell};
use self::columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use self::footer::render_table_footer;
use self::header::render_table_header;

pub const NO_RESULTS: &str = "No results.";

/// What the user did with the table this frame.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DataTableOutput {
    /// Header, page size or page navigation interaction.
    pub event: Option<TableEvent>,
    /// Target of a clicked link cell.
    pub navigate: Option<String>,
}

/// Draws `table` with one `cell` call per visible cell.
///
/// `cell` returns a link target when the cell was clicked.
pub fn data_table<R>(
    ui: &mut Ui,
    id_salt: &str,
    table: &TableAdapter<R>,
    mut cell: impl FnMut(&mut Ui, &ColumnDef, &R) -> Option<String>,
) -> DataTableOutput {
    let schema = *table.schema();
    let content = table.body();
    let mut output = DataTableOutput::default();

    ui.push_id(id_salt, |ui| {
        let mut builder = TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .vscroll(false)
            .cell_layout(Layout::left_to_right(Align::Center));
        for column in table_columns(&schema) {
            builder = builder.column(column);
        }

        builder
            .header(HEADER_HEIGHT, |mut header| {
                output.event = render_table_header(&mut header, table);
            })
            .body(|mut body| match content {
                BodyContent::Rows => {
                    for item in table.rows() {
                        body.row(ROW_HEIGHT, |mut row| {
                            for column in schema.columns {
                                row.col(|ui| {
                                    if let Some(target) = cell(ui, column, item) {
                                        output.navigate = Some(target);
                                    }
                                });
                            }
                        });
                    }
                }
                BodyContent::Placeholder => {
                    for _ in 0..table.state().per_page() {
                        body.row(ROW_HEIGHT, |mut row| {
                            for _ in schema.columns {
                                row.col(render_placeholder_cell);
                            }
                        });
                    }
                }
                BodyContent::Empty => {}
            });

        if content == BodyContent::Empty {
            render_empty_row(ui);
        }

        ui.separator();
        if let Some(event) = render_table_footer(ui, table) {
            output.event = Some(event);
        }
    });

    output
}
