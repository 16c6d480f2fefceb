//! The signed-in user's recent races.

use egui::Ui;
use keyrace_business::{
    ColumnDef, Location, QueryParams, RaceResult, TableAdapter, accuracy_tier, format_date,
    truncate_id,
};

use super::data_table::cells::{
    render_colored_cell, render_link_cell, render_monospace_cell, render_text_cell,
};
use super::data_table::{DataTableOutput, data_table};
use crate::utils::colors::accuracy_color;

pub const RE_RACE_LABEL: &str = "Re-race";

/// Race page for a snippet.
pub fn race_href(snippet_id: &str) -> String {
    let query = QueryParams::new().merged([("snippetId", Some(snippet_id.to_owned()))]);
    Location::new("/race", query).href()
}

pub fn recent_races_table(ui: &mut Ui, table: &TableAdapter<RaceResult>) -> DataTableOutput {
    data_table(ui, "recent_races_table", table, render_cell)
}

fn render_cell(ui: &mut Ui, column: &ColumnDef, row: &RaceResult) -> Option<String> {
    match column.id {
        "snippetId" => {
            return render_link_cell(ui, RE_RACE_LABEL).then(|| race_href(&row.snippet_id));
        }
        "id" => render_monospace_cell(ui, &truncate_id(&row.id)),
        "errorCount" => render_text_cell(ui, row.error_count.to_string()),
        "accuracy" => render_colored_cell(
            ui,
            &format!("{:.0}%", row.accuracy * 100.0),
            accuracy_color(accuracy_tier(row.accuracy)),
        ),
        "cpm" => render_text_cell(ui, row.cpm.to_string()),
        "createdAt" => render_text_cell(ui, format_date(&row.created_at)),
        _ => {}
    }
    None
}
