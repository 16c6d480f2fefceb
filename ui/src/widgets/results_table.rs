//! Public results: who raced and how long it took.

use egui::{Image, Ui, vec2};
use keyrace_business::{ColumnDef, ResultWithUser, TableAdapter, User, format_seconds};

use super::data_table::cells::{render_link_cell, render_text_cell};
use super::data_table::{DataTableOutput, data_table};

const AVATAR_SIZE: f32 = 20.0;

/// Profile path of a racer.
pub fn profile_href(user: &User) -> String {
    format!("/{}", user.id)
}

pub fn results_table(ui: &mut Ui, table: &TableAdapter<ResultWithUser>) -> DataTableOutput {
    data_table(ui, "results_table", table, render_cell)
}

fn render_cell(ui: &mut Ui, column: &ColumnDef, row: &ResultWithUser) -> Option<String> {
    match column.id {
        "user" => render_user_cell(ui, &row.user),
        "takenTime" => {
            render_text_cell(ui, format_seconds(row.result.taken_time));
            None
        }
        _ => None,
    }
}

fn render_user_cell(ui: &mut Ui, user: &User) -> Option<String> {
    if let Some(image) = &user.image {
        ui.add(
            Image::new(image.as_str())
                .fit_to_exact_size(vec2(AVATAR_SIZE, AVATAR_SIZE))
                .corner_radius(AVATAR_SIZE / 2.0),
        );
    }
    render_link_cell(ui, &user.name).then(|| profile_href(user))
}
