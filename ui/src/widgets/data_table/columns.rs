//! Column sizing for the race tables.

use egui_extras::Column;
use keyrace_business::TableSchema;

pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 24.0;
pub const MIN_COLUMN_WIDTH: f32 = 80.0;

/// One flexible column per schema column, sharing the width evenly.
#[inline]
pub fn table_columns(schema: &TableSchema) -> Vec<Column> {
    schema
        .columns
        .iter()
        .map(|_| Column::remainder().at_least(MIN_COLUMN_WIDTH).clip(true))
        .collect()
}
