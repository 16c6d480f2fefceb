//! Column schemas for the race tables.

/// A declared table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    /// Accessor key; also the column name used in the `sort` parameter.
    pub id: &'static str,
    pub header: &'static str,
    pub sortable: bool,
    /// Hover text shown next to the header.
    pub tooltip: Option<&'static str>,
}

impl ColumnDef {
    pub const fn sortable(id: &'static str, header: &'static str) -> Self {
        Self {
            id,
            header,
            sortable: true,
            tooltip: None,
        }
    }

    pub const fn fixed(id: &'static str, header: &'static str) -> Self {
        Self {
            id,
            header,
            sortable: false,
            tooltip: None,
        }
    }

    pub const fn with_tooltip(self, tooltip: &'static str) -> Self {
        Self {
            tooltip: Some(tooltip),
            ..self
        }
    }
}

/// An ordered, fixed set of columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub columns: &'static [ColumnDef],
}

impl TableSchema {
    pub const fn new(columns: &'static [ColumnDef]) -> Self {
        Self { columns }
    }

    pub fn column(&self, id: &str) -> Option<&'static ColumnDef> {
        self.columns.iter().find(|column| column.id == id)
    }

    pub fn is_sortable(&self, id: &str) -> bool {
        self.column(id).is_some_and(|column| column.sortable)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Public results table: who raced and how long it took.
pub const RESULTS_COLUMNS: TableSchema = TableSchema::new(&[
    ColumnDef::fixed("user", "User"),
    ColumnDef::sortable("takenTime", "Taken time"),
]);

/// The signed-in user's recent races on the dashboard.
pub const RECENT_RACES_COLUMNS: TableSchema = TableSchema::new(&[
    ColumnDef::fixed("snippetId", "Race"),
    ColumnDef::fixed("id", "Result Id"),
    ColumnDef::sortable("errorCount", "Errors"),
    ColumnDef::sortable("accuracy", "Accuracy"),
    ColumnDef::sortable("cpm", "Cpm").with_tooltip("Characters per minute"),
    ColumnDef::sortable("createdAt", "Date"),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_accessor_key() {
        let cpm = RECENT_RACES_COLUMNS.column("cpm").expect("cpm column");
        assert_eq!(cpm.header, "Cpm");
        assert_eq!(cpm.tooltip, Some("Characters per minute"));
        assert!(RECENT_RACES_COLUMNS.column("missing").is_none());
    }

    #[test]
    fn link_columns_are_not_sortable() {
        assert!(!RESULTS_COLUMNS.is_sortable("user"));
        assert!(RESULTS_COLUMNS.is_sortable("takenTime"));
        assert!(!RECENT_RACES_COLUMNS.is_sortable("snippetId"));
        assert!(!RECENT_RACES_COLUMNS.is_sortable("id"));
        assert!(!RECENT_RACES_COLUMNS.is_sortable("unknown"));
    }
}
