//! Column declarations.

use serde::{Deserialize, Serialize};

/// How a column's values are interpreted for loading and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Plain text.
    #[default]
    Text,
    /// Numeric values, displayed with thousands separators.
    Number,
    /// Calendar dates, displayed as `M/D/YYYY`.
    Date,
    /// Enum-like status labels such as `active` or `inactive`.
    Status,
}

/// One column of a table.
///
/// Declared once per table and never changed afterwards.
///
/// # Example
///
/// ```
/// use dataui_view::{ColumnSpec, ValueKind};
///
/// let column = ColumnSpec::new("enrolled", "Enrolled")
///     .sortable()
///     .kind(ValueKind::Date);
///
/// assert!(column.sortable);
/// assert!(!column.filterable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Record field this column shows.
    pub key: String,
    /// Header label.
    pub label: String,
    /// Whether clicking the header sorts by this column.
    #[serde(default)]
    pub sortable: bool,
    /// Whether the column has its own filter input.
    #[serde(default)]
    pub filterable: bool,
    /// Value interpretation.
    #[serde(default, rename = "type")]
    pub kind: ValueKind,
}

impl ColumnSpec {
    /// Creates a plain text column that is neither sortable nor filterable.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        ColumnSpec {
            key: key.into(),
            label: label.into(),
            sortable: false,
            filterable: false,
            kind: ValueKind::Text,
        }
    }

    /// Marks the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Marks the column filterable.
    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Sets the value kind.
    pub fn kind(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Finds a column by key.
pub fn find_column<'a>(columns: &'a [ColumnSpec], key: &str) -> Option<&'a ColumnSpec> {
    columns.iter().find(|column| column.key == key)
}
