//! Table configuration.

use serde::{Deserialize, Serialize};

use crate::state::DEFAULT_PAGE_SIZE;

/// Page-size settings shared by the tables of an application.
///
/// Every field has a default, so a partial JSON object (or none at all)
/// deserializes.
///
/// ```
/// use dataui_view::TableConfig;
///
/// let config: TableConfig = serde_json::from_str(r#"{"default_page_size": 25}"#).unwrap();
/// assert_eq!(config.default_page_size, 25);
/// assert_eq!(config.page_size_options, [5, 10, 25, 50]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Page size a new table starts with.
    pub default_page_size: usize,
    /// Page sizes offered to the user.
    pub page_size_options: Vec<usize>,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: vec![5, 10, 25, 50],
        }
    }
}

impl TableConfig {
    /// Returns `true` if `page_size` is one of the offered sizes.
    pub fn offers(&self, page_size: usize) -> bool {
        self.page_size_options.contains(&page_size)
    }
}
