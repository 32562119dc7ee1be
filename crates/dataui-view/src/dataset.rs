//! Loading a table's columns and records from JSON.
//!
//! The JSON shape mirrors what a data table is handed by its page:
//!
//! ```json
//! {
//!   "title": "Students",
//!   "description": "All enrolled students",
//!   "columns": [{ "key": "id", "label": "ID", "sortable": true, "type": "number" }],
//!   "records": [{ "id": 1 }],
//!   "config": { "default_page_size": 10 }
//! }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value as Json;
use tracing::debug;

use crate::column::ColumnSpec;
use crate::config::TableConfig;
use crate::error::{DataUiError, Result};
use crate::record::Record;
use crate::table::Table;

#[derive(Deserialize)]
struct RawDataset {
    title: String,
    #[serde(default)]
    description: Option<String>,
    columns: Vec<ColumnSpec>,
    #[serde(default)]
    records: Vec<Json>,
    #[serde(default)]
    config: TableConfig,
}

/// A titled table definition with its records.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Table title.
    pub title: String,
    /// Optional subtitle.
    pub description: Option<String>,
    /// Declared columns.
    pub columns: Vec<ColumnSpec>,
    /// Records, typed by their columns.
    pub records: Vec<Record>,
    /// Page-size configuration.
    pub config: TableConfig,
}

impl Dataset {
    /// Parses a dataset from a JSON string.
    pub fn from_json_str(input: &str) -> Result<Dataset> {
        Dataset::from_raw(serde_json::from_str(input)?)
    }

    /// Parses a dataset from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Dataset> {
        Dataset::from_raw(serde_json::from_reader(reader)?)
    }

    /// Opens and parses a dataset file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Dataset> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DataUiError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Dataset::from_reader(BufReader::new(file))
    }

    fn from_raw(raw: RawDataset) -> Result<Dataset> {
        let records = raw
            .records
            .iter()
            .enumerate()
            .map(|(index, value)| Record::from_json(value, &raw.columns, index))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            title = %raw.title,
            columns = raw.columns.len(),
            records = records.len(),
            "loaded dataset"
        );

        Ok(Dataset {
            title: raw.title,
            description: raw.description,
            columns: raw.columns,
            records,
            config: raw.config,
        })
    }

    /// Turns the dataset into a table, dropping title and description.
    pub fn into_table(self) -> Table {
        Table::with_config(self.columns, self.records, self.config)
    }
}
