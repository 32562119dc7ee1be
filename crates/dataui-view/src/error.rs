//! Error types for the view crate.
//!
//! Table operations never fail. Errors only come from loading records and
//! configuration out of JSON.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a dataset.
#[derive(Debug, Error)]
pub enum DataUiError {
    /// The input is not valid JSON or does not have the dataset shape.
    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The dataset file could not be opened.
    #[error("failed to read dataset {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record is not a JSON object.
    #[error("record {index} is not a JSON object")]
    NotAnObject { index: usize },

    /// A field holds a value that is not a scalar.
    #[error("field '{field}' holds an unsupported {found} value")]
    UnsupportedValue { field: String, found: &'static str },
}

/// Result type for dataset loading.
pub type Result<T> = std::result::Result<T, DataUiError>;
