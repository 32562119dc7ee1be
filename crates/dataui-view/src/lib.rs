//! DataUI view - client-side search, filter, sort and pagination for tables.
//!
//! A table is a list of records plus the user's current view of them: a
//! free-text search, per-column filters, one active sort and a page window.
//! This crate keeps that view as a plain [`ViewState`] value, derives the
//! visible rows from it with a pure [`derive`] function, and snapshots it as
//! [`QueryOptions`](dataui_query::QueryOptions) when the caller wants to ask a
//! remote API for the same view.
//!
//! - Closed value types: text, numbers, dates, statuses ([`Value`], [`Field`])
//! - Case-insensitive substring search over every field
//! - Per-column filters, where `""` and `"all"` mean "no constraint"
//! - Stable sort under a total order across value types
//! - Page clamping, so the current page always exists
//!
//! # Quick Start
//!
//! ```rust
//! use dataui_view::{ColumnSpec, Field, Record, Table, ValueKind};
//!
//! let columns = vec![
//!     ColumnSpec::new("id", "ID").sortable().kind(ValueKind::Number),
//!     ColumnSpec::new("name", "Name").sortable().filterable(),
//!     ColumnSpec::new("status", "Status").filterable().kind(ValueKind::Status),
//! ];
//! let records = vec![
//!     Record::new().with("id", 1).with("name", "Ada").with("status", Field::status("active")),
//!     Record::new().with("id", 2).with("name", "Alan").with("status", Field::status("inactive")),
//! ];
//!
//! let mut table = Table::new(columns, records);
//! table.apply_column_filter("status", "all");
//! assert_eq!(table.derive().total(), 2);
//!
//! table.apply_column_filter("name", "Jo");
//! table.apply_sort("id");
//! table.set_page(2);
//! assert_eq!(table.state().current_page(), 1);
//!
//! let query = table.query(|_| {});
//! assert!(query.starts_with("fields=id%2Cname%2Cstatus&search%5Bname%5D=Jo"));
//! ```
//!
//! # Derivation
//!
//! ```text
//! records ─▶ search ∧ column filters ─▶ stable sort ─▶ page window
//!                                          │
//!                           total, page count ◀┘
//! ```
//!
//! The search term is a client-only concept: it narrows the local rows but is
//! never part of the query string.

mod column;
mod config;
mod dataset;
mod derive;
mod error;
mod filter;
mod ordering;
mod record;
mod render;
mod state;
mod table;
mod traits;
mod value;

// Re-export public API
pub use column::{find_column, ColumnSpec, ValueKind};
pub use config::TableConfig;
pub use dataset::Dataset;
pub use derive::{derive, page_count, Derived};
pub use error::{DataUiError, Result};
pub use filter::{Clause, Filter};
pub use ordering::{compare_by, compare_values, sort_rows};
pub use record::{Field, Record};
pub use render::{format_number, render_cell, MISSING};
pub use state::{ViewState, DEFAULT_PAGE_SIZE, FILTER_ALL};
pub use table::{Summary, Table};
pub use traits::Browsable;
pub use value::{Number, Value};

pub use dataui_query::{Dir, OrderBy, QueryOptions};
