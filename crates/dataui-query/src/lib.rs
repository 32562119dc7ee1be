//! Query options and query-string encoding for remote table APIs.
//!
//! A [`QueryOptions`] value describes what a table wants from a remote API:
//! which fields to return, per-column search values, joins, ordering and a
//! page window. [`encode`] turns it into a URL query string with a fixed
//! parameter order, so the same options always produce the same string.
//!
//! # Quick Start
//!
//! ```rust
//! use dataui_query::{Dir, QueryOptions};
//!
//! let query = QueryOptions::new()
//!     .fields(["id", "name"])
//!     .search("name", "Jo")
//!     .order_by("id", Dir::Asc)
//!     .page(2)
//!     .limit(10)
//!     .reset_cache(true)
//!     .build();
//!
//! assert_eq!(
//!     query.query(),
//!     "fields=id%2Cname&search%5Bname%5D=Jo&sort%5B0%5D%5Bfield%5D=id\
//!      &sort%5B0%5D%5Border%5D=ASC&page=2&limit=10&resetCache=true"
//! );
//! ```
//!
//! # Parameter Order
//!
//! ```text
//! fields=a,b                          (only when fields are present)
//! search[key]=value ...               (insertion order, empty values skipped)
//! join[i]=field ...                   (input order)
//! sort[i][field]=f&sort[i][order]=ASC (input order)
//! page=n                              (only when nonzero)
//! limit=n                             (only when nonzero)
//! resetCache=true                     (only when set)
//! ```
//!
//! Values are `application/x-www-form-urlencoded`, the same encoding a
//! browser's `URLSearchParams` produces.

mod encode;
mod options;
mod sort;

pub use encode::encode;
pub use options::{Join, QueryOptions};
pub use sort::{Dir, OrderBy};
