//! Query options builder.
//!
//! The [`QueryOptions`] struct provides a fluent builder API for describing a
//! remote table query. Once built it is only read: the encoder and the
//! collaborator that ships it never change it.

use serde::{Deserialize, Serialize};

use crate::encode::encode;
use crate::sort::{Dir, OrderBy};

/// A relation to join into the remote result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Join {
    /// The relation field to join on.
    pub field: String,
}

impl Join {
    /// Creates a join on the given relation field.
    pub fn new(field: impl Into<String>) -> Self {
        Join {
            field: field.into(),
        }
    }
}

/// Structured, serializable description of a remote table query.
///
/// All parts are optional. Absent parts are left out of the encoded query
/// string rather than rejected.
///
/// # Example
///
/// ```
/// use dataui_query::{Dir, QueryOptions};
///
/// let options = QueryOptions::new()
///     .fields(["id", "name", "grade"])
///     .search("grade", "10")
///     .join("classes")
///     .order_by("name", Dir::Desc)
///     .page(1)
///     .limit(25)
///     .build();
///
/// assert_eq!(options.get_fields(), ["id", "name", "grade"]);
/// assert_eq!(options.get_limit(), Some(25));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOptions {
    #[serde(default)]
    fields: Vec<String>,
    #[serde(default, with = "search_map")]
    search: Vec<(String, Option<String>)>,
    #[serde(default, rename = "join")]
    joins: Vec<Join>,
    #[serde(default)]
    sort: Vec<OrderBy>,
    #[serde(default)]
    page: Option<u64>,
    #[serde(default)]
    limit: Option<u64>,
    #[serde(default)]
    reset_cache: bool,
}

impl QueryOptions {
    /// Creates empty options. They encode to an empty string.
    pub fn new() -> Self {
        QueryOptions::default()
    }

    // ========================================================================
    // Builders
    // ========================================================================

    /// Sets the projected fields, in the order they should be requested.
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a search value for a column.
    ///
    /// Re-adding a key replaces its value but keeps its original position.
    pub fn search(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.search_opt(key, Some(value.into()))
    }

    /// Adds a search entry whose value may be absent.
    ///
    /// Absent and empty values are kept in the options but never encoded.
    pub fn search_opt(mut self, key: impl Into<String>, value: Option<String>) -> Self {
        let key = key.into();
        match self.search.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.search.push((key, value)),
        }
        self
    }

    /// Adds a join on a relation field.
    pub fn join(mut self, field: impl Into<String>) -> Self {
        self.joins.push(Join::new(field));
        self
    }

    /// Adds an ordering entry.
    pub fn order_by(mut self, field: impl Into<String>, dir: Dir) -> Self {
        self.sort.push(OrderBy::new(field, dir));
        self
    }

    /// Appends already-built ordering entries.
    pub fn orderings<I>(mut self, orderings: I) -> Self
    where
        I: IntoIterator<Item = OrderBy>,
    {
        self.sort.extend(orderings);
        self
    }

    /// Sets the 1-based page number. Zero means "no page".
    pub fn page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size. Zero means "no limit".
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Asks the remote side to bypass its cache.
    pub fn reset_cache(mut self, reset: bool) -> Self {
        self.reset_cache = reset;
        self
    }

    /// Finalizes the options.
    pub fn build(self) -> Self {
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the projected fields.
    pub fn get_fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns the search entries in insertion order.
    pub fn get_search(&self) -> &[(String, Option<String>)] {
        &self.search
    }

    /// Returns the joins.
    pub fn get_joins(&self) -> &[Join] {
        &self.joins
    }

    /// Returns the ordering entries.
    pub fn get_sort(&self) -> &[OrderBy] {
        &self.sort
    }

    /// Returns the page number, if set.
    pub fn get_page(&self) -> Option<u64> {
        self.page
    }

    /// Returns the page size, if set.
    pub fn get_limit(&self) -> Option<u64> {
        self.limit
    }

    /// Returns `true` if the remote cache should be bypassed.
    pub fn get_reset_cache(&self) -> bool {
        self.reset_cache
    }

    /// Encodes these options as a URL query string.
    ///
    /// Shorthand for [`encode`].
    pub fn query(&self) -> String {
        encode(self)
    }
}

/// Serde form of the search entries: a JSON object whose keys keep their
/// insertion order. A repeated key replaces the earlier value in place.
mod search_map {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};

    type Entries = Vec<(String, Option<String>)>;

    pub fn serialize<S: Serializer>(entries: &Entries, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Entries, D::Error> {
        deserializer.deserialize_map(EntriesVisitor)
    }

    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Entries;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of column keys to search values")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Entries, A::Error> {
            let mut entries: Entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, value)) = access.next_entry::<String, Option<String>>()? {
                match entries.iter_mut().find(|(k, _)| *k == key) {
                    Some(entry) => entry.1 = value,
                    None => entries.push((key, value)),
                }
            }
            Ok(entries)
        }
    }
}
