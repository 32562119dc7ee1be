//! Per-table view state.
//!
//! [`ViewState`] holds what the user has chosen for one table: free-text
//! search, per-column filters, the active sort and the page window. It is a
//! plain value; [`derive`](crate::derive) reads it, and the mutators here are
//! the only way it changes.

use dataui_query::{OrderBy, QueryOptions};
use tracing::trace;

use crate::column::ColumnSpec;

/// Filter value that means "no constraint" for a column.
pub const FILTER_ALL: &str = "all";

/// Page size a fresh table starts with.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Search, filter, sort and pagination selections for one table.
///
/// # Example
///
/// ```
/// use dataui_view::ViewState;
/// use dataui_query::Dir;
///
/// let mut state = ViewState::default();
/// state.apply_sort("name");
/// state.apply_sort("name");
/// assert_eq!(state.sort().map(|s| s.dir), Some(Dir::Desc));
///
/// state.set_page(3);
/// state.set_page_size(25);
/// assert_eq!(state.current_page(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    search_term: String,
    column_filters: Vec<(String, String)>,
    sort: Option<OrderBy>,
    current_page: usize,
    page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    /// Creates an empty state on page 1 with the given page size.
    ///
    /// A page size of zero is treated as one.
    pub fn with_page_size(page_size: usize) -> Self {
        ViewState {
            search_term: String::new(),
            column_filters: Vec::new(),
            sort: None,
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    /// Replaces the free-text search term.
    pub fn apply_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        trace!(term = %self.search_term, "search term set");
    }

    /// Sets or clears a column filter.
    ///
    /// An empty value or [`FILTER_ALL`] removes the filter. Setting a key that
    /// is already filtered keeps its position; a removed key that is set
    /// again goes to the end.
    pub fn apply_column_filter(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() || value == FILTER_ALL {
            self.column_filters.retain(|(k, _)| k != key);
            trace!(key, "column filter cleared");
            return;
        }

        trace!(key, value = %value, "column filter set");
        match self.column_filters.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.column_filters.push((key.to_string(), value)),
        }
    }

    /// Sorts by `field`, or flips the direction if it is already the sort field.
    pub fn apply_sort(&mut self, field: &str) {
        let next = OrderBy::toggled(self.sort.as_ref(), field);
        trace!(field, dir = %next.dir, "sort set");
        self.sort = Some(next);
    }

    /// Removes the active sort, restoring input order.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Moves to page `page`. Zero is treated as page 1.
    ///
    /// The upper bound depends on the records, so it is enforced by
    /// [`Table`](crate::Table) rather than here.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Changes the page size and returns to page 1.
    ///
    /// Row offsets of the old pages no longer line up with the new size, so
    /// the page always resets. A size of zero is treated as one.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.current_page = 1;
        trace!(page_size = self.page_size, "page size set");
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the free-text search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Returns the active column filters in insertion order.
    pub fn column_filters(&self) -> &[(String, String)] {
        &self.column_filters
    }

    /// Returns the filter value for a column, or `""` if unfiltered.
    pub fn column_filter(&self, key: &str) -> &str {
        self.column_filters
            .iter()
            .find(|(k, _)| k == key)
            .map_or("", |(_, v)| v.as_str())
    }

    /// Returns the active sort, if any.
    pub fn sort(&self) -> Option<&OrderBy> {
        self.sort.as_ref()
    }

    /// Returns the 1-based current page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns `true` if no search, filter or sort is active.
    pub fn is_pristine(&self) -> bool {
        self.search_term.is_empty() && self.column_filters.is_empty() && self.sort.is_none()
    }

    // ========================================================================
    // Query snapshot
    // ========================================================================

    /// Snapshots this state as options for a remote query.
    ///
    /// Fields are the column keys in declaration order and search values are
    /// the column filters. The free-text search term stays client-side. Every
    /// explicit query asks the remote side to bypass its cache.
    pub fn build_query_options(&self, columns: &[ColumnSpec]) -> QueryOptions {
        let mut options = QueryOptions::new().fields(columns.iter().map(|c| c.key.as_str()));
        for (key, value) in &self.column_filters {
            options = options.search(key.as_str(), value.as_str());
        }
        options
            .orderings(self.sort.iter().cloned())
            .page(self.current_page as u64)
            .limit(self.page_size as u64)
            .reset_cache(true)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataui_query::Dir;

    #[test]
    fn default_state() {
        let state = ViewState::default();
        assert_eq!(state.search_term(), "");
        assert!(state.column_filters().is_empty());
        assert!(state.sort().is_none());
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.page_size(), DEFAULT_PAGE_SIZE);
        assert!(state.is_pristine());
    }

    #[test]
    fn all_and_empty_clear_filters() {
        let mut state = ViewState::default();
        state.apply_column_filter("status", "active");
        assert_eq!(state.column_filter("status"), "active");

        state.apply_column_filter("status", "all");
        assert!(state.column_filters().is_empty());

        state.apply_column_filter("status", "active");
        state.apply_column_filter("status", "");
        assert!(state.column_filters().is_empty());
    }

    #[test]
    fn filters_keep_insertion_order() {
        let mut state = ViewState::default();
        state.apply_column_filter("name", "Jo");
        state.apply_column_filter("grade", "10");
        state.apply_column_filter("name", "Ann");

        assert_eq!(
            state.column_filters(),
            [
                ("name".to_string(), "Ann".to_string()),
                ("grade".to_string(), "10".to_string()),
            ]
        );

        state.apply_column_filter("name", "");
        state.apply_column_filter("name", "Bea");
        assert_eq!(state.column_filters()[1].0, "name");
    }

    #[test]
    fn sort_toggles_and_switches() {
        let mut state = ViewState::default();
        state.apply_sort("name");
        assert_eq!(state.sort(), Some(&OrderBy::asc("name")));

        state.apply_sort("name");
        assert_eq!(state.sort(), Some(&OrderBy::desc("name")));

        state.apply_sort("id");
        assert_eq!(state.sort(), Some(&OrderBy::asc("id")));

        state.clear_sort();
        assert!(state.sort().is_none());
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut state = ViewState::default();
        state.set_page(3);
        assert_eq!(state.current_page(), 3);

        state.set_page_size(5);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.page_size(), 5);
    }

    #[test]
    fn zero_page_and_size_are_coerced() {
        let mut state = ViewState::default();
        state.set_page(0);
        assert_eq!(state.current_page(), 1);

        state.set_page_size(0);
        assert_eq!(state.page_size(), 1);
    }

    #[test]
    fn query_options_snapshot() {
        let columns = vec![ColumnSpec::new("id", "ID"), ColumnSpec::new("name", "Name")];
        let mut state = ViewState::default();
        state.apply_search("free text");
        state.apply_column_filter("name", "Jo");
        state.apply_sort("id");
        state.set_page(2);

        let options = state.build_query_options(&columns);
        assert_eq!(options.get_fields(), ["id", "name"]);
        assert_eq!(
            options.get_search(),
            [("name".to_string(), Some("Jo".to_string()))]
        );
        assert_eq!(options.get_sort(), [OrderBy::new("id", Dir::Asc)]);
        assert_eq!(options.get_page(), Some(2));
        assert_eq!(options.get_limit(), Some(10));
        assert!(options.get_reset_cache());
    }

    #[test]
    fn query_options_without_sort() {
        let options = ViewState::default().build_query_options(&[]);
        assert!(options.get_sort().is_empty());
        assert!(options.get_fields().is_empty());
        assert!(options.get_reset_cache());
    }
}
