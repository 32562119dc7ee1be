//! The table reducer.
//!
//! [`Table`] owns one table's columns, records and [`ViewState`] and is the
//! thin layer a UI calls on user events. Each mutation goes through the view
//! state and then pulls the current page back into range, so the page never
//! points past the last page of the filtered rows.

use std::fmt;

use dataui_query::QueryOptions;
use tracing::debug;

use crate::column::{find_column, ColumnSpec};
use crate::config::TableConfig;
use crate::derive::{derive, page_count, Derived};
use crate::filter::Filter;
use crate::record::Record;
use crate::state::ViewState;
use crate::traits::Browsable;

/// Result counts shown above and below a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Rows on the current page.
    pub showing: usize,
    /// Rows that pass the filters.
    pub total: usize,
    /// Current page, 1-based.
    pub page: usize,
    /// Number of pages.
    pub page_count: usize,
}

impl Summary {
    /// `Showing {showing} of {total} results`
    pub fn results_line(&self) -> String {
        format!("Showing {} of {} results", self.showing, self.total)
    }

    /// `Page {page} of {page_count}`
    pub fn page_line(&self) -> String {
        format!("Page {} of {}", self.page, self.page_count)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.results_line(), self.page_line())
    }
}

/// One table: its columns, its records, and the user's view of them.
///
/// # Example
///
/// ```
/// use dataui_view::{ColumnSpec, Field, Record, Table};
///
/// let columns = vec![
///     ColumnSpec::new("id", "ID").sortable(),
///     ColumnSpec::new("name", "Name").sortable().filterable(),
/// ];
/// let records = vec![
///     Record::new().with("id", 1).with("name", "Jo March"),
///     Record::new().with("id", 2).with("name", "Amy March"),
///     Record::new().with("id", 3).with("name", "Laurie"),
/// ];
///
/// let mut table = Table::new(columns, records);
/// table.apply_column_filter("name", "march");
/// table.apply_sort("name");
///
/// let view = table.derive();
/// assert_eq!(view.total(), 2);
/// assert_eq!(view.page()[0].get("name"), Some(&Field::from("Amy March")));
///
/// let query = table.query(|q| println!("GET /students?{q}"));
/// assert!(query.ends_with("resetCache=true"));
/// ```
#[derive(Debug, Clone)]
pub struct Table<T = Record> {
    columns: Vec<ColumnSpec>,
    records: Vec<T>,
    state: ViewState,
    config: TableConfig,
    loading: bool,
}

impl<T: Browsable> Table<T> {
    /// Creates a table with the default configuration.
    pub fn new(columns: Vec<ColumnSpec>, records: Vec<T>) -> Self {
        Table::with_config(columns, records, TableConfig::default())
    }

    /// Creates a table that starts at the configured page size.
    pub fn with_config(columns: Vec<ColumnSpec>, records: Vec<T>, config: TableConfig) -> Self {
        Table {
            state: ViewState::with_page_size(config.default_page_size),
            columns,
            records,
            config,
            loading: false,
        }
    }

    // ========================================================================
    // User actions
    // ========================================================================

    /// Replaces the free-text search term.
    pub fn apply_search(&mut self, term: impl Into<String>) {
        self.state.apply_search(term);
        self.clamp_page();
    }

    /// Sets or clears a column filter (`""` and `"all"` clear it).
    pub fn apply_column_filter(&mut self, key: &str, value: impl Into<String>) {
        self.state.apply_column_filter(key, value);
        self.clamp_page();
    }

    /// Sorts by a column, or flips the direction if it is already active.
    ///
    /// Columns declared as not sortable are ignored. Fields that are not
    /// declared columns at all are still sortable.
    pub fn apply_sort(&mut self, field: &str) {
        if find_column(&self.columns, field).is_some_and(|column| !column.sortable) {
            debug!(field, "ignoring sort on non-sortable column");
            return;
        }
        self.state.apply_sort(field);
    }

    /// Moves to a page, clamped to `1..=page_count`.
    pub fn set_page(&mut self, page: usize) {
        self.state.set_page(page);
        self.clamp_page();
    }

    /// Changes the page size and returns to page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.state.set_page_size(page_size);
        debug!(page_size = self.state.page_size(), "page size changed");
    }

    /// Moves forward one page, stopping at the last page.
    pub fn next_page(&mut self) {
        self.set_page(self.state.current_page().saturating_add(1));
    }

    /// Moves back one page, stopping at page 1.
    pub fn prev_page(&mut self) {
        self.set_page(self.state.current_page().saturating_sub(1));
    }

    /// Replaces all records, as after a refresh.
    ///
    /// The view state is kept; the page is pulled back into range.
    pub fn replace_records(&mut self, records: Vec<T>) {
        debug!(
            old = self.records.len(),
            new = records.len(),
            "replacing table records"
        );
        self.records = records;
        self.clamp_page();
    }

    /// Marks whether the collaborator is waiting on new records.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    // ========================================================================
    // Derived output
    // ========================================================================

    /// Filters, sorts and pages the records.
    pub fn derive(&self) -> Derived<'_, T> {
        derive(&self.records, &self.state)
    }

    /// Returns the result counts for the current state.
    pub fn summary(&self) -> Summary {
        let derived = self.derive();
        Summary {
            showing: derived.page().len(),
            total: derived.total(),
            page: self.state.current_page(),
            page_count: derived.page_count(),
        }
    }

    /// Snapshots the view state as remote query options.
    pub fn build_query_options(&self) -> QueryOptions {
        self.state.build_query_options(&self.columns)
    }

    /// Runs a "query" action: encodes the current state and hands the query
    /// string to `send`.
    ///
    /// Transport is entirely up to `send`; the string is also returned.
    pub fn query<F>(&self, send: F) -> String
    where
        F: FnOnce(&str),
    {
        let query = self.build_query_options().query();
        debug!(%query, "query action");
        send(&query);
        query
    }

    /// Returns the arrow for a column header: `↑` or `↓` when it is the
    /// active sort of a sortable column.
    pub fn sort_indicator(&self, key: &str) -> Option<char> {
        let column = find_column(&self.columns, key)?;
        let sort = self.state.sort()?;
        if !column.sortable || sort.field != key {
            return None;
        }
        Some(if sort.dir.is_asc() { '↑' } else { '↓' })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Returns the declared columns.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Returns the columns that take a per-column filter input.
    pub fn filterable_columns(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.columns.iter().filter(|column| column.filterable)
    }

    /// Returns all records, unfiltered.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Returns the view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Returns the configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Returns `true` while the collaborator is loading records.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn clamp_page(&mut self) {
        let total = Filter::from_state(&self.state).count(&self.records);
        let last = page_count(total, self.state.page_size());
        let current = self.state.current_page();
        if current > last {
            debug!(from = current, to = last, "clamping page into range");
            self.state.set_page(last);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ValueKind;
    use crate::record::Field;
    use dataui_query::{Dir, OrderBy};

    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::new("id", "ID").sortable(),
            ColumnSpec::new("name", "Name").sortable().filterable(),
            ColumnSpec::new("status", "Status")
                .filterable()
                .kind(ValueKind::Status),
        ]
    }

    fn students(n: i64) -> Vec<Record> {
        (1..=n)
            .map(|id| {
                let status = if id % 2 == 0 { "inactive" } else { "active" };
                Record::new()
                    .with("id", id)
                    .with("name", format!("Student {id}"))
                    .with("status", Field::status(status))
            })
            .collect()
    }

    #[test]
    fn starts_at_configured_page_size() {
        let config = TableConfig {
            default_page_size: 25,
            ..TableConfig::default()
        };
        let table = Table::with_config(columns(), students(3), config);
        assert_eq!(table.state().page_size(), 25);
        assert_eq!(table.config().default_page_size, 25);
    }

    #[test]
    fn filter_that_shrinks_rows_clamps_page() {
        let mut table = Table::new(columns(), students(30));
        table.set_page(3);
        assert_eq!(table.state().current_page(), 3);

        // 15 inactive rows -> 2 pages
        table.apply_column_filter("status", "inactive");
        assert_eq!(table.state().current_page(), 2);
    }

    #[test]
    fn set_page_clamps_both_ends() {
        let mut table = Table::new(columns(), students(25));
        table.set_page(99);
        assert_eq!(table.state().current_page(), 3);
        table.set_page(0);
        assert_eq!(table.state().current_page(), 1);
    }

    #[test]
    fn next_and_prev_saturate() {
        let mut table = Table::new(columns(), students(15));
        table.prev_page();
        assert_eq!(table.state().current_page(), 1);

        table.next_page();
        table.next_page();
        assert_eq!(table.state().current_page(), 2);
    }

    #[test]
    fn empty_search_results_keep_page_one() {
        let mut table = Table::new(columns(), students(15));
        table.set_page(2);
        table.apply_search("nobody");
        assert_eq!(table.state().current_page(), 1);
        assert_eq!(table.summary().page_count, 1);
        assert!(table.derive().page().is_empty());
    }

    #[test]
    fn non_sortable_column_is_ignored() {
        let mut table = Table::new(columns(), students(3));
        table.apply_sort("status");
        assert!(table.state().sort().is_none());

        table.apply_sort("email");
        assert_eq!(table.state().sort(), Some(&OrderBy::asc("email")));
    }

    #[test]
    fn sort_indicator_follows_active_sort() {
        let mut table = Table::new(columns(), students(3));
        assert_eq!(table.sort_indicator("name"), None);

        table.apply_sort("name");
        assert_eq!(table.sort_indicator("name"), Some('↑'));
        assert_eq!(table.sort_indicator("id"), None);

        table.apply_sort("name");
        assert_eq!(table.sort_indicator("name"), Some('↓'));
    }

    #[test]
    fn replace_records_reclamps() {
        let mut table = Table::new(columns(), students(40));
        table.set_page(4);
        table.replace_records(students(12));
        assert_eq!(table.state().current_page(), 2);
        assert_eq!(table.records().len(), 12);
    }

    #[test]
    fn summary_lines() {
        let mut table = Table::new(columns(), students(23));
        table.set_page(3);
        let summary = table.summary();
        assert_eq!(summary.results_line(), "Showing 3 of 23 results");
        assert_eq!(summary.page_line(), "Page 3 of 3");
        assert_eq!(summary.to_string(), "Showing 3 of 23 results | Page 3 of 3");
    }

    #[test]
    fn query_hands_string_to_callback() {
        let mut table = Table::new(columns(), students(3));
        table.apply_sort("id");
        table.apply_sort("id");

        let mut sent = None;
        let query = table.query(|q| sent = Some(q.to_string()));

        assert_eq!(sent.as_deref(), Some(query.as_str()));
        assert_eq!(
            query,
            "fields=id%2Cname%2Cstatus&sort%5B0%5D%5Bfield%5D=id&sort%5B0%5D%5Border%5D=DESC\
             &page=1&limit=10&resetCache=true"
        );
        assert_eq!(table.build_query_options().get_sort()[0].dir, Dir::Desc);
    }

    #[test]
    fn filterable_columns_and_loading_flag() {
        let mut table = Table::new(columns(), students(1));
        let keys: Vec<&str> = table.filterable_columns().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["name", "status"]);

        assert!(!table.is_loading());
        table.set_loading(true);
        assert!(table.is_loading());
    }
}
