//! Deriving the visible rows from records and view state.

use std::ops::Range;

use tracing::trace;

use crate::filter::Filter;
use crate::ordering::sort_rows;
use crate::state::ViewState;
use crate::traits::Browsable;

/// Everything a table needs to render one state of its rows.
#[derive(Debug, Clone)]
pub struct Derived<'a, T> {
    rows: Vec<&'a T>,
    window: Range<usize>,
    current_page: usize,
    page_count: usize,
}

impl<'a, T> Derived<'a, T> {
    /// Returns every row that passes the filters, in display order.
    pub fn rows(&self) -> &[&'a T] {
        &self.rows
    }

    /// Returns the rows on the current page.
    pub fn page(&self) -> &[&'a T] {
        &self.rows[self.window.clone()]
    }

    /// Returns the index range of the current page within [`rows`](Self::rows).
    pub fn window(&self) -> Range<usize> {
        self.window.clone()
    }

    /// Returns the number of rows that pass the filters.
    pub fn total(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of pages; at least one, even with no rows.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Returns the page this slice was taken for.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns `true` if no row passes the filters.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consumes the result, returning the filtered and sorted rows.
    pub fn into_rows(self) -> Vec<&'a T> {
        self.rows
    }
}

/// Number of pages needed for `total` rows: `max(1, ceil(total / page_size))`.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Filters, sorts and pages `records` according to `state`.
///
/// Rows keep their input order unless a sort is active; the sort is stable,
/// so rows with equal sort values also keep their input order. A page past
/// the end yields an empty slice.
pub fn derive<'a, T: Browsable>(records: &'a [T], state: &ViewState) -> Derived<'a, T> {
    let mut rows = Filter::from_state(state).apply(records);
    if let Some(order) = state.sort() {
        sort_rows(&mut rows, order);
    }

    let page_size = state.page_size();
    let current_page = state.current_page();
    let start = current_page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());

    trace!(
        records = records.len(),
        filtered = rows.len(),
        page = current_page,
        start,
        end,
        "derived view"
    );

    Derived {
        page_count: page_count(rows.len(), page_size),
        rows,
        window: start..end,
        current_page,
    }
}
