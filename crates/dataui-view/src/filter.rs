//! Row predicates compiled from a [`ViewState`].
//!
//! A [`Filter`] is the conjunction of the free-text search and every column
//! filter. Needles are lowercased once when the filter is built, so matching
//! a row only lowercases the row's values.

use crate::state::ViewState;
use crate::traits::Browsable;

/// A single row predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// Some value of the row contains the (lowercase) term.
    Search(String),
    /// The named field contains the (lowercase) needle.
    Column {
        /// Field to test.
        field: String,
        /// Lowercase needle.
        needle: String,
    },
}

impl Clause {
    /// Creates a search clause, lowercasing the term.
    pub fn search(term: &str) -> Self {
        Clause::Search(term.to_lowercase())
    }

    /// Creates a column clause, lowercasing the needle.
    pub fn column(field: impl Into<String>, needle: &str) -> Self {
        Clause::Column {
            field: field.into(),
            needle: needle.to_lowercase(),
        }
    }

    /// Evaluates this clause against a row.
    ///
    /// Values of any type are compared by their text, so a number field
    /// tested against a text needle never fails; it just may not match.
    pub fn matches<T: Browsable + ?Sized>(&self, row: &T) -> bool {
        match self {
            Clause::Search(term) => row.any_value_contains(term),
            Clause::Column { field, needle } => row.field_value(field).contains_lowercase(needle),
        }
    }
}

/// All clauses a row must satisfy to be visible.
///
/// An empty filter matches every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    clauses: Vec<Clause>,
}

impl Filter {
    /// Creates a filter that matches everything.
    pub fn new() -> Self {
        Filter::default()
    }

    /// Compiles the search term and column filters of a view state.
    ///
    /// An empty search term adds no clause.
    pub fn from_state(state: &ViewState) -> Self {
        let mut filter = Filter::new();
        if !state.search_term().is_empty() {
            filter = filter.and(Clause::search(state.search_term()));
        }
        for (field, value) in state.column_filters() {
            filter = filter.and(Clause::column(field.as_str(), value));
        }
        filter
    }

    /// Adds a clause.
    pub fn and(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Returns the clauses.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Returns `true` if this filter has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Tests if a single row matches every clause.
    pub fn matches<T: Browsable + ?Sized>(&self, row: &T) -> bool {
        self.clauses.iter().all(|clause| clause.matches(row))
    }

    /// Returns the matching rows, in input order.
    pub fn apply<'a, T: Browsable>(&self, rows: &'a [T]) -> Vec<&'a T> {
        rows.iter().filter(|row| self.matches(*row)).collect()
    }

    /// Counts the matching rows.
    pub fn count<T: Browsable>(&self, rows: &[T]) -> usize {
        rows.iter().filter(|row| self.matches(*row)).count()
    }
}
