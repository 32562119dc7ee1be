//! Total ordering of field values for sorting.
//!
//! Sorting has to work on columns whose cells do not all share a type, so
//! [`compare_values`] defines an order over every pair of [`Value`]s:
//!
//! ```text
//! same variant       native order (text/status by code point, numbers
//!                    numerically, dates chronologically)
//! mixed variants     Number < Date < Text < Status
//! None               after everything else
//! ```
//!
//! Direction is applied to the whole ordering, so missing values come last
//! in ascending order and first in descending order.

use std::cmp::Ordering;

use dataui_query::OrderBy;

use crate::traits::Browsable;
use crate::value::Value;

/// Compares two values under the table's total order.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match (a, b) {
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        (Value::Status(a), Value::Status(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => a.total_cmp(*b),
        (Value::Date(a), Value::Date(b)) => a.cmp(b),
        _ => a.rank().cmp(&b.rank()),
    }
}

/// Compares two rows on the ordering's field, in the ordering's direction.
pub fn compare_by<T: Browsable>(a: &T, b: &T, order: &OrderBy) -> Ordering {
    let ordering = compare_values(&a.field_value(&order.field), &b.field_value(&order.field));
    order.dir.apply(ordering)
}

/// Sorts rows in place. Rows that compare equal keep their relative order.
pub fn sort_rows<T: Browsable>(rows: &mut [&T], order: &OrderBy) {
    rows.sort_by(|a, b| compare_by(*a, *b, order));
}
