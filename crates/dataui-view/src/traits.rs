//! Field access for table rows.
//!
//! The filter and sort pipeline never looks inside a row directly. It asks
//! the row for values through [`Browsable`], which [`Record`](crate::Record)
//! implements and which callers can implement for their own row types.

use crate::value::Value;

/// Trait for row types a table can search, filter and sort.
///
/// # Manual Implementation
///
/// ```
/// use dataui_view::{Browsable, Number, Value};
///
/// struct Level {
///     code: String,
///     students: u32,
/// }
///
/// impl Browsable for Level {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "code" => Value::Text(&self.code),
///             "students" => Value::Number(Number::U64(self.students as u64)),
///             _ => Value::None,
///         }
///     }
///
///     fn values(&self) -> Box<dyn Iterator<Item = Value<'_>> + '_> {
///         Box::new(["code", "students"].into_iter().map(|f| self.field_value(f)))
///     }
/// }
/// ```
pub trait Browsable {
    /// Returns the value of a field, or [`Value::None`] if it is absent.
    fn field_value(&self, field: &str) -> Value<'_>;

    /// Returns every value of the row, used by the free-text search.
    fn values(&self) -> Box<dyn Iterator<Item = Value<'_>> + '_>;

    /// Returns `true` if any value's lowercased text contains `needle`.
    ///
    /// `needle` must already be lowercase.
    fn any_value_contains(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .values()
                .any(|value| value.contains_lowercase(needle))
    }
}
