//! Runtime value types for field matching and comparison.
//!
//! The [`Value`] enum is the borrowed view of one record field. It is a closed
//! set of scalars: text, numbers, dates, and enum-like statuses. Every rule
//! the table applies (stringification for search, ordering for sort) is
//! defined on this type rather than left to implicit coercion.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

/// Runtime value for matching and sorting, borrowed from the source record.
///
/// # Example
///
/// ```
/// use dataui_view::{Number, Value};
///
/// assert_eq!(Value::Text("Jo").to_text(), "Jo");
/// assert_eq!(Value::Number(Number::I64(42)).to_text(), "42");
/// assert_eq!(Value::None.to_text(), "");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// Free text (borrowed).
    Text(&'a str),
    /// Numeric value.
    Number(Number),
    /// Calendar date.
    Date(NaiveDate),
    /// Enum-like status label such as `active` (borrowed).
    Status(&'a str),
    /// Field not present or null.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns `true` if this is a `Text` value.
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns `true` if this is a `Number` value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if this is a `Date` value.
    pub fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    /// Returns `true` if this is a `Status` value.
    pub fn is_status(&self) -> bool {
        matches!(self, Value::Status(_))
    }

    /// Extracts the text of a `Text` or `Status` value.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Text(s) | Value::Status(s) => Some(*s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the date value, if present.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Stringifies the value for text matching.
    ///
    /// Dates use ISO `YYYY-MM-DD`. Numbers print the way a browser prints
    /// them: floats outside `[1e-6, 1e21)` use exponent form (`1e+21`,
    /// `1.5e-8`). A missing value is the empty string, so it never contains a
    /// nonempty needle and always contains an empty one.
    pub fn to_text(&self) -> Cow<'a, str> {
        match self {
            Value::Text(s) | Value::Status(s) => Cow::Borrowed(*s),
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::Date(d) => Cow::Owned(d.format("%Y-%m-%d").to_string()),
            Value::None => Cow::Borrowed(""),
        }
    }

    /// Returns `true` if the lowercased text of this value contains `needle`.
    ///
    /// `needle` must already be lowercase.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.to_text().to_lowercase().contains(needle)
    }

    /// Rank of the variant in the cross-type sort order.
    pub(crate) fn rank(&self) -> u8 {
        match self {
            Value::Number(_) => 0,
            Value::Date(_) => 1,
            Value::Text(_) => 2,
            Value::Status(_) => 3,
            Value::None => 4,
        }
    }
}

/// Numeric value supporting all common numeric types.
///
/// Numbers are stored in one of three variants to preserve precision:
/// - `I64` for signed integers
/// - `U64` for unsigned integers
/// - `F64` for floating point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers under a total order, handling mixed types.
    ///
    /// Integers compare exactly; anything involving a float uses
    /// [`f64::total_cmp`], which places NaN after every other number.
    pub fn total_cmp(self, other: Number) -> Ordering {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => a.cmp(&b),
            (Number::U64(a), Number::U64(b)) => a.cmp(&b),
            (Number::I64(a), Number::U64(b)) => (a as i128).cmp(&(b as i128)),
            (Number::U64(a), Number::I64(b)) => (a as i128).cmp(&(b as i128)),
            _ => self.to_f64().total_cmp(&other.to_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{n}"),
            Number::U64(n) => write!(f, "{n}"),
            Number::F64(n) if n.is_nan() => f.write_str("NaN"),
            Number::F64(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Number::F64(n) if *n == 0.0 => f.write_str("0"),
            Number::F64(n) if (1e-6..1e21).contains(&n.abs()) => write!(f, "{n}"),
            Number::F64(n) => {
                let exp = format!("{n:e}");
                match exp.split_once('e') {
                    Some((mantissa, power)) if !power.starts_with('-') => {
                        write!(f, "{mantissa}e+{power}")
                    }
                    _ => f.write_str(&exp),
                }
            }
        }
    }
}

// Conversions from primitive types
impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::I64(n)
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::U64(n as u64)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number::U64(n)
    }
}

impl From<usize> for Number {
    fn from(n: usize) -> Self {
        Number::U64(n as u64)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}
