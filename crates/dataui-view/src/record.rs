//! Owned records.
//!
//! A [`Record`] maps field names to [`Field`] values. No schema is enforced:
//! a field a column or filter asks for may simply be absent, in which case it
//! reads as [`Value::None`].

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use serde_json::Value as Json;

use crate::column::{find_column, ColumnSpec, ValueKind};
use crate::error::{DataUiError, Result};
use crate::traits::Browsable;
use crate::value::{Number, Value};

/// Owned field value stored in a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// Free text.
    Text(String),
    /// Numeric value.
    Number(Number),
    /// Calendar date.
    Date(NaiveDate),
    /// Enum-like status label.
    Status(String),
    /// Explicit null.
    Null,
}

impl Field {
    /// Creates a status field.
    pub fn status(label: impl Into<String>) -> Self {
        Field::Status(label.into())
    }

    /// Borrows this field as a runtime [`Value`].
    pub fn as_value(&self) -> Value<'_> {
        match self {
            Field::Text(s) => Value::Text(s),
            Field::Number(n) => Value::Number(*n),
            Field::Date(d) => Value::Date(*d),
            Field::Status(s) => Value::Status(s),
            Field::Null => Value::None,
        }
    }

    /// Converts a JSON scalar into a field, guided by the column kind.
    ///
    /// Strings in `date` columns become dates only when they are already in
    /// canonical `YYYY-MM-DD` form, so the stored date prints back as the
    /// exact source text. Anything else, `2024-1-5` included, stays text. Strings in `status` columns become
    /// statuses. Booleans are kept as their text form.
    pub fn from_json(field: &str, value: &Json, kind: ValueKind) -> Result<Field> {
        let converted = match value {
            Json::Null => Field::Null,
            Json::Bool(b) => Field::Text(b.to_string()),
            Json::Number(n) => Field::Number(json_number(n)),
            Json::String(s) => match kind {
                ValueKind::Date => canonical_date(s)
                    .map_or_else(|| Field::Text(s.clone()), Field::Date),
                ValueKind::Status => Field::Status(s.clone()),
                ValueKind::Text | ValueKind::Number => Field::Text(s.clone()),
            },
            Json::Array(_) => return Err(unsupported(field, "array")),
            Json::Object(_) => return Err(unsupported(field, "object")),
        };
        Ok(converted)
    }
}

fn canonical_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .filter(|date| date.format("%Y-%m-%d").to_string() == s)
}

fn json_number(n: &serde_json::Number) -> Number {
    if let Some(i) = n.as_i64() {
        Number::I64(i)
    } else if let Some(u) = n.as_u64() {
        Number::U64(u)
    } else {
        Number::F64(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn unsupported(field: &str, found: &'static str) -> DataUiError {
    DataUiError::UnsupportedValue {
        field: field.to_string(),
        found,
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Field::Text(s) | Field::Status(s) => serializer.serialize_str(s),
            Field::Number(Number::I64(n)) => serializer.serialize_i64(*n),
            Field::Number(Number::U64(n)) => serializer.serialize_u64(*n),
            Field::Number(Number::F64(n)) => serializer.serialize_f64(*n),
            Field::Date(d) => serializer.collect_str(&d.format("%Y-%m-%d")),
            Field::Null => serializer.serialize_none(),
        }
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Text(s.to_string())
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Field::Text(s)
    }
}

impl From<Number> for Field {
    fn from(n: Number) -> Self {
        Field::Number(n)
    }
}

impl From<i32> for Field {
    fn from(n: i32) -> Self {
        Field::Number(n.into())
    }
}

impl From<i64> for Field {
    fn from(n: i64) -> Self {
        Field::Number(n.into())
    }
}

impl From<u32> for Field {
    fn from(n: u32) -> Self {
        Field::Number(n.into())
    }
}

impl From<u64> for Field {
    fn from(n: u64) -> Self {
        Field::Number(n.into())
    }
}

impl From<f64> for Field {
    fn from(n: f64) -> Self {
        Field::Number(n.into())
    }
}

impl From<NaiveDate> for Field {
    fn from(d: NaiveDate) -> Self {
        Field::Date(d)
    }
}

impl<T: Into<Field>> From<Option<T>> for Field {
    fn from(value: Option<T>) -> Self {
        value.map_or(Field::Null, Into::into)
    }
}

/// A single table row: field name to value.
///
/// # Example
///
/// ```
/// use dataui_view::{Browsable, Field, Record, Value};
///
/// let student = Record::new()
///     .with("id", 1)
///     .with("name", "Ada")
///     .with("status", Field::status("active"));
///
/// assert_eq!(student.field_value("name"), Value::Text("Ada"));
/// assert_eq!(student.field_value("email"), Value::None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Field>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Record::default()
    }

    /// Adds a field, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Field>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a field, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Field>) -> Option<Field> {
        self.fields.insert(key.into(), value.into())
    }

    /// Returns a field, if present.
    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.get(key)
    }

    /// Iterates over fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Builds a record from a JSON object, using `columns` to pick field kinds.
    ///
    /// Fields without a matching column are loaded as plain text or numbers.
    pub fn from_json(value: &Json, columns: &[ColumnSpec], index: usize) -> Result<Record> {
        let object = value
            .as_object()
            .ok_or(DataUiError::NotAnObject { index })?;

        let mut record = Record::new();
        for (key, raw) in object {
            let kind = find_column(columns, key).map_or(ValueKind::Text, |c| c.kind);
            record.insert(key.as_str(), Field::from_json(key, raw, kind)?);
        }
        Ok(record)
    }
}

impl<K: Into<String>, V: Into<Field>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl Browsable for Record {
    fn field_value(&self, field: &str) -> Value<'_> {
        self.fields.get(field).map_or(Value::None, Field::as_value)
    }

    fn values(&self) -> Box<dyn Iterator<Item = Value<'_>> + '_> {
        Box::new(self.fields.values().map(Field::as_value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::new("id", "ID").kind(ValueKind::Number),
            ColumnSpec::new("enrolled", "Enrolled").kind(ValueKind::Date),
            ColumnSpec::new("status", "Status").kind(ValueKind::Status),
        ]
    }

    #[test]
    fn from_json_uses_column_kinds() {
        let raw = json!({
            "id": 7,
            "name": "Grace",
            "enrolled": "2023-09-01",
            "status": "active",
            "gpa": 3.5,
            "email": null
        });
        let record = Record::from_json(&raw, &columns(), 0).unwrap();

        assert_eq!(record.get("id"), Some(&Field::Number(Number::I64(7))));
        assert_eq!(record.get("name"), Some(&Field::Text("Grace".into())));
        assert_eq!(
            record.get("enrolled"),
            Some(&Field::Date(NaiveDate::from_ymd_opt(2023, 9, 1).unwrap()))
        );
        assert_eq!(record.get("status"), Some(&Field::status("active")));
        assert_eq!(record.get("gpa"), Some(&Field::Number(Number::F64(3.5))));
        assert_eq!(record.get("email"), Some(&Field::Null));
    }

    #[test]
    fn unparseable_date_stays_text() {
        let raw = json!({ "enrolled": "next spring" });
        let record = Record::from_json(&raw, &columns(), 0).unwrap();
        assert_eq!(record.get("enrolled"), Some(&Field::Text("next spring".into())));
    }

    #[test]
    fn non_canonical_date_keeps_source_text() {
        let raw = json!({ "enrolled": "2024-1-5" });
        let record = Record::from_json(&raw, &columns(), 0).unwrap();

        assert_eq!(record.get("enrolled"), Some(&Field::Text("2024-1-5".into())));
        assert_eq!(record.field_value("enrolled").to_text(), "2024-1-5");
        assert!(record.any_value_contains("2024-1-5"));
    }

    #[test]
    fn booleans_load_as_text() {
        let raw = json!({ "graduated": true });
        let record = Record::from_json(&raw, &columns(), 0).unwrap();
        assert_eq!(record.field_value("graduated"), Value::Text("true"));
    }

    #[test]
    fn non_object_record_is_rejected() {
        let err = Record::from_json(&json!([1, 2]), &columns(), 3).unwrap_err();
        assert!(matches!(err, DataUiError::NotAnObject { index: 3 }));
    }

    #[test]
    fn nested_values_are_rejected() {
        let err = Record::from_json(&json!({ "tags": ["a"] }), &columns(), 0).unwrap_err();
        assert_eq!(err.to_string(), "field 'tags' holds an unsupported array value");
    }

    #[test]
    fn serializes_as_flat_object() {
        let record = Record::new()
            .with("id", 1)
            .with("enrolled", NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
            .with("email", Option::<String>::None);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "id": 1, "enrolled": "2024-01-15", "email": null })
        );
    }

    #[test]
    fn missing_field_reads_as_none() {
        let record = Record::new().with("id", 1);
        assert!(record.field_value("name").is_none());
        assert_eq!(record.values().count(), 1);
    }
}
