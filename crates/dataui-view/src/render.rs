//! Display text for table cells.

use chrono::NaiveDate;

use crate::column::ValueKind;
use crate::value::{Number, Value};

/// Text shown for a missing value.
pub const MISSING: &str = "-";

/// Returns the display text of a cell.
///
/// - missing values show as `-`
/// - `date` columns show `M/D/YYYY`; ISO text is parsed first
/// - `number` columns group thousands with `,` and keep at most three
///   fraction digits
/// - everything else shows its plain text
///
/// ```
/// use dataui_view::{render_cell, Number, Value, ValueKind};
///
/// assert_eq!(render_cell(&Value::Number(Number::I64(1234567)), ValueKind::Number), "1,234,567");
/// assert_eq!(render_cell(&Value::Text("2024-03-09"), ValueKind::Date), "3/9/2024");
/// assert_eq!(render_cell(&Value::None, ValueKind::Text), "-");
/// ```
pub fn render_cell(value: &Value<'_>, kind: ValueKind) -> String {
    match (value, kind) {
        (Value::None, _) => MISSING.to_string(),
        (Value::Date(date), _) => format_date(*date),
        (Value::Text(text), ValueKind::Date) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(format_date)
            .unwrap_or_else(|_| text.to_string()),
        (Value::Number(n), ValueKind::Number) => format_number(*n),
        _ => value.to_text().into_owned(),
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Formats a number with thousands separators.
pub fn format_number(n: Number) -> String {
    match n {
        Number::I64(v) => {
            let digits = group_thousands(&v.unsigned_abs().to_string());
            if v < 0 {
                format!("-{digits}")
            } else {
                digits
            }
        }
        Number::U64(v) => group_thousands(&v.to_string()),
        Number::F64(v) if !v.is_finite() => match v {
            v if v.is_nan() => "NaN".to_string(),
            v if v > 0.0 => "∞".to_string(),
            _ => "-∞".to_string(),
        },
        Number::F64(v) => {
            let fixed = format!("{:.3}", v.abs());
            let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
            let frac_part = frac_part.trim_end_matches('0');
            let mut out = String::new();
            if v < 0.0 && fixed.bytes().any(|b| b != b'0' && b != b'.') {
                out.push('-');
            }
            out.push_str(&group_thousands(int_part));
            if !frac_part.is_empty() {
                out.push('.');
                out.push_str(frac_part);
            }
            out
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
