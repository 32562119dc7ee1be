//! Plain-text table layout.

use dataui_view::{render_cell, Browsable, Table};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a column may get before its cells are truncated.
pub const MAX_COLUMN_WIDTH: usize = 32;

/// Truncates a string to fit within a display width, ending with `…` if cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

/// Lays out the current page of a table as aligned text.
///
/// ```text
/// ID   Name ↑
/// ──   ──────
/// 2    Amy
/// 1    Jo
///
/// Showing 2 of 2 results
/// Page 1 of 1
/// ```
pub fn render_table(table: &Table) -> String {
    let view = table.derive();
    let columns = table.columns();

    let header: Vec<String> = columns
        .iter()
        .map(|column| match table.sort_indicator(&column.key) {
            Some(arrow) => format!("{} {arrow}", column.label),
            None => column.label.clone(),
        })
        .collect();

    let rows: Vec<Vec<String>> = view
        .page()
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| {
                    let cell = render_cell(&record.field_value(&column.key), column.kind);
                    truncate_to_width(&cell, MAX_COLUMN_WIDTH)
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..columns.len())
        .map(|i| {
            rows.iter()
                .map(|row| row[i].width())
                .chain(std::iter::once(header[i].width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 5);
    lines.push(join_row(&header, &widths));
    lines.push(join_row(
        &widths.iter().map(|w| "─".repeat(*w)).collect::<Vec<_>>(),
        &widths,
    ));

    if table.is_loading() {
        lines.push("Loading data...".to_string());
    } else if rows.is_empty() {
        lines.push("No data found".to_string());
    } else {
        lines.extend(rows.iter().map(|row| join_row(row, &widths)));
    }

    let summary = table.summary();
    lines.push(String::new());
    lines.push(summary.results_line());
    lines.push(summary.page_line());
    lines.join("\n")
}

fn join_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad_to_width(cell, *width))
        .collect::<Vec<_>>()
        .join("   ")
        .trim_end()
        .to_string()
}
