//! Terminal front end for DataUI tables.
//!
//! This crate is the thin adapter between a user and a
//! [`Table`](dataui_view::Table): it turns command-line flags into the same
//! actions a web page would send on clicks and keystrokes, then prints the
//! derived page. It does no network I/O; `--query` only prints the query
//! string a remote call would use.

pub mod args;
pub mod text;

use std::io::Write;

use anyhow::{bail, Context, Result};
use dataui_view::{Dataset, Table};
use serde_json::json;
use tracing::info;

pub use args::Args;

/// Loads the dataset and applies every action from `args`.
///
/// Actions run in the order a user would take them: page size (which resets
/// the page), search, filters, header clicks, and finally the page.
pub fn build_table(args: &Args) -> Result<(Dataset, Table)> {
    let dataset = Dataset::from_path(&args.dataset)
        .with_context(|| format!("cannot load {}", args.dataset.display()))?;
    info!(title = %dataset.title, records = dataset.records.len(), "dataset loaded");

    let mut table = dataset.clone().into_table();

    if let Some(page_size) = args.page_size {
        if !table.config().offers(page_size) {
            bail!(
                "page size {page_size} is not offered; choose one of {:?}",
                table.config().page_size_options
            );
        }
        table.set_page_size(page_size);
    }
    if let Some(term) = &args.search {
        table.apply_search(term.as_str());
    }
    for (key, value) in &args.filters {
        table.apply_column_filter(key, value.as_str());
    }
    for field in &args.sorts {
        table.apply_sort(field);
    }
    if let Some(page) = args.page {
        table.set_page(page);
    }

    Ok((dataset, table))
}

/// Runs the command, writing the page (and optionally the query) to `out`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let (dataset, table) = build_table(args)?;
    let query = args.query.then(|| table.query(|q| info!(query = q, "query built")));

    if args.json {
        let view = table.derive();
        let summary = table.summary();
        let body = json!({
            "title": dataset.title,
            "page": summary.page,
            "pageCount": summary.page_count,
            "total": summary.total,
            "rows": view.page(),
            "query": query,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
        return Ok(());
    }

    writeln!(out, "{}", dataset.title)?;
    if let Some(description) = &dataset.description {
        writeln!(out, "{description}")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", text::render_table(&table))?;
    if let Some(query) = query {
        writeln!(out)?;
        writeln!(out, "query: {query}")?;
    }
    Ok(())
}
