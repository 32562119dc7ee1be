//! Command-line arguments.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;

/// Browse a table of students, classes or levels.
///
/// Loads a JSON dataset, applies the search, filters, sort and page given on
/// the command line, and prints the resulting page.
#[derive(Debug, Parser)]
#[command(name = "dataui", version, about)]
pub struct Args {
    /// Dataset file (JSON with title, columns and records)
    pub dataset: PathBuf,

    /// Free-text search across every field
    #[arg(short, long, value_name = "TERM")]
    pub search: Option<String>,

    /// Column filter; "all" or an empty value clears it (repeatable)
    #[arg(short, long = "filter", value_name = "KEY=VALUE", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Click a column header; repeating a field flips its direction
    #[arg(long = "sort", value_name = "FIELD")]
    pub sorts: Vec<String>,

    /// Page to show, clamped to the available pages
    #[arg(short, long, value_name = "N")]
    pub page: Option<usize>,

    /// Rows per page; must be one of the dataset's page-size options
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Also print the query string for the remote API
    #[arg(short, long)]
    pub query: bool,

    /// Print the page as JSON instead of a text table
    #[arg(long)]
    pub json: bool,
}

fn parse_filter(raw: &str) -> Result<(String, String)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected KEY=VALUE, got '{raw}'"))?;
    if key.is_empty() {
        return Err(anyhow!("filter key is empty in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
