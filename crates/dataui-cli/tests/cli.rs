//! Integration tests running the command against dataset files.

use std::io::Write;

use clap::Parser;
use dataui_cli::{build_table, run, Args};
use tempfile::NamedTempFile;

const STUDENTS: &str = r#"{
    "title": "Students",
    "description": "Enrolled students",
    "columns": [
        { "key": "id", "label": "ID", "sortable": true, "type": "number" },
        { "key": "name", "label": "Name", "sortable": true, "filterable": true },
        { "key": "status", "label": "Status", "filterable": true, "type": "status" }
    ],
    "records": [
        { "id": 1, "name": "John Smith", "status": "active" },
        { "id": 2, "name": "Mary Johnson", "status": "inactive" },
        { "id": 3, "name": "Ana Lima", "status": "active" },
        { "id": 4, "name": "Joe Park", "status": "active" },
        { "id": 5, "name": "Kim Lee", "status": "inactive" },
        { "id": 6, "name": "Jonas Berg", "status": "active" }
    ],
    "config": { "default_page_size": 5 }
}"#;

fn dataset_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(STUDENTS.as_bytes()).unwrap();
    file
}

fn run_with(file: &NamedTempFile, extra: &[&str]) -> anyhow::Result<String> {
    let path = file.path().to_str().unwrap().to_string();
    let mut argv = vec!["dataui".to_string(), path];
    argv.extend(extra.iter().map(|s| s.to_string()));
    let args = Args::try_parse_from(argv).unwrap();

    let mut out = Vec::new();
    run(&args, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn prints_first_page_with_summary() {
    let file = dataset_file();
    let output = run_with(&file, &[]).unwrap();

    assert!(output.starts_with("Students\nEnrolled students\n"));
    assert!(output.contains("John Smith"));
    assert!(output.contains("Kim Lee"));
    assert!(!output.contains("Jonas Berg"));
    assert!(output.contains("Showing 5 of 6 results"));
    assert!(output.contains("Page 1 of 2"));
    assert!(!output.contains("query:"));
}

#[test]
fn filters_sort_and_query() {
    let file = dataset_file();
    let output = run_with(
        &file,
        &["-f", "status=active", "-f", "name=jo", "--sort", "id", "--sort", "id", "-q"],
    )
    .unwrap();

    // "active" is a substring of "inactive", so Mary Johnson stays.
    assert!(output.contains("ID ↓"));
    assert!(output.contains("Mary Johnson"));
    assert!(!output.contains("Kim Lee"));
    assert!(output.contains("Showing 4 of 4 results"));
    assert!(output.contains(
        "query: fields=id%2Cname%2Cstatus&search%5Bstatus%5D=active&search%5Bname%5D=jo\
         &sort%5B0%5D%5Bfield%5D=id&sort%5B0%5D%5Border%5D=DESC&page=1&limit=5&resetCache=true"
    ));
}

#[test]
fn page_is_clamped_and_page_size_resets() {
    let file = dataset_file();
    let args = Args::try_parse_from([
        "dataui",
        file.path().to_str().unwrap(),
        "--page-size",
        "10",
        "--page",
        "9",
    ])
    .unwrap();

    let (_, table) = build_table(&args).unwrap();
    assert_eq!(table.state().page_size(), 10);
    assert_eq!(table.state().current_page(), 1);
}

#[test]
fn unoffered_page_size_is_rejected() {
    let file = dataset_file();
    let err = run_with(&file, &["--page-size", "7"]).unwrap_err();
    assert!(err.to_string().contains("page size 7 is not offered"));
}

#[test]
fn json_output() {
    let file = dataset_file();
    let output = run_with(&file, &["--search", "lee", "--json", "-q"]).unwrap();
    let body: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(body["title"], "Students");
    assert_eq!(body["total"], 1);
    assert_eq!(body["pageCount"], 1);
    assert_eq!(body["rows"][0]["name"], "Kim Lee");
    assert_eq!(
        body["query"],
        "fields=id%2Cname%2Cstatus&page=1&limit=5&resetCache=true"
    );
}

#[test]
fn missing_file_is_an_error() {
    let args = Args::try_parse_from(["dataui", "/nonexistent/students.json"]).unwrap();
    let err = run(&args, &mut Vec::new()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.starts_with("cannot load /nonexistent/students.json: failed to read dataset"));
}
