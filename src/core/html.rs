// src/core/html.rs
//
// Generic <table> → rectangular string grid. Knows nothing about which page
// it came from; the page modules under `specs` pick the table and columns.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::{dedup_headers, normalize_ws};
use crate::error::{Error, Result};

/// Headers plus rows of cell text. Every row is at least as wide as the header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column(name).ok_or_else(|| Error::MissingColumn(s!(name)))
    }

    /// Cell text, empty for out-of-range.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows.get(row).and_then(|r| r.get(col)).map(|s| s.as_str()).unwrap_or("")
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

pub(crate) fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Every table in document order.
pub fn extract_tables(doc: &str) -> Vec<RawTable> {
    let html = Html::parse_document(doc);
    let tables = selector("table");
    html.select(&tables).map(table_from_element).collect()
}

/// First table of a page; `url` only feeds the error.
pub fn first_table(doc: &str, url: &str) -> Result<RawTable> {
    let mut tables = extract_tables(doc);
    if tables.len() > 1 {
        tracing::debug!("{} tables at {url}, using the first", tables.len());
    }
    if tables.is_empty() {
        return Err(Error::NoTable { url: s!(url) });
    }
    Ok(tables.swap_remove(0))
}

fn table_from_element(table: ElementRef<'_>) -> RawTable {
    let head_rows = selector("thead tr");
    let body_rows = selector("tbody tr");

    let mut body: Vec<Vec<String>> = table.select(&body_rows).map(row_cells).collect();

    // Header is the innermost (last) thead row; without a thead the first row is it.
    let header = match table.select(&head_rows).last() {
        Some(tr) => row_cells(tr),
        None if !body.is_empty() => body.remove(0),
        None => Vec::new(),
    };
    let headers = dedup_headers(header);

    for row in body.iter_mut() {
        if row.len() < headers.len() {
            row.resize(headers.len(), s!());
        }
    }

    RawTable { headers, rows: body }
}

/// th and td both count; colspan repeats the cell so banner rows fill every column.
fn row_cells(tr: ElementRef<'_>) -> Vec<String> {
    let mut out = Vec::new();
    for child in tr.children().filter_map(ElementRef::wrap) {
        let name = child.value().name();
        if name != "td" && name != "th" { continue; }
        let text = normalize_ws(&child.text().collect::<String>());
        let span = child.value()
            .attr("colspan")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(1)
            .max(1);
        for _ in 1..span {
            out.push(text.clone());
        }
        out.push(text);
    }
    out
}
