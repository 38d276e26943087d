// src/core/sanitize.rs

/// Collapse runs of whitespace (including &nbsp; once decoded) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Make header names unique the way spreadsheet readers do:
/// blanks become `Unnamed: i`, repeats get `.1`, `.2`, …
pub fn dedup_headers(raw: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(raw.len());
    for (i, h) in raw.into_iter().enumerate() {
        let base = if h.is_empty() { format!("Unnamed: {i}") } else { h };
        let mut name = base.clone();
        let mut n = 0;
        while out.contains(&name) {
            n += 1;
            name = format!("{base}.{n}");
        }
        out.push(name);
    }
    out
}

/// Parse a score cell. Blank (future game) is `None`.
pub fn parse_points(cell: &str) -> Option<u32> {
    cell.trim().parse().ok()
}
