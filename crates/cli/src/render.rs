//! Text rendering of ordered hits.
//!
//! Rendering only reads the hits it is handed.

use std::fmt::Write;

use hnsearch_core::{Hit, SortKey, SortState};

const TITLE_WIDTH: usize = 48;
const AUTHOR_WIDTH: usize = 16;
const URL_WIDTH: usize = 40;
const POINTS_WIDTH: usize = 6;

/// Sortable columns in display order.
const COLUMNS: [(SortKey, &str, usize); 4] = [
    (SortKey::Title, "Title", TITLE_WIDTH),
    (SortKey::Author, "Author", AUTHOR_WIDTH),
    (SortKey::Url, "URL", URL_WIDTH),
    (SortKey::Points, "Points", POINTS_WIDTH),
];

/// Render hits as a fixed-width table.
///
/// The active sort column is marked with `*`, and with `*!` when reversed.
pub fn render_table(hits: &[&Hit], sort: SortState) -> String {
    let mut out = String::new();

    let header: Vec<String> = COLUMNS
        .iter()
        .map(|(key, label, width)| {
            let label = match (sort.is_active(*key), sort.reverse) {
                (true, false) => format!("{label}*"),
                (true, true) => format!("{label}*!"),
                (false, _) => (*label).to_string(),
            };
            pad(&label, *width)
        })
        .collect();
    let _ = writeln!(out, "{}", header.join(" ").trim_end());

    for hit in hits {
        let points = hit.points.map(|p| p.to_string()).unwrap_or_default();
        let row = [
            pad(hit.title.as_deref().unwrap_or(""), TITLE_WIDTH),
            pad(&hit.author, AUTHOR_WIDTH),
            pad(hit.url.as_deref().unwrap_or(""), URL_WIDTH),
            format!("{points:>POINTS_WIDTH$}"),
        ];
        let _ = writeln!(out, "{}", row.join(" ").trim_end());
    }

    out
}

/// Render hits as a JSON array.
pub fn render_json(hits: &[&Hit]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(hits)
}

/// Footer line with the page position.
pub fn render_footer(search_key: &str, shown: usize, last_page: u32) -> String {
    format!("{shown} hits for {search_key:?} (pages 0-{last_page})")
}

/// Truncate or pad `text` to exactly `width` characters.
fn pad(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return format!("{text:<width$}");
    }
    let mut truncated: String = text.chars().take(width.saturating_sub(3)).collect();
    truncated.push_str("...");
    truncated
}
