//! Plain-text rendering of the current page for `--print`.

use std::fmt::Write;

use tabview_engine::TabularView;
use tabview_util::cell_text;
use unicode_width::UnicodeWidthStr;

/// Renders the title, headers, current page and range label as aligned text.
pub fn render_page(view: &TabularView) -> String {
    let snapshot = view.snapshot();
    let mut out = String::new();
    if !snapshot.title.is_empty() {
        let _ = writeln!(out, "{}", snapshot.title);
    }
    if !snapshot.search_term.is_empty() {
        let _ = writeln!(out, "Search: {}", snapshot.search_term);
    }

    let headers: Vec<String> = snapshot
        .headers
        .iter()
        .map(|header| match header.sort.indicator() {
            "" => header.column.label.clone(),
            indicator => format!("{} {}", header.column.label, indicator),
        })
        .collect();
    let rows: Vec<Vec<String>> = snapshot
        .rows
        .iter()
        .map(|record| snapshot.headers.iter().map(|header| cell_text(header.column, record)).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.width())
                .fold(header.width(), usize::max)
        })
        .collect();

    push_line(&mut out, &headers, &widths);
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    push_line(&mut out, &rule, &widths);
    if snapshot.is_empty {
        let _ = writeln!(out, "{}", snapshot.empty_message);
    }
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    let _ = writeln!(
        out,
        "{}  ·  Page {} of {}",
        snapshot.range_label, snapshot.window.page, snapshot.window.max_page
    );
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (index, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if index > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        line.push_str(&" ".repeat(width.saturating_sub(cell.width())));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tabview_types::{SortDirection, ViewConfig, records_from_json};

    #[test]
    fn prints_an_aligned_page_with_range() {
        let records = records_from_json(json!([
            {"id": 1, "name": "Alice"},
            {"id": 2, "name": "bob"},
            {"id": 3, "name": "ALICE"}
        ]))
        .unwrap();
        let mut view = TabularView::with_inferred_columns(records, ViewConfig::default().with_title("Payees").with_page_size(2));
        view.set_sort("id", SortDirection::Desc);

        let text = render_page(&view);
        let expected = "\
Payees
ID ▼  Name ↕
----  ------
3     ALICE
2     bob
Showing 1–2 of 3  ·  Page 1 of 2
";
        assert_eq!(text, expected);
    }

    #[test]
    fn prints_the_placeholder_when_nothing_matches() {
        let records = records_from_json(json!([{"name": "Alice"}])).unwrap();
        let mut view = TabularView::with_inferred_columns(records, ViewConfig::default());
        view.set_search("zzz");
        let text = render_page(&view);
        assert!(text.starts_with("Search: zzz\n"));
        assert!(text.contains("No matching records\n"));
        assert!(text.ends_with("Showing 0 of 0  ·  Page 1 of 1\n"));
    }
}
