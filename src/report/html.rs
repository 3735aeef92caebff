//! Self-contained HTML report.
//!
//! The page carries its own stylesheet and a small script that sorts the
//! detail table when a header cell is clicked. No external assets are loaded.

use super::{category_totals, labelled_rows, percentage, total_count, unique_lexemes};
use crate::lexer::TokenSummary;
use chrono::{DateTime, Utc};
use std::fmt::Write;

const STYLE: &str = r#"
body { font-family: "Segoe UI", Arial, sans-serif; background: #1e1e1e; color: #d4d4d4; margin: 2em; }
h1 { color: #569cd6; }
.meta { color: #808080; margin-bottom: 1.5em; }
.cards { display: flex; gap: 1em; margin-bottom: 2em; }
.card { background: #252526; border-radius: 6px; padding: 1em 1.5em; min-width: 10em; }
.card .value { font-size: 2em; color: #ce9178; }
table { border-collapse: collapse; width: 100%; margin-bottom: 2em; }
th, td { border: 1px solid #3c3c3c; padding: 0.4em 0.8em; text-align: left; }
th { background: #2d2d30; cursor: pointer; user-select: none; }
tr:nth-child(even) td { background: #252526; }
td.num { text-align: right; font-variant-numeric: tabular-nums; }
code { color: #dcdcaa; }
"#;

const SCRIPT: &str = r#"
document.querySelectorAll("table.sortable th").forEach(function (th, col) {
  th.addEventListener("click", function () {
    var body = th.closest("table").tBodies[0];
    var rows = Array.prototype.slice.call(body.rows);
    var asc = th.dataset.order !== "asc";
    th.dataset.order = asc ? "asc" : "desc";
    rows.sort(function (a, b) {
      var x = a.cells[col].dataset.key || a.cells[col].textContent;
      var y = b.cells[col].dataset.key || b.cells[col].textContent;
      var nx = parseFloat(x), ny = parseFloat(y);
      var cmp = (!isNaN(nx) && !isNaN(ny)) ? nx - ny : x.localeCompare(y);
      return asc ? cmp : -cmp;
    });
    rows.forEach(function (r) { body.appendChild(r); });
  });
});
"#;

/// Render the report page for `source_name`.
pub fn render(summary: &[TokenSummary], source_name: &str, generated_at: DateTime<Utc>) -> String {
    let total = total_count(summary);
    let mut totals = category_totals(summary);
    totals.sort_by(|a, b| b.1.cmp(&a.1));

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(
        out,
        "<title>Lexical report: {}</title>",
        escape(source_name)
    );
    let _ = writeln!(out, "<style>{}</style>\n</head>\n<body>", STYLE);

    out.push_str("<h1>Lexical Analysis Report</h1>\n");
    let _ = writeln!(
        out,
        "<p class=\"meta\">Source: <code>{}</code> &middot; Generated {}</p>",
        escape(source_name),
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    out.push_str("<div class=\"cards\">\n");
    card(&mut out, "Total tokens", total);
    card(&mut out, "Unique tokens", unique_lexemes(summary));
    card(&mut out, "Categories", totals.len());
    out.push_str("</div>\n");

    out.push_str("<h2>Tokens per category</h2>\n");
    out.push_str("<table class=\"sortable\">\n<thead><tr><th>Category</th><th>Count</th><th>Share</th></tr></thead>\n<tbody>\n");
    for (category, count) in &totals {
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>",
            escape(category.label()),
            count,
            percentage(*count, total)
        );
    }
    out.push_str("</tbody>\n</table>\n");

    out.push_str("<h2>Detail</h2>\n");
    out.push_str("<table class=\"sortable\">\n<thead><tr><th>Category</th><th>Token</th><th>Count</th><th>Share</th></tr></thead>\n<tbody>\n");
    for (label, row) in labelled_rows(summary) {
        // The blank label still sorts under its category.
        let _ = writeln!(
            out,
            "<tr><td data-key=\"{}\">{}</td><td><code>{}</code></td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>",
            escape(row.category.label()),
            escape(label),
            escape(&row.lexeme),
            row.count,
            percentage(row.count, total)
        );
    }
    out.push_str("</tbody>\n</table>\n");

    let _ = writeln!(out, "<script>{}</script>\n</body>\n</html>", SCRIPT);
    out
}

fn card(out: &mut String, title: &str, value: usize) {
    let _ = writeln!(
        out,
        "<div class=\"card\"><div>{}</div><div class=\"value\">{}</div></div>",
        title, value
    );
}

/// Escape text for element content and double-quoted attributes.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
