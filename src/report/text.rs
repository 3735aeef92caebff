//! Plain text summary table.

use super::labelled_rows;
use crate::lexer::TokenSummary;
use std::fmt::Write;

const TITLE: &str = "TOKEN COUNT SUMMARY";

/// Pipe table with one row per lexeme, without the title block.
pub fn table(summary: &[TokenSummary]) -> String {
    let mut out = String::new();
    out.push_str("| Element | Word | Count |\n");
    out.push_str("|---------|------|-------|\n");
    for (label, row) in labelled_rows(summary) {
        if label.is_empty() {
            let _ = writeln!(out, "| | {} | {} |", row.lexeme, row.count);
        } else {
            let _ = writeln!(out, "| {} | {} | {} |", label, row.lexeme, row.count);
        }
    }
    out
}

/// The full text report: title, underline, blank line, table.
pub fn render(summary: &[TokenSummary]) -> String {
    format!("{}\n{}\n\n{}", TITLE, "=".repeat(TITLE.len()), table(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render() {
        let result = tokenize("x = y;\n");
        assert_eq!(
            render(&result.summary),
            "TOKEN COUNT SUMMARY\n\
             ===================\n\
             \n\
             | Element | Word | Count |\n\
             |---------|------|-------|\n\
             | Identifiers | x | 1 |\n\
             | | y | 1 |\n\
             | Assignment Operators | = | 1 |\n\
             | Punctuation | ; | 1 |\n"
        );
    }

    #[test]
    fn test_empty_summary_is_header_only() {
        assert_eq!(table(&[]).lines().count(), 2);
    }
}
