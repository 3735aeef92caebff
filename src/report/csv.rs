//! CSV export with relative frequencies.
//!
//! Fields go through the `csv` writer with non-numeric quoting: text and
//! percentages are quoted with embedded quotes doubled, counts are bare.

use super::{percentage, total_count};
use crate::lexer::TokenSummary;
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use std::io;

const HEADER: [&str; 4] = ["Category", "Token", "Count", "Relative Frequency"];

fn writer(buf: Vec<u8>) -> Writer<Vec<u8>> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(buf)
}

/// Rows sorted by category label, then by count descending; a `TOTAL` row
/// closes the file after a blank line.
pub fn render(summary: &[TokenSummary]) -> Result<String, csv::Error> {
    let total = total_count(summary);

    let mut rows: Vec<&TokenSummary> = summary.iter().collect();
    rows.sort_by(|a, b| {
        a.category
            .label()
            .cmp(b.category.label())
            .then_with(|| b.count.cmp(&a.count))
    });

    let mut out = writer(Vec::new());
    out.write_record(HEADER)?;
    for row in rows {
        let count = row.count.to_string();
        let share = percentage(row.count, total);
        out.write_record([
            row.category.label(),
            row.lexeme.as_str(),
            count.as_str(),
            share.as_str(),
        ])?;
    }

    // A record with no fields is written as `""`, so the separator line is
    // pushed between two writers.
    let mut buf = out.into_inner().map_err(|err| err.into_error())?;
    buf.push(b'\n');

    let mut out = writer(buf);
    let total = total.to_string();
    out.write_record(["TOTAL", "", total.as_str(), "100.00%"])?;
    let buf = out.into_inner().map_err(|err| err.into_error())?;

    String::from_utf8(buf).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err).into())
}
