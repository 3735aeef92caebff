//! Report renderers
//!
//! Each renderer is a pure function of the summary (and, for some, the token
//! stream) returning the document as a `String`:
//!
//! - [`text`]: pipe table, also printed to the console
//! - [`csv`]: spreadsheet rows with relative frequencies
//! - [`html`]: self-contained page with a sortable table
//! - [`json`]: statistics, category grouping and frequency ranking
//!
//! [`write_reports`] renders the selected formats into an output directory.

pub mod csv;
pub mod html;
pub mod json;
pub mod text;

use crate::lexer::{Category, LexResult, TokenSummary};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Output formats, in the order they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ReportFormat {
    Text,
    Csv,
    Html,
    Json,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 4] = [
        ReportFormat::Html,
        ReportFormat::Json,
        ReportFormat::Csv,
        ReportFormat::Text,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ReportFormat::Text => "summary.txt",
            ReportFormat::Csv => "token_report.csv",
            ReportFormat::Html => "lexical_report.html",
            ReportFormat::Json => "lexical_analysis.json",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ReportFormat::Text => "plain text table",
            ReportFormat::Csv => "spreadsheet rows",
            ReportFormat::Html => "interactive page",
            ReportFormat::Json => "structured data",
        }
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot create report directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("cannot serialize JSON report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot write CSV report: {0}")]
    Csv(#[from] ::csv::Error),
}

/// Render every format in `formats` and write it under `out_dir`.
///
/// `source_name` is shown in the HTML header. Returns the written paths in
/// the order of `formats`.
pub fn write_reports(
    result: &LexResult,
    source_name: &str,
    formats: &[ReportFormat],
    out_dir: &Path,
    generated_at: DateTime<Utc>,
) -> Result<Vec<PathBuf>, ReportError> {
    fs::create_dir_all(out_dir).map_err(|source| ReportError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(formats.len());
    for &format in formats {
        let body = match format {
            ReportFormat::Text => text::render(&result.summary),
            ReportFormat::Csv => csv::render(&result.summary)?,
            ReportFormat::Html => html::render(&result.summary, source_name, generated_at),
            ReportFormat::Json => json::render(&result.summary, &result.tokens, generated_at)?,
        };

        let path = out_dir.join(format.file_name());
        fs::write(&path, body).map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), ?format, "report written");
        written.push(path);
    }

    Ok(written)
}

/// Sum of all counts.
pub(crate) fn total_count(summary: &[TokenSummary]) -> usize {
    summary.iter().map(|s| s.count).sum()
}

/// Number of distinct lexemes across all categories.
pub(crate) fn unique_lexemes(summary: &[TokenSummary]) -> usize {
    summary
        .iter()
        .map(|s| s.lexeme.as_str())
        .collect::<FxHashSet<_>>()
        .len()
}

/// Per-category totals in first-seen order.
pub(crate) fn category_totals(summary: &[TokenSummary]) -> Vec<(Category, usize)> {
    let mut totals: Vec<(Category, usize)> = Vec::new();
    for row in summary {
        match totals.iter_mut().find(|(c, _)| *c == row.category) {
            Some((_, total)) => *total += row.count,
            None => totals.push((row.category, row.count)),
        }
    }
    totals
}

/// `count` as a share of `total`, two decimals and a percent sign.
pub(crate) fn percentage(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.00%".to_string();
    }
    format!("{:.2}%", count as f64 * 100.0 / total as f64)
}

/// Summary rows paired with the label to print: the category label on the
/// first row of each run, empty on the rest.
pub fn labelled_rows(summary: &[TokenSummary]) -> impl Iterator<Item = (&str, &TokenSummary)> {
    summary.iter().enumerate().map(move |(idx, row)| {
        let starts_run = idx == 0 || summary[idx - 1].category != row.category;
        (if starts_run { row.category.label() } else { "" }, row)
    })
}
