//! # Introduction
//!
//! lexcolor tokenizes source written in a restricted, C#-flavoured subset of
//! the C family, checks each line against a few statement-shape heuristics,
//! and reports what it found: a colour-coded listing on the terminal, an
//! optional full-screen viewer, and summary reports on disk.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Scanner → Tokens ─┬→ Line validator (per line)
//!                            └→ Summary → Console / Viewer / Reports
//! ```
//!
//! 1. [`lexer`]: the scanner, line validator, grouping balance tracking and
//!    summary aggregation. [`lexer::tokenize`] is the library entry point.
//! 2. [`report`]: text, CSV, HTML and JSON renderers plus
//!    [`report::write_reports`].
//! 3. [`ui`]: the console colorizer and the ratatui viewer.
//! 4. [`config`] and [`logging`]: command line resolution and diagnostics
//!    setup for the binary.
//!
//! ```
//! let result = lexcolor::lexer::tokenize("int total = a + 1;\n");
//! assert!(result.is_valid());
//! assert_eq!(result.summary[0].lexeme, "int");
//! ```

pub mod config;
pub mod lexer;
pub mod logging;
pub mod report;
pub mod ui;
