//! TUI pane rendering modules
//!
//! Each pane module exports a primary `render_*` function taking the frame,
//! its area and the data it shows.
//!
//! - [`source`]: token-coloured source listing with the error line marked
//! - [`summary`]: per-category lexeme counts as a table
//! - [`status`]: verdict and keybindings

pub mod source;
pub mod status;
pub mod summary;

pub use source::{render_source_pane, token_lines};
pub use status::render_status_bar;
pub use summary::render_summary_pane;
