//! Terminal output built on [crossterm](https://docs.rs/crossterm) and
//! [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`console`]**: the colour-coded listing, legend and verdict printed to stdout
//! - **[`app`]**: the interactive viewer's state and keyboard event loop
//! - **[`panes`]**: stateless render functions for each viewer pane
//! - **[`theme`]**: the colour palette shared by both outputs
//!
//! [`App`] is constructed from a finished [`LexResult`]; call [`App::run`] to
//! start the event loop.
//!
//! [`LexResult`]: crate::lexer::LexResult
//! [`App::run`]: app::App::run

pub mod app;
pub mod console;
pub mod panes;
pub mod theme;

pub use app::App;
