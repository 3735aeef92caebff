//! Lexical analysis for a C#-flavoured C-family subset
//!
//! This module turns source text into a classified token stream:
//! - [`classify`]: single-character predicates
//! - [`patterns`]: fixed keyword and operator tables
//! - [`scanner`]: the character-driven state machine
//! - [`validator`]: per-line statement-shape heuristics
//! - [`summary`]: per-category lexeme counts
//! - [`errors`]: the fatal error taxonomy
//!
//! # Scope
//!
//! This is not a parser. There is no grammar and no AST; the only structure
//! tracked is grouping-symbol balance, plus a handful of heuristics applied to
//! the flat tokens of each line. Scanning stops at the first violation.

pub mod classify;
pub mod errors;
pub mod patterns;
pub mod scanner;
pub mod summary;
pub mod token;
pub mod validator;

pub use errors::{GroupingDefect, LexError, LexErrorKind, LineViolation, NumberDefect};
pub use scanner::Scanner;
pub use summary::{Category, TokenSummary};
pub use token::{Token, TokenKind};

/// Outcome of one tokenization call.
///
/// On a halted scan `tokens` holds everything emitted before the failure
/// followed by a single [`TokenKind::Error`] marker, and `error` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexResult {
    pub tokens: Vec<Token>,
    pub summary: Vec<TokenSummary>,
    pub error: Option<LexError>,
}

impl LexResult {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Number of error markers in the token stream (0 or 1).
    pub fn error_token_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Error)
            .count()
    }
}

/// Tokenize `source` and validate it line by line.
pub fn tokenize(source: &str) -> LexResult {
    Scanner::new(source).run()
}
