//! Lexical error types
//!
//! Every error is fatal: the scanner stops at the first one and returns it
//! alongside the tokens produced so far. [`LexError`] carries the position and
//! offending lexeme; [`LexErrorKind`] says what went wrong.

use super::token::Token;
use thiserror::Error;

/// Diagnostic code attached to the statement-shape heuristics.
pub const MISSING_SEMICOLON_CODE: &str = "CS1002";

/// A fatal lexical or line-level error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}, column {column}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: usize,
    pub column: usize,
    pub lexeme: String,
}

impl LexError {
    pub fn new(kind: LexErrorKind, line: usize, column: usize, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            column,
            lexeme: lexeme.into(),
        }
    }

    /// Error positioned on an already-emitted token.
    pub fn at_token(kind: LexErrorKind, token: &Token) -> Self {
        Self::new(kind, token.line, token.column, token.value.clone())
    }

    /// Human-readable description without the position prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Diagnostic code, when the violation maps to one.
    pub fn code(&self) -> Option<&'static str> {
        match &self.kind {
            LexErrorKind::LineValidation(
                LineViolation::IncompleteStatement(_) | LineViolation::MissingSemicolon,
            ) => Some(MISSING_SEMICOLON_CODE),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("invalid character '{0}'")]
    InvalidCharacter(char),

    #[error("unterminated string literal{}", eof_suffix(.at_eof))]
    UnterminatedString { at_eof: bool },

    #[error("malformed number: {0}")]
    MalformedNumber(NumberDefect),

    #[error("unbalanced grouping: {0}")]
    UnbalancedGrouping(GroupingDefect),

    #[error("{0}")]
    LineValidation(LineViolation),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberDefect {
    #[error("multiple decimal points")]
    MultipleDecimalPoints,

    #[error("invalid trailing character '{0}'")]
    InvalidTrailingCharacter(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupingDefect {
    #[error("closing symbol '{close}' does not match opening '{open}'")]
    Mismatch { open: char, close: char },

    #[error("closing symbol '{0}' has no matching opening")]
    UnmatchedClose(char),

    #[error("unclosed grouping symbols: {}", quote_all(.0))]
    Unclosed(Vec<char>),
}

/// Heuristic statement-shape violations found by the line validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineViolation {
    #[error("isolated term '{0}'; a line cannot contain a single term")]
    IsolatedTerm(String),

    #[error("operator sequence without operands")]
    OperatorSequenceWithoutOperands,

    #[error("incomplete statement: isolated identifier '{0}' before ';' ('; expected')")]
    IncompleteStatement(String),

    #[error("operator '{0}' in invalid position; missing operand")]
    OperatorInInvalidPosition(String),

    #[error("expected an argument after ','")]
    MissingArgumentAfterComma,

    #[error("';' expected at end of expression")]
    MissingSemicolon,
}

fn eof_suffix(at_eof: &bool) -> &'static str {
    if *at_eof {
        " at end of file"
    } else {
        ""
    }
}

fn quote_all(symbols: &[char]) -> String {
    symbols
        .iter()
        .map(|s| format!("'{}'", s))
        .collect::<Vec<_>>()
        .join(", ")
}
