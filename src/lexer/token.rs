//! Token model shared by the scanner, the validator and every renderer.

use serde::Serialize;
use std::fmt;

/// Classification assigned to every lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Words
    Keyword,
    Identifier,

    // Literals
    Number,
    String,
    Boolean,

    // Operators
    OperatorArithmetic,
    OperatorComparison,
    OperatorLogical,
    OperatorAssignment,

    // Signs
    GroupingOpen,
    GroupingClose,
    Punctuation,

    // Trivia
    Comment,
    Whitespace,
    Newline,

    // Synthetic marker appended when the scan halts
    Error,
}

impl TokenKind {
    /// True for the four operator categories.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::OperatorArithmetic
                | TokenKind::OperatorComparison
                | TokenKind::OperatorLogical
                | TokenKind::OperatorAssignment
        )
    }

    pub fn is_grouping(self) -> bool {
        matches!(self, TokenKind::GroupingOpen | TokenKind::GroupingClose)
    }

    /// Whitespace, newlines and comments carry no syntactic weight.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Newline | TokenKind::Comment
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Boolean => "boolean",
            TokenKind::OperatorArithmetic => "arithmetic operator",
            TokenKind::OperatorComparison => "comparison operator",
            TokenKind::OperatorLogical => "logical operator",
            TokenKind::OperatorAssignment => "assignment operator",
            TokenKind::GroupingOpen => "opening grouping symbol",
            TokenKind::GroupingClose => "closing grouping symbol",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Comment => "comment",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Newline => "newline",
            TokenKind::Error => "error",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme.
///
/// `line` and `column` are 1-based and point at the first character of
/// `value` as it was when the token was emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
            column,
        }
    }

    /// True when this token is punctuation or grouping with exactly `symbol`
    /// as its text.
    pub fn is_symbol(&self, symbol: &str) -> bool {
        matches!(
            self.kind,
            TokenKind::Punctuation | TokenKind::GroupingOpen | TokenKind::GroupingClose
        ) && self.value == symbol
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Newline => write!(f, "newline at {}:{}", self.line, self.column),
            _ => write!(
                f,
                "{} '{}' at {}:{}",
                self.kind, self.value, self.line, self.column
            ),
        }
    }
}
