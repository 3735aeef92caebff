//! Fixed vocabulary tables.
//!
//! Operator tables hold resolved lexemes (after maximal munch), not raw
//! characters. Every table is built on first use and is read-only afterwards.

use super::token::TokenKind;
use rustc_hash::FxHashSet;
use std::sync::LazyLock;

const RESERVED_WORDS: &[&str] = &[
    // Data types
    "bool", "byte", "char", "decimal", "double", "float", "int", "long", "sbyte", "short",
    "uint", "ulong", "ushort", "void", "string", "object",
    // Access modifiers
    "public", "private", "protected", "internal", "static", "readonly", "const",
    // Control flow
    "if", "else", "while", "for", "foreach", "do", "switch", "case", "default", "break",
    "continue", "return", "goto", "throw", "try", "catch", "finally",
    // Declarations and the rest
    "class", "struct", "interface", "enum", "delegate", "event", "operator", "namespace",
    "using", "new", "this", "base", "async", "await", "checked", "unchecked", "fixed", "lock",
    "out", "ref", "params", "sizeof", "typeof", "nameof", "when", "where", "yield", "partial",
    "abstract", "virtual", "override", "sealed", "extern", "volatile",
];

const ARITHMETIC: &[&str] = &["+", "-", "*", "/", "%", "++", "--"];
const COMPARISON: &[&str] = &["==", "!=", ">", "<", ">=", "<="];
const LOGICAL: &[&str] = &["&&", "||", "!", "&", "|", "^", "~"];
const ASSIGNMENT: &[&str] = &[
    "=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<=", ">>=", "??=",
];

/// Two-character operators the scanner may extend a single character into.
pub const TWO_CHAR_OPERATORS: &[&str] = &[
    "==", "!=", ">=", "<=", "+=", "-=", "*=", "/=", "%=", "&&", "||", "++", "--", "->", "??",
    "?:", "<<", ">>", "=>",
];

/// Leading keywords that exempt a line ending in `)` from the missing `;`
/// check.
const CONTROL_KEYWORDS: &[&str] = &[
    "if", "for", "while", "switch", "catch", "using", "namespace", "class", "struct",
    "interface", "else", "do", "try",
];

fn table(words: &[&'static str]) -> FxHashSet<&'static str> {
    words.iter().copied().collect()
}

static RESERVED: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| table(RESERVED_WORDS));
static ARITHMETIC_OPS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| table(ARITHMETIC));
static COMPARISON_OPS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| table(COMPARISON));
static LOGICAL_OPS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| table(LOGICAL));
static ASSIGNMENT_OPS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| table(ASSIGNMENT));
static TWO_CHAR: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| table(TWO_CHAR_OPERATORS));
static CONTROL: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| table(CONTROL_KEYWORDS));

pub fn is_reserved_word(word: &str) -> bool {
    RESERVED.contains(word)
}

pub fn is_two_char_operator(lexeme: &str) -> bool {
    TWO_CHAR.contains(lexeme)
}

pub fn is_control_keyword(word: &str) -> bool {
    CONTROL.contains(word)
}

/// Classify a word that starts with a letter or underscore.
pub fn classify_word(word: &str) -> TokenKind {
    if is_reserved_word(word) {
        TokenKind::Keyword
    } else if word == "true" || word == "false" {
        TokenKind::Boolean
    } else if word == "null" {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    }
}

/// Map a resolved operator lexeme to its category.
///
/// Lexemes that belong to no table (`->`, `??`, `?:`, `=>`, `<<`, `>>`) are
/// arithmetic.
pub fn classify_operator(lexeme: &str) -> TokenKind {
    if ARITHMETIC_OPS.contains(lexeme) {
        TokenKind::OperatorArithmetic
    } else if COMPARISON_OPS.contains(lexeme) {
        TokenKind::OperatorComparison
    } else if LOGICAL_OPS.contains(lexeme) {
        TokenKind::OperatorLogical
    } else if ASSIGNMENT_OPS.contains(lexeme) {
        TokenKind::OperatorAssignment
    } else {
        TokenKind::OperatorArithmetic
    }
}
