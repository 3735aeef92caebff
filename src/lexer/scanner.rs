//! Character-driven scanner
//!
//! Walks the newline-normalized source once, left to right, dispatching on
//! the character under the cursor. Every character ends up in exactly one
//! token, trivia included, so a successful scan reproduces the source when the
//! token values are concatenated.
//!
//! The scanner also tracks open grouping symbols and runs the line validator
//! each time a line is completed. The first fatal condition stops the scan; an
//! [`TokenKind::Error`] marker is appended to the token list and the error is
//! returned inside the [`LexResult`].

use super::classify;
use super::errors::{GroupingDefect, LexError, LexErrorKind, NumberDefect};
use super::patterns;
use super::summary::summarize;
use super::token::{Token, TokenKind};
use super::validator::validate_line;
use super::LexResult;
use tracing::debug;

/// Case-insensitive suffix letters accepted right after a numeric literal.
const NUMBER_SUFFIXES: [char; 5] = ['f', 'd', 'm', 'l', 'u'];

/// Replace CRLF and lone CR line endings with LF.
pub fn normalize_newlines(source: &str) -> String {
    source.replace("\r\n", "\n").replace('\r', "\n")
}

/// Scanner state for one input buffer.
pub struct Scanner {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
    /// Index into `tokens` where the current line begins.
    line_start: usize,
    grouping: Vec<char>,
    line_checks: bool,
}

impl Scanner {
    /// Create a scanner over `source`. Line endings are normalized here.
    pub fn new(source: &str) -> Self {
        Self {
            input: normalize_newlines(source).chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
            line_start: 0,
            grouping: Vec::new(),
            line_checks: true,
        }
    }

    /// Skip the per-line heuristics; character-level checks still apply.
    #[cfg(test)]
    pub(crate) fn without_line_checks(mut self) -> Self {
        self.line_checks = false;
        self
    }

    /// Consume the scanner and produce the assembled result.
    pub fn run(mut self) -> LexResult {
        debug!(chars = self.input.len(), "scan started");

        let outcome = self.scan();
        match &outcome {
            Ok(()) => debug!(tokens = self.tokens.len(), lines = self.line, "scan finished"),
            Err(err) => debug!(tokens = self.tokens.len(), error = %err, "scan halted"),
        }

        let summary = summarize(&self.tokens);
        LexResult {
            tokens: self.tokens,
            summary,
            error: outcome.err(),
        }
    }

    fn scan(&mut self) -> Result<(), LexError> {
        while let Some(ch) = self.peek() {
            match ch {
                '\n' => self.newline()?,
                '/' if self.peek_ahead(1) == Some('/') => self.line_comment(),
                '"' => self.string_literal()?,
                c if classify::is_whitespace(c) => self.whitespace(),
                c if classify::is_digit(c) => self.number_literal()?,
                c if classify::is_letter_or_underscore(c) => self.identifier_or_keyword(),
                c if classify::is_operator_start(c) => self.operator(),
                c if classify::is_grouping_open(c) => self.grouping_open(c),
                c if classify::is_grouping_close(c) => self.grouping_close(c)?,
                c if classify::is_punctuation(c) => self.punctuation(c),
                c => return Err(self.fail(LexErrorKind::InvalidCharacter(c))),
            }
        }

        // The last line may not end with a newline.
        self.finish_line()?;

        if let Some(&innermost) = self.grouping.last() {
            let err = LexError::new(
                LexErrorKind::UnbalancedGrouping(GroupingDefect::Unclosed(self.grouping.clone())),
                self.line,
                self.column,
                innermost.to_string(),
            );
            return Err(self.mark(err));
        }

        Ok(())
    }

    fn newline(&mut self) -> Result<(), LexError> {
        self.emit(TokenKind::Newline, "\n".to_string(), self.line, self.column);
        self.finish_line()?;
        self.advance();
        Ok(())
    }

    /// Validate the tokens of the line just completed and start a new window.
    fn finish_line(&mut self) -> Result<(), LexError> {
        let start = std::mem::replace(&mut self.line_start, self.tokens.len());
        if !self.line_checks {
            return Ok(());
        }
        validate_line(&self.tokens[start..]).map_err(|err| self.mark(err))
    }

    fn whitespace(&mut self) {
        let (line, column) = (self.line, self.column);
        let mut value = String::new();
        self.take_while_into(&mut value, classify::is_whitespace);
        self.emit(TokenKind::Whitespace, value, line, column);
    }

    /// `//` through the end of the line, newline excluded.
    fn line_comment(&mut self) {
        let (line, column) = (self.line, self.column);
        let mut value = String::new();
        self.take_while_into(&mut value, |c| c != '\n');
        self.emit(TokenKind::Comment, value, line, column);
    }

    /// String literal kept verbatim, quotes and escapes included.
    fn string_literal(&mut self) -> Result<(), LexError> {
        let (line, column) = (self.line, self.column);
        let mut value = String::new();
        self.bump_into(&mut value); // opening quote

        loop {
            match self.peek() {
                None => {
                    return Err(self.fail(LexErrorKind::UnterminatedString { at_eof: true }));
                }
                Some('\n') => {
                    return Err(self.fail(LexErrorKind::UnterminatedString { at_eof: false }));
                }
                Some('"') => {
                    self.bump_into(&mut value);
                    break;
                }
                Some('\\') => {
                    // Escape pair; the escape code itself is not checked
                    self.bump_into(&mut value);
                    self.bump_into(&mut value);
                }
                Some(_) => self.bump_into(&mut value),
            }
        }

        self.emit(TokenKind::String, value, line, column);
        Ok(())
    }

    fn number_literal(&mut self) -> Result<(), LexError> {
        let (line, column) = (self.line, self.column);
        let mut value = String::new();
        self.take_while_into(&mut value, classify::is_digit);

        if self.peek() == Some('.') {
            self.bump_into(&mut value);
            self.take_while_into(&mut value, classify::is_digit);

            if self.peek() == Some('.') {
                return Err(self.fail(LexErrorKind::MalformedNumber(
                    NumberDefect::MultipleDecimalPoints,
                )));
            }
        }

        if let Some(next) = self.peek() {
            if NUMBER_SUFFIXES.contains(&next.to_ascii_lowercase()) {
                self.bump_into(&mut value);
            } else if classify::is_letter_or_underscore(next) {
                return Err(self.fail(LexErrorKind::MalformedNumber(
                    NumberDefect::InvalidTrailingCharacter(next),
                )));
            }
        }

        self.emit(TokenKind::Number, value, line, column);
        Ok(())
    }

    fn identifier_or_keyword(&mut self) {
        let (line, column) = (self.line, self.column);
        let mut value = String::new();
        self.take_while_into(&mut value, |c| {
            classify::is_letter_or_underscore(c) || classify::is_digit(c)
        });
        let kind = patterns::classify_word(&value);
        self.emit(kind, value, line, column);
    }

    /// Longest operator match: one character, extended to a listed pair, and
    /// `??` extended to `??=`.
    fn operator(&mut self) {
        let (line, column) = (self.line, self.column);
        let mut value = String::new();
        self.bump_into(&mut value);

        if let Some(next) = self.peek() {
            let mut pair = value.clone();
            pair.push(next);
            if patterns::is_two_char_operator(&pair) {
                self.advance();
                value = pair;
                if value == "??" && self.peek() == Some('=') {
                    self.bump_into(&mut value);
                }
            }
        }

        let kind = patterns::classify_operator(&value);
        self.emit(kind, value, line, column);
    }

    fn grouping_open(&mut self, ch: char) {
        self.grouping.push(ch);
        self.single(TokenKind::GroupingOpen, ch);
    }

    fn grouping_close(&mut self, ch: char) -> Result<(), LexError> {
        match self.grouping.last().copied() {
            None => Err(self.fail(LexErrorKind::UnbalancedGrouping(
                GroupingDefect::UnmatchedClose(ch),
            ))),
            Some(open) if classify::matching_close(open) != Some(ch) => Err(self.fail(
                LexErrorKind::UnbalancedGrouping(GroupingDefect::Mismatch { open, close: ch }),
            )),
            Some(_) => {
                self.grouping.pop();
                self.single(TokenKind::GroupingClose, ch);
                Ok(())
            }
        }
    }

    fn punctuation(&mut self, ch: char) {
        self.single(TokenKind::Punctuation, ch);
    }

    fn single(&mut self, kind: TokenKind, ch: char) {
        self.emit(kind, ch.to_string(), self.line, self.column);
        self.advance();
    }

    fn emit(&mut self, kind: TokenKind, value: String, line: usize, column: usize) {
        self.tokens.push(Token {
            kind,
            value,
            line,
            column,
        });
    }

    /// Build an error at the cursor and record the error marker.
    fn fail(&mut self, kind: LexErrorKind) -> LexError {
        let lexeme = self.peek().map(String::from).unwrap_or_default();
        let err = LexError::new(kind, self.line, self.column, lexeme);
        self.mark(err)
    }

    /// Append the error marker for `err` and hand the error back.
    fn mark(&mut self, err: LexError) -> LexError {
        self.tokens.push(Token::new(
            TokenKind::Error,
            err.lexeme.clone(),
            err.line,
            err.column,
        ));
        err
    }

    fn take_while_into(&mut self, buf: &mut String, keep: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !keep(ch) {
                break;
            }
            buf.push(ch);
            self.advance();
        }
    }

    fn bump_into(&mut self, buf: &mut String) {
        if let Some(ch) = self.advance() {
            buf.push(ch);
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = *self.input.get(self.position)?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::errors::LineViolation;
    use pretty_assertions::assert_eq;

    fn scan(source: &str) -> LexResult {
        Scanner::new(source).run()
    }

    fn kinds_and_values(result: &LexResult) -> Vec<(TokenKind, &str)> {
        result
            .tokens
            .iter()
            .map(|t| (t.kind, t.value.as_str()))
            .collect()
    }

    #[test]
    fn test_declaration_line() {
        let result = scan("int x = 5;\n");
        assert!(result.is_valid());
        assert_eq!(
            kinds_and_values(&result),
            vec![
                (TokenKind::Keyword, "int"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Identifier, "x"),
                (TokenKind::Whitespace, " "),
                (TokenKind::OperatorAssignment, "="),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "5"),
                (TokenKind::Punctuation, ";"),
                (TokenKind::Newline, "\n"),
            ]
        );
    }

    #[test]
    fn test_positions_are_one_based() {
        let result = scan("int a;\n  a = 1;");
        let a = &result.tokens[5];
        assert_eq!((a.kind, a.line, a.column), (TokenKind::Whitespace, 2, 1));
        let second_a = &result.tokens[6];
        assert_eq!((second_a.value.as_str(), second_a.line, second_a.column), ("a", 2, 3));
    }

    #[test]
    fn test_crlf_is_normalized() {
        let result = scan("int a;\r\nint b;\rint c;");
        assert!(result.is_valid());
        let newlines = result
            .tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Newline)
            .count();
        assert_eq!(newlines, 2);
        assert_eq!(result.tokens.last().map(|t| t.line), Some(3));
    }

    #[test]
    fn test_maximal_munch() {
        let result = scan("a == b;");
        let ops: Vec<_> = result.tokens.iter().filter(|t| t.kind.is_operator()).collect();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].kind, TokenKind::OperatorComparison);
        assert_eq!(ops[0].value, "==");
    }

    #[test]
    fn test_lone_double_equals_is_one_token() {
        let result = scan("==");
        assert_eq!(result.tokens[0].kind, TokenKind::OperatorComparison);
        assert_eq!(result.tokens[0].value, "==");
        assert_eq!(result.tokens[1].kind, TokenKind::Error);
        assert_eq!(result.tokens.len(), 2);
    }

    #[test]
    fn test_compound_operators() {
        let result = scan("x += y++ && z -> w >> 2 <= 3;");
        let ops: Vec<_> = result
            .tokens
            .iter()
            .filter(|t| t.kind.is_operator())
            .map(|t| (t.kind, t.value.as_str()))
            .collect();
        assert_eq!(
            ops,
            vec![
                (TokenKind::OperatorAssignment, "+="),
                (TokenKind::OperatorArithmetic, "++"),
                (TokenKind::OperatorLogical, "&&"),
                (TokenKind::OperatorArithmetic, "->"),
                (TokenKind::OperatorArithmetic, ">>"),
                (TokenKind::OperatorComparison, "<="),
            ]
        );
    }

    #[test]
    fn test_division_is_not_a_comment() {
        let result = scan("a = b / c; // halve");
        assert!(result.is_valid());
        assert!(result
            .tokens
            .iter()
            .any(|t| t.kind == TokenKind::OperatorArithmetic && t.value == "/"));
        assert_eq!(
            result.tokens.last().map(|t| (t.kind, t.value.as_str())),
            Some((TokenKind::Comment, "// halve"))
        );
    }

    #[test]
    fn test_string_keeps_escapes_verbatim() {
        let result = scan(r#"s = "say \"hi\"\n";"#);
        assert!(result.is_valid());
        let string = result
            .tokens
            .iter()
            .find(|t| t.kind == TokenKind::String)
            .unwrap();
        assert_eq!(string.value, r#""say \"hi\"\n""#);
        assert_eq!(string.column, 5);
    }

    #[test]
    fn test_unterminated_string_at_newline() {
        let result = scan("s = \"abc\nx = 1;");
        let err = result.error.unwrap();
        assert_eq!(err.kind, LexErrorKind::UnterminatedString { at_eof: false });
        assert_eq!((err.line, err.column, err.lexeme.as_str()), (1, 9, "\n"));
    }

    #[test]
    fn test_unterminated_string_at_eof() {
        let result = scan("s = \"abc");
        let err = result.error.unwrap();
        assert_eq!(err.kind, LexErrorKind::UnterminatedString { at_eof: true });
        assert_eq!(err.lexeme, "");
    }

    #[test]
    fn test_number_suffix() {
        let result = scan("float f = 123f;");
        assert!(result.is_valid());
        assert!(result
            .tokens
            .iter()
            .any(|t| t.kind == TokenKind::Number && t.value == "123f"));

        let upper = scan("decimal d = 1.5M;");
        assert!(upper
            .tokens
            .iter()
            .any(|t| t.kind == TokenKind::Number && t.value == "1.5M"));
    }

    #[test]
    fn test_multiple_decimal_points() {
        let result = scan("123.45.6");
        let err = result.error.clone().unwrap();
        assert_eq!(
            err.kind,
            LexErrorKind::MalformedNumber(NumberDefect::MultipleDecimalPoints)
        );
        assert_eq!((err.line, err.column, err.lexeme.as_str()), (1, 7, "."));
        assert_eq!(
            result.tokens.last().map(|t| (t.kind, t.column)),
            Some((TokenKind::Error, 7))
        );
    }

    #[test]
    fn test_invalid_number_trailer() {
        let result = scan("int n = 12abc;");
        let err = result.error.unwrap();
        assert_eq!(
            err.kind,
            LexErrorKind::MalformedNumber(NumberDefect::InvalidTrailingCharacter('a'))
        );
        assert_eq!(err.column, 11);
    }

    #[test]
    fn test_word_classification() {
        let result = scan("bool ok = true;\nobject o = null;");
        assert!(result.is_valid());
        let words: Vec<_> = result
            .tokens
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .map(|t| (t.kind, t.value.as_str()))
            .collect();
        assert!(words.contains(&(TokenKind::Boolean, "true")));
        assert!(words.contains(&(TokenKind::Keyword, "null")));
        assert!(words.contains(&(TokenKind::Keyword, "object")));
        assert!(words.contains(&(TokenKind::Identifier, "ok")));
    }

    #[test]
    fn test_invalid_character() {
        let result = scan("int a = 1;\nint b = @;");
        let err = result.error.unwrap();
        assert_eq!(err.kind, LexErrorKind::InvalidCharacter('@'));
        assert_eq!((err.line, err.column, err.lexeme.as_str()), (2, 9, "@"));
    }

    #[test]
    fn test_unmatched_close_position() {
        let result = scan("int a = 1;\n  x = 2);");
        let err = result.error.unwrap();
        assert_eq!(
            err.kind,
            LexErrorKind::UnbalancedGrouping(GroupingDefect::UnmatchedClose(')'))
        );
        assert_eq!((err.line, err.column), (2, 8));
    }

    #[test]
    fn test_mismatched_close() {
        let result = scan("a = (b];");
        let err = result.error.unwrap();
        assert_eq!(
            err.kind,
            LexErrorKind::UnbalancedGrouping(GroupingDefect::Mismatch {
                open: '(',
                close: ']'
            })
        );
        assert_eq!(err.column, 7);
    }

    #[test]
    fn test_unclosed_reports_every_open_symbol() {
        let result = scan("class A {\n  int[] v = new int[3];\n  void F() {\n");
        let err = result.error.unwrap();
        assert_eq!(
            err.kind,
            LexErrorKind::UnbalancedGrouping(GroupingDefect::Unclosed(vec!['{', '{']))
        );
        assert_eq!(err.lexeme, "{");
        assert_eq!((err.line, err.column), (4, 1));
    }

    #[test]
    fn test_line_validation_halts_scan() {
        let result = scan("int a = 1;\nx;\nint b = 2;");
        let err = result.error.unwrap();
        assert_eq!(
            err.kind,
            LexErrorKind::LineValidation(LineViolation::IncompleteStatement("x".into()))
        );
        assert_eq!((err.line, err.column), (2, 1));
        // Nothing from the third line was scanned.
        assert!(result.tokens.iter().all(|t| t.line <= 2));
        let last = result.tokens.last().unwrap();
        assert_eq!((last.kind, last.value.as_str()), (TokenKind::Error, "x"));
    }

    #[test]
    fn test_round_trip() {
        let source = "using System;\n\nclass P {\n\tstatic void Main() {\n\t\tint x = 10 % 3; // rest\n\t}\n}\n";
        let result = scan(source);
        assert!(result.is_valid(), "{:?}", result.error);
        let rebuilt: String = result.tokens.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(rebuilt, source);
    }
}
