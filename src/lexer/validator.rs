//! Per-line statement-shape heuristics
//!
//! The scanner hands over every token emitted on one logical line. Trivia is
//! dropped first; the remaining significant tokens go through a fixed,
//! ordered list of checks and the first one that fires rejects the line.
//! These are heuristics over a flat token list, not grammar rules: `name;` is
//! rejected and so is a bare call without a trailing `;`.

use super::errors::{LexError, LexErrorKind, LineViolation};
use super::patterns;
use super::token::{Token, TokenKind};

/// Check one completed line. On rejection the error names the offending
/// token and carries its position.
pub fn validate_line(line: &[Token]) -> Result<(), LexError> {
    let significant: Vec<&Token> = line.iter().filter(|t| !t.kind.is_trivia()).collect();

    let (first, last) = match (significant.first(), significant.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Ok(()),
    };

    if significant.len() == 1 {
        if first.kind.is_grouping() {
            return Ok(());
        }
        return Err(reject(
            LineViolation::IsolatedTerm(first.value.clone()),
            first,
        ));
    }

    if significant
        .iter()
        .all(|t| t.kind.is_operator() || t.kind == TokenKind::Punctuation)
    {
        return Err(reject(LineViolation::OperatorSequenceWithoutOperands, first));
    }

    if significant.len() == 2 && first.kind == TokenKind::Identifier && last.is_symbol(";") {
        return Err(reject(
            LineViolation::IncompleteStatement(first.value.clone()),
            first,
        ));
    }

    if first.kind.is_operator() || last.kind.is_operator() {
        let culprit = if first.kind.is_operator() { first } else { last };
        return Err(reject(
            LineViolation::OperatorInInvalidPosition(culprit.value.clone()),
            culprit,
        ));
    }

    for (idx, token) in significant.iter().enumerate() {
        if !token.is_symbol(",") {
            continue;
        }
        match significant.get(idx + 1) {
            None => return Err(reject(LineViolation::MissingArgumentAfterComma, token)),
            Some(next) if next.is_symbol(")") => {
                return Err(reject(LineViolation::MissingArgumentAfterComma, token))
            }
            Some(_) => {}
        }
    }

    if looks_like_unterminated_call(&significant) {
        return Err(reject(LineViolation::MissingSemicolon, last));
    }

    Ok(())
}

/// A line with parentheses that ends in `)`, has no `;`, and does not open
/// with a control or definition keyword.
fn looks_like_unterminated_call(significant: &[&Token]) -> bool {
    let (Some(first), Some(last)) = (significant.first(), significant.last()) else {
        return false;
    };

    let has_open = significant.iter().any(|t| t.is_symbol("("));
    let has_close = significant.iter().any(|t| t.is_symbol(")"));
    let has_semicolon = significant.iter().any(|t| t.is_symbol(";"));
    let starts_with_control =
        first.kind == TokenKind::Keyword && patterns::is_control_keyword(&first.value);

    has_open && has_close && !has_semicolon && last.is_symbol(")") && !starts_with_control
}

fn reject(violation: LineViolation, token: &Token) -> LexError {
    LexError::at_token(LexErrorKind::LineValidation(violation), token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::scanner::Scanner;

    /// Scan `line` without the built-in validation pass. A trailing error
    /// marker from an unbalanced fragment is dropped.
    fn tokens(line: &str) -> Vec<Token> {
        Scanner::new(line)
            .without_line_checks()
            .run()
            .tokens
            .into_iter()
            .filter(|t| t.kind != TokenKind::Error)
            .collect()
    }

    fn violation(line: &str) -> LineViolation {
        match validate_line(&tokens(line)) {
            Err(LexError {
                kind: LexErrorKind::LineValidation(v),
                ..
            }) => v,
            other => panic!("expected a line violation for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_and_comment_lines_pass() {
        assert!(validate_line(&tokens("")).is_ok());
        assert!(validate_line(&tokens("    ")).is_ok());
        assert!(validate_line(&tokens("  // just a note")).is_ok());
    }

    #[test]
    fn test_lone_grouping_symbol_passes() {
        assert!(validate_line(&tokens("{")).is_ok());
        let close = vec![
            Token::new(TokenKind::Whitespace, "    ", 4, 1),
            Token::new(TokenKind::GroupingClose, "}", 4, 5),
            Token::new(TokenKind::Newline, "\n", 4, 6),
        ];
        assert!(validate_line(&close).is_ok());
    }

    #[test]
    fn test_isolated_term() {
        assert_eq!(violation("+"), LineViolation::IsolatedTerm("+".into()));
        assert_eq!(violation("  else  "), LineViolation::IsolatedTerm("else".into()));
    }

    #[test]
    fn test_operator_soup() {
        assert_eq!(violation("+ - ;"), LineViolation::OperatorSequenceWithoutOperands);
        assert_eq!(violation(";;"), LineViolation::OperatorSequenceWithoutOperands);
    }

    #[test]
    fn test_identifier_semicolon_is_incomplete() {
        let err = validate_line(&tokens("nombre;")).unwrap_err();
        assert_eq!(
            err.kind,
            LexErrorKind::LineValidation(LineViolation::IncompleteStatement("nombre".into()))
        );
        assert_eq!(err.lexeme, "nombre");
        assert_eq!(err.code(), Some("CS1002"));
    }

    #[test]
    fn test_keyword_semicolon_is_fine() {
        assert!(validate_line(&tokens("return;")).is_ok());
        assert!(validate_line(&tokens("break;")).is_ok());
    }

    #[test]
    fn test_operator_position_prefers_first() {
        assert_eq!(
            violation("= a +"),
            LineViolation::OperatorInInvalidPosition("=".into())
        );
        assert_eq!(
            violation("a +"),
            LineViolation::OperatorInInvalidPosition("+".into())
        );
    }

    #[test]
    fn test_dangling_comma() {
        let err = validate_line(&tokens("Calcular(10, )")).unwrap_err();
        assert_eq!(
            err.kind,
            LexErrorKind::LineValidation(LineViolation::MissingArgumentAfterComma)
        );
        assert_eq!((err.line, err.column, err.lexeme.as_str()), (1, 12, ","));

        assert_eq!(violation("int a,"), LineViolation::MissingArgumentAfterComma);
    }

    #[test]
    fn test_missing_semicolon_after_call() {
        let err = validate_line(&tokens("Console.WriteLine(x)")).unwrap_err();
        assert_eq!(
            err.kind,
            LexErrorKind::LineValidation(LineViolation::MissingSemicolon)
        );
        assert_eq!(err.lexeme, ")");
        assert_eq!(err.column, 20);
    }

    #[test]
    fn test_control_headers_are_exempt() {
        assert!(validate_line(&tokens("if (edad >= 18 && activo)")).is_ok());
        assert!(validate_line(&tokens("while (i < 5)")).is_ok());
        assert!(validate_line(&tokens("catch (Exception e)")).is_ok());
    }

    #[test]
    fn test_terminated_call_passes() {
        assert!(validate_line(&tokens("Console.WriteLine(x);")).is_ok());
        assert!(validate_line(&tokens("int r = Calcular(10, 20);")).is_ok());
        assert!(validate_line(&tokens("static int Calcular(int a, int b) {")).is_ok());
    }
}
