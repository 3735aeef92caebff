//! Line-numbered, colour-coded console listing
//!
//! Writes go to any [`Write`] so the listing can be captured in tests. With
//! colour disabled the layout is identical and no escape sequences are
//! emitted.

use crate::lexer::{LexResult, Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::style::{self, Stylize};
use ratatui::style::Color;
use std::io::{self, Write};

const GUTTER_SEPARATOR: &str = " │ ";

/// Legend rows: label and a representative kind whose colour it shows.
const LEGEND: [(&str, TokenKind); 8] = [
    ("Reserved words", TokenKind::Keyword),
    ("Numbers and booleans", TokenKind::Number),
    ("Grouping symbols and punctuation", TokenKind::Punctuation),
    ("Operators", TokenKind::OperatorArithmetic),
    ("Text strings", TokenKind::String),
    ("Identifiers", TokenKind::Identifier),
    ("Comments", TokenKind::Comment),
    ("Errors", TokenKind::Error),
];

fn to_crossterm(color: Color) -> style::Color {
    match color {
        Color::Rgb(r, g, b) => style::Color::Rgb { r, g, b },
        Color::White => style::Color::White,
        Color::Black => style::Color::Black,
        _ => style::Color::Reset,
    }
}

fn write_styled<W: Write>(out: &mut W, text: &str, kind: TokenKind, color: bool) -> io::Result<()> {
    match DEFAULT_THEME.token_colors(kind) {
        Some((fg, bg)) if color => {
            let styled = text.with(to_crossterm(fg));
            match bg {
                Some(bg) => write!(out, "{}", styled.on(to_crossterm(bg))),
                None => write!(out, "{}", styled),
            }
        }
        _ => write!(out, "{}", text),
    }
}

fn write_gutter<W: Write>(out: &mut W, line: usize) -> io::Result<()> {
    write!(out, "{:>3}{}", line, GUTTER_SEPARATOR)
}

/// Print the colour legend.
pub fn write_legend<W: Write>(out: &mut W, color: bool) -> io::Result<()> {
    writeln!(out, "Colour legend:")?;
    for (label, kind) in LEGEND {
        write!(out, "  ")?;
        write_styled(out, "■", kind, color)?;
        writeln!(out, " {}", label)?;
    }
    writeln!(out)
}

/// Print the token stream as a listing, one gutter per source line.
///
/// Error markers are shown with newlines escaped so the marker stays on the
/// line it belongs to.
pub fn write_listing<W: Write>(out: &mut W, tokens: &[Token], color: bool) -> io::Result<()> {
    let mut line = 1;
    let mut at_line_start = true;

    for token in tokens {
        if at_line_start {
            write_gutter(out, line)?;
            at_line_start = false;
        }

        match token.kind {
            TokenKind::Newline => {
                writeln!(out)?;
                line += 1;
                at_line_start = true;
            }
            TokenKind::Error => {
                let shown = if token.value.is_empty() {
                    "<EOF>".to_string()
                } else {
                    token.value.replace('\n', "\\n")
                };
                write_styled(out, &shown, token.kind, color)?;
            }
            kind => {
                // String literals may span lines through an escaped newline.
                for (idx, piece) in token.value.split('\n').enumerate() {
                    if idx > 0 {
                        writeln!(out)?;
                        line += 1;
                        write_gutter(out, line)?;
                    }
                    if !piece.is_empty() {
                        write_styled(out, piece, kind, color)?;
                    }
                }
            }
        }
    }

    if !at_line_start {
        writeln!(out)?;
    }
    Ok(())
}

/// Print the validation verdict for `result`.
pub fn write_verdict<W: Write>(out: &mut W, result: &LexResult, color: bool) -> io::Result<()> {
    let Some(err) = &result.error else {
        let text = "✓ No lexical errors found";
        return if color {
            writeln!(out, "{}", text.with(to_crossterm(DEFAULT_THEME.success)).bold())
        } else {
            writeln!(out, "{}", text)
        };
    };

    let headline = format!("✗ Lexical error at line {}, column {}", err.line, err.column);
    if color {
        writeln!(out, "{}", headline.as_str().with(to_crossterm(DEFAULT_THEME.error_bg)).bold())?;
    } else {
        writeln!(out, "{}", headline)?;
    }
    writeln!(out, "  Token:   '{}'", err.lexeme.replace('\n', "\\n"))?;
    writeln!(out, "  Message: {}", err.message())?;
    if let Some(code) = err.code() {
        writeln!(out, "  Code:    {}", code)?;
    }
    Ok(())
}
