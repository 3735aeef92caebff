//! Source pane rendering with token colouring
//!
//! Lines are rebuilt from the token stream rather than the raw text, so the
//! colours always agree with the classification. The line holding the error
//! marker, if any, is drawn with a red line number and a highlighted
//! background.

use crate::lexer::{Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Styled spans per source line, split on newline tokens and on newlines
/// inside string literals.
pub fn token_lines(tokens: &[Token]) -> Vec<Vec<Span<'static>>> {
    let mut lines = vec![Vec::new()];

    for token in tokens {
        let style = DEFAULT_THEME.token_style(token.kind);
        match token.kind {
            TokenKind::Newline => lines.push(Vec::new()),
            TokenKind::Error => {
                let shown = if token.value.is_empty() {
                    "<EOF>".to_string()
                } else {
                    token.value.replace('\n', "\\n")
                };
                if let Some(line) = lines.last_mut() {
                    line.push(Span::styled(shown, style));
                }
            }
            _ => {
                for (idx, piece) in token.value.split('\n').enumerate() {
                    if idx > 0 {
                        lines.push(Vec::new());
                    }
                    if !piece.is_empty() {
                        if let Some(line) = lines.last_mut() {
                            line.push(Span::styled(piece.to_string(), style));
                        }
                    }
                }
            }
        }
    }

    // A trailing newline leaves an empty line that is not part of the file.
    if lines.len() > 1 && lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Render the source pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    lines: &[Vec<Span<'static>>],
    error_line: Option<usize>,
    is_focused: bool,
    scroll: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Source Code ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let max_scroll = lines.len().saturating_sub(visible_height);
    *scroll = (*scroll).min(max_scroll);

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll)
        .take(visible_height)
        .map(|(idx, spans)| {
            let line_num = idx + 1;
            let is_error = error_line == Some(line_num);

            let num_style = if is_error {
                Style::default()
                    .fg(DEFAULT_THEME.error_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut final_spans = vec![Span::styled(format!("{:4} │ ", line_num), num_style)];
            final_spans.extend(spans.iter().cloned().map(|mut span| {
                if is_error {
                    span.style = span.style.patch(Style::default().bg(DEFAULT_THEME.current_line_bg));
                }
                span
            }));
            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
