//! Summary table pane

use crate::lexer::TokenSummary;
use crate::report::labelled_rows;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

/// Render the per-category lexeme counts.
pub fn render_summary_pane(
    frame: &mut Frame,
    area: Rect,
    summary: &[TokenSummary],
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

    let total: usize = summary.iter().map(|s| s.count).sum();
    let block = Block::default()
        .title(format!(" Token Summary ({} tokens) ", total))
        .borders(Borders::ALL)
        .border_style(border_style);

    // Borders and the header row.
    let visible_height = area.height.saturating_sub(3).max(1) as usize;
    *scroll = (*scroll).min(summary.len().saturating_sub(visible_height));

    let header = Row::new(["Element", "Word", "Count"]).style(
        Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = labelled_rows(summary)
        .skip(*scroll)
        .take(visible_height)
        .map(|(label, row)| {
            Row::new([
                Cell::from(label.to_string()).style(Style::default().fg(DEFAULT_THEME.fg)),
                Cell::from(row.lexeme.clone()).style(Style::default().fg(DEFAULT_THEME.string)),
                Cell::from(row.count.to_string()).style(Style::default().fg(DEFAULT_THEME.number)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Percentage(35),
            Constraint::Percentage(15),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}
