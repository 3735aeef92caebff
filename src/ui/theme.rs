use crate::lexer::TokenKind;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub fg: Color,
    pub keyword: Color,    // Blue
    pub number: Color,     // Orange, booleans too
    pub symbol: Color,     // White for grouping and punctuation
    pub operator: Color,   // Yellow
    pub string: Color,     // Green
    pub identifier: Color, // Pink
    pub comment: Color,    // Grey
    pub error_fg: Color,
    pub error_bg: Color, // Red
    pub success: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    keyword: Color::Rgb(137, 180, 250),
    number: Color::Rgb(250, 179, 135),
    symbol: Color::Rgb(255, 255, 255),
    operator: Color::Rgb(249, 226, 175),
    string: Color::Rgb(166, 227, 161),
    identifier: Color::Rgb(245, 194, 231),
    comment: Color::Rgb(108, 112, 134),
    error_fg: Color::Rgb(255, 255, 255),
    error_bg: Color::Rgb(210, 15, 57),
    success: Color::Rgb(166, 227, 161),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),
    current_line_bg: Color::Rgb(50, 50, 70),
};

impl Theme {
    /// Foreground and optional background for a token kind. `None` means the
    /// token is printed unstyled.
    pub fn token_colors(&self, kind: TokenKind) -> Option<(Color, Option<Color>)> {
        let fg = match kind {
            TokenKind::Keyword => self.keyword,
            TokenKind::Number | TokenKind::Boolean => self.number,
            TokenKind::GroupingOpen | TokenKind::GroupingClose | TokenKind::Punctuation => {
                self.symbol
            }
            TokenKind::OperatorArithmetic
            | TokenKind::OperatorComparison
            | TokenKind::OperatorLogical
            | TokenKind::OperatorAssignment => self.operator,
            TokenKind::String => self.string,
            TokenKind::Identifier => self.identifier,
            TokenKind::Comment => self.comment,
            TokenKind::Error => return Some((self.error_fg, Some(self.error_bg))),
            TokenKind::Whitespace | TokenKind::Newline => return None,
        };
        Some((fg, None))
    }

    /// ratatui style for a token kind.
    pub fn token_style(&self, kind: TokenKind) -> Style {
        match self.token_colors(kind) {
            Some((fg, Some(bg))) => Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
            Some((fg, None)) => Style::default().fg(fg),
            None => Style::default(),
        }
    }
}
