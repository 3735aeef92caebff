//! Interactive viewer state and event loop

use crate::lexer::LexResult;
use crate::ui::panes;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    text::Span,
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Summary,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Summary,
            FocusedPane::Summary => FocusedPane::Source,
        }
    }
}

/// The viewer state
pub struct App {
    /// Shown in the status bar on a clean run
    pub source_name: String,

    pub result: LexResult,

    /// Source lines rebuilt from the tokens, styled once up front
    lines: Vec<Vec<Span<'static>>>,

    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets, clamped while rendering
    pub source_scroll: usize,
    pub summary_scroll: usize,

    /// Rows per page for PgUp/PgDn, refreshed on every draw
    page_height: usize,

    pub should_quit: bool,
}

impl App {
    pub fn new(source_name: String, result: LexResult) -> Self {
        let lines = panes::token_lines(&result.tokens);
        let source_scroll = result
            .error
            .as_ref()
            .map(|err| err.line.saturating_sub(5))
            .unwrap_or(0);

        App {
            source_name,
            result,
            lines,
            focused_pane: FocusedPane::Source,
            source_scroll,
            summary_scroll: 0,
            page_height: 10,
            should_quit: false,
        }
    }

    /// Run the viewer until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        self.page_height = columns[0].height.saturating_sub(2).max(1) as usize;

        panes::render_source_pane(
            frame,
            columns[0],
            &self.lines,
            self.result.error.as_ref().map(|err| err.line),
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        panes::render_summary_pane(
            frame,
            columns[1],
            &self.result.summary,
            self.focused_pane == FocusedPane::Summary,
            &mut self.summary_scroll,
        );

        let message = format!("{}: no lexical errors", self.source_name);
        panes::render_status_bar(frame, main_chunks[1], self.result.error.as_ref(), &message);
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Summary => &mut self.summary_scroll,
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let page = self.page_height;
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::PageUp => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(page);
            }
            KeyCode::PageDown => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(page);
            }
            KeyCode::Home => *self.focused_scroll() = 0,
            // Clamped to the last page on the next draw
            KeyCode::End => *self.focused_scroll() = usize::MAX,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_focus_and_scroll() {
        let mut app = App::new("a.cs".to_string(), tokenize("a = 1;\n"));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.source_scroll, 2);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Summary);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.summary_scroll, 10);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.summary_scroll, 9);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.summary_scroll, 0);
        press(&mut app, KeyCode::End);
        assert_eq!(app.summary_scroll, usize::MAX);
        assert_eq!(app.source_scroll, 2);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_starts_near_error_line() {
        let source = "a = 1;\n".repeat(20) + "$";
        let app = App::new("a.cs".to_string(), tokenize(&source));
        assert_eq!(app.source_scroll, 16);
    }
}
