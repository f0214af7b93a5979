//! The new-task input field.
//!
//! Holds no state of its own; it renders the screen's input draft and shows
//! the terminal cursor when focused.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use tasklist_core::screen::ScreenState;

/// Renders the input field.
pub fn render(frame: &mut Frame, area: Rect, state: &ScreenState, focused: bool) {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let field = Paragraph::new(state.input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title("new task"),
    );
    frame.render_widget(field, area);

    if focused {
        // Cursor sits right after the draft text, inside the border.
        let width = state.input.chars().count();
        let x = area.x + 1 + u16::try_from(width).unwrap_or(u16::MAX - 1);
        frame.set_cursor_position(Position::new(x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}
