//! The header: application title and task counter.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tasklist_core::screen::ScreenState;

/// Renders the header. The counter reflects the current collection length.
pub fn render(frame: &mut Frame, area: Rect, state: &ScreenState) {
    let count = state.tasks.len();
    let noun = if count == 1 { "task" } else { "tasks" };

    let line = Line::from(vec![
        Span::styled("tasklist", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(
            format!("{count} {noun}"),
            Style::default().fg(Color::Cyan),
        ),
    ]);

    let header = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}
