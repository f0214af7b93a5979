//! Rendering for the screen's presentation components.
//!
//! Each component is a pure projection of the state snapshot: render
//! functions read, never mutate. User intents travel the other way, through
//! the key handling in [`crate::app`].

pub mod header;
pub mod input;
pub mod list;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

/// Renders the one-line key hint bar.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &str) {
    let bar = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(bar, area);
}
