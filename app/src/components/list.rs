//! The task list and its rows.
//!
//! Rows render in insertion order. A row in its Editing state shows the
//! in-progress draft instead of the committed title; a done row shows a
//! filled marker and a struck-through title.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use tasklist_core::screen::ScreenState;
use tasklist_core::task::Task;

/// Renders the list of task rows.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    state: &ScreenState,
    list_state: &mut ListState,
    focused: bool,
) {
    let rows: Vec<ListItem> = state
        .tasks
        .iter()
        .map(|task| ListItem::new(row_line(task, state.draft(task.id))))
        .collect();

    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let done = state.tasks.done_count();
    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!("tasks ({done} done)")),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, list_state);
}

/// One row: completion marker plus title or edit draft.
fn row_line<'a>(task: &'a Task, draft: Option<&'a str>) -> Line<'a> {
    let marker = if task.done { "[x] " } else { "[ ] " };
    let marker_style = if task.done {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    match draft {
        // Editing: show the draft in an edit style; the remove affordance is
        // inert for this row until the edit ends.
        Some(draft) => Line::from(vec![
            Span::styled(marker, marker_style),
            Span::styled(
                format!("{draft}▏"),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        None if task.done => Line::from(vec![
            Span::styled(marker, marker_style),
            Span::styled(
                task.title.as_str(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::CROSSED_OUT),
            ),
        ]),
        None => Line::from(vec![
            Span::styled(marker, marker_style),
            Span::raw(task.title.as_str()),
        ]),
    }
}
