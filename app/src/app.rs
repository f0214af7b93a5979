//! The terminal event loop and key-to-action mapping.
//!
//! `App` owns the store plus the two pieces of state that exist only in the
//! terminal rendition: which widget has focus, and which row the list cursor
//! is on. Everything else lives in the store and is read back as a snapshot
//! on every draw.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::ListState;
use std::sync::Arc;
use tasklist_core::environment::{SequentialIds, SystemClock};
use tasklist_core::screen::{
    InputAction, RowAction, ScreenAction, ScreenEnvironment, ScreenReducer, ScreenState,
};
use tasklist_core::task::TaskId;
use tasklist_runtime::Store;

use crate::components;
use crate::error::Error;

/// Which widget receives keystrokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    /// The new-task input field.
    Input,
    /// The task list.
    List,
}

/// Terminal application state.
pub struct App {
    store: Store<ScreenReducer>,
    focus: Focus,
    list_state: ListState,
    quit: bool,
}

impl App {
    /// Creates the app with an empty task list and the production
    /// environment.
    #[must_use]
    pub fn new() -> Self {
        let environment =
            ScreenEnvironment::new(Arc::new(SystemClock), Arc::new(SequentialIds::new()));
        Self {
            store: Store::new(ScreenState::new(), ScreenReducer::new(), environment),
            focus: Focus::Input,
            list_state: ListState::default(),
            quit: false,
        }
    }

    /// Runs the event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing or reading terminal events fails.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<(), Error> {
        while !self.quit {
            terminal.draw(|frame| self.render(frame))?;
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    fn render(&mut self, frame: &mut ratatui::Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let state = self.store.state();
        components::header::render(frame, chunks[0], state);
        components::input::render(frame, chunks[1], state, self.focus == Focus::Input);
        components::list::render(
            frame,
            chunks[2],
            state,
            &mut self.list_state,
            self.focus == Focus::List,
        );
        components::render_hints(frame, chunks[3], self.hints());
    }

    fn hints(&self) -> &'static str {
        match self.focus {
            Focus::Input => "type a task · Enter add · Tab list · Esc quit",
            Focus::List => {
                if self.selected_id().is_some_and(|id| self.is_editing(id)) {
                    "type to edit · Enter save · Esc cancel"
                } else {
                    "↑/↓ move · Space toggle · e edit · d delete · Tab input · q quit"
                }
            }
        }
    }

    /// The id of the row under the cursor, if any.
    fn selected_id(&self) -> Option<TaskId> {
        let index = self.list_state.selected()?;
        self.store.state().tasks.at(index).map(|t| t.id)
    }

    fn is_editing(&self, id: TaskId) -> bool {
        self.store.state().is_editing(id)
    }

    fn send(&mut self, action: ScreenAction) {
        self.store.send(action);
        self.clamp_selection();
    }

    /// Keeps the cursor on a valid row after the collection changed.
    fn clamp_selection(&mut self) {
        let len = self.store.state().tasks.len();
        if len == 0 {
            self.list_state.select(None);
        } else {
            let selected = self.list_state.selected().unwrap_or(0);
            self.list_state.select(Some(selected.min(len - 1)));
        }
    }

    /// Handles one key press. Exposed for tests.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::List => match self.selected_id() {
                Some(id) if self.is_editing(id) => self.handle_edit_key(id, key),
                _ => self.handle_list_key(key),
            },
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => {
                self.focus = Focus::List;
                self.clamp_selection();
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::Enter => self.send(ScreenAction::Input(InputAction::Submitted)),
            KeyCode::Backspace => {
                let mut draft = self.store.state().input.clone();
                draft.pop();
                self.send(ScreenAction::Input(InputAction::DraftChanged(draft)));
            }
            KeyCode::Char(c) => {
                let mut draft = self.store.state().input.clone();
                draft.push(c);
                self.send(ScreenAction::Input(InputAction::DraftChanged(draft)));
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.focus = Focus::Input,
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(id) = self.selected_id() {
                    self.send(ScreenAction::Row(id, RowAction::ToggleTapped));
                }
            }
            KeyCode::Char('e') => {
                if let Some(id) = self.selected_id() {
                    self.send(ScreenAction::Row(id, RowAction::EditTapped));
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected_id() {
                    self.send(ScreenAction::Row(id, RowAction::RemoveTapped));
                }
            }
            _ => {}
        }
    }

    /// Keystrokes while the selected row is in its Editing state.
    fn handle_edit_key(&mut self, id: TaskId, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.send(ScreenAction::Row(id, RowAction::SubmitTapped)),
            KeyCode::Esc => self.send(ScreenAction::Row(id, RowAction::CancelTapped)),
            KeyCode::Backspace => {
                let mut draft = self.store.state().draft(id).unwrap_or_default().to_string();
                draft.pop();
                self.send(ScreenAction::Row(id, RowAction::DraftChanged(draft)));
            }
            KeyCode::Char(c) => {
                let mut draft = self.store.state().draft(id).unwrap_or_default().to_string();
                draft.push(c);
                self.send(ScreenAction::Row(id, RowAction::DraftChanged(draft)));
            }
            _ => {}
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.store.state().tasks.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = current
            .saturating_add_signed(delta)
            .min(len - 1);
        self.list_state.select(Some(next));
    }

    /// The current state snapshot. Exposed for tests.
    #[must_use]
    pub fn state(&self) -> &ScreenState {
        self.store.state()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
