//! Key handling for the terminal view.
//!
//! Keys are translated into store actions. Focus and selection are
//! view-local and never stored in `TodoState`.

use crate::types::{TodoAction, TodoState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Which zone receives keys
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// The new-task input line
    #[default]
    Input,
    /// The task list
    List,
}

/// View-local state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Focused zone
    pub focus: Focus,
    /// Selected row in the list
    pub selected: usize,
}

impl ViewState {
    /// Keep the selection inside a list of `len` rows
    pub const fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

/// What the event loop should do with a key
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Send an action to the store
    Dispatch(TodoAction),
    /// Leave the application
    Quit,
    /// Only view-local state changed (or nothing did)
    Redraw,
}

/// Translate a key press into a command, updating focus and selection
#[must_use]
pub fn handle_key(view: &mut ViewState, state: &TodoState, key: KeyEvent) -> Command {
    if key.kind != KeyEventKind::Press {
        return Command::Redraw;
    }

    match key.code {
        KeyCode::Esc => return Command::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Command::Quit;
        },
        KeyCode::Tab | KeyCode::BackTab => {
            view.focus = match view.focus {
                Focus::Input => Focus::List,
                Focus::List => Focus::Input,
            };
            view.clamp(state.tasks.len());
            return Command::Redraw;
        },
        _ => {},
    }

    match view.focus {
        Focus::Input => handle_input_key(state, key),
        Focus::List => handle_list_key(view, state, key),
    }
}

fn handle_input_key(state: &TodoState, key: KeyEvent) -> Command {
    match key.code {
        KeyCode::Enter => Command::Dispatch(TodoAction::AddTask),
        KeyCode::Backspace => {
            let mut text = state.pending_input.clone();
            if text.pop().is_none() {
                return Command::Redraw;
            }
            Command::Dispatch(TodoAction::SetPendingInput { text })
        },
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut text = state.pending_input.clone();
            text.push(c);
            Command::Dispatch(TodoAction::SetPendingInput { text })
        },
        _ => Command::Redraw,
    }
}

fn handle_list_key(view: &mut ViewState, state: &TodoState, key: KeyEvent) -> Command {
    let len = state.tasks.len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            view.selected = view.selected.saturating_sub(1);
            Command::Redraw
        },
        KeyCode::Down | KeyCode::Char('j') => {
            if view.selected + 1 < len {
                view.selected += 1;
            }
            Command::Redraw
        },
        KeyCode::Enter | KeyCode::Char(' ') => state
            .tasks
            .get(view.selected)
            .map_or(Command::Redraw, |task| {
                Command::Dispatch(TodoAction::ToggleTask { id: task.id })
            }),
        KeyCode::Delete | KeyCode::Char('d') => state
            .tasks
            .get(view.selected)
            .map_or(Command::Redraw, |task| {
                Command::Dispatch(TodoAction::DeleteTask { id: task.id })
            }),
        _ => Command::Redraw,
    }
}
