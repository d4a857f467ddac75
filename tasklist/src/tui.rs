//! Interactive terminal front end.

use crate::TodoStore;
use crate::input::{self, Command, ViewState};
use crate::view;
use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Store plus view-local state, redrawn whenever the store notifies
pub struct App {
    store: TodoStore,
    view: ViewState,
    needs_redraw: Rc<Cell<bool>>,
}

impl App {
    /// Wrap a store and subscribe to its changes
    pub fn new(mut store: TodoStore) -> Self {
        let needs_redraw = Rc::new(Cell::new(true));
        let flag = Rc::clone(&needs_redraw);
        store.subscribe(move |_| flag.set(true));
        Self {
            store,
            view: ViewState::default(),
            needs_redraw,
        }
    }

    /// The underlying store
    #[must_use]
    pub const fn store(&self) -> &TodoStore {
        &self.store
    }

    /// View-local focus and selection
    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    /// Handle one key. Returns true when the user asked to quit.
    ///
    /// # Errors
    ///
    /// Propagates store runtime errors.
    pub fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        let command = self
            .store
            .state(|state| input::handle_key(&mut self.view, state, key));

        match command {
            Command::Dispatch(action) => {
                self.store.send(action)?;
                let len = self.store.state(|s| s.tasks.len());
                self.view.clamp(len);
            },
            Command::Quit => return Ok(true),
            Command::Redraw => self.needs_redraw.set(true),
        }
        Ok(false)
    }

    /// Redraw if anything changed since the last draw
    ///
    /// # Errors
    ///
    /// Propagates terminal IO errors.
    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        if self.needs_redraw.replace(false) {
            terminal.draw(|frame| {
                self.store.state(|state| view::render(frame, state, &self.view));
            })?;
        }
        Ok(())
    }

    /// Force a redraw on the next `draw` call
    pub fn invalidate(&self) {
        self.needs_redraw.set(true);
    }
}

/// Restores the terminal even if the loop fails
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> anyhow::Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen).context("failed to enter alternate screen")?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the interactive UI until the user quits
///
/// # Errors
///
/// Fails on terminal IO errors or store runtime errors.
pub fn run(store: TodoStore) -> anyhow::Result<()> {
    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let mut app = App::new(store);
    tracing::info!("Interactive session started");

    loop {
        app.draw(&mut terminal)?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if app.handle_key(key)? {
                    break;
                }
            },
            Event::Resize(..) => app.invalidate(),
            _ => {},
        }
    }

    terminal.show_cursor()?;
    drop(guard);
    tracing::info!(
        tasks = app.store().state(|s| s.tasks.len()),
        "Interactive session ended"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::IdScheme;
    use crate::input::Focus;
    use crate::new_store;
    use crate::types::TaskId;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(new_store(IdScheme::Length).unwrap())
    }

    #[test]
    fn typing_and_enter_adds_task() {
        let mut app = app();
        for c in "Learn Go".chars() {
            assert!(!app.handle_key(press(KeyCode::Char(c))).unwrap());
        }
        assert!(!app.handle_key(press(KeyCode::Enter)).unwrap());

        let state = app.store().snapshot();
        assert_eq!(state.count(), 3);
        assert_eq!(state.tasks[2].text, "Learn Go");
        assert_eq!(state.tasks[2].id, TaskId(3));
        assert_eq!(state.pending_input, "");
    }

    #[test]
    fn deleting_last_row_clamps_selection() {
        let mut app = app();
        app.handle_key(press(KeyCode::Tab)).unwrap();
        app.handle_key(press(KeyCode::Down)).unwrap();
        assert_eq!(app.view().selected, 1);

        app.handle_key(press(KeyCode::Char('d'))).unwrap();

        assert_eq!(app.store().state(|s| s.count()), 1);
        assert_eq!(app.view().focus, Focus::List);
        assert_eq!(app.view().selected, 0);
    }

    #[test]
    fn escape_quits() {
        assert!(app().handle_key(press(KeyCode::Esc)).unwrap());
    }

    #[test]
    fn draws_only_after_changes() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();

        app.draw(&mut terminal).unwrap();
        assert!(!app.needs_redraw.get());

        app.handle_key(press(KeyCode::Tab)).unwrap();
        app.handle_key(press(KeyCode::Enter)).unwrap();
        // Store notification marked the view dirty
        assert!(app.needs_redraw.get());
        app.draw(&mut terminal).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Completed Tasks: 2"));
    }
}
