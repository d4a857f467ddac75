//! In-memory todo list built on the tasklist reducer architecture.
//!
//! The list is a [`TodoState`] owned by a [`Store`]. Every user intent is a
//! [`TodoAction`] sent through [`TodoReducer`]; invalid intents are no-ops.
//! The terminal UI and the script runner are both plain consumers of the
//! store.
//!
//! # Quick Start
//!
//! ```
//! use tasklist::{TaskId, TodoAction, new_store};
//! use tasklist::ids::IdScheme;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = new_store(IdScheme::Length)?;
//!
//! store.send(TodoAction::Submit { text: "Learn Go".to_string() })?;
//! store.send(TodoAction::DeleteTask { id: TaskId(2) })?;
//! store.send(TodoAction::ToggleTask { id: TaskId(1) })?;
//!
//! assert_eq!(store.state(|s| s.completed_count()), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod cli;
pub mod ids;
pub mod input;
pub mod logging;
pub mod reducer;
pub mod script;
pub mod tui;
pub mod types;
pub mod view;

pub use reducer::{TodoEnvironment, TodoReducer};
pub use types::{Task, TaskId, TodoAction, TodoState};

use tasklist_runtime::{Store, StoreError};

/// The store type used by every front end
pub type TodoStore = Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;

/// Create a session store and load the seed tasks
///
/// # Errors
///
/// Only fails if the runtime rejects the initial action.
pub fn new_store(scheme: ids::IdScheme) -> Result<TodoStore, StoreError> {
    let mut store = Store::new(
        TodoState::new(),
        TodoReducer::new(),
        TodoEnvironment::with_scheme(scheme),
    );
    store.send(TodoAction::Initialize)?;
    Ok(store)
}
