//! Reducer logic for the task list.
//!
//! Invalid intents (blank submissions, unknown ids) are absorbed as no-ops
//! and logged at debug level. Nothing here can fail.

use crate::ids::IdScheme;
use crate::types::{Task, TaskId, TodoAction, TodoState};
use std::sync::Arc;
use tasklist_core::{
    SmallVec, effect::Effect, environment::IdGenerator, reducer::Reducer, smallvec,
};

/// Environment dependencies for the task list reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Id assignment policy for new tasks
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }

    /// Environment using one of the built-in id schemes
    #[must_use]
    pub fn with_scheme(scheme: IdScheme) -> Self {
        Self::new(scheme.generator())
    }
}

impl Default for TodoEnvironment {
    fn default() -> Self {
        Self::with_scheme(IdScheme::default())
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the task list
#[derive(Clone, Debug)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn initialize(state: &mut TodoState, env: &TodoEnvironment) {
        state.tasks = TodoState::seed_tasks();
        if let Some(max) = state.max_id() {
            env.ids.reserve(max.get());
        }
        tracing::debug!(tasks = state.tasks.len(), "Initialized task list from seed");
    }

    fn add_task(state: &mut TodoState, env: &TodoEnvironment) {
        if !state.can_submit() {
            tracing::debug!("Ignoring blank submission");
            return;
        }

        let id = TaskId(env.ids.next_id(
            state.tasks.len(),
            state.max_id().map(TaskId::get),
        ));
        if state.exists(id) {
            tracing::warn!(%id, "Assigned id already present in the list");
        }

        let text = std::mem::take(&mut state.pending_input);
        tracing::debug!(%id, "Task added");
        state.tasks.push(Task::new(id, text));
    }

    fn delete_task(state: &mut TodoState, id: TaskId) {
        let before = state.tasks.len();
        state.tasks.retain(|t| t.id != id);
        let removed = before - state.tasks.len();
        if removed == 0 {
            tracing::debug!(%id, "Delete ignored: unknown id");
        } else {
            tracing::debug!(%id, removed, "Task deleted");
        }
    }

    fn toggle_task(state: &mut TodoState, id: TaskId) {
        let mut toggled = 0usize;
        for task in state.tasks.iter_mut().filter(|t| t.id == id) {
            task.completed = !task.completed;
            toggled += 1;
        }
        if toggled == 0 {
            tracing::debug!(%id, "Toggle ignored: unknown id");
        } else {
            tracing::debug!(%id, toggled, "Task toggled");
        }
    }
}

impl Default for TodoReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::Initialize => Self::initialize(state, env),
            TodoAction::SetPendingInput { text } => state.pending_input = text,
            TodoAction::AddTask => Self::add_task(state, env),
            TodoAction::Submit { text } => {
                state.pending_input = text;
                return smallvec![Effect::Send(TodoAction::AddTask)];
            },
            TodoAction::DeleteTask { id } => Self::delete_task(state, id),
            TodoAction::ToggleTask { id } => Self::toggle_task(state, id),
        }

        SmallVec::new()
    }
}
