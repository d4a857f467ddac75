//! Domain types for the task list.
//!
//! A task list is an ordered sequence of tasks plus the text the user is
//! typing but has not submitted yet.

use serde::Serialize;

/// Identifier of a task, unique within a session under the monotonic scheme
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl TaskId {
    /// Returns the raw id
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Task {
    /// Identifier assigned at creation
    pub id: TaskId,
    /// Text as submitted (never trimmed)
    pub text: String,
    /// Whether the task is done
    pub completed: bool,
}

impl Task {
    /// Creates a new, not yet completed task
    #[must_use]
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Builder-style completion flag, used for seed data and fixtures
    #[must_use]
    pub const fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// State of the task list
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TodoState {
    /// Tasks in display order
    pub tasks: Vec<Task>,
    /// Not yet submitted new-task text
    pub pending_input: String,
}

impl TodoState {
    /// Creates an empty state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            pending_input: String::new(),
        }
    }

    /// The fixed two-task list every session starts with
    #[must_use]
    pub fn seed_tasks() -> Vec<Task> {
        vec![
            Task::new(TaskId(1), "Learn React"),
            Task::new(TaskId(2), "Build a project").completed(true),
        ]
    }

    /// Creates a state holding the seed tasks and no pending input
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            tasks: Self::seed_tasks(),
            pending_input: String::new(),
        }
    }

    /// Returns the number of tasks
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the number of completed tasks
    ///
    /// Recomputed from the list on every call.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    /// Returns the first task with the given id
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Checks if a task with the id exists
    #[must_use]
    pub fn exists(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Largest id currently in the list
    #[must_use]
    pub fn max_id(&self) -> Option<TaskId> {
        self.tasks.iter().map(|t| t.id).max()
    }

    /// Returns true if the pending input would be accepted by `AddTask`
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.pending_input.trim().is_empty()
    }
}

/// User intents accepted by the task list
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TodoAction {
    /// Replace the list with the seed tasks
    Initialize,

    /// Replace the pending input verbatim
    SetPendingInput {
        /// New pending text
        text: String,
    },

    /// Append the pending input as a new task and clear it
    AddTask,

    /// Set the pending input and add it, in one store transaction
    Submit {
        /// Text to submit
        text: String,
    },

    /// Remove every task with the id
    DeleteTask {
        /// Task to delete
        id: TaskId,
    },

    /// Flip the completed flag of every task with the id
    ToggleTask {
        /// Task to toggle
        id: TaskId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_state_matches_fixed_seed() {
        let state = TodoState::seeded();
        assert_eq!(state.count(), 2);
        assert_eq!(state.tasks[0], Task::new(TaskId(1), "Learn React"));
        assert_eq!(
            state.tasks[1],
            Task::new(TaskId(2), "Build a project").completed(true)
        );
        assert_eq!(state.completed_count(), 1);
        assert_eq!(state.max_id(), Some(TaskId(2)));
    }

    #[test]
    fn can_submit_ignores_surrounding_whitespace() {
        let mut state = TodoState::new();
        assert!(!state.can_submit());
        state.pending_input = " \t ".to_string();
        assert!(!state.can_submit());
        state.pending_input = "  x ".to_string();
        assert!(state.can_submit());
    }

    #[test]
    fn task_id_serializes_as_number() {
        let json = serde_json::to_string(&Task::new(TaskId(7), "Walk")).unwrap_or_default();
        assert_eq!(json, r#"{"id":7,"text":"Walk","completed":false}"#);
    }
}
