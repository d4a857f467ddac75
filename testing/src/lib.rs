//! # Tasklist Testing
//!
//! Testing utilities and helpers for the tasklist reducer architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A Given-When-Then builder for reducers
//! - Property-based testing strategies
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_testing::{ReducerTest, SequentialIds};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(TodoEnvironment::new(Arc::new(SequentialIds::starting_at(10))))
//!     .given_state(TodoState::seeded())
//!     .when_action(TodoAction::ToggleTask { id: TaskId(1) })
//!     .then_state(|state| assert_eq!(state.completed_count(), 2))
//!     .run();
//! ```

mod reducer_test;

pub use reducer_test::{ReducerTest, assertions};

/// Mock implementations of Environment traits
pub mod mocks {
    use std::sync::atomic::{AtomicU64, Ordering};
    use tasklist_core::environment::IdGenerator;

    /// Predictable id generator for tests
    ///
    /// Hands out `start, start + 1, ...` regardless of the collection it is
    /// asked about.
    ///
    /// # Example
    ///
    /// ```
    /// use tasklist_testing::mocks::SequentialIds;
    /// use tasklist_core::environment::IdGenerator;
    ///
    /// let ids = SequentialIds::starting_at(100);
    /// assert_eq!(ids.next_id(0, None), 100);
    /// assert_eq!(ids.next_id(7, Some(3)), 101);
    /// ```
    #[derive(Debug)]
    pub struct SequentialIds {
        next: AtomicU64,
    }

    impl SequentialIds {
        /// Create a generator whose first id is `start`
        #[must_use]
        pub const fn starting_at(start: u64) -> Self {
            Self {
                next: AtomicU64::new(start),
            }
        }

        /// The id the next call will return
        #[must_use]
        pub fn peek(&self) -> u64 {
            self.next.load(Ordering::Relaxed)
        }
    }

    impl IdGenerator for SequentialIds {
        fn next_id(&self, _len: usize, _max_existing: Option<u64>) -> u64 {
            self.next.fetch_add(1, Ordering::Relaxed)
        }
    }
}

/// Property-based testing utilities using proptest
pub mod properties {
    use proptest::prelude::*;

    /// Strings made only of whitespace (including the empty string)
    pub fn blank_input() -> impl Strategy<Value = String> {
        "[ \t\n]{0,6}"
    }

    /// Strings with at least one non-whitespace character, possibly padded
    pub fn non_blank_input() -> impl Strategy<Value = String> {
        ("[ \t]{0,3}", "[a-zA-Z0-9][a-zA-Z0-9 .!?-]{0,20}", "[ \t]{0,3}")
            .prop_map(|(lead, body, trail)| format!("{lead}{body}{trail}"))
    }

    /// Either blank or non-blank input, weighted towards real text
    pub fn any_input() -> impl Strategy<Value = String> {
        prop_oneof![
            1 => blank_input(),
            3 => non_blank_input(),
        ]
    }
}

// Re-export commonly used items
pub use mocks::SequentialIds;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tasklist_core::environment::IdGenerator;

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIds::starting_at(1);
        assert_eq!(ids.next_id(5, Some(9)), 1);
        assert_eq!(ids.next_id(5, Some(9)), 2);
        assert_eq!(ids.peek(), 3);
    }

    proptest! {
        #[test]
        fn blank_input_trims_to_empty(s in properties::blank_input()) {
            prop_assert!(s.trim().is_empty());
        }

        #[test]
        fn non_blank_input_survives_trim(s in properties::non_blank_input()) {
            prop_assert!(!s.trim().is_empty());
        }
    }
}
