//! # Tasklist Runtime
//!
//! Runtime implementation for the tasklist reducer architecture.
//!
//! This crate provides the Store that owns state, runs the reducer and
//! drains the effect feedback loop.
//!
//! ## Core Components
//!
//! - **Store**: Owns state exclusively and processes actions one at a time
//! - **Effect Executor**: Feeds `Effect::Send` actions back into the reducer
//! - **Observers**: Notified once per `send`, after the feedback loop drains
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use std::collections::VecDeque;
use std::fmt::Debug;
use tasklist_core::reducer::Reducer;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// Domain-level rejections never surface here; reducers absorb invalid
    /// input as no-ops. Only runtime misuse is reported.
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// A single `send` fed back more actions than the configured limit
        ///
        /// State reflects every action reduced before the limit was hit, and
        /// observers have already been notified of it.
        #[error("Feedback loop exceeded {limit} actions")]
        FeedbackLimitExceeded {
            /// The configured limit
            limit: usize,
        },
    }
}

pub use error::StoreError;

/// Configuration for Store instances
///
/// # Example
///
/// ```
/// use tasklist_runtime::StoreConfig;
///
/// let config = StoreConfig::default().with_max_feedback_actions(8);
/// assert_eq!(config.max_feedback_actions, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of fed-back actions a single `send` may process
    pub max_feedback_actions: usize,
}

impl StoreConfig {
    /// Set the feedback limit
    #[must_use]
    pub const fn with_max_feedback_actions(mut self, limit: usize) -> Self {
        self.max_feedback_actions = limit;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_feedback_actions: 64,
        }
    }
}

/// Store module - the runtime coordinator
pub mod store {
    use super::{Debug, Reducer, StoreConfig, StoreError, VecDeque};

    /// Callback invoked with the post-action state
    pub type Observer<S> = Box<dyn FnMut(&S)>;

    /// Handle returned by [`Store::subscribe`], used to unsubscribe
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SubscriptionId(u64);

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (owned exclusively, mutated only through `send`)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
    /// 5. Observers (renderers notified after every `send`)
    ///
    /// Execution is synchronous and run-to-completion. `send` takes
    /// `&mut self`, so no borrow of the state can outlive a mutation, and
    /// observers only ever see the state after the whole feedback loop.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: S,
        reducer: R,
        environment: E,
        config: StoreConfig,
        observers: Vec<(SubscriptionId, Observer<S>)>,
        next_subscription: u64,
        revision: u64,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        A: Debug,
    {
        /// Create a new store with initial state, reducer, and environment
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new store with a custom configuration
        #[must_use]
        pub const fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            Self {
                state: initial_state,
                reducer,
                environment,
                config,
                observers: Vec::new(),
                next_subscription: 0,
                revision: 0,
            }
        }

        /// Send an action through the reducer
        ///
        /// Reduces `action`, then every action fed back by its effects in
        /// FIFO order, then notifies observers exactly once.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::FeedbackLimitExceeded`] if more than
        /// `max_feedback_actions` actions were fed back. Observers are still
        /// notified of the state reached so far.
        #[tracing::instrument(skip(self, action), name = "store_send", fields(revision = self.revision))]
        pub fn send(&mut self, action: A) -> Result<(), StoreError> {
            tracing::debug!(?action, "Processing action");
            metrics::counter!("store.actions.total").increment(1);

            let mut queue = VecDeque::from([action]);
            let mut fed_back = 0usize;
            let mut result = Ok(());
            let mut feedback = Vec::new();

            while let Some(action) = queue.pop_front() {
                let effects = self.reducer.reduce(&mut self.state, action, &self.environment);
                tracing::trace!("Reducer completed, returned {} effects", effects.len());

                for effect in effects {
                    effect.into_actions(&mut feedback);
                }

                for action in feedback.drain(..) {
                    if fed_back == self.config.max_feedback_actions {
                        tracing::warn!(
                            limit = self.config.max_feedback_actions,
                            "Dropping fed-back actions: feedback limit reached"
                        );
                        result = Err(StoreError::FeedbackLimitExceeded {
                            limit: self.config.max_feedback_actions,
                        });
                        queue.clear();
                        break;
                    }
                    tracing::trace!(?action, "Feeding action back into reducer");
                    metrics::counter!("store.feedback.total").increment(1);
                    fed_back += 1;
                    queue.push_back(action);
                }

                if result.is_err() {
                    feedback.clear();
                    break;
                }
            }

            self.revision += 1;
            self.notify();
            result
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let count = store.state(|s| s.tasks.len());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            f(&self.state)
        }

        /// Clone the current state into an independent snapshot
        #[must_use]
        pub fn snapshot(&self) -> S
        where
            S: Clone,
        {
            self.state.clone()
        }

        /// Number of completed `send` calls
        #[must_use]
        pub const fn revision(&self) -> u64 {
            self.revision
        }

        /// Register an observer, called after every `send`
        pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
        where
            F: FnMut(&S) + 'static,
        {
            let id = SubscriptionId(self.next_subscription);
            self.next_subscription += 1;
            self.observers.push((id, Box::new(observer)));
            tracing::debug!(subscription = id.0, "Observer subscribed");
            id
        }

        /// Remove an observer. Returns false if it was not registered.
        pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
            let before = self.observers.len();
            self.observers.retain(|(existing, _)| *existing != id);
            before != self.observers.len()
        }

        /// Consume the store, returning its state
        #[must_use]
        pub fn into_state(self) -> S {
            self.state
        }

        fn notify(&mut self) {
            for (_, observer) in &mut self.observers {
                observer(&self.state);
            }
        }
    }
}

pub use store::{Observer, Store, SubscriptionId};
