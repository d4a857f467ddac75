//! # Tasklist Core
//!
//! Core traits and types for the tasklist reducer architecture.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature
//! - **Action**: All possible inputs to a reducer (user intents and feedback)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Follow-up work described as a value, executed by the store
//! - **Environment**: Injected policies via traits
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_core::*;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = CounterEnvironment;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         env: &CounterEnvironment,
//!     ) -> SmallVec<[Effect<CounterAction>; 4]> {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!         SmallVec::new()
//!     }
//! }
//! ```

pub use smallvec::{SmallVec, smallvec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// Updates state in place and returns effect descriptions for the
        /// store to execute. Most actions return no effects, so the result is
        /// stack-allocated up to four entries.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Follow-up work descriptions
///
/// Effects are values returned from reducers. The store executes them
/// synchronously, inside the same `send` call that produced them.
pub mod effect {
    /// Effect type - describes work for the store to do after a reduction
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed an action back into the reducer before observers are notified
        Send(Action),

        /// Run effects in order
        Sequential(Vec<Effect<Action>>),
    }

    impl<Action> Effect<Action> {
        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }

        /// Returns true if executing this effect does nothing
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Effect::None => true,
                Effect::Send(_) => false,
                Effect::Sequential(effects) => effects.iter().all(Effect::is_none),
            }
        }

        /// Flatten this effect into the actions it feeds back, in order
        pub fn into_actions(self, out: &mut Vec<Action>) {
            match self {
                Effect::None => {},
                Effect::Send(action) => out.push(action),
                Effect::Sequential(effects) => {
                    for effect in effects {
                        effect.into_actions(out);
                    }
                },
            }
        }
    }
}

/// Environment module - Dependency injection traits
///
/// Policies a reducer should not hard-code are abstracted behind traits and
/// injected via the Environment parameter.
pub mod environment {
    /// Id assignment policy for records appended to an ordered collection
    ///
    /// # Examples
    ///
    /// ```
    /// use tasklist_core::environment::IdGenerator;
    ///
    /// // Length-based ids, as a list view would number its rows
    /// struct ByLength;
    /// impl IdGenerator for ByLength {
    ///     fn next_id(&self, len: usize, _max_existing: Option<u64>) -> u64 {
    ///         len as u64 + 1
    ///     }
    /// }
    ///
    /// assert_eq!(ByLength.next_id(2, Some(2)), 3);
    /// ```
    pub trait IdGenerator: Send + Sync {
        /// Produce the id for a record about to be appended
        ///
        /// `len` is the collection length before the append and
        /// `max_existing` the largest id currently present.
        fn next_id(&self, len: usize, max_existing: Option<u64>) -> u64;

        /// Record an id that entered the collection without going through
        /// `next_id` (seed data, fixtures)
        fn reserve(&self, _id: u64) {}
    }
}
