//! # Tasklist Core
//!
//! Core traits and types for the task list state machine.
//!
//! The screen is modelled as a set of reducers: pure functions that take the
//! current state and an action, update the state in place and describe any
//! follow-up work as [`effect::Effect`] values. A runtime (see the
//! `tasklist-runtime` crate) owns the state and executes those descriptions.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature (a task list, a single row)
//! - **Action**: All possible inputs to a reducer (commands and events)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Follow-up work descriptions (not execution)
//! - **Environment**: Injected dependencies (clock, id generation)
//!
//! ## Example
//!
//! ```
//! use tasklist_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: usize,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<CounterAction>; 4]> {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut state = CounterState::default();
//! let _ = CounterReducer.reduce(&mut state, CounterAction::Increment, &());
//! assert_eq!(state.count, 1);
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use smallvec::{smallvec, SmallVec};

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
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        ///
        /// # Returns
        ///
        /// Effects to be executed by the runtime. Most reducers return none.
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
/// Effects describe work to be performed by the runtime after a reducer
/// returns. They are values (not execution). In a single-threaded screen the
/// only follow-up work is feeding further actions back into the reducer.
pub mod effect {
    /// Effect type - describes follow-up work to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the Store runtime.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects independently of each other
        ///
        /// The runtime is single-threaded, so "parallel" only means that no
        /// ordering is promised between the children.
        Parallel(Vec<Effect<Action>>),

        /// Run effects sequentially
        Sequential(Vec<Effect<Action>>),

        /// Feed an action back into the reducer once the current one completes
        Send(Action),
    }

    impl<Action> Effect<Action> {
        /// Returns true if this effect does nothing when executed
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Self::None => true,
                Self::Parallel(effects) | Self::Sequential(effects) => {
                    effects.iter().all(Self::is_none)
                },
                Self::Send(_) => false,
            }
        }

        /// Transform the actions carried by this effect
        ///
        /// Used by a parent reducer to lift a child's effects into its own
        /// action type.
        #[must_use]
        pub fn map<B, F>(self, f: F) -> Effect<B>
        where
            F: Fn(Action) -> B + Copy,
        {
            match self {
                Self::None => Effect::None,
                Self::Parallel(effects) => {
                    Effect::Parallel(effects.into_iter().map(|e| e.map(f)).collect())
                },
                Self::Sequential(effects) => {
                    Effect::Sequential(effects.into_iter().map(|e| e.map(f)).collect())
                },
                Self::Send(action) => Effect::Send(f(action)),
            }
        }

        /// Collect the actions this effect would send, in execution order
        #[must_use]
        pub fn into_actions(self) -> Vec<Action> {
            let mut actions = Vec::new();
            self.collect_actions(&mut actions);
            actions
        }

        fn collect_actions(self, out: &mut Vec<Action>) {
            match self {
                Self::None => {},
                Self::Parallel(effects) | Self::Sequential(effects) => {
                    for effect in effects {
                        effect.collect_actions(out);
                    }
                },
                Self::Send(action) => out.push(action),
            }
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All sources of non-determinism are abstracted behind traits and injected
/// via the Environment parameter.
pub mod environment {
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    /// Clock trait - abstracts time operations for testability
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// Id generator trait - abstracts identifier creation for testability
    pub trait IdGenerator: Send + Sync {
        /// Produce an identifier never returned before by this generator
        fn next_id(&self) -> Uuid;
    }

    /// Production generator producing random v4 UUIDs
    #[derive(Debug, Clone, Copy, Default)]
    pub struct RandomIdGenerator;

    impl IdGenerator for RandomIdGenerator {
        fn next_id(&self) -> Uuid {
            Uuid::new_v4()
        }
    }
}
