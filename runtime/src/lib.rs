//! # Tasklist Runtime
//!
//! Runtime implementation for the task list reducers.
//!
//! This crate provides the Store that owns a reducer's state and drives it
//! one user-interface event at a time.
//!
//! ## Core Components
//!
//! - **Store**: Owns state, reducer and environment; the only way to mutate state
//! - **Effect Executor**: Feeds actions described by effects back into the reducer
//! - **Action Broadcast**: Lets a rendering layer observe every reduced action
//!
//! Everything runs synchronously on the caller's thread: `send` returns once
//! the action and every action it fed back have been reduced.
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
use tokio::sync::broadcast;

/// Metric names and descriptions
pub mod metrics;

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// A single `send` fed back more actions than allowed
        ///
        /// This almost always means two actions keep producing each other.
        /// State changes made before the limit was hit are kept.
        #[error("Effect feedback exceeded {limit} actions for a single send")]
        FeedbackLimitExceeded {
            /// The configured limit
            limit: usize,
        },
    }
}

pub use error::StoreError;
pub use store::Store;

/// Store configuration
///
/// # Example
///
/// ```
/// use tasklist_runtime::StoreConfig;
///
/// let config = StoreConfig::default()
///     .with_broadcast_capacity(64)
///     .with_max_feedback_actions(8);
///
/// assert_eq!(config.broadcast_capacity, 64);
/// assert_eq!(config.max_feedback_actions, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Number of actions buffered for each observer before it starts lagging
    pub broadcast_capacity: usize,
    /// Maximum number of actions effects may feed back during one `send`
    pub max_feedback_actions: usize,
}

impl StoreConfig {
    /// Create a new configuration with custom values
    ///
    /// A broadcast capacity of zero is raised to one.
    #[must_use]
    pub const fn new(broadcast_capacity: usize, max_feedback_actions: usize) -> Self {
        Self {
            broadcast_capacity: if broadcast_capacity == 0 { 1 } else { broadcast_capacity },
            max_feedback_actions,
        }
    }

    /// Set the action broadcast capacity
    #[must_use]
    pub const fn with_broadcast_capacity(self, capacity: usize) -> Self {
        Self::new(capacity, self.max_feedback_actions)
    }

    /// Set the feedback limit
    #[must_use]
    pub const fn with_max_feedback_actions(mut self, limit: usize) -> Self {
        self.max_feedback_actions = limit;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(16, 64)
    }
}

/// The Store and its event loop
pub mod store {
    use super::{broadcast, metrics, Debug, Reducer, StoreConfig, StoreError, VecDeque};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store owns:
    /// 1. State (mutated only by the reducer)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect execution (with feedback loop)
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
        max_feedback_actions: usize,
        /// Every reduced action, in reduction order, after state was updated.
        action_broadcast: broadcast::Sender<A>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        A: Clone + Debug,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// Uses [`StoreConfig::default`].
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        #[must_use]
        pub fn with_config(
            initial_state: S,
            reducer: R,
            environment: E,
            config: StoreConfig,
        ) -> Self {
            let (action_broadcast, _) = broadcast::channel(config.broadcast_capacity.max(1));

            Self {
                state: initial_state,
                reducer,
                environment,
                max_feedback_actions: config.max_feedback_actions,
                action_broadcast,
            }
        }

        /// Send an action to the store
        ///
        /// Reduces the action, then reduces every action its effects send,
        /// first-in first-out, until none remain. Each reduced action is
        /// broadcast to subscribers once state reflects it.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::FeedbackLimitExceeded`] if effects feed back
        /// more than the configured number of actions.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub fn send(&mut self, action: A) -> Result<(), StoreError> {
            let mut queue = VecDeque::from([action]);
            let mut fed_back = 0_usize;

            while let Some(action) = queue.pop_front() {
                tracing::debug!(?action, "Processing action");
                metrics::counter!(metrics::STORE_ACTIONS_TOTAL).increment(1);

                let effects = {
                    let span = tracing::debug_span!("reducer_execution");
                    let _enter = span.enter();

                    let start = std::time::Instant::now();
                    let effects =
                        self.reducer
                            .reduce(&mut self.state, action.clone(), &self.environment);
                    metrics::histogram!(metrics::STORE_REDUCER_DURATION)
                        .record(start.elapsed().as_secs_f64());

                    tracing::trace!("Reducer completed, returned {} effects", effects.len());

                    // Precision loss acceptable for metrics (effect counts < 2^52)
                    #[allow(clippy::cast_precision_loss)]
                    metrics::histogram!(metrics::STORE_EFFECTS_COUNT).record(effects.len() as f64);

                    effects
                };

                // No subscribers is not an error
                let _ = self.action_broadcast.send(action);

                for next in effects.into_iter().flat_map(|effect| effect.into_actions()) {
                    fed_back += 1;
                    if fed_back > self.max_feedback_actions {
                        tracing::warn!(
                            limit = self.max_feedback_actions,
                            "Effect feedback limit exceeded, dropping remaining actions"
                        );
                        metrics::counter!(metrics::STORE_FEEDBACK_LIMIT_EXCEEDED).increment(1);
                        return Err(StoreError::FeedbackLimitExceeded {
                            limit: self.max_feedback_actions,
                        });
                    }
                    queue.push_back(next);
                }
            }

            tracing::trace!(fed_back, "Action processing completed");
            Ok(())
        }

        /// Read current state via a closure
        ///
        /// ```ignore
        /// let count = store.state(|s| s.count());
        /// ```
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            f(&self.state)
        }

        /// Subscribe to reduced actions
        ///
        /// The receiver sees every action reduced after this call, including
        /// the ones fed back by effects. A receiver that falls more than the
        /// configured capacity behind gets `RecvError::Lagged`.
        #[must_use]
        pub fn subscribe_actions(&self) -> broadcast::Receiver<A> {
            self.action_broadcast.subscribe()
        }

        /// Consume the store and return its state
        #[must_use]
        pub fn into_state(self) -> S {
            self.state
        }
    }
}
