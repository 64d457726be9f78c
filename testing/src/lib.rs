//! # Tasklist Testing
//!
//! Testing utilities and helpers for the task list reducers.
//!
//! This crate provides:
//! - Deterministic implementations of Environment traits
//! - A Given-When-Then harness for reducers ([`ReducerTest`])
//! - Assertion helpers for effects
//! - Test log capture
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_testing::{test_clock, SequentialIdGenerator, ReducerTest};
//!
//! ReducerTest::new(TaskListReducer::new())
//!     .with_env(TaskListEnvironment::new(Arc::new(test_clock()), Arc::new(SequentialIdGenerator::new())))
//!     .given_state(TaskListState::new())
//!     .when_action(TaskListAction::AddTask { title: "Buy milk".into() })
//!     .then_state(|state| assert_eq!(state.count(), 1))
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use tasklist_core::environment::{Clock, IdGenerator};


/// Mock implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, IdGenerator, Utc};
    use std::sync::atomic::{AtomicU64, Ordering};
    use uuid::Uuid;

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use tasklist_testing::mocks::FixedClock;
    /// use tasklist_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    #[must_use]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(DateTime::<Utc>::UNIX_EPOCH + chrono::Duration::days(20_089))
    }

    /// Predictable id generator
    ///
    /// Hands out `00000000-0000-0000-0000-000000000001`, `...0002` and so on,
    /// so tests can name ids before they are created.
    ///
    /// ```
    /// use tasklist_testing::mocks::SequentialIdGenerator;
    /// use tasklist_core::environment::IdGenerator;
    /// use uuid::Uuid;
    ///
    /// let ids = SequentialIdGenerator::new();
    /// assert_eq!(ids.next_id(), Uuid::from_u128(1));
    /// assert_eq!(ids.next_id(), Uuid::from_u128(2));
    /// ```
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        issued: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator whose first id is `1`
        #[must_use]
        pub const fn new() -> Self {
            Self {
                issued: AtomicU64::new(0),
            }
        }

        /// The id the `n`th call to `next_id` returns (1-based)
        #[must_use]
        pub const fn nth(n: u64) -> Uuid {
            Uuid::from_u128(n as u128)
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> Uuid {
            let n = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
            Self::nth(n)
        }
    }
}

/// Test helpers and utilities
pub mod helpers {
    /// Route `tracing` output to the test harness
    ///
    /// Safe to call from every test; only the first call installs a
    /// subscriber. Honours `RUST_LOG`, defaulting to `debug`.
    pub fn init_test_tracing() {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }
}

// Re-export commonly used items
pub use mocks::{test_clock, FixedClock, SequentialIdGenerator};
pub use reducer_test::{assertions, ReducerTest};
