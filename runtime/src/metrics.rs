//! Store metrics.
//!
//! The Store records through the `metrics` facade. Nothing is exported unless
//! the embedding application installs a recorder; call [`register_metrics`]
//! after installing one so the descriptions reach it.

use ::metrics::{describe_counter, describe_histogram, Unit};

// Re-export metrics macros for use in other modules
pub use ::metrics::{counter, histogram};

/// Actions reduced by any store, including fed-back ones
pub const STORE_ACTIONS_TOTAL: &str = "store.actions.total";
/// Wall time spent inside `Reducer::reduce`
pub const STORE_REDUCER_DURATION: &str = "store.reducer.duration_seconds";
/// Effects returned per reduced action
pub const STORE_EFFECTS_COUNT: &str = "store.effects.count";
/// Sends aborted by the feedback limit
pub const STORE_FEEDBACK_LIMIT_EXCEEDED: &str = "store.feedback.limit_exceeded";

/// Register all metric descriptions.
pub fn register_metrics() {
    describe_counter!(
        STORE_ACTIONS_TOTAL,
        "Total number of actions processed by stores"
    );
    describe_histogram!(
        STORE_REDUCER_DURATION,
        Unit::Seconds,
        "Time taken to execute reducers"
    );
    describe_histogram!(
        STORE_EFFECTS_COUNT,
        Unit::Count,
        "Number of effects returned by a reducer"
    );
    describe_counter!(
        STORE_FEEDBACK_LIMIT_EXCEEDED,
        "Sends aborted because effects fed back too many actions"
    );
}
