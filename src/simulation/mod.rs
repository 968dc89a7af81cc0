//! Simulation driver and result handling.
//!
//! - [`engine`]: Core trial runner and batch drivers (sequential + parallel)
//! - [`statistics`]: Aggregate statistics from a finished batch
//! - [`output`]: CSV writers for the winner tables

pub mod engine;
pub mod output;
pub mod statistics;

// Re-export commonly used items
pub use engine::{
    run_trial, simulate_batch, simulate_batch_sequential, simulate_state, PROGRESS_INTERVAL,
};
pub use output::{save_national_winners, save_state_winners};
pub use statistics::{
    aggregate_statistics, save_statistics, ElectionStatistics, EvDistribution, StateStatistics,
};
