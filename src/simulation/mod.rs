//! Simulation pipeline: engines, statistics, and the grid sweep.
//!
//! - [`engine`]: round/game engines and per-scenario median evaluation
//! - [`statistics`]: reductions over batches of game outcomes
//! - [`sweep`]: grid search over (odds, gain) with progress reporting

pub mod engine;
pub mod statistics;
pub mod sweep;

// Re-export commonly used items
pub use engine::{evaluate_scenario, play_game, play_round, RUIN_GROWTH, START_WEALTH};
pub use statistics::{mean, median};
pub use sweep::{axis_points, run_sweep, scenario_grid};
