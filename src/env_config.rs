//! Shared environment configuration for the simulator binary.
//!
//! Consolidates `KELLY_RESULTS_PATH`, `KELLY_PPA`, `KELLY_GAMES`, and
//! `KELLY_ROUNDS` reads. Unset or unparsable values fall back to the crate
//! defaults.

use std::path::PathBuf;
use std::str::FromStr;

use crate::types::SweepConfig;

fn env_parse<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Read `KELLY_RESULTS_PATH` (default `sim_results.csv`).
pub fn results_path() -> PathBuf {
    std::env::var("KELLY_RESULTS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("sim_results.csv"))
}

/// Sweep parameters from `KELLY_PPA`, `KELLY_GAMES`, and `KELLY_ROUNDS`,
/// defaulting to 50 points per axis, 5000 games per point, 12 rounds.
pub fn sweep_config() -> SweepConfig {
    let defaults = SweepConfig::default();
    SweepConfig {
        points_per_axis: env_parse("KELLY_PPA", defaults.points_per_axis),
        games_per_point: env_parse("KELLY_GAMES", defaults.games_per_point),
        rounds_per_game: env_parse("KELLY_ROUNDS", defaults.rounds_per_game),
    }
}
