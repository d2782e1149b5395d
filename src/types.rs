//! Core data structures: grid scenarios, optimal points, and sweep configuration.

use serde::Serialize;

/// One cell of the exploration grid. Both axes are integer percentages:
/// `odds` is the per-round win probability, `gain` the wealth increase
/// applied to the bet amount on a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub odds: u32,
    pub gain: u32,
}

/// Growth-maximizing fractional bet found for one scenario, plus the
/// median growth it achieved. Computed once per scenario and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptimalPoint {
    /// Winning odds, percent.
    pub odds: u32,
    /// Percent gain from a win.
    pub gain: u32,
    /// Optimal fractional bet, percent of current wealth.
    pub bet: u32,
    /// Median net growth at that bet, percent of starting wealth.
    pub growth: f64,
}

/// Full sweep output: exactly one [`OptimalPoint`] per (odds, gain) pair,
/// in axis iteration order (outer odds, inner gain).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultGrid {
    /// Seed the sweep ran with. Re-running with the same seed and
    /// `points_per_axis` reproduces identical points.
    pub seed: u64,
    pub points_per_axis: u32,
    pub points: Vec<OptimalPoint>,
}

impl ResultGrid {
    /// The point with the highest median growth, if the grid is non-empty.
    pub fn best_point(&self) -> Option<&OptimalPoint> {
        self.points
            .iter()
            .max_by(|a, b| a.growth.total_cmp(&b.growth))
    }
}

/// Simulation parameters shared by every level of the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    /// Axis density: the percentage axis is `0, step, …, 100` with
    /// `step = 100 / points_per_axis` (integer division).
    pub points_per_axis: u32,
    /// Independent games simulated per (odds, gain, bet) triple.
    pub games_per_point: usize,
    /// Rounds per game.
    pub rounds_per_game: u32,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            points_per_axis: 50,
            games_per_point: 5000,
            rounds_per_game: 12,
        }
    }
}
