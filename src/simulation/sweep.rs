//! Grid search over (odds, gain) scenarios.
//!
//! For every ordered pair drawn from the discretized percentage axis, the
//! sweep scans every candidate bet fraction from the same axis through the
//! scenario evaluator and keeps the growth-maximizing one. Cubic in axis
//! length, with N games of R rounds per cell — this is a long-running batch
//! computation, so the loop reports in-place progress per completed cell.

use std::io::Write;
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::types::{OptimalPoint, ResultGrid, Scenario, SweepConfig};

use super::engine::evaluate_scenario;

/// Discretized percentage axis: `0, step, 2·step, …` capped at 100, with
/// `step = 100 / points_per_axis` (integer division). Used for all three
/// dimensions (odds, gain, and candidate bets). Panics outside 1..=100.
pub fn axis_points(points_per_axis: u32) -> Vec<u32> {
    assert!(
        (1..=100).contains(&points_per_axis),
        "points_per_axis must be in 1..=100, got {points_per_axis}"
    );
    let step = 100 / points_per_axis;
    (0..=100).step_by(step as usize).collect()
}

/// Progress tracker for the sweep loop: one tick per completed (odds, gain)
/// cell, rendered as an in-place line and throttled to twice per second.
struct SweepProgress {
    total_cells: usize,
    completed_cells: usize,
    start_time: Instant,
    last_report_time: Instant,
}

impl SweepProgress {
    fn new(total_cells: usize) -> Self {
        let now = Instant::now();
        SweepProgress {
            total_cells,
            completed_cells: 0,
            start_time: now,
            last_report_time: now,
        }
    }

    fn advance(&mut self) {
        self.completed_cells += 1;
        let now = Instant::now();
        if self.completed_cells < self.total_cells
            && now.duration_since(self.last_report_time).as_secs_f64() < 0.5
        {
            return;
        }
        self.last_report_time = now;

        let elapsed = now.duration_since(self.start_time).as_secs_f64();
        let pct = self.completed_cells as f64 / self.total_cells as f64 * 100.0;
        let rate = self.completed_cells as f64 / elapsed.max(1e-9);
        let eta = (self.total_cells - self.completed_cells) as f64 / rate;

        print!(
            "\rProgress: {}/{} cells ({:.1}%) | Elapsed: {:.1}s | Rate: {:.1} cells/s | ETA: {:.1}s   ",
            self.completed_cells, self.total_cells, pct, elapsed, rate, eta
        );
        let _ = std::io::stdout().flush();
    }
}

/// Full grid search: one [`OptimalPoint`] per (odds, gain) pair, covering
/// the complete axis × axis cross product including the 0 edge points.
///
/// The running maximum starts at (bet 0, growth 0) and is replaced only on
/// strict improvement, so ties keep the lowest bet and a scenario where
/// every candidate loses reports bet 0 / growth 0.
///
/// Draws are consumed in exactly the loop order (odds, then gain, then bet,
/// then per-cell games), so the same seed and axis density reproduce an
/// identical grid.
/// The full axis × axis cross product, in iteration order (outer odds,
/// inner gain).
pub fn scenario_grid(axis: &[u32]) -> Vec<Scenario> {
    let mut scenarios = Vec::with_capacity(axis.len() * axis.len());
    for &odds in axis {
        for &gain in axis {
            scenarios.push(Scenario { odds, gain });
        }
    }
    scenarios
}

pub fn run_sweep(cfg: &SweepConfig, seed: u64) -> ResultGrid {
    let axis = axis_points(cfg.points_per_axis);
    let scenarios = scenario_grid(&axis);
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut progress = SweepProgress::new(scenarios.len());
    let mut points = Vec::with_capacity(scenarios.len());

    for &scenario in &scenarios {
        let mut best_bet = 0u32;
        let mut max_growth = 0.0f64;
        for &bet in &axis {
            let growth = evaluate_scenario(
                scenario,
                bet,
                cfg.games_per_point,
                cfg.rounds_per_game,
                &mut rng,
            );
            if growth > max_growth {
                max_growth = growth;
                best_bet = bet;
            }
        }
        points.push(OptimalPoint {
            odds: scenario.odds,
            gain: scenario.gain,
            bet: best_bet,
            growth: max_growth,
        });
        progress.advance();
    }
    println!();

    ResultGrid {
        seed,
        points_per_axis: cfg.points_per_axis,
        points,
    }
}
