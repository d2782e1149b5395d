//! Round and game engines, plus per-scenario evaluation.
//!
//! Three nested procedures: [`play_round`] applies a single win/loss outcome
//! to a wealth value, [`play_game`] composes rounds from a fixed bankroll
//! with ruin checking at every round boundary, and [`evaluate_scenario`]
//! reduces a batch of independent games to their median growth.
//!
//! All randomness comes from the caller-supplied RNG; each round consumes
//! exactly one draw, so draw order is the loop order and any fixed seed
//! replays the same trajectory.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::types::Scenario;

use super::statistics::median;

/// Starting bankroll for every game. Growth is reported relative to this,
/// so net growth is directly a percentage.
pub const START_WEALTH: f64 = 100.0;

/// Growth reported for a game whose wealth reaches zero or below: total
/// loss of the starting bankroll.
pub const RUIN_GROWTH: f64 = -100.0;

/// Apply one round to `wealth`: draw uniformly from [0, 100), win iff the
/// draw is at most `odds`. A win adds `wealth·bet·gain / 10000`, a loss
/// removes `wealth·bet / 100`.
///
/// Wealth is not clamped here; a negative result is a legitimate transient
/// caught by [`play_game`] at the next round boundary.
pub fn play_round(wealth: f64, odds: u32, gain: u32, bet: u32, rng: &mut SmallRng) -> f64 {
    let draw: f64 = rng.random_range(0.0..100.0);
    if draw <= odds as f64 {
        wealth + wealth * bet as f64 * gain as f64 / 10_000.0
    } else {
        wealth - wealth * bet as f64 / 100.0
    }
}

/// Play `rounds` rounds starting from [`START_WEALTH`], returning net
/// percentage growth, or [`RUIN_GROWTH`] if wealth is at or below zero at
/// any round boundary. No round is ever applied to a ruined bankroll.
pub fn play_game(odds: u32, gain: u32, bet: u32, rounds: u32, rng: &mut SmallRng) -> f64 {
    let mut wealth = START_WEALTH;
    for _ in 0..rounds {
        if wealth <= 0.0 {
            return RUIN_GROWTH;
        }
        wealth = play_round(wealth, odds, gain, bet, rng);
    }
    wealth - START_WEALTH
}

/// Median growth over `games` independent games at one (odds, gain, bet)
/// triple.
///
/// The median, not the mean: growth compounds, so a handful of lucky runs
/// dominates an arithmetic mean while the median tracks the typical game.
pub fn evaluate_scenario(
    scenario: Scenario,
    bet: u32,
    games: usize,
    rounds: u32,
    rng: &mut SmallRng,
) -> f64 {
    let outcomes: Vec<f64> = (0..games)
        .map(|_| play_game(scenario.odds, scenario.gain, bet, rounds, rng))
        .collect();
    median(outcomes)
}
