//! Analytical validation of a persisted sweep against the Kelly Criterion.
//!
//! A separate, later lifecycle stage: it consumes [`crate::storage`]
//! records and a closed-form formula, never the simulation pipeline.

use serde::Serialize;

use crate::storage::BetRecord;

/// Closed-form optimal fraction for a binary bet with win probability
/// `odds` and payout multiplier `gain` (both fractions):
/// `odds − (1 − odds) / gain`, clamped to [0, 1]. A non-positive-edge game
/// clamps to 0 (never bet) and an optimum above the bankroll clamps to 1.
///
/// `gain == 0` maps straight to 0 without evaluating the formula: a
/// zero-gain game has no incentive to bet at any odds.
pub fn kelly_bet(odds: f64, gain: f64) -> f64 {
    if gain == 0.0 {
        return 0.0;
    }
    (odds - (1.0 - odds) / gain).clamp(0.0, 1.0)
}

/// Simulated vs analytical optimum for one record, as fractions in [0, 1].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ValidationPoint {
    pub odds: f64,
    pub gain: f64,
    pub simulated_bet: f64,
    pub kelly_bet: f64,
}

impl ValidationPoint {
    /// Absolute simulated-vs-analytical gap, as a fraction.
    pub fn abs_error(&self) -> f64 {
        (self.kelly_bet - self.simulated_bet).abs()
    }
}

/// Validation summary over a whole persisted grid.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub points: Vec<ValidationPoint>,
    /// Mean absolute difference between simulated and Kelly bets, percent.
    pub mean_abs_error_pct: f64,
}

/// Compare every record against its Kelly optimum.
///
/// Error accumulates over `gain != 0` records only, while the divisor is
/// the total record count — the accumulation rule prior published runs
/// used, kept for comparability (see DESIGN.md).
pub fn validate(records: &[BetRecord]) -> ValidationReport {
    let mut abs_error = 0.0;
    let mut points = Vec::with_capacity(records.len());

    for r in records {
        let kelly = kelly_bet(r.odds, r.gain);
        if r.gain != 0.0 {
            abs_error += (kelly - r.bet).abs();
        }
        points.push(ValidationPoint {
            odds: r.odds,
            gain: r.gain,
            simulated_bet: r.bet,
            kelly_bet: kelly,
        });
    }

    let mean_abs_error_pct = if records.is_empty() {
        0.0
    } else {
        abs_error * 100.0 / records.len() as f64
    };

    ValidationReport {
        points,
        mean_abs_error_pct,
    }
}
