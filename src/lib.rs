//! # kellysim — Monte Carlo search for the optimal fractional bet
//!
//! Explores, by simulation, the growth-maximizing fractional bet in a
//! repeated binary-outcome wagering game across a grid of
//! (win-probability, payout-gain) scenarios, then validates the simulated
//! optima against the closed-form Kelly Criterion.
//!
//! ## Pipeline
//!
//! | Stage | Function | Description |
//! |-------|----------|-------------|
//! | Round | [`simulation::engine::play_round`] | Apply one win/loss outcome to a wealth value |
//! | Game | [`simulation::engine::play_game`] | R rounds from a fixed bankroll, with ruin checking |
//! | Scenario | [`simulation::engine::evaluate_scenario`] | Median growth over N independent games |
//! | Sweep | [`simulation::sweep::run_sweep`] | Bet scan per (odds, gain) cell over the full grid |
//!
//! The sweep is strictly sequential and draws from a single seeded
//! [`rand::rngs::SmallRng`], so a given seed and axis density reproduce an
//! identical result grid bit-for-bit.
//!
//! [`validation`] is an independent second stage: it reads the CSV written
//! by [`storage`] and compares each simulated optimum against the Kelly
//! formula. It never re-runs the simulation.

pub mod env_config;
pub mod simulation;
pub mod storage;
pub mod types;
pub mod validation;
