//! simulate: sweep the (odds, gain) grid for optimal fractional bets, or
//! validate a previous sweep against the Kelly Criterion.
//!
//! Usage:
//!   simulate              random seed, full sweep, results to sim_results.csv
//!   simulate -s SEED      deterministic sweep with the given seed
//!   simulate -v           validate the persisted results against Kelly bets
//!
//! The seed is always printed, so an unseeded run can be reproduced later
//! with `-s`. Axis density, games per point, rounds per game, and the
//! results path come from the KELLY_* environment variables.

use rand::Rng;

use kellysim::env_config;
use kellysim::simulation::{mean, run_sweep};
use kellysim::storage::{load_records, save_grid};
use kellysim::types::ResultGrid;
use kellysim::validation::{validate, ValidationReport};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => {
            // 32-bit seed range so it is easy to quote back into -s.
            let seed = rand::rng().random::<u32>() as u64;
            run_simulation(seed);
        }
        2 if args[1] == "-v" => run_validation(),
        2 if args[1] == "-h" || args[1] == "--help" => print_usage(),
        3 if args[1] == "-s" => {
            let seed: u64 = args[2].parse().unwrap_or_else(|_| {
                eprintln!("Invalid seed: {}", args[2]);
                std::process::exit(1);
            });
            run_simulation(seed);
        }
        _ => {
            eprintln!("Invalid arguments");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Usage:");
    println!("  simulate              run the sweep with a fresh random seed");
    println!("  simulate -s SEED      run the sweep with a fixed seed");
    println!("  simulate -v           validate persisted results against the Kelly Criterion");
    println!();
    println!("Environment:");
    println!("  KELLY_RESULTS_PATH    results CSV path (default sim_results.csv)");
    println!("  KELLY_PPA             points per axis (default 50)");
    println!("  KELLY_GAMES           games per (odds, gain, bet) point (default 5000)");
    println!("  KELLY_ROUNDS          rounds per game (default 12)");
}

fn run_simulation(seed: u64) {
    let cfg = env_config::sweep_config();
    let path = env_config::results_path();

    println!("=== kelly sweep ===");
    println!("Seed: {}", seed);
    println!(
        "Axis: {} points/axis | {} games/point | {} rounds/game",
        cfg.points_per_axis, cfg.games_per_point, cfg.rounds_per_game
    );

    let grid = run_sweep(&cfg, seed);
    print_grid_summary(&grid);

    save_grid(&path, &grid).unwrap_or_else(|e| {
        eprintln!("Failed to write {}: {}", path.display(), e);
        std::process::exit(1);
    });
    println!("Wrote {} ({} scenarios)", path.display(), grid.points.len());
}

fn print_grid_summary(grid: &ResultGrid) {
    let betting = grid.points.iter().filter(|p| p.bet > 0).count();
    println!(
        "Scenarios: {} total, {} with a profitable bet",
        grid.points.len(),
        betting
    );
    if betting > 0 {
        let bets: Vec<f64> = grid
            .points
            .iter()
            .filter(|p| p.bet > 0)
            .map(|p| p.bet as f64)
            .collect();
        println!("Mean bet where betting at all: {:.1}%", mean(&bets));
    }

    if let Some(best) = grid.best_point() {
        println!(
            "Best cell: odds={}% gain={}% -> bet {}% (median growth {:.2}%)",
            best.odds, best.gain, best.bet, best.growth
        );
    }

    // Diagonal sample: enough to eyeball the surface without dumping
    // thousands of rows.
    println!("{:>6} {:>6} {:>6} {:>10}", "odds", "gain", "bet", "growth");
    for p in grid.points.iter().filter(|p| p.odds == p.gain) {
        println!(
            "{:>6} {:>6} {:>6} {:>10.2}",
            p.odds, p.gain, p.bet, p.growth
        );
    }
}

fn run_validation() {
    let path = env_config::results_path();
    let records = load_records(&path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", path.display(), e);
        eprintln!("Run a sweep first to produce the results file.");
        std::process::exit(1);
    });

    let report = validate(&records);
    print_validation_report(&report);
}

fn print_validation_report(report: &ValidationReport) {
    println!("=== kelly validation ===");
    println!("Records: {}", report.points.len());

    // Worst disagreements first; the full grid is too large to dump.
    let mut worst: Vec<_> = report.points.iter().collect();
    worst.sort_by(|a, b| b.abs_error().total_cmp(&a.abs_error()));

    println!(
        "{:>6} {:>6} {:>9} {:>9} {:>7}",
        "odds", "gain", "sim bet", "kelly", "gap"
    );
    for p in worst.iter().take(20) {
        println!(
            "{:>6.0} {:>6.0} {:>9.1} {:>9.1} {:>7.1}",
            p.odds * 100.0,
            p.gain * 100.0,
            p.simulated_bet * 100.0,
            p.kelly_bet * 100.0,
            p.abs_error() * 100.0
        );
    }

    println!("Mean absolute error: {:.2}%", report.mean_abs_error_pct);
}
