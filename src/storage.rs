//! Flat CSV persistence for the result grid.
//!
//! Format: one header row, then one row per optimal point with three
//! integer percentage fields in fixed order:
//!
//! ```text
//! Winning Odds,Percent Gain from Win,Optimal Fractional Bet
//! ```
//!
//! This file is the sole hand-off between a sweep run and a later
//! validation run; the two never share a process. The file is written only
//! after the sweep has fully completed, so no partial grid is ever
//! persisted.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::types::ResultGrid;

/// Header row of the results file.
pub const RESULTS_HEADER: &str = "Winning Odds,Percent Gain from Win,Optimal Fractional Bet";

/// One persisted optimal point, read back with all three fields rescaled
/// from percentages to fractions in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetRecord {
    pub odds: f64,
    pub gain: f64,
    pub bet: f64,
}

/// Write the full grid to `path`, header first.
pub fn save_grid(path: &Path, grid: &ResultGrid) -> io::Result<()> {
    let mut f = BufWriter::new(File::create(path)?);
    writeln!(f, "{}", RESULTS_HEADER)?;
    for p in &grid.points {
        writeln!(f, "{},{},{}", p.odds, p.gain, p.bet)?;
    }
    f.flush()
}

/// Read every record from `path`, skipping the header row. Percentage
/// fields are rescaled to fractions. A missing file surfaces as NotFound;
/// a malformed row as InvalidData.
pub fn load_records(path: &Path) -> io::Result<Vec<BetRecord>> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = reader.lines();

    match lines.next() {
        Some(header) => {
            header?;
        }
        None => return Err(malformed("results file is empty")),
    }

    let mut records = Vec::new();
    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split(',');
        let odds = parse_field(fields.next(), &line)?;
        let gain = parse_field(fields.next(), &line)?;
        let bet = parse_field(fields.next(), &line)?;
        records.push(BetRecord {
            odds: odds / 100.0,
            gain: gain / 100.0,
            bet: bet / 100.0,
        });
    }
    Ok(records)
}

fn parse_field(field: Option<&str>, line: &str) -> io::Result<f64> {
    field
        .and_then(|s| s.trim().parse::<f64>().ok())
        .ok_or_else(|| malformed(&format!("malformed results row: {line}")))
}

fn malformed(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OptimalPoint;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("kellysim_{}_{}.csv", name, std::process::id()))
    }

    fn sample_grid() -> ResultGrid {
        ResultGrid {
            seed: 42,
            points_per_axis: 2,
            points: vec![
                OptimalPoint { odds: 0, gain: 0, bet: 0, growth: 0.0 },
                OptimalPoint { odds: 50, gain: 100, bet: 10, growth: 4.5 },
                OptimalPoint { odds: 100, gain: 100, bet: 100, growth: 100.0 },
            ],
        }
    }

    #[test]
    fn round_trip_rescales_to_fractions() {
        let path = temp_path("round_trip");
        save_grid(&path, &sample_grid()).unwrap();
        let records = load_records(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(
            records[1],
            BetRecord { odds: 0.5, gain: 1.0, bet: 0.1 }
        );
        assert_eq!(
            records[2],
            BetRecord { odds: 1.0, gain: 1.0, bet: 1.0 }
        );
    }

    #[test]
    fn file_starts_with_header_row() {
        let path = temp_path("header");
        save_grid(&path, &sample_grid()).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(contents.starts_with(RESULTS_HEADER));
        assert_eq!(contents.lines().count(), 4);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_records(Path::new("kellysim_definitely_absent.csv")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn malformed_row_is_invalid_data() {
        let path = temp_path("malformed");
        std::fs::write(&path, format!("{}\n50,abc,10\n", RESULTS_HEADER)).unwrap();
        let err = load_records(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn short_row_is_invalid_data() {
        let path = temp_path("short_row");
        std::fs::write(&path, format!("{}\n50,100\n", RESULTS_HEADER)).unwrap();
        let err = load_records(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
