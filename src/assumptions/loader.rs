//! CSV overrides for the published assumption tables
//!
//! The built-in `Default` tables carry the published brochure figures;
//! deployments can override them by dropping CSV files next to the binary:
//! `retirement_contributions.csv` (age,platinum,gold,silver,limited) and
//! `term_payouts.csv` (term_months,reference_amount,total_payout).

use super::capitalization::TermPayout;
use super::retirement::ContributionRow;
use log::info;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading assumption CSVs
#[derive(Debug, Error)]
pub enum AssumptionError {
    #[error("failed to read assumption file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse assumption CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Raw tables loaded from CSV, ready for `Assumptions::from_loaded`
#[derive(Debug, Clone, Default)]
pub struct LoadedAssumptions {
    pub retirement_rows: Option<Vec<ContributionRow>>,
    pub term_payouts: Option<Vec<TermPayout>>,
}

#[derive(Debug, Deserialize)]
struct ContributionRecord {
    age: u8,
    platinum: f64,
    gold: f64,
    silver: f64,
    limited: f64,
}

#[derive(Debug, Deserialize)]
struct PayoutRecord {
    term_months: u32,
    reference_amount: f64,
    total_payout: f64,
}

/// Parse retirement contribution rows from any CSV reader
pub fn load_contributions_from_reader<R: Read>(
    reader: R,
) -> Result<Vec<ContributionRow>, AssumptionError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for record in csv_reader.deserialize() {
        let record: ContributionRecord = record?;
        rows.push(ContributionRow {
            age: record.age,
            platinum: record.platinum,
            gold: record.gold,
            silver: record.silver,
            limited: record.limited,
        });
    }
    Ok(rows)
}

/// Parse term payout rows from any CSV reader
pub fn load_payouts_from_reader<R: Read>(reader: R) -> Result<Vec<TermPayout>, AssumptionError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut payouts = Vec::new();
    for record in csv_reader.deserialize() {
        let record: PayoutRecord = record?;
        payouts.push(TermPayout {
            term_months: record.term_months,
            reference_amount: record.reference_amount,
            total_payout: record.total_payout,
        });
    }
    Ok(payouts)
}

/// Load whichever override files exist in a directory.
/// Missing files are not an error; the built-in tables stay in effect.
pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<LoadedAssumptions, AssumptionError> {
    let dir = dir.as_ref();
    let mut loaded = LoadedAssumptions::default();

    let contributions_path = dir.join("retirement_contributions.csv");
    if contributions_path.exists() {
        let file = std::fs::File::open(&contributions_path)?;
        let rows = load_contributions_from_reader(file)?;
        info!(
            "loaded {} retirement contribution rows from {}",
            rows.len(),
            contributions_path.display()
        );
        loaded.retirement_rows = Some(rows);
    }

    let payouts_path = dir.join("term_payouts.csv");
    if payouts_path.exists() {
        let file = std::fs::File::open(&payouts_path)?;
        let payouts = load_payouts_from_reader(file)?;
        info!(
            "loaded {} term payout rows from {}",
            payouts.len(),
            payouts_path.display()
        );
        loaded.term_payouts = Some(payouts);
    }

    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_contributions() {
        let csv = "age,platinum,gold,silver,limited\n\
                   30,200.00,160.00,120.00,80.00\n\
                   31,205.00,164.00,123.00,82.00\n";
        let rows = load_contributions_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].age, 30);
        assert_eq!(rows[0].platinum, 200.0);
        assert_eq!(rows[1].limited, 82.0);
    }

    #[test]
    fn test_load_payouts() {
        let csv = "term_months,reference_amount,total_payout\n\
                   24,18000,25200\n\
                   60,10000,20000\n";
        let payouts = load_payouts_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(payouts.len(), 2);
        assert_eq!(payouts[0].term_months, 24);
        assert_eq!(payouts[1].total_payout, 20_000.0);
    }

    #[test]
    fn test_malformed_csv() {
        let csv = "age,platinum,gold,silver,limited\n30,not_a_number,1,2,3\n";
        let result = load_contributions_from_reader(csv.as_bytes());
        assert!(matches!(result, Err(AssumptionError::Csv(_))));
    }

    #[test]
    fn test_missing_dir_files() {
        let loaded = load_from_dir(std::env::temp_dir()).unwrap();
        assert!(loaded.retirement_rows.is_none());
        assert!(loaded.term_payouts.is_none());
    }
}
