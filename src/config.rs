use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT: &str = "reservations_with_daily_split.xlsx";

/// Splits each booking of a reservations workbook into daily rows and writes
/// an Excel file with two sheets: Original Data and Reservations Daily Split.
#[derive(Debug, Parser)]
#[command(name = "reservation-daily-split", version, about)]
pub struct Config {
    /// Reservations file to split (.xlsx or .csv)
    pub input: PathBuf,

    /// Where to write the two sheet workbook
    #[arg(short, long, env = "DAILY_SPLIT_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Log level: error, warn, info, debug or trace
    #[arg(short, long, env = "DAILY_SPLIT_LOG", default_value = "error")]
    pub log_level: String,

    /// Print the first ROWS nightly rows to stdout as CSV
    #[arg(short, long, value_name = "ROWS")]
    pub preview: Option<usize>
}
