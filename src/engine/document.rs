use crate::engine::{expand_nights, normalize_original, parse_reservations, reshape, SplitError};
use crate::models::{NightRecord, Reservation};
use crate::table::Table;
use tracing::info;

pub const ORIGINAL_DATA_SHEET: &str = "Original Data";
pub const DAILY_SPLIT_SHEET: &str = "Reservations Daily Split";

/// Both views of one uploaded reservation table, ready for export.
#[derive(Debug, Clone)]
pub struct DailySplitDocument {
    /// The uploaded table with trimmed headers and formatted dates.
    pub original: Table,
    /// One row per occupied night, in the fixed daily split schema.
    pub daily_split: Table,
    reservations: Vec<Reservation>
}

impl DailySplitDocument {
    /// Builds both output tables from the same source. `input` is only read.
    ///
    /// # Errors
    /// Returns `SplitError` when a required column is missing or a revenue value
    /// is not a number.
    pub fn build(input: &Table) -> Result<Self, SplitError> {
        let original = normalize_original(input)?;
        let reservations = parse_reservations(input)?;
        let daily_split = reshape(&expand_nights(&reservations));

        info!("Split {} reservations into {} nightly rows", reservations.len(), daily_split.row_count());

        Ok(Self {
            original,
            daily_split,
            reservations
        })
    }

    /// The night records behind the daily split table.
    pub fn nights(&self) -> Vec<NightRecord<'_>> {
        expand_nights(&self.reservations)
    }

    /// Named tables in export order.
    pub fn sheets(&self) -> [(&'static str, &Table); 2] {
        [
            (ORIGINAL_DATA_SHEET, &self.original),
            (DAILY_SPLIT_SHEET, &self.daily_split)
        ]
    }
}
