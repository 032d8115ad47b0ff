use crate::engine::SplitError;
use crate::models::columns::{ARRIVAL, BOOKING_DATE, DEPARTURE};
use crate::models::ReservationError;
use crate::table::Table;
use crate::types::DateField;

const DATE_COLUMNS: [&str; 3] = [ARRIVAL, DEPARTURE, BOOKING_DATE];

/// Presentation copy of the uploaded table: trimmed column names and the three
/// stay dates rendered as `DD-MM-YYYY`. Unreadable dates become empty cells.
///
/// # Errors
/// Returns `SplitError` when one of the date columns is missing.
pub fn normalize_original(table: &Table) -> Result<Table, SplitError> {
    let mut original = table.clone();
    original.trim_headers();

    for column in DATE_COLUMNS {
        let index = original.column_index(column)
            .ok_or_else(|| ReservationError::missing_column(column))?;

        for row in original.rows.iter_mut() {
            if let Some(cell) = row.get_mut(index) {
                *cell = DateField::from_cell(cell).to_cell();
            }
        }
    }

    Ok(original)
}
