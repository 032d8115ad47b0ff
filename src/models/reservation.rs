use crate::models::columns::{BASE_REVENUE, TOTAL_REVENUE};
use crate::models::{ReservationColumns, ReservationError};
use crate::types::{Cell, DateField, Monetary, MonetaryError};
use rust_decimal::Decimal;
use std::str::FromStr;

/// A single booking as read from the input table.
///
/// Descriptive fields are kept as text exactly as they appear in the source.
/// Date fields carry their own validity so later stages branch on it explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    /// Grouping key of the stay; opaque text.
    pub reservation_number: String,
    pub apartment: String,
    pub guest_name: String,
    /// Booking channel, published as `Sub Channel` in the daily split.
    pub channel: String,
    pub arrival: DateField,
    pub departure: DateField,
    pub booking_date: DateField,
    /// Revenue for the whole stay. `None` when the cell is blank.
    pub base_revenue: Option<Monetary>,
    pub total_revenue: Option<Monetary>
}

impl Reservation {
    /// Builds a reservation from one table row. `row_number` is only used in errors.
    ///
    /// # Errors
    /// Returns `ReservationError::InvalidRevenue` when a revenue cell holds
    /// something other than a number.
    pub fn from_row(row_number: usize, row: &[Cell], columns: &ReservationColumns) -> Result<Self, ReservationError> {
        let cell = |index: usize| row.get(index).unwrap_or(&Cell::Empty);

        Ok(Self {
            reservation_number: cell(columns.reservation_number).to_string(),
            apartment: cell(columns.apartment).to_string(),
            guest_name: cell(columns.guest_name).to_string(),
            channel: cell(columns.channel).to_string(),
            arrival: DateField::from_cell(cell(columns.arrival)),
            departure: DateField::from_cell(cell(columns.departure)),
            booking_date: DateField::from_cell(cell(columns.booking_date)),
            base_revenue: read_revenue(row_number, BASE_REVENUE, cell(columns.base_revenue))?,
            total_revenue: read_revenue(row_number, TOTAL_REVENUE, cell(columns.total_revenue))?
        })
    }

    pub fn has_valid_stay_dates(&self) -> bool {
        self.arrival.is_valid() && self.departure.is_valid()
    }
}

fn read_revenue(row_number: usize, column: &'static str, cell: &Cell) -> Result<Option<Monetary>, ReservationError> {
    if cell.is_empty() {
        return Ok(None);
    }

    let parsed = match cell {
        Cell::Empty => return Ok(None),
        Cell::Amount(amount) => Ok(*amount),
        Cell::Integer(value) => Ok(Monetary::from(Decimal::from(*value))),
        Cell::Number(value) => Monetary::from_f64(*value),
        Cell::Text(value) => Monetary::from_str(value),
        Cell::Date(_) => Err(MonetaryError::InvalidFormat("Value is a date".to_string()))
    };

    parsed
        .map(Some)
        .map_err(|error| ReservationError::invalid_revenue(row_number, column, cell.to_string(), error))
}
