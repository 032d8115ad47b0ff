use crate::models::ReservationError;
use crate::table::Table;

pub const RESERVATION_NUMBER: &str = "Reservation Number";
pub const APARTMENT: &str = "Apartment";
pub const GUEST_NAME: &str = "Guest Name";
pub const CHANNEL: &str = "Channel";
pub const SUB_CHANNEL: &str = "Sub Channel";
pub const ARRIVAL: &str = "Arrival";
pub const DEPARTURE: &str = "Departure";
pub const BOOKING_DATE: &str = "Booking Date";
pub const DATE: &str = "Date";
pub const NIGHTS: &str = "Nights";
pub const BASE_REVENUE: &str = "Base Revenue";
pub const TOTAL_REVENUE: &str = "Total Revenue";

/// Columns of the daily split, in output order.
pub const DAILY_SPLIT_COLUMNS: [&str; 9] = [
    RESERVATION_NUMBER,
    APARTMENT,
    GUEST_NAME,
    SUB_CHANNEL,
    DATE,
    BOOKING_DATE,
    NIGHTS,
    BASE_REVENUE,
    TOTAL_REVENUE
];

/// Positions of the reservation fields within an input table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationColumns {
    pub reservation_number: usize,
    pub apartment: usize,
    pub guest_name: usize,
    pub channel: usize,
    pub arrival: usize,
    pub departure: usize,
    pub booking_date: usize,
    pub base_revenue: usize,
    pub total_revenue: usize
}

impl ReservationColumns {
    /// Looks up every reservation field by its trimmed column name.
    ///
    /// The channel is read from `Channel`, falling back to a `Sub Channel` column
    /// when the export already uses the output name.
    ///
    /// # Errors
    /// Returns `ReservationError::MissingColumn` naming the first absent column.
    pub fn resolve(table: &Table) -> Result<Self, ReservationError> {
        let find = |name: &str| table.column_index(name)
            .ok_or_else(|| ReservationError::missing_column(name));

        let reservation_number = find(RESERVATION_NUMBER)?;
        let apartment = find(APARTMENT)?;
        let guest_name = find(GUEST_NAME)?;

        let channel = table.column_index(CHANNEL)
            .or_else(|| table.column_index(SUB_CHANNEL))
            .ok_or_else(|| ReservationError::missing_column(CHANNEL))?;

        Ok(Self {
            reservation_number,
            apartment,
            guest_name,
            channel,
            arrival: find(ARRIVAL)?,
            departure: find(DEPARTURE)?,
            booking_date: find(BOOKING_DATE)?,
            base_revenue: find(BASE_REVENUE)?,
            total_revenue: find(TOTAL_REVENUE)?
        })
    }
}
