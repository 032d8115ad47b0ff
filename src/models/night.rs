use crate::models::Reservation;
use crate::types::{format_day_first, Cell, DateField, Monetary};
use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// One occupied night of a reservation, with its share of the stay revenue.
///
/// Descriptive fields borrow from the reservation the night was expanded from.
/// Field order and names follow the daily split schema so the record can be
/// serialized straight to a CSV preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NightRecord<'a> {
    #[serde(rename = "Reservation Number")]
    pub reservation_number: &'a str,
    #[serde(rename = "Apartment")]
    pub apartment: &'a str,
    #[serde(rename = "Guest Name")]
    pub guest_name: &'a str,
    #[serde(rename = "Sub Channel")]
    pub sub_channel: &'a str,
    #[serde(rename = "Date", serialize_with = "serialize_day_first")]
    pub date: NaiveDate,
    #[serde(rename = "Booking Date")]
    pub booking_date: &'a DateField,
    #[serde(rename = "Nights")]
    pub nights: u32,
    #[serde(rename = "Base Revenue")]
    pub base_revenue: Option<Monetary>,
    #[serde(rename = "Total Revenue")]
    pub total_revenue: Option<Monetary>
}

impl<'a> NightRecord<'a> {
    /// A night of `reservation` whose stay spans `night_count` nights in total.
    pub fn new(reservation: &'a Reservation, date: NaiveDate, night_count: usize) -> Self {
        Self {
            reservation_number: &reservation.reservation_number,
            apartment: &reservation.apartment,
            guest_name: &reservation.guest_name,
            sub_channel: &reservation.channel,
            date,
            booking_date: &reservation.booking_date,
            nights: 1,
            base_revenue: reservation.base_revenue.map(|revenue| revenue.prorate(night_count)),
            total_revenue: reservation.total_revenue.map(|revenue| revenue.prorate(night_count))
        }
    }

    /// The record as a daily split row, in `DAILY_SPLIT_COLUMNS` order.
    pub fn to_row(&self) -> Vec<Cell> {
        vec![
            text_cell(self.reservation_number),
            text_cell(self.apartment),
            text_cell(self.guest_name),
            text_cell(self.sub_channel),
            Cell::Text(format_day_first(self.date)),
            self.booking_date.to_cell(),
            Cell::Integer(i64::from(self.nights)),
            self.base_revenue.map_or(Cell::Empty, Cell::Amount),
            self.total_revenue.map_or(Cell::Empty, Cell::Amount)
        ]
    }
}

fn text_cell(value: &str) -> Cell {
    if value.is_empty() { Cell::Empty } else { Cell::text(value) }
}

fn serialize_day_first<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_day_first(*date))
}
