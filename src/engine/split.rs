use crate::engine::{NightSequence, SplitError};
use crate::models::{NightRecord, Reservation, ReservationColumns, DAILY_SPLIT_COLUMNS};
use crate::table::Table;
use crate::types::DateField;
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Reads every row of `table` as a typed reservation.
///
/// Row numbers in errors match the spreadsheet, where the header is row 1.
pub fn parse_reservations(table: &Table) -> Result<Vec<Reservation>, SplitError> {
    let columns = ReservationColumns::resolve(table)?;

    let reservations = table.rows.iter().enumerate()
        .map(|(index, row)| Reservation::from_row(index + 2, row, &columns))
        .collect::<Result<Vec<_>, _>>()?;

    for reservation in &reservations {
        if !reservation.has_valid_stay_dates() {
            warn!(
                "Reservation [{}] has no readable stay dates (arrival: {}, departure: {}), it is left out of the daily split",
                reservation.reservation_number,
                describe(&reservation.arrival),
                describe(&reservation.departure)
            );
        } else if NightSequence::new(&reservation.arrival, &reservation.departure).len() == 0 {
            debug!("Reservation [{}] departs on or before arrival, no nights generated", reservation.reservation_number);
        }
    }

    Ok(reservations)
}

/// Replaces each reservation with one record per occupied night.
///
/// Reservation order is preserved and nights ascend within a reservation.
/// Stays without nights, including those with unreadable dates, contribute
/// nothing.
pub fn expand_nights(reservations: &[Reservation]) -> Vec<NightRecord<'_>> {
    let mut nights = Vec::new();

    for reservation in reservations {
        let dates: Vec<NaiveDate> = NightSequence::new(&reservation.arrival, &reservation.departure).collect();

        // Counted from the generated rows rather than the date difference
        let night_count = dates.len();

        if night_count == 0 {
            continue;
        }

        nights.extend(dates.into_iter().map(|date| NightRecord::new(reservation, date, night_count)));
    }

    nights
}

/// Lays the night records out in the fixed daily split schema.
pub fn reshape(nights: &[NightRecord<'_>]) -> Table {
    let mut table = Table::new(DAILY_SPLIT_COLUMNS.iter().map(|column| column.to_string()).collect());
    table.rows.reserve(nights.len());

    for night in nights {
        table.push_row(night.to_row());
    }

    table
}

fn describe(field: &DateField) -> String {
    match field {
        DateField::Parsed(date) => date.to_string(),
        DateField::Invalid(reason) => reason.to_string()
    }
}
