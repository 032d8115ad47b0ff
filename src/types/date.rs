use crate::types::Cell;
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};

const OUTPUT_FORMAT: &str = "%d-%m-%Y";

// Day-first patterns come before ISO ones so "03/04/2024" is the 3rd of April.
const DATE_FORMATS: [&str; 9] = [
    "%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y",
    "%d %b %Y", "%d %B %Y", "%d-%b-%Y", "%d/%b/%Y",
    "%Y-%m-%d", "%Y/%m/%d"
];

// `%.f` also accepts a missing fraction, so each pattern covers both spellings.
const DATE_TIME_FORMATS: [&str; 11] = [
    "%d/%m/%Y %H:%M", "%d/%m/%Y %H:%M:%S%.f",
    "%d-%m-%Y %H:%M", "%d-%m-%Y %H:%M:%S%.f",
    "%d.%m.%Y %H:%M", "%d.%m.%Y %H:%M:%S%.f",
    "%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M", "%Y/%m/%d %H:%M:%S%.f"
];

const SHORT_YEAR_FORMATS: [&str; 4] = ["%d/%m/%y", "%d-%m-%y", "%d.%m.%y", "%d-%b-%y"];

/// Four digit patterns accept any digit count for `%Y`, so "01/03/24" would
/// otherwise land in the year 24.
const MIN_FULL_YEAR: i32 = 1000;

/// Renders a calendar date as `DD-MM-YYYY`.
pub fn format_day_first(date: NaiveDate) -> String {
    date.format(OUTPUT_FORMAT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidDate {
    Missing,
    Unrecognized(String)
}

impl Display for InvalidDate {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InvalidDate::Missing => write!(formatter, "missing"),
            InvalidDate::Unrecognized(value) => write!(formatter, "unrecognized date [{value}]")
        }
    }
}

/// The outcome of normalizing one date field of a reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateField {
    Parsed(NaiveDate),
    Invalid(InvalidDate)
}

impl DateField {
    /// Interprets a raw cell as a calendar date. Never fails: anything that
    /// cannot be read as a date becomes `Invalid` with the reason attached.
    pub fn from_cell(cell: &Cell) -> Self {
        match cell {
            Cell::Date(date) => DateField::Parsed(*date),
            Cell::Number(serial) => from_serial(*serial),
            Cell::Integer(serial) => from_serial(*serial as f64),
            Cell::Text(value) => Self::parse(value),
            Cell::Empty | Cell::Amount(_) => DateField::Invalid(InvalidDate::Missing)
        }
    }

    pub fn parse(value: &str) -> Self {
        let value = value.trim();

        if value.is_empty() {
            return DateField::Invalid(InvalidDate::Missing);
        }

        let full_year = DATE_FORMATS.iter()
            .filter_map(|format| NaiveDate::parse_from_str(value, format).ok())
            .chain(DATE_TIME_FORMATS.iter()
                .filter_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|date_time| date_time.date()))
            .find(|date| date.year() >= MIN_FULL_YEAR);

        let parsed = full_year.or_else(|| SHORT_YEAR_FORMATS.iter()
            .find_map(|format| NaiveDate::parse_from_str(value, format).ok()));

        match parsed {
            Some(date) => DateField::Parsed(date),
            None => DateField::Invalid(InvalidDate::Unrecognized(value.to_string()))
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DateField::Parsed(date) => Some(*date),
            DateField::Invalid(_) => None
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, DateField::Parsed(_))
    }

    /// The presentation cell: `DD-MM-YYYY` text, or empty when invalid.
    pub fn to_cell(&self) -> Cell {
        match self {
            DateField::Parsed(date) => Cell::Text(format_day_first(*date)),
            DateField::Invalid(_) => Cell::Empty
        }
    }
}

/// Spreadsheet serial dates count days from 1899-12-30; the fraction is the time of day.
fn from_serial(serial: f64) -> DateField {
    if !serial.is_finite() || serial < 0.0 {
        return DateField::Invalid(InvalidDate::Unrecognized(serial.to_string()));
    }

    NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|epoch| epoch.checked_add_days(Days::new(serial.trunc() as u64)))
        .map(DateField::Parsed)
        .unwrap_or_else(|| DateField::Invalid(InvalidDate::Unrecognized(serial.to_string())))
}

impl Serialize for DateField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DateField::Parsed(date) => serializer.collect_str(&date.format(OUTPUT_FORMAT)),
            DateField::Invalid(_) => serializer.serialize_none()
        }
    }
}
