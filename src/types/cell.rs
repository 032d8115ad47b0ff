use crate::types::date::format_day_first;
use crate::types::Monetary;
use chrono::NaiveDate;
use std::fmt;
use std::fmt::{Display, Formatter};

/// A single value of a loosely-typed reservation table.
///
/// `Date` is produced by spreadsheet readers for date-formatted cells, while
/// `Integer` and `Amount` only ever appear in computed output tables.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Integer(i64),
    Amount(Monetary)
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(value) => value.trim().is_empty(),
            _ => false
        }
    }
}

impl Display for Cell {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(value) => write!(formatter, "{value}"),
            // Whole numbers are rendered without a fraction so identifiers such as 1042.0 read as 1042
            Cell::Number(value) if value.fract() == 0.0 && value.abs() < 1e15 => write!(formatter, "{}", *value as i64),
            Cell::Number(value) => write!(formatter, "{value}"),
            Cell::Date(date) => write!(formatter, "{}", format_day_first(*date)),
            Cell::Integer(value) => write!(formatter, "{value}"),
            Cell::Amount(amount) => write!(formatter, "{amount}")
        }
    }
}
