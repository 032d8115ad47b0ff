use thiserror::Error;

use crate::types::MonetaryError;

#[derive(Debug, Error)]
pub enum ReservationError {
    #[error("Required column [{column}] is missing from the reservation table")]
    MissingColumn {
        column: String
    },
    #[error("Invalid [{column}] value [{value}] on row [{row}]: {source}")]
    InvalidRevenue {
        row: usize,
        column: &'static str,
        value: String,
        source: MonetaryError
    }
}

impl ReservationError {
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn { column: column.into() }
    }

    pub fn invalid_revenue(row: usize, column: &'static str, value: impl Into<String>, source: MonetaryError) -> Self {
        Self::InvalidRevenue {
            row,
            column,
            value: value.into(),
            source
        }
    }
}
