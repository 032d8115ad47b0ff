use rust_decimal::Error as DecimalError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonetaryError {
    #[error("Monetary error: {0}")]
    InvalidFormat(String),
    #[error("Monetary error: {0}")]
    Decimal(#[from] DecimalError),
    #[error("Monetary error: {0} is not a finite number")]
    NotFinite(f64)
}
