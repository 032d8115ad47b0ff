use crate::types::errors::MonetaryError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DECIMAL_PLACES: u32 = 2;

/// A stay-level or per-night revenue amount.
///
/// Prorated values are rounded half-to-even to two decimal places.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default)]
pub struct Monetary(Decimal);

impl Monetary {
    /// Converts a spreadsheet numeric cell into an amount.
    pub fn from_f64(value: f64) -> Result<Self, MonetaryError> {
        if !value.is_finite() {
            return Err(MonetaryError::NotFinite(value));
        }

        Ok(Monetary(Decimal::try_from(value)?))
    }

    /// Splits the amount evenly across `nights` and rounds the share to cents.
    ///
    /// # Panics
    /// Panics if `nights` is zero. Zero-night stays never reach proration, so a
    /// zero here means the expansion step is broken.
    pub fn prorate(self, nights: usize) -> Monetary {
        assert!(nights > 0, "cannot prorate revenue across zero nights");

        let share = self.0 / Decimal::from(nights);

        Monetary(share.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven))
    }

    pub fn to_f64(self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }
}

impl From<Decimal> for Monetary {
    fn from(value: Decimal) -> Self {
        Monetary(value)
    }
}

impl Display for Monetary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);

        write!(formatter, "{:.prec$}", rounded, prec = DECIMAL_PLACES as usize)
    }
}

impl FromStr for Monetary {
    type Err = MonetaryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(MonetaryError::InvalidFormat("Value is an empty string".to_string()));
        }

        //NOTE: Spreadsheets exported from booking platforms sometimes carry scientific notation for large totals
        let decimal = Decimal::from_str(value)
            .or_else(|_| Decimal::from_scientific(value))
            .map_err(|error| MonetaryError::InvalidFormat(format!("Value [{value}] is not a decimal number: {error}")))?;

        Ok(Monetary(decimal))
    }
}

impl Serialize for Monetary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
