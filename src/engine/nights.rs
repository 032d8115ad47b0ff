use crate::types::DateField;
use chrono::NaiveDate;

/// The occupied nights of a stay: every date from arrival up to, but not
/// including, departure.
///
/// The sequence is empty when departure is not after arrival or when either
/// date could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NightSequence {
    next: NaiveDate,
    departure: NaiveDate
}

impl NightSequence {
    pub fn new(arrival: &DateField, departure: &DateField) -> Self {
        match (arrival.date(), departure.date()) {
            (Some(arrival), Some(departure)) => Self { next: arrival, departure },
            // An already exhausted range
            _ => Self { next: NaiveDate::MIN, departure: NaiveDate::MIN }
        }
    }
}

impl Iterator for NightSequence {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.departure {
            return None;
        }

        let night = self.next;
        self.next = night.succ_opt().unwrap_or(self.departure);

        Some(night)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.departure - self.next).num_days().max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for NightSequence {}
