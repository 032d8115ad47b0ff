use thiserror::Error;

use crate::models::ReservationError;

#[derive(Debug, Error)]
pub enum SplitError {
    #[error(transparent)]
    Reservation(#[from] ReservationError)
}
