pub mod columns;
mod errors;
mod night;
mod reservation;

pub use columns::{ReservationColumns, DAILY_SPLIT_COLUMNS};
pub use errors::ReservationError;
pub use night::NightRecord;
pub use reservation::Reservation;
