mod cell;
mod date;
mod errors;
mod monetary;

pub use cell::Cell;
pub use date::{format_day_first, DateField};
pub use errors::MonetaryError;
pub use monetary::Monetary;
