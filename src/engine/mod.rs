mod document;
mod errors;
mod nights;
mod original;
mod split;
#[cfg(test)]
mod tests;

pub use document::DailySplitDocument;
pub use errors::SplitError;
pub use nights::NightSequence;
pub use original::normalize_original;
pub use split::{expand_nights, parse_reservations, reshape};
