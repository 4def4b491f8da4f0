//! Core value types: dates, day counts, and error taxonomy.

pub mod error;
pub mod time;

pub use error::DateError;
pub use time::{Date, DayCountConvention};
