//! Instrument definitions: payoffs, exercise schedules, and vanilla options.

mod error;
mod exercise;
mod payoff;
mod vanilla;

pub use error::InstrumentError;
pub use exercise::Exercise;
pub use payoff::{CashOrNothingPayoff, OptionType, Payoff, PlainVanillaPayoff};
pub use vanilla::VanillaOption;
