//! Closed-form pricing used as the reference for Monte Carlo results.

pub mod distributions;

mod black_scholes;
mod error;

pub use black_scholes::BlackScholes;
pub use error::AnalyticalError;
