//! Error types for analytical pricing.

use thiserror::Error;

/// Errors raised by closed-form pricing models.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticalError {
    /// Spot price must be positive.
    #[error("invalid spot price: {spot} (must be > 0)")]
    InvalidSpot {
        /// The offending spot
        spot: f64,
    },

    /// Volatility must be positive.
    #[error("invalid volatility: {volatility} (must be > 0)")]
    InvalidVolatility {
        /// The offending volatility
        volatility: f64,
    },
}
