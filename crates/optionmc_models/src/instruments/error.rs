//! Error types for instrument construction.

use thiserror::Error;

/// Errors raised while building instruments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InstrumentError {
    /// Strike price is negative.
    #[error("negative strike given: {strike}")]
    NegativeStrike {
        /// The offending strike
        strike: f64,
    },

    /// Cash-or-nothing payout amount is negative.
    #[error("negative cash payoff given: {amount}")]
    NegativeCashPayoff {
        /// The offending payout amount
        amount: f64,
    },

    /// American exercise window ends before it starts.
    #[error("exercise window ends ({latest}) before it starts ({earliest})")]
    InvalidExerciseWindow {
        /// First permitted exercise date
        earliest: String,
        /// Last permitted exercise date
        latest: String,
    },
}
