//! Error types for stochastic processes.

use optionmc_core::market_data::MarketDataError;
use thiserror::Error;

/// Errors raised by stochastic process evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessError {
    /// The process cannot evaluate the requested quantity in closed form.
    #[error("operation not supported by this process: {operation}")]
    UnsupportedOperation {
        /// Name of the unsupported operation
        operation: String,
    },

    /// A market data lookup failed.
    #[error("market data error: {0}")]
    Market(#[from] MarketDataError),

    /// A computed quantity left its valid domain.
    #[error("numerical instability: {0}")]
    NumericalInstability(String),
}

impl ProcessError {
    /// Shorthand for [`ProcessError::UnsupportedOperation`].
    pub fn unsupported(operation: impl Into<String>) -> Self {
        ProcessError::UnsupportedOperation {
            operation: operation.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_shorthand() {
        let err = ProcessError::unsupported("expectation");
        assert_eq!(
            err.to_string(),
            "operation not supported by this process: expectation"
        );
    }

    #[test]
    fn test_market_error_wrapping() {
        let err: ProcessError = MarketDataError::InvalidMaturity { t: -1.0 }.into();
        assert!(matches!(err, ProcessError::Market(_)));
        assert!(err.to_string().starts_with("market data error"));
    }
}
