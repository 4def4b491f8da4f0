//! Flat yield curve implementation.

use super::YieldCurve;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Flat yield curve with a constant continuously compounded rate.
///
/// The same rate applies to all maturities. Useful for testing and for
/// markets quoted with a single deterministic rate.
///
/// # Example
///
/// ```
/// use optionmc_core::market_data::curves::{YieldCurve, FlatCurve};
///
/// let curve = FlatCurve::new(0.05_f64);
///
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - 0.951229).abs() < 1e-5);
///
/// assert_eq!(curve.zero_rate(1.0).unwrap(), 0.05);
/// assert_eq!(curve.zero_rate(5.0).unwrap(), 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatCurve<T: Float> {
    /// The constant interest rate
    rate: T,
}

impl<T: Float> FlatCurve<T> {
    /// Construct a flat curve with the given constant rate.
    #[inline]
    pub fn new(rate: T) -> Self {
        Self { rate }
    }

    /// Return the constant rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }
}

impl<T: Float> YieldCurve<T> for FlatCurve<T> {
    /// Return `exp(-r * t)`.
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidMaturity` if t < 0.
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok((-self.rate * t).exp())
    }

    /// The zero rate is the constant rate for any positive maturity.
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok(self.rate)
    }

    /// The forward rate equals the constant rate for any valid period.
    fn forward_rate(&self, t1: T, t2: T) -> Result<T, MarketDataError> {
        if t2 <= t1 {
            return Err(MarketDataError::InvalidMaturity {
                t: (t2 - t1).to_f64().unwrap_or(0.0),
            });
        }
        Ok(self.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let curve = FlatCurve::new(0.05_f64);
        assert_eq!(curve.rate(), 0.05);
    }

    #[test]
    fn test_negative_rate_allowed() {
        // Negative rate environments are valid
        let curve = FlatCurve::new(-0.01_f64);
        let df = curve.discount_factor(1.0).unwrap();
        assert!((df - 0.01_f64.exp()).abs() < 1e-10);
    }

    #[test]
    fn test_discount_factor_at_zero() {
        let curve = FlatCurve::new(0.05_f64);
        let df = curve.discount_factor(0.0).unwrap();
        assert!((df - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_discount_factor_at_multiple_years() {
        let curve = FlatCurve::new(0.05_f64);

        for t in [0.5, 1.0, 2.0, 5.0, 10.0] {
            let df = curve.discount_factor(t).unwrap();
            let expected = (-0.05 * t).exp();
            assert!((df - expected).abs() < 1e-10, "failed at t={}", t);
        }
    }

    #[test]
    fn test_discount_factor_negative_maturity() {
        let curve = FlatCurve::new(0.05_f64);
        assert!(matches!(
            curve.discount_factor(-1.0),
            Err(MarketDataError::InvalidMaturity { t }) if t == -1.0
        ));
    }

    #[test]
    fn test_zero_rate_constant() {
        let curve = FlatCurve::new(0.03_f64);
        for t in [0.25, 0.5, 1.0, 2.0, 10.0] {
            assert!((curve.zero_rate(t).unwrap() - 0.03).abs() < 1e-10);
        }
    }

    #[test]
    fn test_zero_rate_invalid_maturity() {
        let curve = FlatCurve::new(0.05_f64);
        assert!(curve.zero_rate(0.0).is_err());
        assert!(curve.zero_rate(-1.0).is_err());
    }

    #[test]
    fn test_forward_rate_constant() {
        let curve = FlatCurve::new(0.04_f64);
        for (t1, t2) in [(0.0, 1.0), (1.0, 2.0), (0.5, 1.5), (2.0, 5.0)] {
            assert!((curve.forward_rate(t1, t2).unwrap() - 0.04).abs() < 1e-10);
        }
    }

    #[test]
    fn test_forward_rate_invalid_period() {
        let curve = FlatCurve::new(0.05_f64);
        assert!(curve.forward_rate(2.0, 1.0).is_err());
        assert!(curve.forward_rate(1.0, 1.0).is_err());
    }

    #[test]
    fn test_with_f32() {
        let curve = FlatCurve::new(0.05_f32);
        let df = curve.discount_factor(1.0_f32).unwrap();
        assert!((df - (-0.05_f32).exp()).abs() < 1e-6);
    }
}
