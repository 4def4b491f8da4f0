//! Flat Black volatility surface implementation.

use super::BlackVolSurface;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Flat Black volatility surface with constant implied volatility.
///
/// The same volatility applies to all strike and expiry combinations, so
/// `is_constant()` reports true and consumers may take the exact lognormal
/// evolution path.
///
/// # Example
///
/// ```
/// use optionmc_core::market_data::surfaces::{BlackVolSurface, FlatBlackVol};
///
/// let surface = FlatBlackVol::new(0.20_f64);
///
/// assert_eq!(surface.black_vol(80.0, 0.5).unwrap(), 0.20);
/// assert_eq!(surface.black_vol(120.0, 2.0).unwrap(), 0.20);
/// assert!(surface.is_constant());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatBlackVol<T: Float> {
    /// The constant implied volatility
    sigma: T,
}

impl<T: Float> FlatBlackVol<T> {
    /// Construct a flat volatility surface.
    #[inline]
    pub fn new(sigma: T) -> Self {
        Self { sigma }
    }

    /// Return the constant volatility.
    #[inline]
    pub fn sigma(&self) -> T {
        self.sigma
    }
}

impl<T: Float> BlackVolSurface<T> for FlatBlackVol<T> {
    /// Return the constant volatility for any positive strike and expiry.
    fn black_vol(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        if strike <= T::zero() {
            return Err(MarketDataError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(0.0),
            });
        }
        if expiry <= T::zero() {
            return Err(MarketDataError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(0.0),
            });
        }
        Ok(self.sigma)
    }

    #[inline]
    fn is_constant(&self) -> bool {
        true
    }

    #[inline]
    fn strike_domain(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }

    #[inline]
    fn expiry_domain(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }
}
