//! Black volatility surface trait definition.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Generic Black volatility surface for implied vol and total variance lookup.
///
/// # Contract
///
/// - `black_vol(strike, expiry)` returns the Black implied volatility sigma(K, T)
/// - `black_variance(strike, expiry)` returns total variance w(K, T) = sigma^2 * T
/// - `is_constant()` reports whether the vol is independent of strike and expiry
///
/// # Invariants
///
/// - sigma > 0 for all valid (strike, expiry) pairs
/// - w(K, T) is non-decreasing in T for fixed K (no calendar arbitrage)
///
/// The `is_constant` capability flag lets consumers select exact lognormal
/// evolution: only a surface that is constant across strike and expiry yields
/// state-independent diffusion coefficients.
///
/// # Example
///
/// ```
/// use optionmc_core::market_data::surfaces::{BlackVolSurface, FlatBlackVol};
///
/// let surface = FlatBlackVol::new(0.20_f64);
///
/// let sigma = surface.black_vol(100.0, 1.0).unwrap();
/// assert_eq!(sigma, 0.20);
///
/// let w = surface.black_variance(100.0, 2.0).unwrap();
/// assert!((w - 0.08).abs() < 1e-12);
///
/// assert!(surface.is_constant());
/// ```
pub trait BlackVolSurface<T: Float> {
    /// Return the Black implied volatility for given strike and expiry.
    ///
    /// # Arguments
    ///
    /// * `strike` - Strike price (must be > 0)
    /// * `expiry` - Time to expiry in years (must be > 0)
    ///
    /// # Errors
    ///
    /// * `MarketDataError::InvalidStrike` - If strike <= 0
    /// * `MarketDataError::InvalidExpiry` - If expiry <= 0
    /// * `MarketDataError::OutOfBounds` - If outside valid domain
    fn black_vol(&self, strike: T, expiry: T) -> Result<T, MarketDataError>;

    /// Return the total Black variance w(K, T).
    ///
    /// # Default Implementation
    ///
    /// ```text
    /// w(K, T) = black_vol(K, T)^2 * T
    /// ```
    fn black_variance(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        let vol = self.black_vol(strike, expiry)?;
        Ok(vol * vol * expiry)
    }

    /// Whether the volatility is independent of strike and expiry.
    ///
    /// Defaults to `false`; constant surfaces override this to enable
    /// exact lognormal evolution in consumers.
    fn is_constant(&self) -> bool {
        false
    }

    /// Return the valid strike domain (K_min, K_max).
    fn strike_domain(&self) -> (T, T);

    /// Return the valid expiry domain (T_min, T_max).
    fn expiry_domain(&self) -> (T, T);
}
