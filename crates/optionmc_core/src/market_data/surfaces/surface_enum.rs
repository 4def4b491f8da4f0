//! Static dispatch enum over the concrete volatility surfaces.

use super::{BlackVarianceGrid, BlackVolSurface, FlatBlackVol};
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Static dispatch enum wrapping concrete volatility surface implementations.
///
/// Avoids trait objects in market snapshots and process code while keeping
/// the [`BlackVolSurface`] contract, including the `is_constant` capability
/// flag that gates exact lognormal evolution.
///
/// # Example
///
/// ```
/// use optionmc_core::market_data::surfaces::{BlackVolSurface, SurfaceEnum};
///
/// let surface = SurfaceEnum::flat(0.20_f64);
/// assert_eq!(surface.black_vol(100.0, 1.0).unwrap(), 0.20);
/// assert!(surface.is_constant());
/// ```
#[derive(Debug, Clone)]
pub enum SurfaceEnum<T: Float> {
    /// Flat (constant vol) surface
    Flat(FlatBlackVol<T>),
    /// Strike x expiry grid interpolated in total variance
    VarianceGrid(BlackVarianceGrid<T>),
}

impl<T: Float> SurfaceEnum<T> {
    /// Create a flat surface variant.
    #[inline]
    pub fn flat(sigma: T) -> Self {
        SurfaceEnum::Flat(FlatBlackVol::new(sigma))
    }
}

impl<T: Float> BlackVolSurface<T> for SurfaceEnum<T> {
    fn black_vol(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        match self {
            SurfaceEnum::Flat(surface) => surface.black_vol(strike, expiry),
            SurfaceEnum::VarianceGrid(surface) => surface.black_vol(strike, expiry),
        }
    }

    fn black_variance(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        match self {
            SurfaceEnum::Flat(surface) => surface.black_variance(strike, expiry),
            SurfaceEnum::VarianceGrid(surface) => surface.black_variance(strike, expiry),
        }
    }

    fn is_constant(&self) -> bool {
        match self {
            SurfaceEnum::Flat(surface) => surface.is_constant(),
            SurfaceEnum::VarianceGrid(surface) => surface.is_constant(),
        }
    }

    fn strike_domain(&self) -> (T, T) {
        match self {
            SurfaceEnum::Flat(surface) => surface.strike_domain(),
            SurfaceEnum::VarianceGrid(surface) => surface.strike_domain(),
        }
    }

    fn expiry_domain(&self) -> (T, T) {
        match self {
            SurfaceEnum::Flat(surface) => surface.expiry_domain(),
            SurfaceEnum::VarianceGrid(surface) => surface.expiry_domain(),
        }
    }
}

impl<T: Float> From<FlatBlackVol<T>> for SurfaceEnum<T> {
    fn from(surface: FlatBlackVol<T>) -> Self {
        SurfaceEnum::Flat(surface)
    }
}

impl<T: Float> From<BlackVarianceGrid<T>> for SurfaceEnum<T> {
    fn from(surface: BlackVarianceGrid<T>) -> Self {
        SurfaceEnum::VarianceGrid(surface)
    }
}
