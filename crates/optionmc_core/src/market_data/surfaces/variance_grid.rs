//! Black variance surface on a strike x expiry grid.

use super::BlackVolSurface;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Black volatility surface built from a strike x expiry grid of implied vols.
///
/// Quotes are converted to total variances w(K, T) = sigma^2 * T at
/// construction and interpolated bilinearly in (K, T). Interpolating total
/// variance rather than vol preserves calendar monotonicity between pillars.
///
/// Extrapolation is always defined so that finite-difference consumers can
/// query slightly beyond the quoted domain:
/// - strikes are clamped to the grid edge (flat smile extrapolation)
/// - expiries outside the grid scale total variance proportionally with time
///   (constant forward variance), keeping w non-decreasing in T
///
/// # Example
///
/// ```
/// use optionmc_core::market_data::surfaces::{BlackVolSurface, BlackVarianceGrid};
///
/// let strikes = [80.0, 100.0, 120.0];
/// let expiries = [0.5, 1.0, 2.0];
/// let vols = vec![
///     vec![0.24, 0.20, 0.22],
///     vec![0.23, 0.20, 0.21],
///     vec![0.22, 0.20, 0.21],
/// ];
///
/// let surface = BlackVarianceGrid::<f64>::new(&strikes, &expiries, &vols).unwrap();
/// let sigma = surface.black_vol(100.0, 1.0).unwrap();
/// assert!((sigma - 0.20).abs() < 1e-12);
/// assert!(!surface.is_constant());
/// ```
#[derive(Debug, Clone)]
pub struct BlackVarianceGrid<T: Float> {
    /// Sorted strike pillars
    strikes: Vec<T>,
    /// Sorted expiry pillars (years)
    expiries: Vec<T>,
    /// Total variances, indexed [expiry][strike]
    variances: Vec<Vec<T>>,
}

impl<T: Float> BlackVarianceGrid<T> {
    /// Construct a variance grid from implied vol quotes.
    ///
    /// # Arguments
    ///
    /// * `strikes` - Strike pillars (strictly increasing, positive, at least 2)
    /// * `expiries` - Expiry pillars in years (strictly increasing, positive, at least 2)
    /// * `vols` - Implied vols, one row per expiry, one column per strike
    ///
    /// # Errors
    ///
    /// * `MarketDataError::InsufficientData` - Too few pillars or shape mismatch
    /// * `MarketDataError::InvalidStrike` / `InvalidExpiry` - Non-positive pillar
    /// * `MarketDataError::NonMonotonicData` - Unsorted pillars or total variance
    ///   decreasing in expiry (calendar arbitrage)
    pub fn new(strikes: &[T], expiries: &[T], vols: &[Vec<T>]) -> Result<Self, MarketDataError> {
        if strikes.len() < 2 {
            return Err(MarketDataError::InsufficientData {
                got: strikes.len(),
                need: 2,
            });
        }
        if expiries.len() < 2 {
            return Err(MarketDataError::InsufficientData {
                got: expiries.len(),
                need: 2,
            });
        }
        if vols.len() != expiries.len() {
            return Err(MarketDataError::InsufficientData {
                got: vols.len(),
                need: expiries.len(),
            });
        }

        for (i, &k) in strikes.iter().enumerate() {
            if k <= T::zero() {
                return Err(MarketDataError::InvalidStrike {
                    strike: k.to_f64().unwrap_or(0.0),
                });
            }
            if i > 0 && k <= strikes[i - 1] {
                return Err(MarketDataError::NonMonotonicData { index: i });
            }
        }
        for (j, &t) in expiries.iter().enumerate() {
            if t <= T::zero() {
                return Err(MarketDataError::InvalidExpiry {
                    expiry: t.to_f64().unwrap_or(0.0),
                });
            }
            if j > 0 && t <= expiries[j - 1] {
                return Err(MarketDataError::NonMonotonicData { index: j });
            }
        }

        let mut variances = Vec::with_capacity(expiries.len());
        for (j, row) in vols.iter().enumerate() {
            if row.len() != strikes.len() {
                return Err(MarketDataError::InsufficientData {
                    got: row.len(),
                    need: strikes.len(),
                });
            }
            let w_row: Vec<T> = row.iter().map(|&v| v * v * expiries[j]).collect();
            variances.push(w_row);
        }

        // Calendar arbitrage check: w must be non-decreasing in expiry
        for j in 1..variances.len() {
            for i in 0..strikes.len() {
                if variances[j][i] < variances[j - 1][i] {
                    return Err(MarketDataError::NonMonotonicData { index: j });
                }
            }
        }

        Ok(Self {
            strikes: strikes.to_vec(),
            expiries: expiries.to_vec(),
            variances,
        })
    }

    /// Locate the pillar interval for `x` in sorted `pillars`, clamped to the
    /// grid, returning the left index and the interpolation weight in [0, 1].
    fn bracket(pillars: &[T], x: T) -> (usize, T) {
        let n = pillars.len();
        if x <= pillars[0] {
            return (0, T::zero());
        }
        if x >= pillars[n - 1] {
            return (n - 2, T::one());
        }
        let mut i = 0;
        while i + 2 < n && x > pillars[i + 1] {
            i += 1;
        }
        let w = (x - pillars[i]) / (pillars[i + 1] - pillars[i]);
        (i, w)
    }

    /// Total variance at a strike within the grid's expiry range.
    fn variance_in_range(&self, strike: T, expiry: T) -> T {
        let (i, wk) = Self::bracket(&self.strikes, strike);
        let (j, wt) = Self::bracket(&self.expiries, expiry);

        let w00 = self.variances[j][i];
        let w01 = self.variances[j][i + 1];
        let w10 = self.variances[j + 1][i];
        let w11 = self.variances[j + 1][i + 1];

        let lower = w00 + wk * (w01 - w00);
        let upper = w10 + wk * (w11 - w10);
        lower + wt * (upper - lower)
    }
}

impl<T: Float> BlackVolSurface<T> for BlackVarianceGrid<T> {
    /// Return the interpolated implied vol `sqrt(w(K, T) / T)`.
    fn black_vol(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        let w = self.black_variance(strike, expiry)?;
        Ok((w / expiry).sqrt())
    }

    /// Return the interpolated total variance.
    fn black_variance(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
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

        let t_min = self.expiries[0];
        let t_max = self.expiries[self.expiries.len() - 1];

        if expiry < t_min {
            // Constant forward variance below the first pillar
            let w = self.variance_in_range(strike, t_min);
            return Ok(w * expiry / t_min);
        }
        if expiry > t_max {
            let w = self.variance_in_range(strike, t_max);
            return Ok(w * expiry / t_max);
        }
        Ok(self.variance_in_range(strike, expiry))
    }

    fn strike_domain(&self) -> (T, T) {
        (self.strikes[0], self.strikes[self.strikes.len() - 1])
    }

    fn expiry_domain(&self) -> (T, T) {
        (self.expiries[0], self.expiries[self.expiries.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_grid() -> BlackVarianceGrid<f64> {
        BlackVarianceGrid::new(
            &[80.0, 100.0, 120.0],
            &[0.5, 1.0, 2.0],
            &[
                vec![0.24, 0.20, 0.22],
                vec![0.23, 0.20, 0.21],
                vec![0.22, 0.20, 0.21],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_pillar_values_recovered() {
        let surface = sample_grid();
        assert_relative_eq!(surface.black_vol(100.0, 1.0).unwrap(), 0.20, epsilon = 1e-12);
        assert_relative_eq!(surface.black_vol(80.0, 0.5).unwrap(), 0.24, epsilon = 1e-12);
        assert_relative_eq!(surface.black_vol(120.0, 2.0).unwrap(), 0.21, epsilon = 1e-12);
    }

    #[test]
    fn test_variance_interpolated_between_pillars() {
        let surface = sample_grid();
        // Between the 1y and 2y pillars at K=100: w(1)=0.04, w(2)=0.08
        let w = surface.black_variance(100.0, 1.5).unwrap();
        assert_relative_eq!(w, 0.06, epsilon = 1e-12);
    }

    #[test]
    fn test_strike_flat_extrapolation() {
        let surface = sample_grid();
        let inside = surface.black_variance(80.0, 1.0).unwrap();
        let outside = surface.black_variance(60.0, 1.0).unwrap();
        assert_relative_eq!(inside, outside, epsilon = 1e-12);
    }

    #[test]
    fn test_expiry_extrapolation_scales_variance() {
        let surface = sample_grid();
        let w_max = surface.black_variance(100.0, 2.0).unwrap();
        let w_beyond = surface.black_variance(100.0, 4.0).unwrap();
        assert_relative_eq!(w_beyond, 2.0 * w_max, epsilon = 1e-12);

        let w_min = surface.black_variance(100.0, 0.5).unwrap();
        let w_below = surface.black_variance(100.0, 0.25).unwrap();
        assert_relative_eq!(w_below, 0.5 * w_min, epsilon = 1e-12);
    }

    #[test]
    fn test_variance_non_decreasing_in_expiry() {
        let surface = sample_grid();
        let mut prev = 0.0;
        for t in [0.25, 0.5, 0.75, 1.0, 1.5, 2.0, 3.0] {
            let w = surface.black_variance(90.0, t).unwrap();
            assert!(w >= prev, "w({}) decreased", t);
            prev = w;
        }
    }

    #[test]
    fn test_not_constant() {
        assert!(!sample_grid().is_constant());
    }

    #[test]
    fn test_invalid_queries() {
        let surface = sample_grid();
        assert!(surface.black_vol(0.0, 1.0).is_err());
        assert!(surface.black_vol(100.0, 0.0).is_err());
        assert!(surface.black_variance(-5.0, 1.0).is_err());
    }

    #[test]
    fn test_construction_too_few_strikes() {
        let result = BlackVarianceGrid::new(&[100.0], &[0.5, 1.0], &[vec![0.2], vec![0.2]]);
        assert!(matches!(
            result,
            Err(MarketDataError::InsufficientData { got: 1, need: 2 })
        ));
    }

    #[test]
    fn test_construction_shape_mismatch() {
        let result = BlackVarianceGrid::new(
            &[80.0, 100.0],
            &[0.5, 1.0],
            &[vec![0.2, 0.2], vec![0.2]],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_construction_unsorted_strikes() {
        let result = BlackVarianceGrid::new(
            &[100.0, 80.0],
            &[0.5, 1.0],
            &[vec![0.2, 0.2], vec![0.2, 0.2]],
        );
        assert!(matches!(
            result,
            Err(MarketDataError::NonMonotonicData { index: 1 })
        ));
    }

    #[test]
    fn test_construction_calendar_arbitrage_rejected() {
        // 0.30 vol at 0.5y gives w=0.045; 0.20 at 1y gives w=0.04 < 0.045
        let result = BlackVarianceGrid::new(
            &[80.0, 100.0],
            &[0.5, 1.0],
            &[vec![0.30, 0.30], vec![0.20, 0.20]],
        );
        assert!(matches!(
            result,
            Err(MarketDataError::NonMonotonicData { index: 1 })
        ));
    }

    #[test]
    fn test_domains() {
        let surface = sample_grid();
        assert_eq!(surface.strike_domain(), (80.0, 120.0));
        assert_eq!(surface.expiry_domain(), (0.5, 2.0));
    }
}
