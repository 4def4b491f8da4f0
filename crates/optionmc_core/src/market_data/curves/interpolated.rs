//! Interpolated yield curve implementation.

use super::YieldCurve;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Interpolation method for yield curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveInterpolation {
    /// Linear interpolation on zero rates.
    ///
    /// Interpolates the zero rate linearly between pillar points, then
    /// computes the discount factor as exp(-r*t).
    Linear,

    /// Log-linear interpolation on discount factors.
    ///
    /// Interpolates ln(D(t)) linearly, which is equivalent to assuming a
    /// constant forward rate between pillars.
    LogLinear,
}

/// Interpolated yield curve using pillar points.
///
/// Stores a set of (tenor, zero rate) pairs and interpolates between them to
/// compute discount factors for arbitrary maturities.
///
/// # Example
///
/// ```
/// use optionmc_core::market_data::curves::{YieldCurve, InterpolatedCurve, CurveInterpolation};
///
/// let tenors = [0.25, 0.5, 1.0, 2.0, 5.0];
/// let rates = [0.02, 0.025, 0.03, 0.035, 0.04];
///
/// let curve = InterpolatedCurve::new(
///     &tenors,
///     &rates,
///     CurveInterpolation::Linear,
///     false,
/// ).unwrap();
///
/// // Interpolate at 0.75 years (between 0.5 and 1.0)
/// let df = curve.discount_factor(0.75).unwrap();
/// assert!(df > 0.0 && df < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct InterpolatedCurve<T: Float> {
    /// Sorted tenor points (years)
    tenors: Vec<T>,
    /// Corresponding zero rates
    rates: Vec<T>,
    /// Interpolation method
    method: CurveInterpolation,
    /// Whether to allow flat extrapolation beyond the pillars
    allow_extrapolation: bool,
}

impl<T: Float> InterpolatedCurve<T> {
    /// Construct an interpolated curve from pillar points.
    ///
    /// # Arguments
    ///
    /// * `tenors` - Tenor points in years (strictly increasing, positive, at least 2)
    /// * `rates` - Corresponding zero rates
    /// * `method` - Interpolation method
    /// * `allow_extrapolation` - Whether to allow flat extrapolation beyond pillars
    ///
    /// # Errors
    ///
    /// * `MarketDataError::InsufficientData` - Fewer than 2 pillars or length mismatch
    /// * `MarketDataError::InvalidMaturity` - Non-positive tenor
    /// * `MarketDataError::NonMonotonicData` - Tenors not strictly increasing
    pub fn new(
        tenors: &[T],
        rates: &[T],
        method: CurveInterpolation,
        allow_extrapolation: bool,
    ) -> Result<Self, MarketDataError> {
        if tenors.len() < 2 {
            return Err(MarketDataError::InsufficientData {
                got: tenors.len(),
                need: 2,
            });
        }
        if tenors.len() != rates.len() {
            return Err(MarketDataError::InsufficientData {
                got: rates.len(),
                need: tenors.len(),
            });
        }
        for i in 0..tenors.len() {
            if tenors[i] <= T::zero() {
                return Err(MarketDataError::InvalidMaturity {
                    t: tenors[i].to_f64().unwrap_or(0.0),
                });
            }
            if i > 0 && tenors[i] <= tenors[i - 1] {
                return Err(MarketDataError::NonMonotonicData { index: i });
            }
        }

        Ok(Self {
            tenors: tenors.to_vec(),
            rates: rates.to_vec(),
            method,
            allow_extrapolation,
        })
    }

    /// Return the pillar tenor domain (t_min, t_max).
    #[inline]
    pub fn domain(&self) -> (T, T) {
        (self.tenors[0], self.tenors[self.tenors.len() - 1])
    }

    /// Return the interpolation method.
    #[inline]
    pub fn method(&self) -> CurveInterpolation {
        self.method
    }

    /// Checks the domain, resolving out-of-range queries to a clamped pillar
    /// rate when extrapolation is enabled.
    fn boundary_rate(&self, t: T) -> Result<Option<T>, MarketDataError> {
        let (t_min, t_max) = self.domain();
        if t >= t_min && t <= t_max {
            return Ok(None);
        }
        if !self.allow_extrapolation {
            return Err(MarketDataError::OutOfBounds {
                x: t.to_f64().unwrap_or(0.0),
                min: t_min.to_f64().unwrap_or(0.0),
                max: t_max.to_f64().unwrap_or(0.0),
            });
        }
        if t < t_min {
            Ok(Some(self.rates[0]))
        } else {
            Ok(Some(self.rates[self.rates.len() - 1]))
        }
    }

    /// Locate the pillar interval containing `t` and the interpolation weight.
    ///
    /// Assumes `t` is within the pillar domain.
    fn bracket(&self, t: T) -> (usize, T) {
        let mut i = 0;
        while i + 2 < self.tenors.len() && t > self.tenors[i + 1] {
            i += 1;
        }
        let w = (t - self.tenors[i]) / (self.tenors[i + 1] - self.tenors[i]);
        (i, w)
    }

    /// Interpolated zero rate at time `t`.
    fn rate_at(&self, t: T) -> Result<T, MarketDataError> {
        if let Some(rate) = self.boundary_rate(t)? {
            return Ok(rate);
        }
        match self.method {
            CurveInterpolation::Linear => {
                let (i, w) = self.bracket(t);
                Ok(self.rates[i] + w * (self.rates[i + 1] - self.rates[i]))
            }
            CurveInterpolation::LogLinear => {
                // Interpolate ln(D(t)) = -r*t linearly, then recover the rate
                let (i, w) = self.bracket(t);
                let log_df_left = -self.rates[i] * self.tenors[i];
                let log_df_right = -self.rates[i + 1] * self.tenors[i + 1];
                let log_df = log_df_left + w * (log_df_right - log_df_left);
                Ok(-log_df / t)
            }
        }
    }
}

impl<T: Float> YieldCurve<T> for InterpolatedCurve<T> {
    /// Return the interpolated discount factor for maturity `t`.
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        if t == T::zero() {
            return Ok(T::one());
        }
        let rate = self.rate_at(t)?;
        Ok((-rate * t).exp())
    }

    /// Return the interpolated zero rate for maturity `t`.
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        self.rate_at(t)
    }
}
