//! Black-Scholes process with coefficients frozen at construction.

use optionmc_core::market_data::{MarketDataError, MarketSnapshot};
use optionmc_core::types::time::{Date, DayCountConvention};

use super::error::ProcessError;
use super::traits::StochasticProcess1D;

/// Lognormal process with constant rate, dividend yield, and volatility.
///
/// All coefficients are read from the market once, at construction, so every
/// later evaluation is a handful of multiplications with no market lookups
/// and no cache invalidation. This is the fast path for European pricing
/// under a flat volatility surface: coefficients frozen at the option's own
/// expiry and strike reproduce the generalized process exactly.
///
/// The state is the spot price; increments act in log space, so
/// `apply(x0, dx) = x0 * exp(dx)` and states stay positive.
///
/// # Examples
/// ```
/// use optionmc_core::types::time::{Date, DayCountConvention};
/// use optionmc_models::process::{ConstantBlackScholesProcess, StochasticProcess1D};
///
/// let process = ConstantBlackScholesProcess::new(
///     100.0,
///     0.05,
///     0.02,
///     0.20,
///     Date::from_ymd(2024, 1, 1).unwrap(),
///     DayCountConvention::ActualActual365,
/// )
/// .unwrap();
///
/// assert!(process.has_constant_coefficients());
/// let drift = process.drift(0.0, 100.0).unwrap();
/// assert!((drift - (0.05 - 0.02 - 0.5 * 0.04)).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct ConstantBlackScholesProcess {
    /// Initial spot
    x0: f64,
    /// Continuously compounded risk-free rate
    risk_free_rate: f64,
    /// Continuous dividend yield
    dividend_yield: f64,
    /// Constant volatility
    sigma: f64,
    /// Anchor for the time coordinate
    reference_date: Date,
    /// Convention for [`StochasticProcess1D::time`]
    day_count: DayCountConvention,
}

impl ConstantBlackScholesProcess {
    /// Creates a process from explicit coefficients.
    ///
    /// # Errors
    /// - `ProcessError::NumericalInstability` if `x0 <= 0` or `sigma <= 0`
    pub fn new(
        x0: f64,
        risk_free_rate: f64,
        dividend_yield: f64,
        sigma: f64,
        reference_date: Date,
        day_count: DayCountConvention,
    ) -> Result<Self, ProcessError> {
        if x0 <= 0.0 || !x0.is_finite() {
            return Err(ProcessError::NumericalInstability(format!(
                "non-positive initial spot: {}",
                x0
            )));
        }
        if sigma <= 0.0 || !sigma.is_finite() {
            return Err(ProcessError::NumericalInstability(format!(
                "non-positive volatility: {}",
                sigma
            )));
        }
        Ok(Self {
            x0,
            risk_free_rate,
            dividend_yield,
            sigma,
            reference_date,
            day_count,
        })
    }

    /// Freezes coefficients from a market snapshot at the given exercise
    /// date and strike.
    ///
    /// The zero rates and the implied volatility are sampled once at the
    /// option's maturity; later snapshot updates do not affect the process.
    ///
    /// # Errors
    /// - `ProcessError::Market` if the exercise date is not after the
    ///   snapshot's reference date, or a curve/surface lookup fails
    /// - `ProcessError::NumericalInstability` if the spot is not positive
    pub fn from_snapshot(
        snapshot: &MarketSnapshot,
        exercise_date: Date,
        strike: f64,
    ) -> Result<Self, ProcessError> {
        let t = snapshot.time(exercise_date);
        if t <= 0.0 {
            return Err(MarketDataError::InvalidExpiry { expiry: t }.into());
        }

        let risk_free_rate = snapshot.zero_rate(t)?;
        let dividend_yield = snapshot.dividend_rate(t)?;
        let sigma = snapshot.black_vol(strike, t)?;

        Self::new(
            snapshot.spot_value(),
            risk_free_rate,
            dividend_yield,
            sigma,
            snapshot.reference_date(),
            snapshot.day_count(),
        )
    }

    /// Returns the frozen risk-free rate.
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Returns the frozen dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Returns the frozen volatility.
    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl StochasticProcess1D for ConstantBlackScholesProcess {
    #[inline]
    fn x0(&self) -> f64 {
        self.x0
    }

    /// Risk-neutral log drift: r - q - sigma^2 / 2.
    fn drift(&self, _t: f64, _x: f64) -> Result<f64, ProcessError> {
        Ok(self.risk_free_rate - self.dividend_yield - 0.5 * self.sigma * self.sigma)
    }

    fn diffusion(&self, _t: f64, _x: f64) -> Result<f64, ProcessError> {
        Ok(self.sigma)
    }

    /// Lognormal state update: x0 * exp(dx).
    #[inline]
    fn apply(&self, x0: f64, dx: f64) -> f64 {
        x0 * dx.exp()
    }

    /// Exact conditional mean: x0 * exp((r - q) * dt).
    fn expectation(&self, _t0: f64, x0: f64, dt: f64) -> Result<f64, ProcessError> {
        Ok(x0 * ((self.risk_free_rate - self.dividend_yield) * dt).exp())
    }

    /// Variance of the log increment: sigma^2 * dt.
    fn variance(&self, _t0: f64, _x0: f64, dt: f64) -> Result<f64, ProcessError> {
        Ok(self.sigma * self.sigma * dt)
    }

    /// Exact lognormal step, bias-free for any step size.
    fn evolve(&self, t0: f64, x0: f64, dt: f64, dw: f64) -> Result<f64, ProcessError> {
        let var = self.variance(t0, x0, dt)?;
        let drift = (self.risk_free_rate - self.dividend_yield) * dt - 0.5 * var;
        Ok(self.apply(x0, var.sqrt() * dw + drift))
    }

    fn time(&self, date: Date) -> f64 {
        self.day_count.year_fraction_dates(self.reference_date, date)
    }

    fn has_constant_coefficients(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use optionmc_core::market_data::curves::CurveEnum;
    use optionmc_core::market_data::surfaces::SurfaceEnum;

    fn sample_process() -> ConstantBlackScholesProcess {
        ConstantBlackScholesProcess::new(
            100.0,
            0.05,
            0.02,
            0.20,
            Date::from_ymd(2024, 1, 1).unwrap(),
            DayCountConvention::ActualActual365,
        )
        .unwrap()
    }

    fn sample_snapshot() -> MarketSnapshot {
        MarketSnapshot::new(
            Date::from_ymd(2024, 1, 1).unwrap(),
            DayCountConvention::ActualActual365,
            100.0,
            CurveEnum::flat(0.05),
            CurveEnum::flat(0.02),
            SurfaceEnum::flat(0.20),
        )
    }

    #[test]
    fn test_invalid_construction() {
        let date = Date::from_ymd(2024, 1, 1).unwrap();
        let dcc = DayCountConvention::ActualActual365;
        assert!(ConstantBlackScholesProcess::new(0.0, 0.05, 0.0, 0.2, date, dcc).is_err());
        assert!(ConstantBlackScholesProcess::new(-5.0, 0.05, 0.0, 0.2, date, dcc).is_err());
        assert!(ConstantBlackScholesProcess::new(100.0, 0.05, 0.0, 0.0, date, dcc).is_err());
        assert!(ConstantBlackScholesProcess::new(100.0, 0.05, 0.0, -0.2, date, dcc).is_err());
    }

    #[test]
    fn test_coefficients() {
        let p = sample_process();
        assert_eq!(p.x0(), 100.0);
        assert!(p.has_constant_coefficients());
        assert_relative_eq!(
            p.drift(0.0, 123.0).unwrap(),
            0.05 - 0.02 - 0.5 * 0.04,
            epsilon = 1e-12
        );
        assert_relative_eq!(p.diffusion(5.0, 7.0).unwrap(), 0.20, epsilon = 1e-12);
    }

    #[test]
    fn test_apply_is_lognormal() {
        let p = sample_process();
        assert_relative_eq!(p.apply(100.0, 0.0), 100.0, epsilon = 1e-12);
        assert_relative_eq!(p.apply(100.0, 0.1), 100.0 * 0.1_f64.exp(), epsilon = 1e-12);
        assert!(p.apply(100.0, -50.0) > 0.0);
    }

    #[test]
    fn test_expectation_is_forward() {
        let p = sample_process();
        let e = p.expectation(0.0, 100.0, 2.0).unwrap();
        assert_relative_eq!(e, 100.0 * (0.03 * 2.0_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_variance_scales_linearly() {
        let p = sample_process();
        let v1 = p.variance(0.0, 100.0, 1.0).unwrap();
        let v2 = p.variance(0.5, 100.0, 2.0).unwrap();
        assert_relative_eq!(v1, 0.04, epsilon = 1e-12);
        assert_relative_eq!(v2, 2.0 * v1, epsilon = 1e-12);
    }

    #[test]
    fn test_evolve_exact_step() {
        let p = sample_process();
        let dt = 0.5;
        let dw = 0.7;
        let x1 = p.evolve(0.0, 100.0, dt, dw).unwrap();

        let expected =
            100.0 * ((0.03 - 0.02) * dt + 0.20 * dt.sqrt() * dw).exp();
        assert_relative_eq!(x1, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_evolve_zero_draw_hits_median() {
        let p = sample_process();
        let x1 = p.evolve(0.0, 100.0, 1.0, 0.0).unwrap();
        assert_relative_eq!(x1, 100.0 * (0.03 - 0.02_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_from_snapshot_freezes_coefficients() {
        let snapshot = sample_snapshot();
        let expiry = Date::from_ymd(2025, 1, 1).unwrap();

        let p = ConstantBlackScholesProcess::from_snapshot(&snapshot, expiry, 100.0).unwrap();
        assert_relative_eq!(p.risk_free_rate(), 0.05, epsilon = 1e-12);
        assert_relative_eq!(p.dividend_yield(), 0.02, epsilon = 1e-12);
        assert_relative_eq!(p.sigma(), 0.20, epsilon = 1e-12);
        assert_eq!(p.x0(), 100.0);

        // Later snapshot updates do not leak into the frozen process
        snapshot.spot().set_value(150.0);
        snapshot.set_black_vol(SurfaceEnum::flat(0.40));
        assert_eq!(p.x0(), 100.0);
        assert_relative_eq!(p.sigma(), 0.20, epsilon = 1e-12);
    }

    #[test]
    fn test_from_snapshot_rejects_past_expiry() {
        let snapshot = sample_snapshot();
        let past = Date::from_ymd(2023, 6, 1).unwrap();

        let result = ConstantBlackScholesProcess::from_snapshot(&snapshot, past, 100.0);
        assert!(matches!(result, Err(ProcessError::Market(_))));

        let same_day = ConstantBlackScholesProcess::from_snapshot(
            &snapshot,
            snapshot.reference_date(),
            100.0,
        );
        assert!(same_day.is_err());
    }

    #[test]
    fn test_time_coordinate() {
        let p = sample_process();
        let t = p.time(Date::from_ymd(2024, 7, 1).unwrap());
        assert_relative_eq!(t, 182.0 / 365.0, epsilon = 1e-12);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_evolve_preserves_positivity(
                dt in 0.001_f64..5.0,
                dw in -6.0_f64..6.0,
            ) {
                let p = sample_process();
                let x1 = p.evolve(0.0, 100.0, dt, dw).unwrap();
                prop_assert!(x1 > 0.0);
            }

            #[test]
            fn test_evolve_composes_in_log_space(
                dt in 0.01_f64..2.0,
                dw in -4.0_f64..4.0,
            ) {
                // One step of 2*dt with combined draws equals two steps of dt
                let p = sample_process();
                let two_small = {
                    let x1 = p.evolve(0.0, 100.0, dt, dw).unwrap();
                    p.evolve(dt, x1, dt, -dw).unwrap()
                };
                let one_big = p.evolve(0.0, 100.0, 2.0 * dt, 0.0).unwrap();
                prop_assert!((two_small - one_big).abs() < 1e-8 * one_big);
            }
        }
    }
}
