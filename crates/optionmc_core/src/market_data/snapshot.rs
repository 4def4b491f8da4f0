//! Versioned bundle of the market data needed to price an equity option.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::market_data::curves::{CurveEnum, YieldCurve};
use crate::market_data::error::MarketDataError;
use crate::market_data::quote::SimpleQuote;
use crate::market_data::surfaces::{BlackVolSurface, SurfaceEnum};
use crate::types::time::{Date, DayCountConvention};

/// Market snapshot: spot quote, risk-free and dividend curves, and a Black
/// volatility surface, anchored at a reference date.
///
/// Every component swap (`set_risk_free`, `set_dividend`, `set_black_vol`)
/// bumps an internal generation counter, and the spot quote carries its own.
/// [`MarketSnapshot::version`] combines both, so a consumer that caches
/// values derived from the snapshot can detect staleness with a single
/// integer comparison instead of registering observers.
///
/// Curves and the surface are held behind `RwLock<Arc<..>>`: readers clone
/// the `Arc` and drop the lock immediately, so lookups never hold the lock
/// across computation.
///
/// # Examples
///
/// ```
/// use optionmc_core::market_data::curves::CurveEnum;
/// use optionmc_core::market_data::surfaces::SurfaceEnum;
/// use optionmc_core::market_data::MarketSnapshot;
/// use optionmc_core::types::time::{Date, DayCountConvention};
///
/// let snapshot = MarketSnapshot::new(
///     Date::from_ymd(2024, 1, 1).unwrap(),
///     DayCountConvention::ActualActual365,
///     100.0,
///     CurveEnum::flat(0.05),
///     CurveEnum::flat(0.02),
///     SurfaceEnum::flat(0.20),
/// );
///
/// let df = snapshot.discount(1.0).unwrap();
/// assert!((df - (-0.05f64).exp()).abs() < 1e-12);
///
/// let v0 = snapshot.version();
/// snapshot.spot().set_value(101.0);
/// assert!(snapshot.version() > v0);
/// ```
#[derive(Debug)]
pub struct MarketSnapshot {
    /// Anchor date for year fraction calculations.
    reference_date: Date,
    /// Convention used by [`MarketSnapshot::time`].
    day_count: DayCountConvention,
    /// Underlying spot price quote.
    spot: Arc<SimpleQuote>,
    /// Risk-free discounting curve.
    risk_free: RwLock<Arc<CurveEnum<f64>>>,
    /// Continuous dividend yield curve.
    dividend: RwLock<Arc<CurveEnum<f64>>>,
    /// Black implied volatility surface.
    black_vol: RwLock<Arc<SurfaceEnum<f64>>>,
    /// Bumped on every component swap.
    version: AtomicU64,
}

impl MarketSnapshot {
    /// Creates a snapshot owning a fresh spot quote at the given value.
    pub fn new(
        reference_date: Date,
        day_count: DayCountConvention,
        spot: f64,
        risk_free: CurveEnum<f64>,
        dividend: CurveEnum<f64>,
        black_vol: SurfaceEnum<f64>,
    ) -> Self {
        Self::with_quote(
            reference_date,
            day_count,
            Arc::new(SimpleQuote::new(spot)),
            risk_free,
            dividend,
            black_vol,
        )
    }

    /// Creates a snapshot sharing an externally managed spot quote.
    pub fn with_quote(
        reference_date: Date,
        day_count: DayCountConvention,
        spot: Arc<SimpleQuote>,
        risk_free: CurveEnum<f64>,
        dividend: CurveEnum<f64>,
        black_vol: SurfaceEnum<f64>,
    ) -> Self {
        Self {
            reference_date,
            day_count,
            spot,
            risk_free: RwLock::new(Arc::new(risk_free)),
            dividend: RwLock::new(Arc::new(dividend)),
            black_vol: RwLock::new(Arc::new(black_vol)),
            version: AtomicU64::new(0),
        }
    }

    /// Returns the reference date.
    #[inline]
    pub fn reference_date(&self) -> Date {
        self.reference_date
    }

    /// Returns the day count convention.
    #[inline]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Returns the spot quote.
    #[inline]
    pub fn spot(&self) -> &Arc<SimpleQuote> {
        &self.spot
    }

    /// Returns the current spot value.
    #[inline]
    pub fn spot_value(&self) -> f64 {
        self.spot.value()
    }

    /// Converts a calendar date into a year fraction from the reference date.
    ///
    /// Dates before the reference date yield negative times; consumers
    /// validate the sign where it matters.
    pub fn time(&self, date: Date) -> f64 {
        self.day_count.year_fraction_dates(self.reference_date, date)
    }

    /// Combined generation counter: component swaps plus spot updates.
    ///
    /// Equal versions imply no observable market input has changed between
    /// the two observations.
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire) + self.spot.version()
    }

    /// Returns the current risk-free curve.
    pub fn risk_free(&self) -> Arc<CurveEnum<f64>> {
        Arc::clone(&read_lock(&self.risk_free))
    }

    /// Returns the current dividend curve.
    pub fn dividend(&self) -> Arc<CurveEnum<f64>> {
        Arc::clone(&read_lock(&self.dividend))
    }

    /// Returns the current volatility surface.
    pub fn vol_surface(&self) -> Arc<SurfaceEnum<f64>> {
        Arc::clone(&read_lock(&self.black_vol))
    }

    /// Replaces the risk-free curve and bumps the version.
    pub fn set_risk_free(&self, curve: CurveEnum<f64>) {
        *write_lock(&self.risk_free) = Arc::new(curve);
        self.version.fetch_add(1, Ordering::AcqRel);
    }

    /// Replaces the dividend curve and bumps the version.
    pub fn set_dividend(&self, curve: CurveEnum<f64>) {
        *write_lock(&self.dividend) = Arc::new(curve);
        self.version.fetch_add(1, Ordering::AcqRel);
    }

    /// Replaces the volatility surface and bumps the version.
    pub fn set_black_vol(&self, surface: SurfaceEnum<f64>) {
        *write_lock(&self.black_vol) = Arc::new(surface);
        self.version.fetch_add(1, Ordering::AcqRel);
    }

    /// Risk-free discount factor for maturity `t` in years.
    ///
    /// # Errors
    ///
    /// * `MarketDataError::InvalidMaturity` - If `t < 0`
    pub fn discount(&self, t: f64) -> Result<f64, MarketDataError> {
        self.risk_free().discount_factor(t)
    }

    /// Continuously compounded risk-free zero rate for maturity `t`.
    pub fn zero_rate(&self, t: f64) -> Result<f64, MarketDataError> {
        self.risk_free().zero_rate(t)
    }

    /// Dividend discount factor for maturity `t` in years.
    pub fn dividend_discount(&self, t: f64) -> Result<f64, MarketDataError> {
        self.dividend().discount_factor(t)
    }

    /// Continuously compounded dividend yield for maturity `t`.
    pub fn dividend_rate(&self, t: f64) -> Result<f64, MarketDataError> {
        self.dividend().zero_rate(t)
    }

    /// Black implied volatility at the given strike and expiry.
    pub fn black_vol(&self, strike: f64, expiry: f64) -> Result<f64, MarketDataError> {
        self.vol_surface().black_vol(strike, expiry)
    }

    /// Total Black variance at the given strike and expiry.
    pub fn black_variance(&self, strike: f64, expiry: f64) -> Result<f64, MarketDataError> {
        self.vol_surface().black_variance(strike, expiry)
    }

    /// Whether the volatility surface is constant across strike and expiry.
    pub fn has_constant_vol(&self) -> bool {
        self.vol_surface().is_constant()
    }
}

/// Reads through lock poisoning: the protected `Arc` swap cannot be observed
/// half-written, so a poisoned lock still holds a consistent value.
fn read_lock<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| e.into_inner())
}

fn write_lock<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}
