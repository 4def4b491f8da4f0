//! Curve and surface driven Black-Scholes process.

use std::sync::{Arc, RwLock};

use optionmc_core::market_data::curves::YieldCurve;
use optionmc_core::market_data::MarketSnapshot;
use optionmc_core::types::time::Date;

use super::discretization::EulerDiscretization;
use super::error::ProcessError;
use super::local_vol::DupireLocalVol;
use super::traits::StochasticProcess1D;

/// Bump for instantaneous forward rate approximations.
const FORWARD_BUMP: f64 = 1e-4;

/// Lognormal process driven by live curves and a volatility surface.
///
/// Coefficients are read from the snapshot on demand, so repricing after a
/// market update needs no new process. The diffusion coefficient is the
/// Dupire local volatility; for a constant surface this collapses to the
/// implied vol and the process evolves with the exact lognormal step.
///
/// The [`DupireLocalVol`] instance is rebuilt lazily whenever the
/// snapshot's generation counter moves, so a quote update invalidates the
/// cache without any observer wiring.
///
/// `force_discretization` drops the exact branch even for constant
/// surfaces, which is useful for testing discretization bias.
#[derive(Debug)]
pub struct GeneralizedBlackScholesProcess {
    snapshot: Arc<MarketSnapshot>,
    force_discretization: bool,
    cache: RwLock<Option<CachedLocalVol>>,
}

#[derive(Debug, Clone)]
struct CachedLocalVol {
    version: u64,
    local_vol: DupireLocalVol,
}

impl GeneralizedBlackScholesProcess {
    /// Creates a process over the given snapshot.
    pub fn new(snapshot: Arc<MarketSnapshot>, force_discretization: bool) -> Self {
        Self {
            snapshot,
            force_discretization,
            cache: RwLock::new(None),
        }
    }

    /// Returns the underlying market snapshot.
    #[inline]
    pub fn snapshot(&self) -> &Arc<MarketSnapshot> {
        &self.snapshot
    }

    /// Whether the exact lognormal branch is disabled.
    #[inline]
    pub fn force_discretization(&self) -> bool {
        self.force_discretization
    }

    /// Runs `f` against a local vol capture that matches the snapshot's
    /// current generation, rebuilding it if the market has moved.
    fn with_local_vol<R>(&self, f: impl FnOnce(&DupireLocalVol) -> R) -> R {
        let version = self.snapshot.version();
        {
            let guard = self.cache.read().unwrap_or_else(|e| e.into_inner());
            if let Some(cached) = guard.as_ref() {
                if cached.version == version {
                    return f(&cached.local_vol);
                }
            }
        }

        let local_vol = DupireLocalVol::from_snapshot(&self.snapshot);
        let mut guard = self.cache.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(CachedLocalVol {
            version,
            local_vol: local_vol.clone(),
        });
        drop(guard);

        f(&local_vol)
    }

    /// Forward risk-free minus dividend rate over `[t1, t2]`.
    fn forward_carry(&self, t1: f64, t2: f64) -> Result<f64, ProcessError> {
        let r = self.snapshot.risk_free().forward_rate(t1, t2)?;
        let q = self.snapshot.dividend().forward_rate(t1, t2)?;
        Ok(r - q)
    }
}

impl StochasticProcess1D for GeneralizedBlackScholesProcess {
    fn x0(&self) -> f64 {
        self.snapshot.spot_value()
    }

    /// Instantaneous log drift: r(t) - q(t) - sigma_loc(t, x)^2 / 2.
    fn drift(&self, t: f64, x: f64) -> Result<f64, ProcessError> {
        let sigma = self.diffusion(t, x)?;
        let carry = self.forward_carry(t, t + FORWARD_BUMP)?;
        Ok(carry - 0.5 * sigma * sigma)
    }

    fn diffusion(&self, t: f64, x: f64) -> Result<f64, ProcessError> {
        self.with_local_vol(|local_vol| local_vol.local_vol(t, x))
    }

    /// Lognormal state update: x0 * exp(dx).
    #[inline]
    fn apply(&self, x0: f64, dx: f64) -> f64 {
        x0 * dx.exp()
    }

    /// Exact conditional mean, available only with constant coefficients.
    fn expectation(&self, t0: f64, x0: f64, dt: f64) -> Result<f64, ProcessError> {
        if !self.has_constant_coefficients() {
            return Err(ProcessError::unsupported("expectation"));
        }
        let carry = self.forward_carry(t0, t0 + dt)?;
        Ok(x0 * (carry * dt).exp())
    }

    /// Variance of the log increment over `[t0, t0 + dt]`.
    ///
    /// With constant coefficients this is the total variance difference
    /// read off the surface; otherwise the Euler approximation.
    fn variance(&self, t0: f64, x0: f64, dt: f64) -> Result<f64, ProcessError> {
        if self.has_constant_coefficients() {
            let strike = self.snapshot.spot_value();
            let w1 = self.snapshot.black_variance(strike, t0 + dt)?;
            let w0 = if t0 > 0.0 {
                self.snapshot.black_variance(strike, t0)?
            } else {
                0.0
            };
            Ok(w1 - w0)
        } else {
            EulerDiscretization::variance(self, t0, x0, dt)
        }
    }

    /// Exact lognormal step when the capability flag allows it, Euler
    /// otherwise.
    fn evolve(&self, t0: f64, x0: f64, dt: f64, dw: f64) -> Result<f64, ProcessError> {
        if self.has_constant_coefficients() {
            let var = self.variance(t0, x0, dt)?;
            let drift = self.forward_carry(t0, t0 + dt)? * dt - 0.5 * var;
            Ok(self.apply(x0, var.sqrt() * dw + drift))
        } else {
            let dx = EulerDiscretization::drift(self, t0, x0, dt)?
                + self.std_deviation(t0, x0, dt)? * dw;
            Ok(self.apply(x0, dx))
        }
    }

    fn time(&self, date: Date) -> f64 {
        self.snapshot.time(date)
    }

    fn has_constant_coefficients(&self) -> bool {
        self.snapshot.has_constant_vol() && !self.force_discretization
    }
}
