//! The one-dimensional stochastic process contract.

use optionmc_core::types::time::Date;

use super::discretization::EulerDiscretization;
use super::error::ProcessError;

/// A one-dimensional Ito process dX = mu(t, x) dt + sigma(t, x) dW.
///
/// # Contract
///
/// - `drift` and `diffusion` are the instantaneous coefficients
/// - `apply` maps an increment in the driving coordinate onto the state;
///   lognormal processes use `x0 * exp(dx)` so states stay positive
/// - `evolve` produces the state after a step of length `dt` driven by a
///   standard normal draw `dw`
/// - `has_constant_coefficients` reports whether the coefficients are
///   independent of both time and state; only then may consumers rely on
///   `expectation` and the exact (bias-free) `evolve` branch
///
/// Default implementations discretize with [`EulerDiscretization`], so a
/// minimal implementation only supplies `x0`, `drift`, `diffusion`, and
/// `time`.
pub trait StochasticProcess1D {
    /// Returns the initial state.
    fn x0(&self) -> f64;

    /// Returns the drift coefficient mu(t, x).
    fn drift(&self, t: f64, x: f64) -> Result<f64, ProcessError>;

    /// Returns the diffusion coefficient sigma(t, x).
    fn diffusion(&self, t: f64, x: f64) -> Result<f64, ProcessError>;

    /// Applies an increment in the driving coordinate to the state.
    ///
    /// Defaults to additive dynamics.
    #[inline]
    fn apply(&self, x0: f64, dx: f64) -> f64 {
        x0 + dx
    }

    /// Expected state after a step of length `dt`.
    ///
    /// The default pushes the drift increment through `apply`, which is
    /// exact only for constant coefficients; without that capability it
    /// returns [`ProcessError::UnsupportedOperation`] instead of a biased
    /// estimate.
    fn expectation(&self, t0: f64, x0: f64, dt: f64) -> Result<f64, ProcessError> {
        if !self.has_constant_coefficients() {
            return Err(ProcessError::unsupported("expectation"));
        }
        let dx = EulerDiscretization::drift(self, t0, x0, dt)?;
        Ok(self.apply(x0, dx))
    }

    /// Variance of the driving coordinate over a step of length `dt`.
    fn variance(&self, t0: f64, x0: f64, dt: f64) -> Result<f64, ProcessError> {
        EulerDiscretization::variance(self, t0, x0, dt)
    }

    /// Standard deviation of the driving coordinate over a step of `dt`.
    fn std_deviation(&self, t0: f64, x0: f64, dt: f64) -> Result<f64, ProcessError> {
        Ok(self.variance(t0, x0, dt)?.sqrt())
    }

    /// Evolves the state over `dt` driven by a standard normal draw `dw`.
    ///
    /// The default composes the Euler drift and diffusion through `apply`.
    fn evolve(&self, t0: f64, x0: f64, dt: f64, dw: f64) -> Result<f64, ProcessError> {
        let dx = EulerDiscretization::drift(self, t0, x0, dt)?
            + self.std_deviation(t0, x0, dt)? * dw;
        Ok(self.apply(x0, dx))
    }

    /// Converts a calendar date into the process time coordinate (years).
    fn time(&self, date: Date) -> f64;

    /// Whether drift and diffusion are independent of time and state.
    ///
    /// Consumers use this capability flag to select the exact lognormal
    /// step over Euler discretization.
    fn has_constant_coefficients(&self) -> bool {
        false
    }
}
