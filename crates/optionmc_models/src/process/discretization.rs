//! Euler-Maruyama discretization of process coefficients.

use super::error::ProcessError;
use super::traits::StochasticProcess1D;

/// First-order Euler-Maruyama scheme.
///
/// Freezes the coefficients at the start of the step:
///
/// - drift increment: mu(t0, x0) * dt
/// - variance: sigma(t0, x0)^2 * dt
///
/// The trait defaults in [`StochasticProcess1D`] route through these
/// functions, so any process gets a usable discretized step for free.
pub struct EulerDiscretization;

impl EulerDiscretization {
    /// Drift increment over a step of length `dt`.
    pub fn drift<P: StochasticProcess1D + ?Sized>(
        process: &P,
        t0: f64,
        x0: f64,
        dt: f64,
    ) -> Result<f64, ProcessError> {
        Ok(process.drift(t0, x0)? * dt)
    }

    /// Diffusion scaling over a step of length `dt`.
    pub fn diffusion<P: StochasticProcess1D + ?Sized>(
        process: &P,
        t0: f64,
        x0: f64,
        dt: f64,
    ) -> Result<f64, ProcessError> {
        Ok(process.diffusion(t0, x0)? * dt.sqrt())
    }

    /// Variance of the driving coordinate over a step of length `dt`.
    pub fn variance<P: StochasticProcess1D + ?Sized>(
        process: &P,
        t0: f64,
        x0: f64,
        dt: f64,
    ) -> Result<f64, ProcessError> {
        let sigma = process.diffusion(t0, x0)?;
        Ok(sigma * sigma * dt)
    }
}
