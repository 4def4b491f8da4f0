//! Static dispatch enum over the Black-Scholes process variants.

use optionmc_core::types::time::Date;

use super::constant::ConstantBlackScholesProcess;
use super::error::ProcessError;
use super::generalized::GeneralizedBlackScholesProcess;
use super::traits::StochasticProcess1D;

/// Static dispatch wrapper over the concrete Black-Scholes processes.
///
/// Engines take this enum rather than a trait object, keeping the hot path
/// monomorphized.
#[derive(Debug)]
pub enum BlackScholesProcessEnum {
    /// Coefficients frozen at construction
    Constant(ConstantBlackScholesProcess),
    /// Curve and surface driven, with local vol fallback
    Generalized(GeneralizedBlackScholesProcess),
}

impl StochasticProcess1D for BlackScholesProcessEnum {
    fn x0(&self) -> f64 {
        match self {
            BlackScholesProcessEnum::Constant(p) => p.x0(),
            BlackScholesProcessEnum::Generalized(p) => p.x0(),
        }
    }

    fn drift(&self, t: f64, x: f64) -> Result<f64, ProcessError> {
        match self {
            BlackScholesProcessEnum::Constant(p) => p.drift(t, x),
            BlackScholesProcessEnum::Generalized(p) => p.drift(t, x),
        }
    }

    fn diffusion(&self, t: f64, x: f64) -> Result<f64, ProcessError> {
        match self {
            BlackScholesProcessEnum::Constant(p) => p.diffusion(t, x),
            BlackScholesProcessEnum::Generalized(p) => p.diffusion(t, x),
        }
    }

    fn apply(&self, x0: f64, dx: f64) -> f64 {
        match self {
            BlackScholesProcessEnum::Constant(p) => p.apply(x0, dx),
            BlackScholesProcessEnum::Generalized(p) => p.apply(x0, dx),
        }
    }

    fn expectation(&self, t0: f64, x0: f64, dt: f64) -> Result<f64, ProcessError> {
        match self {
            BlackScholesProcessEnum::Constant(p) => p.expectation(t0, x0, dt),
            BlackScholesProcessEnum::Generalized(p) => p.expectation(t0, x0, dt),
        }
    }

    fn variance(&self, t0: f64, x0: f64, dt: f64) -> Result<f64, ProcessError> {
        match self {
            BlackScholesProcessEnum::Constant(p) => p.variance(t0, x0, dt),
            BlackScholesProcessEnum::Generalized(p) => p.variance(t0, x0, dt),
        }
    }

    fn evolve(&self, t0: f64, x0: f64, dt: f64, dw: f64) -> Result<f64, ProcessError> {
        match self {
            BlackScholesProcessEnum::Constant(p) => p.evolve(t0, x0, dt, dw),
            BlackScholesProcessEnum::Generalized(p) => p.evolve(t0, x0, dt, dw),
        }
    }

    fn time(&self, date: Date) -> f64 {
        match self {
            BlackScholesProcessEnum::Constant(p) => p.time(date),
            BlackScholesProcessEnum::Generalized(p) => p.time(date),
        }
    }

    fn has_constant_coefficients(&self) -> bool {
        match self {
            BlackScholesProcessEnum::Constant(p) => p.has_constant_coefficients(),
            BlackScholesProcessEnum::Generalized(p) => p.has_constant_coefficients(),
        }
    }
}

impl From<ConstantBlackScholesProcess> for BlackScholesProcessEnum {
    fn from(process: ConstantBlackScholesProcess) -> Self {
        BlackScholesProcessEnum::Constant(process)
    }
}

impl From<GeneralizedBlackScholesProcess> for BlackScholesProcessEnum {
    fn from(process: GeneralizedBlackScholesProcess) -> Self {
        BlackScholesProcessEnum::Generalized(process)
    }
}
