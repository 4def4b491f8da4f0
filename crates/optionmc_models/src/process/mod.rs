//! One-dimensional stochastic processes for equity dynamics.
//!
//! This module provides:
//! - [`StochasticProcess1D`]: The process contract consumed by path generation
//! - [`EulerDiscretization`]: First-order discretization of drift and variance
//! - [`ConstantBlackScholesProcess`]: Coefficients frozen at construction
//! - [`GeneralizedBlackScholesProcess`]: Curve and surface driven, with a
//!   Dupire local volatility fallback for non-constant surfaces
//! - [`BlackScholesProcessEnum`]: Static dispatch over the process variants

mod constant;
mod discretization;
mod error;
mod generalized;
mod local_vol;
mod process_enum;
mod traits;

pub use constant::ConstantBlackScholesProcess;
pub use discretization::EulerDiscretization;
pub use error::ProcessError;
pub use generalized::GeneralizedBlackScholesProcess;
pub use local_vol::DupireLocalVol;
pub use process_enum::BlackScholesProcessEnum;
pub use traits::StochasticProcess1D;
