//! Yield curve implementations.
//!
//! This module provides:
//! - [`YieldCurve`]: Generic trait for discount factor and rate lookups
//! - [`FlatCurve`]: Constant-rate curve
//! - [`InterpolatedCurve`]: Pillar-based curve with configurable interpolation
//! - [`CurveEnum`]: Static dispatch wrapper over the concrete curves

mod curve_enum;
mod flat;
mod interpolated;
mod traits;

pub use curve_enum::CurveEnum;
pub use flat::FlatCurve;
pub use interpolated::{CurveInterpolation, InterpolatedCurve};
pub use traits::YieldCurve;
