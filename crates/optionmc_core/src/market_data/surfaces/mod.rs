//! Black volatility surface implementations.
//!
//! This module provides:
//! - [`BlackVolSurface`]: Generic trait for Black vol / total variance lookups
//! - [`FlatBlackVol`]: Constant volatility surface
//! - [`BlackVarianceGrid`]: Strike x expiry grid interpolated in total variance
//! - [`SurfaceEnum`]: Static dispatch wrapper over the concrete surfaces

mod flat;
mod surface_enum;
mod traits;
mod variance_grid;

pub use flat::FlatBlackVol;
pub use surface_enum::SurfaceEnum;
pub use traits::BlackVolSurface;
pub use variance_grid::BlackVarianceGrid;
