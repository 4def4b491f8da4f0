//! Dupire local volatility derived from a Black variance surface.

use std::sync::Arc;

use optionmc_core::market_data::curves::{CurveEnum, YieldCurve};
use optionmc_core::market_data::surfaces::{BlackVolSurface, SurfaceEnum};
use optionmc_core::market_data::MarketSnapshot;

use super::error::ProcessError;

/// Finite difference bump for the time derivative of total variance.
const DT_BUMP: f64 = 1e-4;

/// Local volatility function sigma_loc(t, S) built from total Black
/// variance w(K, T) via Dupire's formula in log-moneyness coordinates.
///
/// With y = ln(K / F(T)) and w the total variance:
///
/// ```text
/// sigma_loc^2 = (dw/dT) / (1 - y/w * dw/dy
///               + 1/4 * (-1/4 - 1/w + y^2/w^2) * (dw/dy)^2
///               + 1/2 * d2w/dy2)
/// ```
///
/// All derivatives are taken by finite differences on the surface. The
/// instance captures the snapshot's components at construction; callers
/// that track the snapshot's generation counter rebuild it when market
/// data moves.
///
/// Degenerate inputs (decreasing total variance in time, a vanishing
/// denominator, a negative implied variance) surface as
/// [`ProcessError::NumericalInstability`] rather than being clamped.
#[derive(Debug, Clone)]
pub struct DupireLocalVol {
    /// Spot at capture time
    spot: f64,
    /// Risk-free curve for the forward
    risk_free: Arc<CurveEnum<f64>>,
    /// Dividend curve for the forward
    dividend: Arc<CurveEnum<f64>>,
    /// Black variance surface
    surface: Arc<SurfaceEnum<f64>>,
}

impl DupireLocalVol {
    /// Captures the snapshot's current spot, curves, and surface.
    pub fn from_snapshot(snapshot: &MarketSnapshot) -> Self {
        Self {
            spot: snapshot.spot_value(),
            risk_free: snapshot.risk_free(),
            dividend: snapshot.dividend(),
            surface: snapshot.vol_surface(),
        }
    }

    /// Whether the captured surface is constant in strike and expiry.
    pub fn is_constant(&self) -> bool {
        self.surface.is_constant()
    }

    /// Forward price F(t) = S * D_q(t) / D_r(t).
    fn forward(&self, t: f64) -> Result<f64, ProcessError> {
        let growth = self.dividend.discount_factor(t)? / self.risk_free.discount_factor(t)?;
        Ok(self.spot * growth)
    }

    /// Evaluates sigma_loc at time `t` and asset level `level`.
    ///
    /// # Errors
    /// - `ProcessError::Market` for invalid strike or failed surface lookups
    /// - `ProcessError::NumericalInstability` when the surface is locally
    ///   arbitrageable (variance decreasing in time, denominator <= 0, or
    ///   negative local variance)
    pub fn local_vol(&self, t: f64, level: f64) -> Result<f64, ProcessError> {
        // Diffusion queries at the very start of the grid land at t = 0;
        // evaluate just inside the surface's domain instead.
        let t_eval = t.max(DT_BUMP);

        let forward = self.forward(t_eval)?;
        let y = (level / forward).ln();

        // Strike bumps proportional to log-moneyness, with an absolute
        // floor near the money
        let dy = if y.abs() > 0.001 { y * 1e-4 } else { 1e-6 };
        let strike_p = level * dy.exp();
        let strike_m = level / dy.exp();

        let w = self.surface.black_variance(level, t_eval)?;
        let wp = self.surface.black_variance(strike_p, t_eval)?;
        let wm = self.surface.black_variance(strike_m, t_eval)?;

        let dwdy = (wp - wm) / (2.0 * dy);
        let d2wdy2 = (wp - 2.0 * w + wm) / (dy * dy);

        // Time derivative: forward difference at the short end, central
        // difference elsewhere, with monotonicity guards
        let dwdt = if t <= DT_BUMP {
            let wpt = self.surface.black_variance(level, t_eval + DT_BUMP)?;
            if wpt < w {
                return Err(ProcessError::NumericalInstability(format!(
                    "total variance decreasing in time at t={}, level={}",
                    t_eval, level
                )));
            }
            (wpt - w) / DT_BUMP
        } else {
            let dt = DT_BUMP.min(t_eval / 2.0);
            let wpt = self.surface.black_variance(level, t_eval + dt)?;
            let wmt = self.surface.black_variance(level, t_eval - dt)?;
            if wpt < w || w < wmt {
                return Err(ProcessError::NumericalInstability(format!(
                    "total variance decreasing in time at t={}, level={}",
                    t_eval, level
                )));
            }
            (wpt - wmt) / (2.0 * dt)
        };

        if dwdy == 0.0 && d2wdy2 == 0.0 {
            if dwdt < 0.0 {
                return Err(ProcessError::NumericalInstability(format!(
                    "negative local variance at t={}, level={}",
                    t_eval, level
                )));
            }
            return Ok(dwdt.sqrt());
        }

        let den1 = 1.0 - y / w * dwdy;
        let den2 = 0.25 * (-0.25 - 1.0 / w + y * y / (w * w)) * dwdy * dwdy;
        let den3 = 0.5 * d2wdy2;
        let den = den1 + den2 + den3;

        if den <= 0.0 {
            return Err(ProcessError::NumericalInstability(format!(
                "non-positive Dupire denominator {} at t={}, level={}",
                den, t_eval, level
            )));
        }

        let local_var = dwdt / den;
        if local_var < 0.0 {
            return Err(ProcessError::NumericalInstability(format!(
                "negative local variance at t={}, level={}",
                t_eval, level
            )));
        }

        Ok(local_var.sqrt())
    }
}
