//! Discounted payoff evaluation on simulated paths.

use optionmc_models::instruments::Payoff;

use crate::mc::error::SimulationError;
use crate::mc::path::Path;

/// Prices a European payoff on a path by reading the terminal asset level,
/// applying the payoff, and discounting to the valuation date.
///
/// Only plain vanilla payoffs are accepted; digitals and other exotics
/// need their own pricer.
#[derive(Clone, Debug)]
pub struct EuropeanPathPricer {
    payoff: Payoff<f64>,
    discount: f64,
}

impl EuropeanPathPricer {
    /// Creates a pricer for the given payoff and discount factor.
    ///
    /// # Errors
    ///
    /// - [`SimulationError::NonPlainPayoff`] unless the payoff is plain
    ///   vanilla
    /// - [`SimulationError::InvalidDiscount`] unless the discount factor is
    ///   positive and finite
    pub fn new(payoff: Payoff<f64>, discount: f64) -> Result<Self, SimulationError> {
        if payoff.as_plain_vanilla().is_none() {
            return Err(SimulationError::NonPlainPayoff);
        }
        if !discount.is_finite() || discount <= 0.0 {
            return Err(SimulationError::InvalidDiscount(discount));
        }
        Ok(Self { payoff, discount })
    }

    /// The discount factor from the horizon to the valuation date.
    #[inline]
    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// The discounted payoff of one realisation.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::EmptyPath`] when the path has no nodes.
    pub fn price(&self, path: &Path) -> Result<f64, SimulationError> {
        let terminal = path.last().ok_or(SimulationError::EmptyPath)?;
        Ok(self.payoff.value(terminal) * self.discount)
    }
}
