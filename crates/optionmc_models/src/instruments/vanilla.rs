//! Vanilla option instrument.

use num_traits::Float;

use super::{Exercise, OptionType, Payoff};

/// A vanilla equity option: payoff plus exercise schedule.
///
/// # Examples
/// ```
/// use optionmc_core::types::time::Date;
/// use optionmc_models::instruments::{Exercise, OptionType, Payoff, VanillaOption};
///
/// let expiry = Date::from_ymd(2025, 6, 20).unwrap();
/// let option = VanillaOption::new(
///     Payoff::plain_vanilla(OptionType::Call, 100.0_f64).unwrap(),
///     Exercise::european(expiry),
/// );
///
/// assert_eq!(option.strike(), 100.0);
/// assert_eq!(option.exercise().last_date(), expiry);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VanillaOption<T: Float> {
    payoff: Payoff<T>,
    exercise: Exercise,
}

impl<T: Float> VanillaOption<T> {
    /// Creates a vanilla option from a payoff and an exercise schedule.
    pub fn new(payoff: Payoff<T>, exercise: Exercise) -> Self {
        Self { payoff, exercise }
    }

    /// Returns the payoff.
    #[inline]
    pub fn payoff(&self) -> &Payoff<T> {
        &self.payoff
    }

    /// Returns the exercise schedule.
    #[inline]
    pub fn exercise(&self) -> &Exercise {
        &self.exercise
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.payoff.option_type()
    }

    /// Returns the strike.
    #[inline]
    pub fn strike(&self) -> T {
        self.payoff.strike()
    }
}
