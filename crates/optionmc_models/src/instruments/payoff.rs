//! Payoff definitions for vanilla equity options.

use std::fmt;

use num_traits::Float;

use super::InstrumentError;

/// Call or put.
///
/// # Examples
/// ```
/// use optionmc_models::instruments::OptionType;
///
/// assert_eq!(format!("{}", OptionType::Call), "Call");
/// assert_eq!(OptionType::Put.sign(), -1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Right to buy at the strike
    Call,
    /// Right to sell at the strike
    Put,
}

impl OptionType {
    /// Returns +1 for calls and -1 for puts.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// Plain vanilla payoff: max(S - K, 0) for calls, max(K - S, 0) for puts.
///
/// # Examples
/// ```
/// use optionmc_models::instruments::{OptionType, PlainVanillaPayoff};
///
/// let payoff = PlainVanillaPayoff::new(OptionType::Call, 100.0_f64).unwrap();
/// assert_eq!(payoff.value(110.0), 10.0);
/// assert_eq!(payoff.value(90.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlainVanillaPayoff<T: Float> {
    option_type: OptionType,
    strike: T,
}

impl<T: Float> PlainVanillaPayoff<T> {
    /// Creates a plain vanilla payoff.
    ///
    /// # Errors
    /// - `InstrumentError::NegativeStrike` if strike < 0 (zero is allowed)
    pub fn new(option_type: OptionType, strike: T) -> Result<Self, InstrumentError> {
        if strike < T::zero() {
            return Err(InstrumentError::NegativeStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self {
            option_type,
            strike,
        })
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the strike.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Evaluates the payoff at the given terminal spot.
    #[inline]
    pub fn value(&self, spot: T) -> T {
        let intrinsic = match self.option_type {
            OptionType::Call => spot - self.strike,
            OptionType::Put => self.strike - spot,
        };
        intrinsic.max(T::zero())
    }
}

/// Cash-or-nothing payoff: pays a fixed amount when the option finishes
/// in the money, zero otherwise.
///
/// # Examples
/// ```
/// use optionmc_models::instruments::{CashOrNothingPayoff, OptionType};
///
/// let payoff = CashOrNothingPayoff::new(OptionType::Call, 100.0_f64, 5.0).unwrap();
/// assert_eq!(payoff.value(110.0), 5.0);
/// assert_eq!(payoff.value(100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CashOrNothingPayoff<T: Float> {
    option_type: OptionType,
    strike: T,
    cash_payoff: T,
}

impl<T: Float> CashOrNothingPayoff<T> {
    /// Creates a cash-or-nothing payoff.
    ///
    /// # Errors
    /// - `InstrumentError::NegativeStrike` if strike < 0
    /// - `InstrumentError::NegativeCashPayoff` if the payout amount < 0
    pub fn new(option_type: OptionType, strike: T, cash_payoff: T) -> Result<Self, InstrumentError> {
        if strike < T::zero() {
            return Err(InstrumentError::NegativeStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }
        if cash_payoff < T::zero() {
            return Err(InstrumentError::NegativeCashPayoff {
                amount: cash_payoff.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self {
            option_type,
            strike,
            cash_payoff,
        })
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the strike.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the fixed payout amount.
    #[inline]
    pub fn cash_payoff(&self) -> T {
        self.cash_payoff
    }

    /// Evaluates the payoff at the given terminal spot.
    ///
    /// Finishing exactly at the strike pays nothing.
    #[inline]
    pub fn value(&self, spot: T) -> T {
        let in_the_money = match self.option_type {
            OptionType::Call => spot > self.strike,
            OptionType::Put => spot < self.strike,
        };
        if in_the_money {
            self.cash_payoff
        } else {
            T::zero()
        }
    }
}

/// Static dispatch enum over the concrete payoffs.
///
/// # Examples
/// ```
/// use optionmc_models::instruments::{OptionType, Payoff};
///
/// let payoff = Payoff::plain_vanilla(OptionType::Put, 100.0_f64).unwrap();
/// assert_eq!(payoff.value(90.0), 10.0);
/// assert_eq!(payoff.strike(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Payoff<T: Float> {
    /// Plain vanilla call/put
    PlainVanilla(PlainVanillaPayoff<T>),
    /// Fixed cash amount if in the money
    CashOrNothing(CashOrNothingPayoff<T>),
}

impl<T: Float> Payoff<T> {
    /// Creates a plain vanilla payoff variant.
    pub fn plain_vanilla(option_type: OptionType, strike: T) -> Result<Self, InstrumentError> {
        Ok(Payoff::PlainVanilla(PlainVanillaPayoff::new(
            option_type,
            strike,
        )?))
    }

    /// Creates a cash-or-nothing payoff variant.
    pub fn cash_or_nothing(
        option_type: OptionType,
        strike: T,
        cash_payoff: T,
    ) -> Result<Self, InstrumentError> {
        Ok(Payoff::CashOrNothing(CashOrNothingPayoff::new(
            option_type,
            strike,
            cash_payoff,
        )?))
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        match self {
            Payoff::PlainVanilla(p) => p.option_type(),
            Payoff::CashOrNothing(p) => p.option_type(),
        }
    }

    /// Returns the strike.
    #[inline]
    pub fn strike(&self) -> T {
        match self {
            Payoff::PlainVanilla(p) => p.strike(),
            Payoff::CashOrNothing(p) => p.strike(),
        }
    }

    /// Evaluates the payoff at the given terminal spot.
    #[inline]
    pub fn value(&self, spot: T) -> T {
        match self {
            Payoff::PlainVanilla(p) => p.value(spot),
            Payoff::CashOrNothing(p) => p.value(spot),
        }
    }

    /// Returns the plain vanilla payoff if this is one.
    #[inline]
    pub fn as_plain_vanilla(&self) -> Option<&PlainVanillaPayoff<T>> {
        match self {
            Payoff::PlainVanilla(p) => Some(p),
            Payoff::CashOrNothing(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_option_type_display_and_sign() {
        assert_eq!(format!("{}", OptionType::Call), "Call");
        assert_eq!(format!("{}", OptionType::Put), "Put");
        assert_eq!(OptionType::Call.sign(), 1.0);
        assert_eq!(OptionType::Put.sign(), -1.0);
    }

    #[test]
    fn test_plain_vanilla_call() {
        let payoff = PlainVanillaPayoff::new(OptionType::Call, 100.0_f64).unwrap();
        assert_relative_eq!(payoff.value(110.0), 10.0);
        assert_relative_eq!(payoff.value(100.0), 0.0);
        assert_relative_eq!(payoff.value(90.0), 0.0);
    }

    #[test]
    fn test_plain_vanilla_put() {
        let payoff = PlainVanillaPayoff::new(OptionType::Put, 100.0_f64).unwrap();
        assert_relative_eq!(payoff.value(90.0), 10.0);
        assert_relative_eq!(payoff.value(100.0), 0.0);
        assert_relative_eq!(payoff.value(110.0), 0.0);
    }

    #[test]
    fn test_zero_strike_allowed() {
        let payoff = PlainVanillaPayoff::new(OptionType::Call, 0.0_f64).unwrap();
        assert_relative_eq!(payoff.value(50.0), 50.0);
    }

    #[test]
    fn test_negative_strike_rejected() {
        let result = PlainVanillaPayoff::new(OptionType::Call, -1.0_f64);
        assert!(matches!(
            result,
            Err(InstrumentError::NegativeStrike { strike }) if strike == -1.0
        ));
    }

    #[test]
    fn test_cash_or_nothing_call() {
        let payoff = CashOrNothingPayoff::new(OptionType::Call, 100.0_f64, 5.0).unwrap();
        assert_relative_eq!(payoff.value(100.01), 5.0);
        // At the money pays nothing
        assert_relative_eq!(payoff.value(100.0), 0.0);
        assert_relative_eq!(payoff.value(99.0), 0.0);
    }

    #[test]
    fn test_cash_or_nothing_put() {
        let payoff = CashOrNothingPayoff::new(OptionType::Put, 100.0_f64, 5.0).unwrap();
        assert_relative_eq!(payoff.value(99.0), 5.0);
        assert_relative_eq!(payoff.value(101.0), 0.0);
    }

    #[test]
    fn test_cash_or_nothing_negative_amount_rejected() {
        let result = CashOrNothingPayoff::new(OptionType::Call, 100.0_f64, -5.0);
        assert!(matches!(
            result,
            Err(InstrumentError::NegativeCashPayoff { amount }) if amount == -5.0
        ));
    }

    #[test]
    fn test_payoff_enum_dispatch() {
        let vanilla = Payoff::plain_vanilla(OptionType::Call, 100.0_f64).unwrap();
        assert_relative_eq!(vanilla.value(105.0), 5.0);
        assert_eq!(vanilla.option_type(), OptionType::Call);
        assert_relative_eq!(vanilla.strike(), 100.0);
        assert!(vanilla.as_plain_vanilla().is_some());

        let digital = Payoff::cash_or_nothing(OptionType::Put, 100.0_f64, 2.5).unwrap();
        assert_relative_eq!(digital.value(95.0), 2.5);
        assert!(digital.as_plain_vanilla().is_none());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_vanilla_payoff_non_negative(
                strike in 0.0_f64..500.0,
                spot in 0.0_f64..500.0,
            ) {
                for option_type in [OptionType::Call, OptionType::Put] {
                    let payoff = PlainVanillaPayoff::new(option_type, strike).unwrap();
                    prop_assert!(payoff.value(spot) >= 0.0);
                }
            }

            #[test]
            fn test_call_put_decomposition(
                strike in 0.0_f64..500.0,
                spot in 0.0_f64..500.0,
            ) {
                // max(S-K,0) - max(K-S,0) = S - K
                let call = PlainVanillaPayoff::new(OptionType::Call, strike).unwrap();
                let put = PlainVanillaPayoff::new(OptionType::Put, strike).unwrap();
                prop_assert!((call.value(spot) - put.value(spot) - (spot - strike)).abs() < 1e-9);
            }
        }
    }
}
