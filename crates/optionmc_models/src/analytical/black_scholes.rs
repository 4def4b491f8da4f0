//! Black-Scholes pricing with a continuous dividend yield.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d1) - K·e^(-rT)·N(d2)
//! **Put Price**: P = K·e^(-rT)·N(-d2) - S·e^(-qT)·N(-d1)
//!
//! Where:
//! - d1 = (ln(S/K) + (r - q + sigma^2/2)T) / (sigma*sqrt(T))
//! - d2 = d1 - sigma*sqrt(T)

use num_traits::Float;

use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use crate::instruments::OptionType;

/// Black-Scholes-Merton model for European option pricing.
///
/// Serves as the closed-form reference against which Monte Carlo estimates
/// converge.
///
/// # Examples
/// ```
/// use optionmc_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.0, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0);
/// let put = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S*exp(-qT) - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Continuous dividend yield (q)
    dividend: T,
    /// Volatility (sigma)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised, may be negative)
    /// * `dividend` - Continuous dividend yield (annualised)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    pub fn new(spot: T, rate: T, dividend: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(0.0),
            });
        }
        if volatility <= zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(0.0),
            });
        }

        Ok(Self {
            spot,
            rate,
            dividend,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the dividend yield.
    #[inline]
    pub fn dividend(&self) -> T {
        self.dividend
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Computes the d1 term.
    ///
    /// d1 = (ln(S/K) + (r - q + sigma^2/2)T) / (sigma*sqrt(T))
    ///
    /// Returns large positive/negative values as expiry approaches zero.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let half = T::from(0.5).unwrap_or(zero);
        let epsilon = T::from(1e-10).unwrap_or(zero);

        if expiry <= epsilon {
            let large = T::from(100.0).unwrap_or(zero);
            return if self.spot > strike {
                large
            } else if self.spot < strike {
                -large
            } else {
                zero
            };
        }

        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate - self.dividend + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term: d2 = d1 - sigma*sqrt(T).
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        let epsilon = T::from(1e-10).unwrap_or(T::zero());

        if expiry <= epsilon {
            return self.d1(strike, expiry);
        }

        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes the European call price.
    ///
    /// C = S·e^(-qT)·N(d1) - K·e^(-rT)·N(d2)
    ///
    /// At expiry returns the intrinsic value.
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let epsilon = T::from(1e-10).unwrap_or(zero);

        if expiry <= epsilon {
            return (self.spot - strike).max(zero);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        let discount = (-self.rate * expiry).exp();
        let dividend_discount = (-self.dividend * expiry).exp();

        self.spot * dividend_discount * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes the European put price.
    ///
    /// P = K·e^(-rT)·N(-d2) - S·e^(-qT)·N(-d1)
    ///
    /// At expiry returns the intrinsic value.
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let epsilon = T::from(1e-10).unwrap_or(zero);

        if expiry <= epsilon {
            return (strike - self.spot).max(zero);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        let discount = (-self.rate * expiry).exp();
        let dividend_discount = (-self.dividend * expiry).exp();

        strike * discount * norm_cdf(-d2) - self.spot * dividend_discount * norm_cdf(-d1)
    }

    /// Prices a plain vanilla option of the given type.
    #[inline]
    pub fn price(&self, option_type: OptionType, strike: T, expiry: T) -> T {
        match option_type {
            OptionType::Call => self.price_call(strike, expiry),
            OptionType::Put => self.price_put(strike, expiry),
        }
    }

    /// Prices a cash-or-nothing option paying `cash` if it finishes
    /// in the money.
    ///
    /// Call: cash·e^(-rT)·N(d2); Put: cash·e^(-rT)·N(-d2).
    #[inline]
    pub fn price_cash_or_nothing(
        &self,
        option_type: OptionType,
        strike: T,
        expiry: T,
        cash: T,
    ) -> T {
        let zero = T::zero();
        let epsilon = T::from(1e-10).unwrap_or(zero);

        if expiry <= epsilon {
            let in_the_money = match option_type {
                OptionType::Call => self.spot > strike,
                OptionType::Put => self.spot < strike,
            };
            return if in_the_money { cash } else { zero };
        }

        let d2 = self.d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();

        match option_type {
            OptionType::Call => cash * discount * norm_cdf(d2),
            OptionType::Put => cash * discount * norm_cdf(-d2),
        }
    }
}
