//! Monte Carlo engine for European options.

use std::marker::PhantomData;
use std::sync::Arc;

use optionmc_core::market_data::MarketSnapshot;
use optionmc_models::instruments::VanillaOption;
use optionmc_models::process::{
    BlackScholesProcessEnum, ConstantBlackScholesProcess, GeneralizedBlackScholesProcess,
};

use crate::mc::config::{McConfig, SampleSpec};
use crate::mc::error::{ConfigError, EngineError};
use crate::mc::generator::PathGenerator;
use crate::mc::path::Path;
use crate::mc::pricer::EuropeanPathPricer;
use crate::mc::statistics::Statistics;
use crate::mc::time_grid::TimeGrid;
use crate::rng::{NormalSequence, PseudoNormalSequence};

/// Smallest batch run before the error estimate is consulted in
/// tolerance-driven mode.
const MIN_BATCH: usize = 1023;

/// The outcome of a Monte Carlo valuation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    value: f64,
    error_estimate: f64,
    samples: usize,
}

impl PricingResult {
    /// The estimated present value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The standard error of the value estimate.
    #[inline]
    pub fn error_estimate(&self) -> f64 {
        self.error_estimate
    }

    /// The number of samples the estimate is based on. With antithetic
    /// sampling each mirrored pair counts as one sample.
    #[inline]
    pub fn samples(&self) -> usize {
        self.samples
    }
}

/// Monte Carlo pricing engine for European vanilla options.
///
/// The engine is generic over its variate source, defaulting to the seeded
/// pseudo-random [`PseudoNormalSequence`]. Market data is read through a
/// shared [`MarketSnapshot`]; depending on
/// [`use_constant_process`](McConfig::use_constant_process) the dynamics are
/// either frozen at pricing time or follow the snapshot's term structures
/// along the path.
#[derive(Debug)]
pub struct McEuropeanEngine<G: NormalSequence = PseudoNormalSequence> {
    snapshot: Arc<MarketSnapshot>,
    config: McConfig,
    _variates: PhantomData<G>,
}

impl McEuropeanEngine<PseudoNormalSequence> {
    /// Creates an engine with the default pseudo-random variate source.
    ///
    /// # Errors
    ///
    /// See [`with_sequence`](Self::with_sequence).
    pub fn new(snapshot: Arc<MarketSnapshot>, config: McConfig) -> Result<Self, EngineError> {
        Self::with_sequence(snapshot, config)
    }
}

impl<G: NormalSequence> McEuropeanEngine<G> {
    /// Creates an engine over the given market snapshot, drawing variates
    /// from `G`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ToleranceRequiresErrorEstimate`] when the
    /// configuration asks for tolerance-driven sampling but the variate
    /// source does not support standard error estimation.
    pub fn with_sequence(
        snapshot: Arc<MarketSnapshot>,
        config: McConfig,
    ) -> Result<Self, EngineError> {
        if matches!(config.sample_spec(), SampleSpec::Tolerance(_)) && !G::ALLOWS_ERROR_ESTIMATE {
            return Err(ConfigError::ToleranceRequiresErrorEstimate.into());
        }
        Ok(Self {
            snapshot,
            config,
            _variates: PhantomData,
        })
    }

    /// The engine configuration.
    #[inline]
    pub fn config(&self) -> &McConfig {
        &self.config
    }

    /// Prices a European vanilla option.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NonEuropeanExercise`] for non-European exercise
    /// - [`EngineError::ExpiredOption`] when expiry is not after the
    ///   snapshot's reference date
    /// - [`EngineError::Simulation`] with
    ///   [`SimulationError::NonPlainPayoff`](crate::mc::SimulationError::NonPlainPayoff)
    ///   for anything but a plain vanilla payoff
    /// - [`EngineError::Market`] when a curve or surface lookup fails
    /// - [`EngineError::Simulation`] when path evolution fails, e.g. an
    ///   unstable local volatility evaluation
    pub fn price(&self, option: &VanillaOption<f64>) -> Result<PricingResult, EngineError> {
        if !option.exercise().is_european() {
            return Err(EngineError::NonEuropeanExercise);
        }
        let expiry = option.exercise().last_date();
        let maturity = self.snapshot.time(expiry);
        if maturity <= 0.0 {
            return Err(EngineError::ExpiredOption { maturity });
        }

        let steps = self.config.resolve_steps(maturity);
        let grid = Arc::new(TimeGrid::regular(maturity, steps));

        let process = if self.config.use_constant_process() {
            BlackScholesProcessEnum::from(ConstantBlackScholesProcess::from_snapshot(
                &self.snapshot,
                expiry,
                option.strike(),
            )?)
        } else {
            BlackScholesProcessEnum::from(GeneralizedBlackScholesProcess::new(
                Arc::clone(&self.snapshot),
                self.config.force_discretization(),
            ))
        };

        let discount = self.snapshot.discount(maturity)?;
        let pricer = EuropeanPathPricer::new(*option.payoff(), discount)?;

        let mut generator = PathGenerator::<G>::new(
            Arc::clone(&grid),
            self.config.seed(),
            self.config.brownian_bridge(),
        );
        let mut path = generator.new_path();
        let mut antithetic = generator.new_path();
        let mut stats = Statistics::new();

        tracing::debug!(
            maturity,
            steps,
            antithetic = self.config.antithetic(),
            "starting simulation"
        );

        match self.config.sample_spec() {
            SampleSpec::Fixed(samples) => {
                for _ in 0..samples {
                    let sample = self.draw_sample(
                        &mut generator,
                        &process,
                        &pricer,
                        &mut path,
                        &mut antithetic,
                    )?;
                    stats.add(sample);
                }
            }
            SampleSpec::Tolerance(tolerance) => {
                let max_samples = self.config.max_samples();
                let mut next_batch = MIN_BATCH.min(max_samples);
                loop {
                    for _ in 0..next_batch {
                        let sample = self.draw_sample(
                            &mut generator,
                            &process,
                            &pricer,
                            &mut path,
                            &mut antithetic,
                        )?;
                        stats.add(sample);
                    }

                    let error = stats.error_estimate();
                    if error <= tolerance {
                        break;
                    }
                    if stats.count() >= max_samples {
                        tracing::warn!(
                            samples = stats.count(),
                            error_estimate = error,
                            tolerance,
                            "sample cap reached before tolerance"
                        );
                        break;
                    }

                    // Scale the sample count by the squared error ratio,
                    // with a safety margin against undershooting.
                    let count = stats.count() as f64;
                    let order = (error / tolerance) * (error / tolerance);
                    let grown = (count * order * 0.8 - count).max(MIN_BATCH as f64) as usize;
                    next_batch = grown.min(max_samples - stats.count());
                }
            }
        }

        let result = PricingResult {
            value: stats.mean(),
            error_estimate: stats.error_estimate(),
            samples: stats.count(),
        };
        tracing::debug!(
            value = result.value,
            error_estimate = result.error_estimate,
            samples = result.samples,
            "simulation finished"
        );
        Ok(result)
    }

    fn draw_sample(
        &self,
        generator: &mut PathGenerator<G>,
        process: &BlackScholesProcessEnum,
        pricer: &EuropeanPathPricer,
        path: &mut Path,
        antithetic: &mut Path,
    ) -> Result<f64, EngineError> {
        if self.config.antithetic() {
            generator.next_antithetic_pair(process, path, antithetic)?;
            let value = pricer.price(path)?;
            let mirrored = pricer.price(antithetic)?;
            Ok(0.5 * (value + mirrored))
        } else {
            generator.next_path(process, path)?;
            Ok(pricer.price(path)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use optionmc_core::market_data::curves::CurveEnum;
    use optionmc_core::market_data::surfaces::SurfaceEnum;
    use optionmc_core::types::time::{Date, DayCountConvention};
    use optionmc_models::instruments::{Exercise, OptionType, Payoff};

    fn snapshot() -> Arc<MarketSnapshot> {
        Arc::new(MarketSnapshot::new(
            Date::from_ymd(2024, 1, 1).unwrap(),
            DayCountConvention::ActualActual365,
            100.0,
            CurveEnum::flat(0.05),
            CurveEnum::flat(0.02),
            SurfaceEnum::flat(0.20),
        ))
    }

    fn call_option(strike: f64) -> VanillaOption<f64> {
        VanillaOption::new(
            Payoff::plain_vanilla(OptionType::Call, strike).unwrap(),
            Exercise::european(Date::from_ymd(2025, 1, 1).unwrap()),
        )
    }

    fn fixed_config(seed: u64) -> McConfig {
        McConfig::builder()
            .steps(1)
            .samples(10_000)
            .seed(seed)
            .use_constant_process(true)
            .build()
            .unwrap()
    }

    /// A variate source that cannot back an error estimate.
    #[derive(Debug)]
    struct NoEstimateSequence(PseudoNormalSequence);

    impl NormalSequence for NoEstimateSequence {
        const ALLOWS_ERROR_ESTIMATE: bool = false;

        fn from_seed(seed: u64) -> Self {
            Self(PseudoNormalSequence::from_seed(seed))
        }

        fn next_normal(&mut self) -> f64 {
            self.0.next_normal()
        }
    }

    #[test]
    fn test_same_seed_reproduces_value() {
        let engine_a = McEuropeanEngine::new(snapshot(), fixed_config(42)).unwrap();
        let engine_b = McEuropeanEngine::new(snapshot(), fixed_config(42)).unwrap();

        let result_a = engine_a.price(&call_option(100.0)).unwrap();
        let result_b = engine_b.price(&call_option(100.0)).unwrap();
        assert_eq!(result_a.value(), result_b.value());
        assert_eq!(result_a.error_estimate(), result_b.error_estimate());
        assert_eq!(result_a.samples(), 10_000);
    }

    #[test]
    fn test_different_seeds_differ() {
        let engine_a = McEuropeanEngine::new(snapshot(), fixed_config(1)).unwrap();
        let engine_b = McEuropeanEngine::new(snapshot(), fixed_config(2)).unwrap();

        let result_a = engine_a.price(&call_option(100.0)).unwrap();
        let result_b = engine_b.price(&call_option(100.0)).unwrap();
        assert_ne!(result_a.value(), result_b.value());
    }

    #[test]
    fn test_non_european_rejected() {
        let engine = McEuropeanEngine::new(snapshot(), fixed_config(0)).unwrap();
        let option = VanillaOption::new(
            Payoff::plain_vanilla(OptionType::Call, 100.0).unwrap(),
            Exercise::american(
                Date::from_ymd(2024, 1, 1).unwrap(),
                Date::from_ymd(2025, 1, 1).unwrap(),
            )
            .unwrap(),
        );
        let err = engine.price(&option).unwrap_err();
        assert_eq!(err, EngineError::NonEuropeanExercise);
    }

    #[test]
    fn test_non_plain_payoff_rejected() {
        use crate::mc::error::SimulationError;

        let engine = McEuropeanEngine::new(snapshot(), fixed_config(0)).unwrap();
        let option = VanillaOption::new(
            Payoff::cash_or_nothing(OptionType::Call, 100.0, 5.0).unwrap(),
            Exercise::european(Date::from_ymd(2025, 1, 1).unwrap()),
        );
        let err = engine.price(&option).unwrap_err();
        assert_eq!(
            err,
            EngineError::Simulation(SimulationError::NonPlainPayoff)
        );
    }

    #[test]
    fn test_expired_option_rejected() {
        let engine = McEuropeanEngine::new(snapshot(), fixed_config(0)).unwrap();
        let option = VanillaOption::new(
            Payoff::plain_vanilla(OptionType::Call, 100.0).unwrap(),
            Exercise::european(Date::from_ymd(2024, 1, 1).unwrap()),
        );
        let err = engine.price(&option).unwrap_err();
        assert!(matches!(err, EngineError::ExpiredOption { .. }));
    }

    #[test]
    fn test_tolerance_requires_error_estimate() {
        let config = McConfig::builder()
            .steps(1)
            .tolerance(0.05)
            .build()
            .unwrap();
        let err =
            McEuropeanEngine::<NoEstimateSequence>::with_sequence(snapshot(), config).unwrap_err();
        assert_eq!(
            err,
            EngineError::Config(ConfigError::ToleranceRequiresErrorEstimate)
        );
    }

    #[test]
    fn test_fixed_samples_allowed_without_error_estimate() {
        let engine =
            McEuropeanEngine::<NoEstimateSequence>::with_sequence(snapshot(), fixed_config(3))
                .unwrap();
        let result = engine.price(&call_option(100.0)).unwrap();
        assert!(result.value() > 0.0);
    }

    #[test]
    fn test_tolerance_mode_meets_target() {
        let config = McConfig::builder()
            .steps(1)
            .tolerance(0.1)
            .seed(5)
            .use_constant_process(true)
            .build()
            .unwrap();
        let engine = McEuropeanEngine::new(snapshot(), config).unwrap();
        let result = engine.price(&call_option(100.0)).unwrap();
        assert!(result.error_estimate() <= 0.1);
        assert!(result.samples() >= 1023);
    }

    #[test]
    fn test_sample_cap_stops_tolerance_loop() {
        let config = McConfig::builder()
            .steps(1)
            .tolerance(1e-9)
            .max_samples(5000)
            .seed(5)
            .use_constant_process(true)
            .build()
            .unwrap();
        let engine = McEuropeanEngine::new(snapshot(), config).unwrap();
        let result = engine.price(&call_option(100.0)).unwrap();
        assert!(result.samples() <= 5000);
        assert!(result.error_estimate() > 1e-9);
    }

    #[test]
    fn test_force_discretization_does_not_affect_frozen_process() {
        // The frozen process always takes the exact step, so the flag must
        // leave a constant-process run bit-identical.
        let base = McConfig::builder()
            .steps(4)
            .samples(2_000)
            .seed(17)
            .use_constant_process(true);
        let exact = base.clone().build().unwrap();
        let forced = base.force_discretization(true).build().unwrap();

        let result_a = McEuropeanEngine::new(snapshot(), exact)
            .unwrap()
            .price(&call_option(100.0))
            .unwrap();
        let result_b = McEuropeanEngine::new(snapshot(), forced)
            .unwrap()
            .price(&call_option(100.0))
            .unwrap();
        assert_eq!(result_a.value(), result_b.value());
    }

    #[test]
    fn test_antithetic_counts_pairs_as_one_sample() {
        let config = McConfig::builder()
            .steps(1)
            .samples(1000)
            .antithetic(true)
            .use_constant_process(true)
            .build()
            .unwrap();
        let engine = McEuropeanEngine::new(snapshot(), config).unwrap();
        let result = engine.price(&call_option(100.0)).unwrap();
        assert_eq!(result.samples(), 1000);
    }
}
