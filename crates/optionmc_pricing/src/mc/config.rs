//! Monte Carlo engine configuration.
//!
//! [`McConfig`] is built through [`McConfigBuilder`], which validates the
//! combination of parameters at `build()` time: the time discretisation must
//! be given exactly one way (fixed step count or steps per year), and so must
//! the sampling target (fixed sample count or a statistical tolerance).

use crate::mc::error::ConfigError;

/// Maximum number of time steps per path.
pub const MAX_STEPS: usize = 10_000;

/// Hard upper bound on the configurable maximum sample count.
pub const MAX_SAMPLES_LIMIT: usize = 10_000_000;

/// Default cap on the total number of samples in tolerance-driven mode.
pub const DEFAULT_MAX_SAMPLES: usize = 2_097_152;

/// Time discretisation of the simulated paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepSpec {
    /// A fixed number of steps over the whole horizon.
    Fixed(usize),
    /// A step density; the engine scales it by the option maturity.
    PerYear(usize),
}

/// Sampling termination criterion.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampleSpec {
    /// Run exactly this many samples.
    Fixed(usize),
    /// Run until the standard error estimate falls below this tolerance.
    Tolerance(f64),
}

/// Validated configuration for [`McEuropeanEngine`](crate::mc::McEuropeanEngine).
///
/// Construct through [`McConfig::builder`]; invalid combinations are rejected
/// by [`McConfigBuilder::build`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct McConfig {
    steps: StepSpec,
    samples: SampleSpec,
    max_samples: usize,
    antithetic: bool,
    brownian_bridge: bool,
    seed: u64,
    use_constant_process: bool,
    force_discretization: bool,
}

impl McConfig {
    /// Returns a builder with nothing set.
    pub fn builder() -> McConfigBuilder {
        McConfigBuilder::new()
    }

    /// The time discretisation of each path.
    #[inline]
    pub fn step_spec(&self) -> StepSpec {
        self.steps
    }

    /// The sampling termination criterion.
    #[inline]
    pub fn sample_spec(&self) -> SampleSpec {
        self.samples
    }

    /// Cap on the total number of samples in tolerance-driven mode.
    #[inline]
    pub fn max_samples(&self) -> usize {
        self.max_samples
    }

    /// Whether antithetic variance reduction is enabled.
    #[inline]
    pub fn antithetic(&self) -> bool {
        self.antithetic
    }

    /// Whether paths are built through the Brownian bridge transform.
    #[inline]
    pub fn brownian_bridge(&self) -> bool {
        self.brownian_bridge
    }

    /// The seed for the variate source.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Whether the engine freezes market data into a constant-coefficient
    /// process at pricing time.
    #[inline]
    pub fn use_constant_process(&self) -> bool {
        self.use_constant_process
    }

    /// Whether the term-structure process must use the Euler scheme even
    /// when a constant surface would allow the exact step.
    ///
    /// Has no effect with [`use_constant_process`](Self::use_constant_process):
    /// the frozen process always evolves exactly.
    #[inline]
    pub fn force_discretization(&self) -> bool {
        self.force_discretization
    }

    /// Resolves the step count for an option with the given maturity.
    ///
    /// A per-year density always yields at least one step.
    pub fn resolve_steps(&self, maturity: f64) -> usize {
        match self.steps {
            StepSpec::Fixed(steps) => steps,
            StepSpec::PerYear(per_year) => {
                let scaled = (per_year as f64 * maturity).ceil() as usize;
                scaled.max(1)
            }
        }
    }
}

/// Builder for [`McConfig`].
///
/// # Examples
///
/// ```
/// use optionmc_pricing::mc::McConfig;
///
/// let config = McConfig::builder()
///     .steps_per_year(252)
///     .tolerance(0.02)
///     .antithetic(true)
///     .seed(7)
///     .build()
///     .unwrap();
/// assert!(config.antithetic());
/// ```
#[derive(Clone, Debug, Default)]
pub struct McConfigBuilder {
    steps: Option<usize>,
    steps_per_year: Option<usize>,
    samples: Option<usize>,
    tolerance: Option<f64>,
    max_samples: Option<usize>,
    antithetic: bool,
    brownian_bridge: bool,
    seed: u64,
    use_constant_process: bool,
    force_discretization: bool,
}

impl McConfigBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a fixed number of time steps per path.
    ///
    /// Mutually exclusive with [`steps_per_year`](Self::steps_per_year).
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Sets the number of time steps per year of maturity.
    ///
    /// Mutually exclusive with [`steps`](Self::steps).
    pub fn steps_per_year(mut self, steps_per_year: usize) -> Self {
        self.steps_per_year = Some(steps_per_year);
        self
    }

    /// Sets a fixed number of samples.
    ///
    /// Mutually exclusive with [`tolerance`](Self::tolerance).
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = Some(samples);
        self
    }

    /// Sets a target standard error; sampling continues until the estimate
    /// falls below it or [`max_samples`](Self::max_samples) is reached.
    ///
    /// Mutually exclusive with [`samples`](Self::samples).
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Caps the total sample count in tolerance-driven mode.
    ///
    /// Defaults to [`DEFAULT_MAX_SAMPLES`].
    pub fn max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = Some(max_samples);
        self
    }

    /// Enables antithetic variance reduction.
    ///
    /// Each sample then averages a path and its sign-flipped mirror.
    pub fn antithetic(mut self, antithetic: bool) -> Self {
        self.antithetic = antithetic;
        self
    }

    /// Routes variates through the Brownian bridge transform.
    pub fn brownian_bridge(mut self, brownian_bridge: bool) -> Self {
        self.brownian_bridge = brownian_bridge;
        self
    }

    /// Sets the seed for the variate source. Defaults to 0.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Freezes market data into a constant-coefficient process at pricing
    /// time instead of sampling curves and surface along the path.
    pub fn use_constant_process(mut self, use_constant_process: bool) -> Self {
        self.use_constant_process = use_constant_process;
        self
    }

    /// Forces the Euler scheme on the term-structure process even when a
    /// constant surface would allow the exact lognormal step.
    ///
    /// Ignored with [`use_constant_process`](Self::use_constant_process);
    /// the frozen process always takes the exact step.
    pub fn force_discretization(mut self, force_discretization: bool) -> Self {
        self.force_discretization = force_discretization;
        self
    }

    /// Validates the parameter combination and produces the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when step or sampling targets are given both
    /// ways, neither way, or with out-of-range values.
    pub fn build(self) -> Result<McConfig, ConfigError> {
        let steps = match (self.steps, self.steps_per_year) {
            (Some(_), Some(_)) => return Err(ConfigError::BothStepsGiven),
            (None, None) => return Err(ConfigError::NoStepsGiven),
            (Some(steps), None) => {
                if steps == 0 || steps > MAX_STEPS {
                    return Err(ConfigError::InvalidStepCount(steps));
                }
                StepSpec::Fixed(steps)
            }
            (None, Some(per_year)) => {
                if per_year == 0 || per_year > MAX_STEPS {
                    return Err(ConfigError::InvalidStepCount(per_year));
                }
                StepSpec::PerYear(per_year)
            }
        };

        let max_samples = self.max_samples.unwrap_or(DEFAULT_MAX_SAMPLES);
        if max_samples == 0 || max_samples > MAX_SAMPLES_LIMIT {
            return Err(ConfigError::InvalidMaxSamples(max_samples));
        }

        let samples = match (self.samples, self.tolerance) {
            (Some(_), Some(_)) => return Err(ConfigError::BothSamplingTargetsGiven),
            (None, None) => return Err(ConfigError::NoSamplingTargetGiven),
            (Some(samples), None) => {
                if samples == 0 || samples > max_samples {
                    return Err(ConfigError::InvalidSampleCount(samples));
                }
                SampleSpec::Fixed(samples)
            }
            (None, Some(tolerance)) => {
                if !tolerance.is_finite() || tolerance <= 0.0 {
                    return Err(ConfigError::InvalidTolerance(tolerance));
                }
                SampleSpec::Tolerance(tolerance)
            }
        };

        Ok(McConfig {
            steps,
            samples,
            max_samples,
            antithetic: self.antithetic,
            brownian_bridge: self.brownian_bridge,
            seed: self.seed,
            use_constant_process: self.use_constant_process,
            force_discretization: self.force_discretization,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_fixed_steps_and_samples() {
        let config = McConfig::builder()
            .steps(12)
            .samples(50_000)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(config.step_spec(), StepSpec::Fixed(12));
        assert_eq!(config.sample_spec(), SampleSpec::Fixed(50_000));
        assert_eq!(config.seed(), 42);
        assert!(!config.antithetic());
        assert!(!config.brownian_bridge());
        assert!(!config.use_constant_process());
        assert_eq!(config.max_samples(), DEFAULT_MAX_SAMPLES);
    }

    #[test]
    fn test_both_steps_rejected() {
        let err = McConfig::builder()
            .steps(10)
            .steps_per_year(252)
            .samples(100)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::BothStepsGiven);
    }

    #[test]
    fn test_no_steps_rejected() {
        let err = McConfig::builder().samples(100).build().unwrap_err();
        assert_eq!(err, ConfigError::NoStepsGiven);
    }

    #[test]
    fn test_zero_steps_rejected() {
        let err = McConfig::builder()
            .steps(0)
            .samples(100)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidStepCount(0));
    }

    #[test]
    fn test_too_many_steps_rejected() {
        let err = McConfig::builder()
            .steps(MAX_STEPS + 1)
            .samples(100)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidStepCount(MAX_STEPS + 1));
    }

    #[test]
    fn test_both_sampling_targets_rejected() {
        let err = McConfig::builder()
            .steps(1)
            .samples(100)
            .tolerance(0.01)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::BothSamplingTargetsGiven);
    }

    #[test]
    fn test_no_sampling_target_rejected() {
        let err = McConfig::builder().steps(1).build().unwrap_err();
        assert_eq!(err, ConfigError::NoSamplingTargetGiven);
    }

    #[test]
    fn test_nonpositive_tolerance_rejected() {
        let err = McConfig::builder()
            .steps(1)
            .tolerance(0.0)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidTolerance(0.0));

        let err = McConfig::builder()
            .steps(1)
            .tolerance(f64::NAN)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTolerance(_)));
    }

    #[test]
    fn test_samples_above_cap_rejected() {
        let err = McConfig::builder()
            .steps(1)
            .samples(1000)
            .max_samples(500)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidSampleCount(1000));
    }

    #[test]
    fn test_invalid_max_samples_rejected() {
        let err = McConfig::builder()
            .steps(1)
            .tolerance(0.01)
            .max_samples(0)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidMaxSamples(0));

        let err = McConfig::builder()
            .steps(1)
            .tolerance(0.01)
            .max_samples(MAX_SAMPLES_LIMIT + 1)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidMaxSamples(MAX_SAMPLES_LIMIT + 1));
    }

    #[test]
    fn test_resolve_steps_fixed() {
        let config = McConfig::builder()
            .steps(24)
            .samples(100)
            .build()
            .unwrap();
        assert_eq!(config.resolve_steps(0.25), 24);
        assert_eq!(config.resolve_steps(3.0), 24);
    }

    #[test]
    fn test_resolve_steps_per_year_scales_with_maturity() {
        let config = McConfig::builder()
            .steps_per_year(12)
            .samples(100)
            .build()
            .unwrap();
        assert_eq!(config.resolve_steps(1.0), 12);
        assert_eq!(config.resolve_steps(0.5), 6);
        assert_eq!(config.resolve_steps(2.0), 24);
    }

    #[test]
    fn test_resolve_steps_per_year_short_maturity_floors_at_one() {
        let config = McConfig::builder()
            .steps_per_year(12)
            .samples(100)
            .build()
            .unwrap();
        assert_eq!(config.resolve_steps(0.01), 1);
    }

    #[test]
    fn test_tolerance_mode_accepted() {
        let config = McConfig::builder()
            .steps_per_year(252)
            .tolerance(0.02)
            .antithetic(true)
            .brownian_bridge(true)
            .force_discretization(true)
            .build()
            .unwrap();
        assert_eq!(config.sample_spec(), SampleSpec::Tolerance(0.02));
        assert!(config.antithetic());
        assert!(config.brownian_bridge());
        assert!(config.force_discretization());
    }
}
