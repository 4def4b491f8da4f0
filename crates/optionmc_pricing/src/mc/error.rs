//! Error types for the Monte Carlo pricing kernel.
//!
//! This module defines structured error types for configuration validation
//! and runtime errors in the Monte Carlo simulation engine.

use std::fmt;

use optionmc_core::market_data::MarketDataError;
use optionmc_models::process::ProcessError;

/// Configuration error for the Monte Carlo engine.
///
/// These errors occur during construction when invalid parameters are
/// provided.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Both `steps` and `steps_per_year` were given.
    BothStepsGiven,
    /// Neither `steps` nor `steps_per_year` was given.
    NoStepsGiven,
    /// Step count outside valid range [1, 10_000].
    InvalidStepCount(usize),
    /// Both `samples` and `tolerance` were given.
    BothSamplingTargetsGiven,
    /// Neither `samples` nor `tolerance` was given.
    NoSamplingTargetGiven,
    /// Sample count outside valid range [1, max_samples].
    InvalidSampleCount(usize),
    /// Tolerance must be strictly positive and finite.
    InvalidTolerance(f64),
    /// Tolerance-driven sampling needs a variate source whose draws
    /// support standard error estimation.
    ToleranceRequiresErrorEstimate,
    /// Maximum sample cap outside valid range [1, 10_000_000].
    InvalidMaxSamples(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BothStepsGiven => {
                write!(f, "both steps and steps_per_year given")
            }
            Self::NoStepsGiven => {
                write!(f, "number of steps not given")
            }
            Self::InvalidStepCount(count) => {
                write!(
                    f,
                    "invalid step count {}: must be in range [1, 10_000]",
                    count
                )
            }
            Self::BothSamplingTargetsGiven => {
                write!(f, "number of samples and tolerance both given")
            }
            Self::NoSamplingTargetGiven => {
                write!(f, "neither number of samples nor tolerance given")
            }
            Self::InvalidSampleCount(count) => {
                write!(f, "invalid sample count {}: must be at least 1", count)
            }
            Self::InvalidTolerance(tolerance) => {
                write!(
                    f,
                    "invalid tolerance {}: must be strictly positive",
                    tolerance
                )
            }
            Self::ToleranceRequiresErrorEstimate => {
                write!(
                    f,
                    "tolerance requires a variate source allowing error estimation"
                )
            }
            Self::InvalidMaxSamples(cap) => {
                write!(
                    f,
                    "invalid maximum sample cap {}: must be in range [1, 10_000_000]",
                    cap
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Runtime error during path generation or payoff evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum SimulationError {
    /// The path pricer only handles plain vanilla payoffs.
    NonPlainPayoff,
    /// A path with no values was handed to a pricer.
    EmptyPath,
    /// The discount factor must be positive and finite.
    InvalidDiscount(f64),
    /// The stochastic process failed to evolve the state.
    Process(ProcessError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPlainPayoff => write!(f, "non-plain payoff given"),
            Self::EmptyPath => write!(f, "the path cannot be empty"),
            Self::InvalidDiscount(df) => {
                write!(f, "invalid discount factor {}: must be positive", df)
            }
            Self::Process(err) => write!(f, "process error: {}", err),
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<ProcessError> for SimulationError {
    fn from(err: ProcessError) -> Self {
        SimulationError::Process(err)
    }
}

/// Top-level error returned by the pricing engine.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    /// Invalid engine configuration.
    Config(ConfigError),
    /// Path generation or payoff evaluation failed.
    Simulation(SimulationError),
    /// A market data lookup failed.
    Market(MarketDataError),
    /// The engine only prices European exercise.
    NonEuropeanExercise,
    /// The option expires on or before the valuation date.
    ExpiredOption {
        /// Year fraction from the valuation date to expiry
        maturity: f64,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration error: {}", err),
            Self::Simulation(err) => write!(f, "simulation error: {}", err),
            Self::Market(err) => write!(f, "market data error: {}", err),
            Self::NonEuropeanExercise => {
                write!(f, "not a European option")
            }
            Self::ExpiredOption { maturity } => {
                write!(
                    f,
                    "option expired: maturity {} is not after the valuation date",
                    maturity
                )
            }
        }
    }
}

impl std::error::Error for EngineError {}

impl From<ConfigError> for EngineError {
    fn from(err: ConfigError) -> Self {
        EngineError::Config(err)
    }
}

impl From<SimulationError> for EngineError {
    fn from(err: SimulationError) -> Self {
        EngineError::Simulation(err)
    }
}

impl From<MarketDataError> for EngineError {
    fn from(err: MarketDataError) -> Self {
        EngineError::Market(err)
    }
}

impl From<ProcessError> for EngineError {
    fn from(err: ProcessError) -> Self {
        EngineError::Simulation(SimulationError::Process(err))
    }
}
