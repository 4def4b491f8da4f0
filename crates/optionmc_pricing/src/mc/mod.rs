//! Monte Carlo simulation of European option prices.
//!
//! The pipeline runs bottom-up: a [`TimeGrid`] discretises the horizon, a
//! [`PathGenerator`] evolves a stochastic process along it (optionally
//! through a [`BrownianBridge`]), an [`EuropeanPathPricer`] turns each
//! [`Path`] into a discounted payoff, and [`Statistics`] accumulates the
//! samples. [`McEuropeanEngine`] wires the pieces together under a
//! validated [`McConfig`].

mod brownian_bridge;
mod config;
mod engine;
mod error;
mod generator;
mod path;
mod pricer;
mod statistics;
mod time_grid;

pub use brownian_bridge::BrownianBridge;
pub use config::{
    McConfig, McConfigBuilder, SampleSpec, StepSpec, DEFAULT_MAX_SAMPLES, MAX_SAMPLES_LIMIT,
    MAX_STEPS,
};
pub use engine::{McEuropeanEngine, PricingResult};
pub use error::{ConfigError, EngineError, SimulationError};
pub use generator::PathGenerator;
pub use path::Path;
pub use pricer::EuropeanPathPricer;
pub use statistics::Statistics;
pub use time_grid::TimeGrid;
