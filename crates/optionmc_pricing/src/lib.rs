//! # Optionmc Pricing (L3: Monte Carlo Engine)
//!
//! Monte Carlo pricing of European equity options.
//!
//! This crate provides:
//! - Seeded normal variate generation with an error-estimate capability flag
//! - Time grids, paths, and a Brownian bridge variate transform
//! - Path generation over any [`optionmc_models::process::StochasticProcess1D`]
//! - Discounted payoff evaluation and running statistics
//! - A fixed-sample or tolerance-driven European pricing engine with
//!   optional antithetic variance reduction
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use optionmc_core::market_data::curves::CurveEnum;
//! use optionmc_core::market_data::surfaces::SurfaceEnum;
//! use optionmc_core::market_data::MarketSnapshot;
//! use optionmc_core::types::time::{Date, DayCountConvention};
//! use optionmc_models::instruments::{Exercise, OptionType, Payoff, VanillaOption};
//! use optionmc_pricing::mc::{McConfig, McEuropeanEngine};
//!
//! let snapshot = Arc::new(MarketSnapshot::new(
//!     Date::from_ymd(2024, 1, 1).unwrap(),
//!     DayCountConvention::ActualActual365,
//!     100.0,
//!     CurveEnum::flat(0.05),
//!     CurveEnum::flat(0.02),
//!     SurfaceEnum::flat(0.20),
//! ));
//!
//! let option = VanillaOption::new(
//!     Payoff::plain_vanilla(OptionType::Call, 100.0).unwrap(),
//!     Exercise::european(Date::from_ymd(2025, 1, 1).unwrap()),
//! );
//!
//! let config = McConfig::builder()
//!     .steps(1)
//!     .samples(20_000)
//!     .seed(42)
//!     .use_constant_process(true)
//!     .build()
//!     .unwrap();
//!
//! let engine = McEuropeanEngine::new(snapshot, config).unwrap();
//! let result = engine.price(&option).unwrap();
//! assert!(result.value() > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;
