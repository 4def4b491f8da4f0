//! # optionmc_core: Foundation for Monte Carlo Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! optionmc_core serves as the bottom layer of the 3-layer workspace, providing:
//! - Time types: `Date`, `DayCountConvention` (`types::time`)
//! - Error types: `DateError` (`types::error`)
//! - Yield curves and Black volatility surfaces (`market_data`)
//! - Mutable market snapshots with version counters (`market_data::snapshot`)
//!
//! ## Minimal Dependency Principle
//!
//! Layer 1 has no dependencies on other optionmc_* crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - chrono: Date arithmetic
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use optionmc_core::market_data::curves::{CurveEnum, YieldCurve};
//! use optionmc_core::types::{Date, DayCountConvention};
//!
//! // Date operations
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2025, 1, 1).unwrap();
//! let year_fraction = DayCountConvention::ActualActual365.year_fraction_dates(start, end);
//! assert!(year_fraction > 1.0);
//!
//! // Curve operations
//! let curve = CurveEnum::flat(0.05_f64);
//! let df = curve.discount_factor(1.0).unwrap();
//! assert!((df - (-0.05_f64).exp()).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for Date and DayCountConvention

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod types;
