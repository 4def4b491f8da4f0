//! # Optionmc Models (L2: Instruments and Dynamics)
//!
//! Instrument definitions, closed-form pricing, and stochastic processes.
//!
//! This crate provides:
//! - Payoff and exercise definitions for vanilla equity options
//! - Analytical Black-Scholes pricing with a continuous dividend yield
//! - A one-dimensional stochastic process contract with Euler discretization
//! - Black-Scholes process variants: constant-coefficient, generalized
//!   (curve/surface driven), and Dupire local volatility
//!
//! ## Design Principles
//!
//! - **Enum-based processes** for static dispatch, no `Box<dyn Trait>`
//! - **Capability flags over downcasting**: a process declares whether its
//!   coefficients are state independent, and consumers pick exact lognormal
//!   evolution from that flag alone
//! - **Version-counter caching**: processes derived from a
//!   [`optionmc_core::market_data::MarketSnapshot`] cache expensive lookups
//!   and invalidate by comparing generation counters

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod process;
