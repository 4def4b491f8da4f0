//! Random number generation for Monte Carlo simulation.

mod sequence;

pub use sequence::{NormalSequence, PseudoNormalSequence};
