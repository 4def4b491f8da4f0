//! Seeded standard normal variate sources.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// A seeded source of standard normal variates.
///
/// Implementations use static dispatch exclusively (no `Box<dyn Trait>`),
/// keeping the path generation hot loop monomorphized.
///
/// # Error Estimation
///
/// `ALLOWS_ERROR_ESTIMATE` declares whether draws are independent, so the
/// usual standard error sqrt(variance / n) is meaningful. Pseudo-random
/// sources set it to true; a low-discrepancy source would set it to false,
/// and tolerance-driven simulation refuses to run on top of one.
pub trait NormalSequence {
    /// Whether sqrt(variance / n) is a valid error estimate for samples
    /// drawn from this source.
    const ALLOWS_ERROR_ESTIMATE: bool;

    /// Creates a source initialised with the given seed.
    ///
    /// The same seed always produces the same sequence, enabling
    /// reproducible simulations.
    fn from_seed(seed: u64) -> Self;

    /// Draws a single standard normal variate.
    fn next_normal(&mut self) -> f64;

    /// Fills the buffer with standard normal variates.
    ///
    /// Zero-allocation; the buffer is pre-allocated by the caller.
    fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_normal();
        }
    }
}

/// Pseudo-random normal source backed by [`StdRng`].
///
/// Uses the Ziggurat sampler from `rand_distr::StandardNormal`.
///
/// # Examples
///
/// ```
/// use optionmc_pricing::rng::{NormalSequence, PseudoNormalSequence};
///
/// let mut a = PseudoNormalSequence::from_seed(42);
/// let mut b = PseudoNormalSequence::from_seed(42);
/// assert_eq!(a.next_normal(), b.next_normal());
/// ```
#[derive(Debug)]
pub struct PseudoNormalSequence {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation.
    seed: u64,
}

impl PseudoNormalSequence {
    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl NormalSequence for PseudoNormalSequence {
    const ALLOWS_ERROR_ESTIMATE: bool = true;

    #[inline]
    fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    #[inline]
    fn next_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }
}
