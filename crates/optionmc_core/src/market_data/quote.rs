//! Mutable market quote with a generation counter.

use std::sync::atomic::{AtomicU64, Ordering};

/// A single mutable market value (typically the spot price).
///
/// The current value is stored as raw `f64` bits in an atomic, so reads and
/// writes never block. Every `set_value` bumps a monotonically increasing
/// version counter; consumers that cache anything derived from the quote can
/// compare versions instead of registering observers.
///
/// # Examples
///
/// ```
/// use optionmc_core::market_data::SimpleQuote;
///
/// let quote = SimpleQuote::new(100.0);
/// assert_eq!(quote.value(), 100.0);
///
/// let v0 = quote.version();
/// quote.set_value(101.5);
/// assert_eq!(quote.value(), 101.5);
/// assert!(quote.version() > v0);
/// ```
#[derive(Debug)]
pub struct SimpleQuote {
    /// Current value, stored as f64 bits.
    bits: AtomicU64,
    /// Bumped on every `set_value`.
    version: AtomicU64,
}

impl SimpleQuote {
    /// Creates a quote with the given initial value.
    pub fn new(value: f64) -> Self {
        Self {
            bits: AtomicU64::new(value.to_bits()),
            version: AtomicU64::new(0),
        }
    }

    /// Returns the current value.
    #[inline]
    pub fn value(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Acquire))
    }

    /// Sets a new value and bumps the version counter.
    pub fn set_value(&self, value: f64) {
        self.bits.store(value.to_bits(), Ordering::Release);
        self.version.fetch_add(1, Ordering::AcqRel);
    }

    /// Returns the current version counter.
    ///
    /// Strictly increases with every `set_value`; equal versions imply the
    /// value has not changed since the earlier observation.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }
}

impl Clone for SimpleQuote {
    fn clone(&self) -> Self {
        Self {
            bits: AtomicU64::new(self.bits.load(Ordering::Acquire)),
            version: AtomicU64::new(self.version.load(Ordering::Acquire)),
        }
    }
}
