//! Running sample statistics.

/// Accumulates samples with Welford's online algorithm.
///
/// Mean and variance are updated in a single pass without storing samples,
/// so the accumulator stays O(1) in memory however many paths run through
/// it. Welford's update is numerically stable where the naive
/// sum-of-squares formula cancels catastrophically.
#[derive(Clone, Debug, Default)]
pub struct Statistics {
    count: usize,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl Statistics {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Adds one sample.
    pub fn add(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// The number of samples added.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// The sample mean. NaN when no samples were added.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.mean
        }
    }

    /// The unbiased sample variance. NaN with fewer than two samples.
    pub fn sample_variance(&self) -> f64 {
        if self.count < 2 {
            f64::NAN
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }

    /// The sample standard deviation. NaN with fewer than two samples.
    pub fn std_dev(&self) -> f64 {
        self.sample_variance().sqrt()
    }

    /// The standard error of the mean, sqrt(variance / n).
    ///
    /// NaN with fewer than two samples.
    pub fn error_estimate(&self) -> f64 {
        (self.sample_variance() / self.count as f64).sqrt()
    }

    /// The smallest sample seen. NaN when no samples were added.
    pub fn min(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.min
        }
    }

    /// The largest sample seen. NaN when no samples were added.
    pub fn max(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.max
        }
    }
}
