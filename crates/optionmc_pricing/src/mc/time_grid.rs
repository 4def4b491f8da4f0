//! Discretised time axis for path simulation.

/// An ordered grid of times from 0 to a simulation horizon.
///
/// The grid always includes t = 0 as its first node, so a grid with `steps`
/// intervals holds `steps + 1` times.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeGrid {
    times: Vec<f64>,
    dt: Vec<f64>,
}

impl TimeGrid {
    /// Builds a uniformly spaced grid over `[0, end]` with `steps` intervals.
    ///
    /// The last node is set to `end` exactly rather than accumulated, so
    /// rounding drift cannot shift the horizon.
    pub fn regular(end: f64, steps: usize) -> Self {
        debug_assert!(end > 0.0, "grid horizon must be positive");
        debug_assert!(steps > 0, "grid must have at least one step");

        let dt_uniform = end / steps as f64;
        let mut times = Vec::with_capacity(steps + 1);
        times.push(0.0);
        for i in 1..steps {
            times.push(i as f64 * dt_uniform);
        }
        times.push(end);

        let dt = times.windows(2).map(|w| w[1] - w[0]).collect();
        Self { times, dt }
    }

    /// The number of intervals.
    #[inline]
    pub fn steps(&self) -> usize {
        self.dt.len()
    }

    /// The number of grid nodes, `steps() + 1`.
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the grid has no nodes. Always false for constructed grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// The time at node `i`.
    #[inline]
    pub fn at(&self, i: usize) -> f64 {
        self.times[i]
    }

    /// The length of interval `i`, between nodes `i` and `i + 1`.
    #[inline]
    pub fn dt(&self, i: usize) -> f64 {
        self.dt[i]
    }

    /// The simulation horizon, the last grid node.
    #[inline]
    pub fn end(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    /// The grid nodes as a slice.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }
}
