//! Simulated asset paths.

use std::sync::Arc;

use crate::mc::time_grid::TimeGrid;

/// One realisation of the asset over a [`TimeGrid`].
///
/// The grid is shared across all paths of a simulation through an [`Arc`];
/// only the value vector is owned per path. Paths are reused across samples
/// by overwriting values in place.
#[derive(Clone, Debug)]
pub struct Path {
    grid: Arc<TimeGrid>,
    values: Vec<f64>,
}

impl Path {
    /// Creates a path with all values zeroed over the given grid.
    pub fn new(grid: Arc<TimeGrid>) -> Self {
        let values = vec![0.0; grid.len()];
        Self { grid, values }
    }

    /// The time grid underlying this path.
    #[inline]
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// The number of nodes, equal to `grid().len()`.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the path has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The asset value at node `i`.
    #[inline]
    pub fn at(&self, i: usize) -> f64 {
        self.values[i]
    }

    /// Mutable access to the value at node `i`.
    #[inline]
    pub fn set(&mut self, i: usize, value: f64) {
        self.values[i] = value;
    }

    /// The value at the first node.
    #[inline]
    pub fn first(&self) -> Option<f64> {
        self.values.first().copied()
    }

    /// The value at the last node, the asset level at the horizon.
    #[inline]
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// The values as a slice.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_path_is_zeroed() {
        let grid = Arc::new(TimeGrid::regular(1.0, 4));
        let path = Path::new(grid);
        assert_eq!(path.len(), 5);
        assert!(path.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_set_and_read() {
        let grid = Arc::new(TimeGrid::regular(1.0, 2));
        let mut path = Path::new(grid);
        path.set(0, 100.0);
        path.set(1, 104.0);
        path.set(2, 99.0);

        assert_eq!(path.at(1), 104.0);
        assert_eq!(path.first(), Some(100.0));
        assert_eq!(path.last(), Some(99.0));
    }

    #[test]
    fn test_grid_is_shared() {
        let grid = Arc::new(TimeGrid::regular(1.0, 4));
        let a = Path::new(Arc::clone(&grid));
        let b = Path::new(Arc::clone(&grid));
        assert_eq!(a.grid(), b.grid());
        assert_eq!(Arc::strong_count(&grid), 3);
    }
}
