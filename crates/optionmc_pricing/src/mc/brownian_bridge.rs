//! Brownian bridge variate transform.

use crate::mc::time_grid::TimeGrid;

/// Rearranges a vector of independent standard normal variates so that the
/// first variate fixes the terminal Wiener value and subsequent variates
/// fill in conditional midpoints.
///
/// The output is again a vector of per-interval standard normals, so path
/// generation consumes it exactly like raw draws. The joint distribution of
/// the resulting Wiener path is unchanged; what changes is which variates
/// carry the most variance, which matters for low-discrepancy sources and
/// leaves pseudo-random pricing statistically identical.
#[derive(Clone, Debug)]
pub struct BrownianBridge {
    size: usize,
    t: Vec<f64>,
    sqrt_dt: Vec<f64>,
    bridge_index: Vec<usize>,
    left_index: Vec<usize>,
    right_index: Vec<usize>,
    left_weight: Vec<f64>,
    right_weight: Vec<f64>,
    std_dev: Vec<f64>,
}

impl BrownianBridge {
    /// Precomputes the construction order and weights for the given grid.
    pub fn new(grid: &TimeGrid) -> Self {
        let size = grid.steps();
        debug_assert!(size > 0, "bridge needs at least one step");

        let t: Vec<f64> = (0..size).map(|i| grid.at(i + 1)).collect();

        let mut sqrt_dt = vec![0.0; size];
        sqrt_dt[0] = t[0].sqrt();
        for i in 1..size {
            sqrt_dt[i] = (t[i] - t[i - 1]).sqrt();
        }

        let mut bridge_index = vec![0usize; size];
        let mut left_index = vec![0usize; size];
        let mut right_index = vec![0usize; size];
        let mut left_weight = vec![0.0; size];
        let mut right_weight = vec![0.0; size];
        let mut std_dev = vec![0.0; size];

        // map[i] == 0 means Wiener node i is not yet constructed;
        // otherwise map[i] - 1 is the variate index that constructs it.
        let mut map = vec![0usize; size];

        // The first variate sets the terminal value in one global step.
        map[size - 1] = 1;
        bridge_index[0] = size - 1;
        std_dev[0] = t[size - 1].sqrt();
        left_weight[0] = 0.0;
        right_weight[0] = 0.0;

        let mut j = 0usize;
        for i in 1..size {
            while map[j] != 0 {
                j += 1;
            }
            let mut k = j;
            while map[k] == 0 {
                k += 1;
            }
            // Bisect the unconstructed stretch [j, k).
            let l = j + ((k - 1 - j) >> 1);
            map[l] = i;
            bridge_index[i] = l;
            left_index[i] = j;
            right_index[i] = k;
            if j != 0 {
                left_weight[i] = (t[k] - t[l]) / (t[k] - t[j - 1]);
                right_weight[i] = (t[l] - t[j - 1]) / (t[k] - t[j - 1]);
                std_dev[i] = ((t[l] - t[j - 1]) * (t[k] - t[l]) / (t[k] - t[j - 1])).sqrt();
            } else {
                left_weight[i] = (t[k] - t[l]) / t[k];
                right_weight[i] = t[l] / t[k];
                std_dev[i] = (t[l] * (t[k] - t[l]) / t[k]).sqrt();
            }
            j = k + 1;
            if j >= size {
                j = 0;
            }
        }

        Self {
            size,
            t,
            sqrt_dt,
            bridge_index,
            left_index,
            right_index,
            left_weight,
            right_weight,
            std_dev,
        }
    }

    /// The number of variates consumed and produced per path.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The times of the Wiener nodes, excluding t = 0.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.t
    }

    /// Transforms independent standard normals into bridge-ordered
    /// per-interval standard normals, in place via the output buffer.
    ///
    /// `input` and `output` must both hold [`size`](Self::size) values and
    /// must not alias.
    pub fn transform(&self, input: &[f64], output: &mut [f64]) {
        debug_assert_eq!(input.len(), self.size);
        debug_assert_eq!(output.len(), self.size);

        // Build the Wiener path in the output buffer.
        output[self.size - 1] = self.std_dev[0] * input[0];
        for i in 1..self.size {
            let j = self.left_index[i];
            let k = self.right_index[i];
            let l = self.bridge_index[i];
            if j != 0 {
                output[l] = self.left_weight[i] * output[j - 1]
                    + self.right_weight[i] * output[k]
                    + self.std_dev[i] * input[i];
            } else {
                output[l] = self.right_weight[i] * output[k] + self.std_dev[i] * input[i];
            }
        }

        // Difference back to increments and normalise to unit variance.
        for i in (1..self.size).rev() {
            output[i] -= output[i - 1];
            output[i] /= self.sqrt_dt[i];
        }
        output[0] /= self.sqrt_dt[0];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::rng::{NormalSequence, PseudoNormalSequence};

    fn wiener_from_normals(grid: &TimeGrid, normals: &[f64]) -> Vec<f64> {
        let mut w = Vec::with_capacity(normals.len());
        let mut acc = 0.0;
        for (i, &z) in normals.iter().enumerate() {
            acc += grid.dt(i).sqrt() * z;
            w.push(acc);
        }
        w
    }

    #[test]
    fn test_single_step_passthrough() {
        let grid = TimeGrid::regular(1.0, 1);
        let bridge = BrownianBridge::new(&grid);

        let input = [0.73];
        let mut output = [0.0];
        bridge.transform(&input, &mut output);
        // With one step the terminal draw is the only increment.
        assert_relative_eq!(output[0], 0.73, epsilon = 1e-15);
    }

    #[test]
    fn test_first_variate_fixes_terminal_value() {
        let grid = TimeGrid::regular(4.0, 8);
        let bridge = BrownianBridge::new(&grid);

        let input = [1.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let mut output = [0.0; 8];
        bridge.transform(&input, &mut output);

        let w = wiener_from_normals(&grid, &output);
        assert_relative_eq!(w[7], 4.0_f64.sqrt() * 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_variates_yield_zero_path() {
        let grid = TimeGrid::regular(1.0, 5);
        let bridge = BrownianBridge::new(&grid);

        let input = [0.0; 5];
        let mut output = [1.0; 5];
        bridge.transform(&input, &mut output);
        for &z in &output {
            assert_relative_eq!(z, 0.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_increment_moments_are_preserved() {
        // The transform is a rotation of the Gaussian vector, so each
        // output increment must still be standard normal.
        let grid = TimeGrid::regular(1.0, 4);
        let bridge = BrownianBridge::new(&grid);
        let mut rng = PseudoNormalSequence::from_seed(2024);

        let n = 50_000;
        let mut input = [0.0; 4];
        let mut output = [0.0; 4];
        let mut sum = [0.0; 4];
        let mut sum_sq = [0.0; 4];

        for _ in 0..n {
            rng.fill_normal(&mut input);
            bridge.transform(&input, &mut output);
            for i in 0..4 {
                sum[i] += output[i];
                sum_sq[i] += output[i] * output[i];
            }
        }

        for i in 0..4 {
            let mean = sum[i] / n as f64;
            let var = sum_sq[i] / n as f64 - mean * mean;
            assert!(mean.abs() < 0.03, "increment {} mean = {}", i, mean);
            assert!((var - 1.0).abs() < 0.05, "increment {} var = {}", i, var);
        }
    }

    #[test]
    fn test_construction_order_bisects() {
        let grid = TimeGrid::regular(1.0, 8);
        let bridge = BrownianBridge::new(&grid);

        assert_eq!(bridge.size(), 8);
        // Terminal node first, then the midpoint of the remaining stretch.
        assert_eq!(bridge.bridge_index[0], 7);
        assert_eq!(bridge.bridge_index[1], 3);
    }
}
