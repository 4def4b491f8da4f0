//! Path generation over a stochastic process.

use std::sync::Arc;

use optionmc_models::process::{ProcessError, StochasticProcess1D};

use crate::mc::brownian_bridge::BrownianBridge;
use crate::mc::path::Path;
use crate::mc::time_grid::TimeGrid;
use crate::rng::NormalSequence;

/// Draws normal variates and evolves a process along a [`TimeGrid`].
///
/// The generator owns the variate source and the per-path scratch buffers;
/// paths themselves are owned by the caller and overwritten in place, so the
/// sampling loop allocates nothing.
///
/// The process is supplied per call rather than stored, keeping the
/// generator free of the process lifetime and letting one generator serve
/// both the frozen and the term-structure-aware dynamics.
pub struct PathGenerator<G: NormalSequence> {
    grid: Arc<TimeGrid>,
    rng: G,
    bridge: Option<BrownianBridge>,
    raw: Vec<f64>,
    variates: Vec<f64>,
}

impl<G: NormalSequence> PathGenerator<G> {
    /// Creates a generator over the given grid.
    ///
    /// With `brownian_bridge` set, raw draws are routed through the
    /// [`BrownianBridge`] transform before driving the process.
    pub fn new(grid: Arc<TimeGrid>, seed: u64, brownian_bridge: bool) -> Self {
        let steps = grid.steps();
        let bridge = brownian_bridge.then(|| BrownianBridge::new(&grid));
        Self {
            grid,
            rng: G::from_seed(seed),
            bridge,
            raw: vec![0.0; steps],
            variates: vec![0.0; steps],
        }
    }

    /// The time grid paths are generated over.
    #[inline]
    pub fn grid(&self) -> &Arc<TimeGrid> {
        &self.grid
    }

    /// Allocates a path matching this generator's grid.
    pub fn new_path(&self) -> Path {
        Path::new(Arc::clone(&self.grid))
    }

    fn draw_variates(&mut self) {
        self.rng.fill_normal(&mut self.raw);
        match &self.bridge {
            Some(bridge) => bridge.transform(&self.raw, &mut self.variates),
            None => self.variates.copy_from_slice(&self.raw),
        }
    }

    fn evolve_into<P: StochasticProcess1D>(
        &self,
        process: &P,
        path: &mut Path,
        flip: bool,
    ) -> Result<(), ProcessError> {
        let sign = if flip { -1.0 } else { 1.0 };
        let mut x = process.x0();
        path.set(0, x);
        for i in 0..self.grid.steps() {
            let t = self.grid.at(i);
            let dt = self.grid.dt(i);
            x = process.evolve(t, x, dt, sign * self.variates[i])?;
            path.set(i + 1, x);
        }
        Ok(())
    }

    /// Draws fresh variates and fills `path` with one realisation.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the process coefficients, e.g. a local
    /// volatility evaluation outside its stable region.
    pub fn next_path<P: StochasticProcess1D>(
        &mut self,
        process: &P,
        path: &mut Path,
    ) -> Result<(), ProcessError> {
        self.draw_variates();
        self.evolve_into(process, path, false)
    }

    /// Draws fresh variates once and fills `path` and `antithetic` with the
    /// realisation and its sign-flipped mirror.
    ///
    /// Both paths consume the same draws, so a generator running in
    /// antithetic mode uses exactly as many variates per sample as one
    /// running without it.
    pub fn next_antithetic_pair<P: StochasticProcess1D>(
        &mut self,
        process: &P,
        path: &mut Path,
        antithetic: &mut Path,
    ) -> Result<(), ProcessError> {
        self.draw_variates();
        self.evolve_into(process, path, false)?;
        self.evolve_into(process, antithetic, true)
    }
}
