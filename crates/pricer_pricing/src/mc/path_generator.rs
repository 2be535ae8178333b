//! Path generation from a one-dimensional process.

use pricer_models::models::{ProcessEnum, StochasticProcess1D};

use super::brownian_bridge::BrownianBridge;
use super::error::EngineError;
use super::path::Path;
use super::time_grid::TimeGrid;
use crate::rng::GaussianSequenceGenerator;

/// Generates paths of a process on a fixed grid.
///
/// Each call to [`next`](Self::next) consumes one Gaussian sequence;
/// [`antithetic`](Self::antithetic) reuses that sequence with flipped
/// signs and consumes nothing.
///
/// # Examples
///
/// ```rust
/// use pricer_models::models::{ConstantProcess, ProcessEnum};
/// use pricer_pricing::mc::{PathGenerator, TimeGrid};
/// use pricer_pricing::rng::GaussianSequenceGenerator;
///
/// let grid = TimeGrid::uniform(0.25, 10).unwrap();
/// let generator = GaussianSequenceGenerator::new(grid.size() - 1, 42);
/// let process = ProcessEnum::from(ConstantProcess::new(36.0, 0.01, 0.0, 0.2));
///
/// let mut paths = PathGenerator::new(process, grid, generator, false);
/// let path = paths.next().unwrap();
/// assert_eq!(path.len(), 11);
/// assert_eq!(path.front(), 36.0);
/// ```
#[derive(Debug, Clone)]
pub struct PathGenerator {
    process: ProcessEnum,
    generator: GaussianSequenceGenerator,
    bridge: Option<BrownianBridge>,
    increments: Vec<f64>,
    path: Path,
}

impl PathGenerator {
    /// Creates a generator for `process` on `grid`.
    ///
    /// # Panics
    ///
    /// If the sequence dimension differs from the number of grid steps.
    pub fn new(
        process: ProcessEnum,
        grid: TimeGrid,
        generator: GaussianSequenceGenerator,
        brownian_bridge: bool,
    ) -> Self {
        let steps = grid.size() - 1;
        assert_eq!(
            generator.dimension(),
            steps,
            "sequence dimension must equal the number of time steps"
        );
        let bridge = brownian_bridge.then(|| BrownianBridge::new(&grid));
        Self {
            process,
            generator,
            bridge,
            increments: vec![0.0; steps],
            path: Path::new(grid),
        }
    }

    /// Process the paths are drawn from.
    #[inline]
    pub fn process(&self) -> &ProcessEnum {
        &self.process
    }

    /// Whether draws go through a Brownian bridge.
    #[inline]
    pub fn uses_brownian_bridge(&self) -> bool {
        self.bridge.is_some()
    }

    /// Normal variates consumed so far.
    #[inline]
    pub fn draws(&self) -> u64 {
        self.generator.draws()
    }

    /// Next path.
    ///
    /// # Errors
    ///
    /// Propagates term-structure failures of the process.
    pub fn next(&mut self) -> Result<&Path, EngineError> {
        self.generator.next_sequence();
        self.build(1.0)
    }

    /// Mirror image of the last path.
    ///
    /// # Errors
    ///
    /// Propagates term-structure failures of the process.
    pub fn antithetic(&mut self) -> Result<&Path, EngineError> {
        self.build(-1.0)
    }

    fn build(&mut self, sign: f64) -> Result<&Path, EngineError> {
        let sequence = self.generator.last_sequence();
        match &self.bridge {
            Some(bridge) => bridge.transform(sequence, &mut self.increments),
            None => self.increments.copy_from_slice(sequence),
        }

        let (grid, values) = self.path.parts_mut();
        values[0] = self.process.x0();
        for i in 1..values.len() {
            let dw = sign * self.increments[i - 1];
            values[i] = self
                .process
                .evolve(grid.at(i - 1), values[i - 1], grid.dt(i - 1), dw)?;
        }
        Ok(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_models::models::ConstantProcess;

    fn generator(bridge: bool) -> PathGenerator {
        let grid = TimeGrid::uniform(1.0, 4).unwrap();
        let sequence = GaussianSequenceGenerator::new(4, 11);
        let process = ProcessEnum::from(ConstantProcess::new(100.0, 0.05, 0.0, 0.3));
        PathGenerator::new(process, grid, sequence, bridge)
    }

    #[test]
    fn test_antithetic_mirrors_log_increments() {
        let mut paths = generator(false);
        let drift = 0.05 - 0.5 * 0.09;
        let up = paths.next().unwrap().clone();
        let down = paths.antithetic().unwrap().clone();
        for i in 1..up.len() {
            let dt = up.time_grid().dt(i - 1);
            let a = (up[i] / up[i - 1]).ln() - drift * dt;
            let b = (down[i] / down[i - 1]).ln() - drift * dt;
            assert_relative_eq!(a, -b, epsilon = 1e-12);
        }
        assert_eq!(paths.draws(), 4);
    }

    #[test]
    fn test_bridge_terminal_value_uses_first_draw() {
        let mut bridged = generator(true);
        assert!(bridged.uses_brownian_bridge());
        let terminal = bridged.next().unwrap().back();

        let first_draw = GaussianSequenceGenerator::new(4, 11).next_sequence()[0];
        let drift = 0.05 - 0.5 * 0.09;
        let expected = 100.0 * (drift + 0.3 * first_draw).exp();
        assert_relative_eq!(terminal, expected, max_relative = 1e-12);
    }

    #[test]
    #[should_panic(expected = "sequence dimension")]
    fn test_dimension_mismatch_panics() {
        let grid = TimeGrid::uniform(1.0, 4).unwrap();
        let sequence = GaussianSequenceGenerator::new(3, 1);
        let process = ProcessEnum::from(ConstantProcess::new(1.0, 0.0, 0.0, 0.1));
        let _ = PathGenerator::new(process, grid, sequence, false);
    }
}
