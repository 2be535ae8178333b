//! Sampling loop: fixed sample count or tolerance-driven convergence.

use tracing::debug;

use super::config::SimulationConfiguration;
use super::error::EngineError;
use super::path_generator::PathGenerator;
use super::path_pricers::PathPricer;
use super::statistics::RunningStatistics;

/// Minimum number of samples drawn before the tolerance is checked.
pub const MIN_SAMPLES: usize = 1023;

/// Outcome of a simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct McResults {
    /// Mean discounted payoff.
    pub npv: f64,
    /// Standard error of `npv`.
    pub error_estimate: f64,
    /// Number of samples accumulated.
    pub samples: usize,
}

/// Drives a path generator and a path pricer into a statistics accumulator.
///
/// With antithetic variates each sample is the average of a path and its
/// mirror image.
#[derive(Debug)]
pub struct McSimulation {
    paths: PathGenerator,
    pricer: PathPricer,
    antithetic: bool,
    statistics: RunningStatistics,
}

impl McSimulation {
    /// Creates the simulation.
    pub fn new(paths: PathGenerator, pricer: PathPricer, antithetic: bool) -> Self {
        Self {
            paths,
            pricer,
            antithetic,
            statistics: RunningStatistics::new(),
        }
    }

    /// Accumulated statistics.
    pub fn statistics(&self) -> &RunningStatistics {
        &self.statistics
    }

    /// Path generator in use.
    pub fn path_generator(&self) -> &PathGenerator {
        &self.paths
    }

    /// Draws `count` more samples.
    ///
    /// # Errors
    ///
    /// Propagates path generation or pricing failures.
    pub fn add_samples(&mut self, count: usize) -> Result<(), EngineError> {
        for _ in 0..count {
            let path = self.paths.next()?;
            let mut value = self.pricer.price(path)?;
            if self.antithetic {
                let mirror = self.paths.antithetic()?;
                value = 0.5 * (value + self.pricer.price(mirror)?);
            }
            self.statistics.add(value);
        }
        Ok(())
    }

    /// Runs until `samples` have been accumulated.
    ///
    /// # Errors
    ///
    /// Propagates path generation or pricing failures.
    pub fn value_with_samples(&mut self, samples: usize) -> Result<McResults, EngineError> {
        let done = self.statistics.samples();
        if samples < done {
            return Err(EngineError::InvalidConfiguration(format!(
                "number of samples ({samples}) lower than samples already used ({done})"
            )));
        }
        self.add_samples(samples - done)?;
        Ok(self.results())
    }

    /// Runs until the error estimate drops to `tolerance`.
    ///
    /// Starts with [`MIN_SAMPLES`] and then grows by a conservative
    /// estimate of the samples still needed,
    /// `max(n (err/tol)² 0.8 - n, MIN_SAMPLES)`, capped by `max_samples`.
    ///
    /// # Errors
    ///
    /// `MaxSamplesReached` if the cap is hit above tolerance.
    pub fn value_with_tolerance(
        &mut self,
        tolerance: f64,
        max_samples: usize,
    ) -> Result<McResults, EngineError> {
        let mut sample_number = self.statistics.samples();
        if sample_number < MIN_SAMPLES {
            self.add_samples(MIN_SAMPLES - sample_number)?;
            sample_number = self.statistics.samples();
        }

        let mut error = self.statistics.error_estimate();
        while error > tolerance {
            if sample_number >= max_samples {
                return Err(EngineError::MaxSamplesReached {
                    max_samples,
                    error,
                    tolerance,
                });
            }
            let order = (error * error) / (tolerance * tolerance);
            let estimate = (sample_number as f64 * order * 0.8 - sample_number as f64)
                .max(MIN_SAMPLES as f64);
            let next_batch = (estimate as usize).min(max_samples - sample_number);
            debug!(
                sample_number,
                next_batch, error, tolerance, "Extending simulation"
            );

            sample_number += next_batch;
            self.add_samples(next_batch)?;
            error = self.statistics.error_estimate();
        }
        Ok(self.results())
    }

    /// Runs according to `config`.
    ///
    /// # Errors
    ///
    /// Propagates sampling failures and `MaxSamplesReached`.
    pub fn run(&mut self, config: &SimulationConfiguration) -> Result<McResults, EngineError> {
        match (config.tolerance(), config.samples()) {
            (Some(tolerance), _) => {
                self.value_with_tolerance(tolerance, config.max_samples().unwrap_or(usize::MAX))
            }
            (None, Some(samples)) => self.value_with_samples(samples),
            (None, None) => Err(EngineError::InvalidConfiguration(
                "neither samples nor tolerance were provided".to_string(),
            )),
        }
    }

    /// Current mean and error estimate.
    pub fn results(&self) -> McResults {
        McResults {
            npv: self.statistics.mean(),
            error_estimate: self.statistics.error_estimate(),
            samples: self.statistics.samples(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::{EuropeanPathPricer, TimeGrid};
    use crate::rng::GaussianSequenceGenerator;
    use pricer_models::instruments::{OptionType, PlainVanillaPayoff};
    use pricer_models::models::{ConstantProcess, ProcessEnum};

    fn simulation(antithetic: bool) -> McSimulation {
        let grid = TimeGrid::uniform(0.25, 4).unwrap();
        let generator = GaussianSequenceGenerator::new(4, 42);
        let process = ProcessEnum::from(ConstantProcess::new(36.0, 0.01, 0.0, 0.2));
        let paths = PathGenerator::new(process, grid, generator, false);
        let payoff = PlainVanillaPayoff::new(OptionType::Put, 40.0).unwrap();
        let pricer = PathPricer::European(EuropeanPathPricer::new(payoff, (-0.0025_f64).exp()));
        McSimulation::new(paths, pricer, antithetic)
    }

    #[test]
    fn test_fixed_samples() {
        let mut sim = simulation(false);
        let results = sim.value_with_samples(500).unwrap();
        assert_eq!(results.samples, 500);
        assert!(results.npv > 3.0 && results.npv < 6.0);
        assert_eq!(sim.path_generator().draws(), 2000);
    }

    #[test]
    fn test_antithetic_draws_once_per_pair() {
        let mut sim = simulation(true);
        sim.value_with_samples(100).unwrap();
        assert_eq!(sim.statistics().samples(), 100);
        assert_eq!(sim.path_generator().draws(), 400);
    }

    #[test]
    fn test_fewer_samples_than_done_rejected() {
        let mut sim = simulation(false);
        sim.value_with_samples(10).unwrap();
        assert!(matches!(
            sim.value_with_samples(5),
            Err(EngineError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_tolerance_loop_converges() {
        let mut sim = simulation(false);
        let results = sim.value_with_tolerance(0.05, usize::MAX).unwrap();
        assert!(results.error_estimate <= 0.05);
        assert!(results.samples >= MIN_SAMPLES);
    }

    #[test]
    fn test_tolerance_loop_hits_cap() {
        let mut sim = simulation(false);
        let result = sim.value_with_tolerance(1e-6, 2_000);
        assert!(matches!(
            result,
            Err(EngineError::MaxSamplesReached { max_samples: 2_000, .. })
        ));
        assert_eq!(sim.statistics().samples(), 2_000);
    }
}
