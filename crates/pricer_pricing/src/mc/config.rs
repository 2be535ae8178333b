//! Monte Carlo simulation configuration.

use super::error::EngineError;

/// Settings shared by the three option engines.
///
/// Exactly one of `samples` and `tolerance` is set. At most one of
/// `time_steps` and `time_steps_per_year` is set; step-based engines
/// (European, barrier) require one of them at pricing time.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::SimulationConfiguration;
///
/// let config = SimulationConfiguration::builder()
///     .time_steps(10)
///     .samples(1_000)
///     .seed(42)
///     .frozen_parameters(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.time_steps(), Some(10));
/// assert!(config.frozen_parameters());
///
/// // samples and tolerance are mutually exclusive
/// assert!(SimulationConfiguration::builder()
///     .samples(1_000)
///     .tolerance(0.01)
///     .build()
///     .is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfiguration {
    time_steps: Option<usize>,
    time_steps_per_year: Option<usize>,
    samples: Option<usize>,
    tolerance: Option<f64>,
    max_samples: Option<usize>,
    seed: u64,
    frozen_parameters: bool,
    brownian_bridge: bool,
    antithetic: bool,
    biased_barrier: bool,
}

impl SimulationConfiguration {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigurationBuilder {
        SimulationConfigurationBuilder::default()
    }

    /// Fixed number of time steps.
    #[inline]
    pub fn time_steps(&self) -> Option<usize> {
        self.time_steps
    }

    /// Number of time steps per year of maturity.
    #[inline]
    pub fn time_steps_per_year(&self) -> Option<usize> {
        self.time_steps_per_year
    }

    /// Fixed number of samples.
    #[inline]
    pub fn samples(&self) -> Option<usize> {
        self.samples
    }

    /// Absolute tolerance on the error estimate.
    #[inline]
    pub fn tolerance(&self) -> Option<f64> {
        self.tolerance
    }

    /// Sample cap for the tolerance loop.
    #[inline]
    pub fn max_samples(&self) -> Option<usize> {
        self.max_samples
    }

    /// Seed of the Gaussian sequence.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Whether paths are generated by a frozen-parameter process.
    #[inline]
    pub fn frozen_parameters(&self) -> bool {
        self.frozen_parameters
    }

    /// Whether draws are mapped through a Brownian bridge.
    #[inline]
    pub fn brownian_bridge(&self) -> bool {
        self.brownian_bridge
    }

    /// Whether each sample averages a path with its antithetic twin.
    #[inline]
    pub fn antithetic(&self) -> bool {
        self.antithetic
    }

    /// Whether the barrier engine skips the crossing correction.
    #[inline]
    pub fn biased_barrier(&self) -> bool {
        self.biased_barrier
    }

    /// Copy of this configuration with the frozen flag replaced.
    pub fn with_frozen_parameters(&self, frozen: bool) -> Self {
        Self {
            frozen_parameters: frozen,
            ..self.clone()
        }
    }

    /// Number of steps for a grid ending at `maturity` (years).
    ///
    /// `time_steps_per_year` is truncated and floored at one step.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` when neither step setting is present.
    pub fn steps_for(&self, maturity: f64) -> Result<usize, EngineError> {
        match (self.time_steps, self.time_steps_per_year) {
            (Some(steps), _) => Ok(steps),
            (None, Some(per_year)) => Ok(((per_year as f64 * maturity) as usize).max(1)),
            (None, None) => Err(EngineError::InvalidConfiguration(
                "time steps not specified".to_string(),
            )),
        }
    }

    /// Checks the invariants listed on the type.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` describing the first violation found.
    pub fn validate(&self) -> Result<(), EngineError> {
        let invalid = |msg: &str| Err(EngineError::InvalidConfiguration(msg.to_string()));

        match (self.samples, self.tolerance) {
            (Some(_), Some(_)) => return invalid("both samples and tolerance were provided"),
            (None, None) => return invalid("neither samples nor tolerance were provided"),
            (Some(0), None) => return invalid("samples must be positive"),
            (None, Some(tol)) if tol.is_nan() || tol <= 0.0 => {
                return invalid("tolerance must be positive")
            }
            _ => {}
        }
        if self.time_steps.is_some() && self.time_steps_per_year.is_some() {
            return invalid("both time steps and time steps per year were provided");
        }
        if self.time_steps == Some(0) {
            return invalid("time steps must be positive");
        }
        if self.time_steps_per_year == Some(0) {
            return invalid("time steps per year must be positive");
        }
        if self.max_samples == Some(0) {
            return invalid("max samples must be positive");
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfiguration`].
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigurationBuilder {
    time_steps: Option<usize>,
    time_steps_per_year: Option<usize>,
    samples: Option<usize>,
    tolerance: Option<f64>,
    max_samples: Option<usize>,
    seed: u64,
    frozen_parameters: bool,
    brownian_bridge: bool,
    antithetic: bool,
    biased_barrier: bool,
}

impl SimulationConfigurationBuilder {
    /// Fixed number of time steps.
    #[inline]
    pub fn time_steps(mut self, steps: usize) -> Self {
        self.time_steps = Some(steps);
        self
    }

    /// Time steps per year of maturity.
    #[inline]
    pub fn time_steps_per_year(mut self, steps: usize) -> Self {
        self.time_steps_per_year = Some(steps);
        self
    }

    /// Fixed number of samples.
    #[inline]
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = Some(samples);
        self
    }

    /// Absolute tolerance on the error estimate.
    #[inline]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Sample cap for the tolerance loop.
    #[inline]
    pub fn max_samples(mut self, samples: usize) -> Self {
        self.max_samples = Some(samples);
        self
    }

    /// Seed of the Gaussian sequence.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generate paths from a frozen-parameter process.
    #[inline]
    pub fn frozen_parameters(mut self, frozen: bool) -> Self {
        self.frozen_parameters = frozen;
        self
    }

    /// Map draws through a Brownian bridge.
    #[inline]
    pub fn brownian_bridge(mut self, bridge: bool) -> Self {
        self.brownian_bridge = bridge;
        self
    }

    /// Use antithetic variates.
    #[inline]
    pub fn antithetic(mut self, antithetic: bool) -> Self {
        self.antithetic = antithetic;
        self
    }

    /// Price barriers without the crossing correction.
    #[inline]
    pub fn biased_barrier(mut self, biased: bool) -> Self {
        self.biased_barrier = biased;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if the settings violate the invariants of
    /// [`SimulationConfiguration`].
    pub fn build(self) -> Result<SimulationConfiguration, EngineError> {
        let config = SimulationConfiguration {
            time_steps: self.time_steps,
            time_steps_per_year: self.time_steps_per_year,
            samples: self.samples,
            tolerance: self.tolerance,
            max_samples: self.max_samples,
            seed: self.seed,
            frozen_parameters: self.frozen_parameters,
            brownian_bridge: self.brownian_bridge,
            antithetic: self.antithetic,
            biased_barrier: self.biased_barrier,
        };
        config.validate()?;
        Ok(config)
    }
}
