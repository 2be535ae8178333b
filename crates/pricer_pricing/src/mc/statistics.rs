//! Running sample statistics (Welford's algorithm).

/// Mean and variance accumulated one sample at a time.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::RunningStatistics;
///
/// let mut stats = RunningStatistics::new();
/// for x in [1.0, 2.0, 3.0, 4.0] {
///     stats.add(x);
/// }
/// assert_eq!(stats.samples(), 4);
/// assert!((stats.mean() - 2.5).abs() < 1e-15);
/// assert!((stats.variance() - 5.0 / 3.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunningStatistics {
    samples: usize,
    mean: f64,
    m2: f64,
}

impl RunningStatistics {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one observation.
    #[inline]
    pub fn add(&mut self, value: f64) {
        self.samples += 1;
        let delta = value - self.mean;
        self.mean += delta / self.samples as f64;
        self.m2 += delta * (value - self.mean);
    }

    /// Number of observations.
    #[inline]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Sample mean, zero when empty.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Unbiased sample variance, zero below two observations.
    #[inline]
    pub fn variance(&self) -> f64 {
        if self.samples < 2 {
            0.0
        } else {
            self.m2 / (self.samples - 1) as f64
        }
    }

    /// Standard deviation.
    #[inline]
    pub fn std_deviation(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Standard error of the mean.
    #[inline]
    pub fn error_estimate(&self) -> f64 {
        if self.samples == 0 {
            0.0
        } else {
            (self.variance() / self.samples as f64).sqrt()
        }
    }
}
