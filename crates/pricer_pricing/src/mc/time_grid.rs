//! Time grids for path generation.

use super::error::EngineError;

/// Increasing sequence of times starting at zero.
///
/// Either uniform over `[0, end]` or built from a set of mandatory times
/// (fixing dates), with zero prepended when absent.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::TimeGrid;
///
/// let grid = TimeGrid::uniform(1.0, 4).unwrap();
/// assert_eq!(grid.size(), 5);
/// assert_eq!(grid.dt(0), 0.25);
///
/// let fixings = TimeGrid::from_mandatory_times(&[0.5, 0.25, 0.5]).unwrap();
/// assert_eq!(fixings.times(), &[0.0, 0.25, 0.5]);
/// assert_eq!(fixings.mandatory_times(), &[0.25, 0.5]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    times: Vec<f64>,
    dt: Vec<f64>,
    mandatory: Vec<f64>,
}

impl TimeGrid {
    /// `steps` equal intervals over `[0, end]`.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `end <= 0` or `steps == 0`.
    pub fn uniform(end: f64, steps: usize) -> Result<Self, EngineError> {
        if end.is_nan() || end <= 0.0 {
            return Err(EngineError::InvalidConfiguration(format!(
                "time grid end must be positive, got {end}"
            )));
        }
        if steps == 0 {
            return Err(EngineError::InvalidConfiguration(
                "time grid needs at least one step".to_string(),
            ));
        }
        let dt = end / steps as f64;
        let mut times: Vec<f64> = (0..=steps).map(|i| dt * i as f64).collect();
        // avoid accumulated rounding at the end point
        times[steps] = end;
        Ok(Self::from_sorted(times, vec![end]))
    }

    /// Grid through the given times, sorted and deduplicated.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `times` is empty, holds a negative or
    /// non-finite value, or contains only zero.
    pub fn from_mandatory_times(times: &[f64]) -> Result<Self, EngineError> {
        if times.is_empty() {
            return Err(EngineError::InvalidConfiguration(
                "no mandatory times given".to_string(),
            ));
        }
        if let Some(bad) = times.iter().find(|t| !t.is_finite() || **t < 0.0) {
            return Err(EngineError::InvalidConfiguration(format!(
                "mandatory times must be finite and non-negative, got {bad}"
            )));
        }

        let mut mandatory = times.to_vec();
        mandatory.sort_by(f64::total_cmp);
        mandatory.dedup();

        let mut grid = mandatory.clone();
        if grid[0] > 0.0 {
            grid.insert(0, 0.0);
        }
        if grid.len() < 2 {
            return Err(EngineError::InvalidConfiguration(
                "time grid needs a positive time".to_string(),
            ));
        }
        Ok(Self::from_sorted(grid, mandatory))
    }

    fn from_sorted(times: Vec<f64>, mandatory: Vec<f64>) -> Self {
        let dt = times.windows(2).map(|w| w[1] - w[0]).collect();
        Self {
            times,
            dt,
            mandatory,
        }
    }

    /// Number of points, zero included.
    #[inline]
    pub fn size(&self) -> usize {
        self.times.len()
    }

    /// Grid points.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Point `i`.
    #[inline]
    pub fn at(&self, i: usize) -> f64 {
        self.times[i]
    }

    /// Length of interval `[t_i, t_{i+1}]`.
    #[inline]
    pub fn dt(&self, i: usize) -> f64 {
        self.dt[i]
    }

    /// Last point.
    #[inline]
    pub fn back(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    /// Times the grid was required to hit.
    #[inline]
    pub fn mandatory_times(&self) -> &[f64] {
        &self.mandatory
    }
}
