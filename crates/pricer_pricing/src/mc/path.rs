//! Single simulated trajectory.

use std::ops::Index;

use super::time_grid::TimeGrid;

/// Values of the underlying on each point of a time grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    grid: TimeGrid,
    values: Vec<f64>,
}

impl Path {
    /// Path on `grid` with every value set to zero.
    pub fn new(grid: TimeGrid) -> Self {
        let values = vec![0.0; grid.size()];
        Self { grid, values }
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for paths built on a valid grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Grid the values live on.
    #[inline]
    pub fn time_grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// All values, initial value first.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub(crate) fn parts_mut(&mut self) -> (&TimeGrid, &mut [f64]) {
        (&self.grid, &mut self.values)
    }

    /// Initial value.
    #[inline]
    pub fn front(&self) -> f64 {
        self.values[0]
    }

    /// Terminal value.
    #[inline]
    pub fn back(&self) -> f64 {
        self.values[self.values.len() - 1]
    }
}

impl Index<usize> for Path {
    type Output = f64;

    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.values[i]
    }
}
