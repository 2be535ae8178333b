//! Brownian bridge path construction.
//!
//! The first draw fixes the terminal value of the Brownian motion, the
//! next one the midpoint, and so on by bisection. The result is returned
//! as normalised increments, so a path generator consumes bridged draws
//! exactly like plain ones.
//!
//! ```text
//! W(t_l) = a W(t_j) + b W(t_k) + s Z,
//! a = (t_k - t_l) / (t_k - t_j),  b = (t_l - t_j) / (t_k - t_j),
//! s = sqrt((t_l - t_j)(t_k - t_l) / (t_k - t_j))
//! ```

use super::time_grid::TimeGrid;

/// Bisection schedule for one time grid.
#[derive(Debug, Clone)]
pub struct BrownianBridge {
    times: Vec<f64>,
    sqrt_dt: Vec<f64>,
    bridge_index: Vec<usize>,
    left_index: Vec<usize>,
    right_index: Vec<usize>,
    left_weight: Vec<f64>,
    right_weight: Vec<f64>,
    std_dev: Vec<f64>,
}

impl BrownianBridge {
    /// Bridge over the positive points of `grid`.
    pub fn new(grid: &TimeGrid) -> Self {
        let times = grid.times()[1..].to_vec();
        let size = times.len();

        let mut sqrt_dt = Vec::with_capacity(size);
        let mut previous = 0.0;
        for &t in &times {
            sqrt_dt.push((t - previous).sqrt());
            previous = t;
        }

        let mut bridge = Self {
            times,
            sqrt_dt,
            bridge_index: vec![0; size],
            left_index: vec![0; size],
            right_index: vec![0; size],
            left_weight: vec![0.0; size],
            right_weight: vec![0.0; size],
            std_dev: vec![0.0; size],
        };
        if size > 0 {
            bridge.build_schedule();
        }
        bridge
    }

    fn build_schedule(&mut self) {
        let size = self.times.len();
        let t = &self.times;

        // filled[i] != 0 once point i has been assigned a draw
        let mut filled = vec![0usize; size];
        filled[size - 1] = 1;
        self.bridge_index[0] = size - 1;
        self.std_dev[0] = t[size - 1].sqrt();

        let mut j = 0;
        for i in 1..size {
            while filled[j] != 0 {
                j += 1;
            }
            let mut k = j;
            while filled[k] == 0 {
                k += 1;
            }
            let l = j + ((k - 1 - j) >> 1);
            filled[l] = i;
            self.bridge_index[i] = l;
            self.left_index[i] = j;
            self.right_index[i] = k;

            let t_left = if j == 0 { 0.0 } else { t[j - 1] };
            let span = t[k] - t_left;
            self.left_weight[i] = (t[k] - t[l]) / span;
            self.right_weight[i] = (t[l] - t_left) / span;
            self.std_dev[i] = ((t[l] - t_left) * (t[k] - t[l]) / span).sqrt();

            j = k + 1;
            if j >= size {
                j = 0;
            }
        }
    }

    /// Number of draws consumed per path.
    #[inline]
    pub fn size(&self) -> usize {
        self.times.len()
    }

    /// Maps independent draws to standardised Brownian increments.
    ///
    /// `output[i]` is `(W(t_{i+1}) - W(t_i)) / sqrt(t_{i+1} - t_i)`.
    pub fn transform(&self, draws: &[f64], output: &mut [f64]) {
        let size = self.size();
        if size == 0 {
            return;
        }

        output[size - 1] = self.std_dev[0] * draws[0];
        for i in 1..size {
            let j = self.left_index[i];
            let k = self.right_index[i];
            let l = self.bridge_index[i];
            let left = if j == 0 { 0.0 } else { output[j - 1] };
            output[l] = self.left_weight[i] * left
                + self.right_weight[i] * output[k]
                + self.std_dev[i] * draws[i];
        }

        for i in (1..size).rev() {
            output[i] = (output[i] - output[i - 1]) / self.sqrt_dt[i];
        }
        output[0] /= self.sqrt_dt[0];
    }
}
