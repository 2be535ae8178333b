//! Fixed-dimension random sequence generators.
//!
//! One sequence drives one path: its dimension equals the number of time
//! steps of the grid the path is generated on.

use super::prng::PricerRng;

/// Standard normal sequences of a fixed dimension.
///
/// Keeps the last sequence so antithetic paths can reuse it, and counts
/// the variates drawn so far.
#[derive(Debug, Clone)]
pub struct GaussianSequenceGenerator {
    rng: PricerRng,
    sequence: Vec<f64>,
    draws: u64,
}

impl GaussianSequenceGenerator {
    /// Creates a generator of `dimension`-long sequences.
    pub fn new(dimension: usize, seed: u64) -> Self {
        Self {
            rng: PricerRng::from_seed(seed),
            sequence: vec![0.0; dimension],
            draws: 0,
        }
    }

    /// Length of each sequence.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.sequence.len()
    }

    /// Draws a fresh sequence.
    pub fn next_sequence(&mut self) -> &[f64] {
        self.rng.fill_normal(&mut self.sequence);
        self.draws += self.sequence.len() as u64;
        &self.sequence
    }

    /// The most recent sequence, without drawing.
    #[inline]
    pub fn last_sequence(&self) -> &[f64] {
        &self.sequence
    }

    /// Number of normal variates consumed.
    #[inline]
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Seed of the underlying stream.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

/// Uniform (0, 1] sequences of a fixed dimension.
#[derive(Debug, Clone)]
pub struct UniformSequenceGenerator {
    rng: PricerRng,
    sequence: Vec<f64>,
}

impl UniformSequenceGenerator {
    /// Creates a generator of `dimension`-long sequences.
    pub fn new(dimension: usize, seed: u64) -> Self {
        Self {
            rng: PricerRng::from_seed(seed),
            sequence: vec![0.0; dimension],
        }
    }

    /// Length of each sequence.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.sequence.len()
    }

    /// Draws a fresh sequence.
    pub fn next_sequence(&mut self) -> &[f64] {
        self.rng.fill_uniform(&mut self.sequence);
        &self.sequence
    }
}
