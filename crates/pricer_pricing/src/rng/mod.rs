//! # Random Number Generation
//!
//! Seeded pseudo-random sources for the Monte Carlo engines.
//!
//! - [`prng`]: [`PricerRng`], a reproducible wrapper around `rand::StdRng`
//! - [`sequence`]: fixed-dimension Gaussian and uniform sequence generators
//!   feeding one path per draw
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::GaussianSequenceGenerator;
//!
//! let mut generator = GaussianSequenceGenerator::new(10, 42);
//! let first = generator.next_sequence().to_vec();
//! assert_eq!(first.len(), 10);
//!
//! // Antithetic draws reuse the last sequence without consuming new variates.
//! assert_eq!(generator.last_sequence(), first.as_slice());
//! assert_eq!(generator.draws(), 10);
//! ```

pub mod prng;
pub mod sequence;

pub use prng::PricerRng;
pub use sequence::{GaussianSequenceGenerator, UniformSequenceGenerator};
