//! # Timed NPV Comparison
//!
//! Prices one instrument with a sequence of engines, timing only the NPV
//! call of each, and reduces the measurements to price differences and a
//! timing difference.

pub mod timed;

pub use timed::{ComparativeTimedPricer, PricerState, TimedNpv, TimedResult};
