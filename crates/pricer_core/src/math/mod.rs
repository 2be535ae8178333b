//! Numerical building blocks.
//!
//! - [`interpolators`]: piecewise linear interpolation used by the term structures

pub mod interpolators;
