//! # Frozen-Parameter Path Generation
//!
//! Replaces a term-structure driven process by one with constant
//! coefficients sampled at the option maturity:
//!
//! ```text
//! GeneralizedBlackScholesProcess
//!     -> ParameterExtractor       (r, q, σ, x0) at t = T
//!     -> ConstantProcessFactory   ConstantProcess
//!     -> PathGeneratorSelector    PathGenerator
//! ```
//!
//! The selector hands the same sequence generator and grid to the path
//! generator in both branches, so live and frozen runs consume identical
//! random numbers.

pub mod error;
pub mod extractor;
pub mod factory;
pub mod selector;

pub use error::FreezeError;
pub use extractor::{ExtractedParameters, ExtractionContext, ParameterExtractor, StrikePolicy};
pub use factory::{ConstantProcessFactory, VolatilityPolicy};
pub use selector::PathGeneratorSelector;
