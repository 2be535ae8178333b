//! Market data structures for the Black-Scholes term structures.
//!
//! This module provides yield curve and Black volatility abstractions used to
//! drive a generalised Black-Scholes process and to freeze its parameters.
//!
//! # Components
//!
//! - [`curves`]: Yield curve trait and implementations (FlatCurve, InterpolatedCurve)
//! - [`surfaces`]: Volatility trait and implementations (FlatVol, BlackVarianceCurve)
//! - [`error`]: Market data error types (MarketDataError)
//!
//! # Short-end convention
//!
//! Lookups at `t = 0` are well defined: zero rates are implied over
//! [`SHORT_END_INTERVAL`] and Black volatilities clamp the variance time to
//! [`MIN_VARIANCE_TIME`].
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::curves::{YieldCurve, FlatCurve};
//! use pricer_core::market_data::surfaces::{VolatilitySurface, FlatVol};
//!
//! let curve = FlatCurve::new(0.01_f64);
//! assert_eq!(curve.zero_rate(0.0).unwrap(), 0.01);
//!
//! let vol = FlatVol::new(0.20_f64);
//! assert_eq!(vol.volatility(36.0, 0.0).unwrap(), 0.20);
//! ```

pub mod curves;
pub mod error;
pub mod surfaces;

pub use curves::{CurveEnum, CurveInterpolation, FlatCurve, InterpolatedCurve, YieldCurve};
pub use error::MarketDataError;
pub use surfaces::{BlackVarianceCurve, FlatVol, VolatilityEnum, VolatilitySurface};

/// Interval (years) over which a zero rate at `t = 0` is implied.
pub const SHORT_END_INTERVAL: f64 = 1.0e-4;

/// Smallest time (years) used when converting total variance to volatility.
pub const MIN_VARIANCE_TIME: f64 = 1.0e-5;
