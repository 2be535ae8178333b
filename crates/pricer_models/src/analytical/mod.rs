//! Closed-form European prices for constant-coefficient dynamics.
//!
//! Used as a reference for Monte Carlo prices obtained with frozen
//! parameters, where the Black-Scholes-Merton formula is exact.

pub mod black_scholes;
pub mod distributions;
pub mod error;

pub use black_scholes::BlackScholesMerton;
pub use distributions::norm_cdf;
pub use error::AnalyticalError;
