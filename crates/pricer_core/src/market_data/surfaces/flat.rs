//! Flat volatility implementation.

use super::traits::check_query;
use super::VolatilitySurface;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Constant Black volatility for every strike and expiry.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{VolatilitySurface, FlatVol};
///
/// let surface = FlatVol::new(0.20_f64);
/// assert_eq!(surface.volatility(30.0, 0.0).unwrap(), 0.20);
/// assert_eq!(surface.volatility(45.0, 2.0).unwrap(), 0.20);
/// assert!(surface.is_strike_independent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatVol<T: Float> {
    /// The constant volatility
    sigma: T,
}

impl<T: Float> FlatVol<T> {
    /// Construct a flat volatility.
    #[inline]
    pub fn new(sigma: T) -> Self {
        Self { sigma }
    }

    /// Return the constant volatility.
    #[inline]
    pub fn sigma(&self) -> T {
        self.sigma
    }
}

impl<T: Float> VolatilitySurface<T> for FlatVol<T> {
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        check_query(strike, expiry)?;
        Ok(self.sigma)
    }

    #[inline]
    fn is_strike_independent(&self) -> bool {
        true
    }

    #[inline]
    fn strike_domain(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }

    #[inline]
    fn expiry_domain(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }
}
