//! Static dispatch over the concrete volatility term structures.

use super::{BlackVarianceCurve, FlatVol, VolatilitySurface};
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Static dispatch enum wrapping concrete volatility implementations.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{VolatilityEnum, VolatilitySurface};
///
/// let vol = VolatilityEnum::flat(0.2_f64);
/// assert_eq!(vol.volatility(36.0, 0.25).unwrap(), 0.2);
/// ```
#[derive(Debug, Clone)]
pub enum VolatilityEnum<T: Float> {
    /// Constant volatility
    Flat(FlatVol<T>),
    /// Strike-independent variance curve
    VarianceCurve(BlackVarianceCurve<T>),
}

impl<T: Float> VolatilityEnum<T> {
    /// Create a flat volatility variant.
    #[inline]
    pub fn flat(sigma: T) -> Self {
        VolatilityEnum::Flat(FlatVol::new(sigma))
    }
}

impl<T: Float> VolatilitySurface<T> for VolatilityEnum<T> {
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        match self {
            VolatilityEnum::Flat(vol) => vol.volatility(strike, expiry),
            VolatilityEnum::VarianceCurve(vol) => vol.volatility(strike, expiry),
        }
    }

    fn total_variance(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        match self {
            VolatilityEnum::Flat(vol) => vol.total_variance(strike, expiry),
            VolatilityEnum::VarianceCurve(vol) => vol.total_variance(strike, expiry),
        }
    }

    fn is_strike_independent(&self) -> bool {
        match self {
            VolatilityEnum::Flat(vol) => vol.is_strike_independent(),
            VolatilityEnum::VarianceCurve(vol) => vol.is_strike_independent(),
        }
    }

    fn strike_domain(&self) -> (T, T) {
        match self {
            VolatilityEnum::Flat(vol) => vol.strike_domain(),
            VolatilityEnum::VarianceCurve(vol) => vol.strike_domain(),
        }
    }

    fn expiry_domain(&self) -> (T, T) {
        match self {
            VolatilityEnum::Flat(vol) => vol.expiry_domain(),
            VolatilityEnum::VarianceCurve(vol) => vol.expiry_domain(),
        }
    }
}

impl<T: Float> From<FlatVol<T>> for VolatilityEnum<T> {
    fn from(vol: FlatVol<T>) -> Self {
        VolatilityEnum::Flat(vol)
    }
}

impl<T: Float> From<BlackVarianceCurve<T>> for VolatilityEnum<T> {
    fn from(vol: BlackVarianceCurve<T>) -> Self {
        VolatilityEnum::VarianceCurve(vol)
    }
}
