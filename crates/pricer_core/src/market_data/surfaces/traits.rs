//! Volatility surface trait definition.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Generic Black volatility term structure.
///
/// # Contract
///
/// - `volatility(strike, expiry)` returns the Black volatility σ(K, T)
/// - `total_variance(strike, expiry)` returns σ(K, T)² · T
/// - `expiry = 0` is a valid query; negative expiries and non-positive
///   strikes are rejected
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{VolatilitySurface, FlatVol};
///
/// let surface = FlatVol::new(0.20_f64);
/// assert_eq!(surface.volatility(36.0, 0.25).unwrap(), 0.20);
/// assert!((surface.total_variance(36.0, 0.25).unwrap() - 0.01).abs() < 1e-15);
/// ```
pub trait VolatilitySurface<T: Float> {
    /// Return the Black volatility for given strike and expiry.
    ///
    /// # Errors
    ///
    /// * `MarketDataError::InvalidStrike` - If strike <= 0
    /// * `MarketDataError::InvalidExpiry` - If expiry < 0
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError>;

    /// Return the total Black variance σ² · T.
    fn total_variance(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        let sigma = self.volatility(strike, expiry)?;
        Ok(sigma * sigma * expiry)
    }

    /// Whether the volatility ignores the strike argument.
    fn is_strike_independent(&self) -> bool {
        false
    }

    /// Return the valid strike domain `(K_min, K_max)`.
    fn strike_domain(&self) -> (T, T);

    /// Return the valid expiry domain `(T_min, T_max)`.
    fn expiry_domain(&self) -> (T, T);
}

/// Shared argument validation for the concrete surfaces.
pub(crate) fn check_query<T: Float>(strike: T, expiry: T) -> Result<(), MarketDataError> {
    if strike.is_nan() || strike <= T::zero() {
        return Err(MarketDataError::InvalidStrike {
            strike: strike.to_f64().unwrap_or(f64::NAN),
        });
    }
    if expiry.is_nan() || expiry < T::zero() {
        return Err(MarketDataError::InvalidExpiry {
            expiry: expiry.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Skewed mock: volatility falls with strike.
    struct SkewedVol;

    impl VolatilitySurface<f64> for SkewedVol {
        fn volatility(&self, strike: f64, expiry: f64) -> Result<f64, MarketDataError> {
            check_query(strike, expiry)?;
            Ok(0.2 + 0.1 * (40.0 / strike - 1.0))
        }

        fn strike_domain(&self) -> (f64, f64) {
            (0.0, f64::INFINITY)
        }

        fn expiry_domain(&self) -> (f64, f64) {
            (0.0, f64::INFINITY)
        }
    }

    #[test]
    fn test_default_total_variance() {
        let surface = SkewedVol;
        let var = surface.total_variance(40.0, 0.5).unwrap();
        assert!((var - 0.02).abs() < 1e-15);
        assert!(!surface.is_strike_independent());
    }

    #[test]
    fn test_check_query() {
        assert!(check_query(36.0_f64, 0.0).is_ok());
        assert!(matches!(
            check_query(0.0_f64, 1.0),
            Err(MarketDataError::InvalidStrike { .. })
        ));
        assert!(matches!(
            check_query(36.0_f64, -0.1),
            Err(MarketDataError::InvalidExpiry { .. })
        ));
        assert!(check_query(f64::NAN, 1.0).is_err());
    }
}
