//! Plain vanilla payoffs.

use super::error::InstrumentError;

/// Call or put.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// assert_eq!(OptionType::Put.intrinsic(36.0, 40.0), 4.0);
/// assert_eq!(OptionType::Call.intrinsic(36.0, 40.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy: max(S - K, 0)
    Call,
    /// Right to sell: max(K - S, 0)
    Put,
}

impl OptionType {
    /// +1 for calls, -1 for puts.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Intrinsic value `max(φ (S - K), 0)`.
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        (self.sign() * (spot - strike)).max(0.0)
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// Plain vanilla payoff with a fixed strike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlainVanillaPayoff {
    option_type: OptionType,
    strike: f64,
}

impl PlainVanillaPayoff {
    /// Creates a payoff; the strike must be finite and non-negative.
    ///
    /// ```
    /// use pricer_models::instruments::{OptionType, PlainVanillaPayoff};
    ///
    /// let payoff = PlainVanillaPayoff::new(OptionType::Put, 40.0).unwrap();
    /// assert_eq!(payoff.value(30.0), 10.0);
    /// assert!(PlainVanillaPayoff::new(OptionType::Put, -1.0).is_err());
    /// ```
    pub fn new(option_type: OptionType, strike: f64) -> Result<Self, InstrumentError> {
        if !strike.is_finite() || strike < 0.0 {
            return Err(InstrumentError::InvalidStrike { strike });
        }
        Ok(Self {
            option_type,
            strike,
        })
    }

    /// Option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Strike.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Payoff at the given underlying value.
    #[inline]
    pub fn value(&self, spot: f64) -> f64 {
        self.option_type.intrinsic(spot, self.strike)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_and_put_values() {
        let call = PlainVanillaPayoff::new(OptionType::Call, 40.0).unwrap();
        let put = PlainVanillaPayoff::new(OptionType::Put, 40.0).unwrap();
        assert_eq!(call.value(45.0), 5.0);
        assert_eq!(call.value(35.0), 0.0);
        assert_eq!(put.value(35.0), 5.0);
        assert_eq!(put.value(45.0), 0.0);
    }

    #[test]
    fn test_zero_strike_allowed() {
        let call = PlainVanillaPayoff::new(OptionType::Call, 0.0).unwrap();
        assert_eq!(call.value(12.0), 12.0);
    }

    #[test]
    fn test_nan_strike_rejected() {
        assert!(matches!(
            PlainVanillaPayoff::new(OptionType::Call, f64::NAN),
            Err(InstrumentError::InvalidStrike { .. })
        ));
    }

    #[test]
    fn test_option_type_display() {
        assert_eq!(OptionType::Put.to_string(), "Put");
        assert_eq!(OptionType::Call.sign(), 1.0);
    }
}
