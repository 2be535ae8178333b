//! Building constant processes from extracted parameters.

use pricer_models::models::{ConstantProcess, EvolutionScheme};

use super::error::FreezeError;
use super::extractor::ExtractedParameters;

/// Treatment of a negative extracted volatility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VolatilityPolicy {
    /// Pass the value through unchanged.
    #[default]
    Accept,
    /// Fail with `NegativeVolatility`.
    RejectNegative,
}

/// Builds [`ConstantProcess`] instances.
///
/// # Examples
///
/// ```rust
/// use pricer_models::models::StochasticProcess1D;
/// use pricer_pricing::frozen::{ConstantProcessFactory, ExtractedParameters};
///
/// let params = ExtractedParameters {
///     risk_free_rate: 0.01,
///     dividend_yield: 0.0,
///     volatility: 0.2,
///     initial_value: 36.0,
/// };
/// let process = ConstantProcessFactory::new().build(&params).unwrap();
/// assert_eq!(process.x0(), 36.0);
/// assert_eq!(process.volatility(), 0.2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstantProcessFactory {
    volatility_policy: VolatilityPolicy,
    scheme: EvolutionScheme,
}

impl ConstantProcessFactory {
    /// Factory accepting any volatility and using the default scheme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the volatility policy.
    pub fn with_volatility_policy(mut self, policy: VolatilityPolicy) -> Self {
        self.volatility_policy = policy;
        self
    }

    /// Replaces the evolution scheme of built processes.
    pub fn with_scheme(mut self, scheme: EvolutionScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Current volatility policy.
    pub fn volatility_policy(&self) -> VolatilityPolicy {
        self.volatility_policy
    }

    /// Builds a process with the factory's scheme.
    ///
    /// # Errors
    ///
    /// `NegativeVolatility` under [`VolatilityPolicy::RejectNegative`].
    pub fn build(&self, params: &ExtractedParameters) -> Result<ConstantProcess, FreezeError> {
        self.build_with_scheme(params, self.scheme)
    }

    /// Builds a process with an explicit scheme.
    ///
    /// # Errors
    ///
    /// `NegativeVolatility` under [`VolatilityPolicy::RejectNegative`].
    pub fn build_with_scheme(
        &self,
        params: &ExtractedParameters,
        scheme: EvolutionScheme,
    ) -> Result<ConstantProcess, FreezeError> {
        if self.volatility_policy == VolatilityPolicy::RejectNegative && params.volatility < 0.0 {
            return Err(FreezeError::NegativeVolatility {
                volatility: params.volatility,
            });
        }
        Ok(ConstantProcess::new(
            params.initial_value,
            params.risk_free_rate,
            params.dividend_yield,
            params.volatility,
        )
        .with_scheme(scheme))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::models::StochasticProcess1D;

    fn params(volatility: f64) -> ExtractedParameters {
        ExtractedParameters {
            risk_free_rate: 0.0125,
            dividend_yield: 0.003,
            volatility,
            initial_value: 36.0,
        }
    }

    #[test]
    fn test_build_copies_parameters() {
        let process = ConstantProcessFactory::new().build(&params(0.22)).unwrap();
        assert_eq!(process.x0(), 36.0);
        assert_eq!(process.risk_free_rate(), 0.0125);
        assert_eq!(process.dividend_yield(), 0.003);
        assert_eq!(process.volatility(), 0.22);
        assert_eq!(process.scheme(), EvolutionScheme::Direct);
    }

    #[test]
    fn test_build_with_scheme() {
        let factory = ConstantProcessFactory::new();
        let generic = factory
            .build_with_scheme(&params(0.2), EvolutionScheme::Generic)
            .unwrap();
        assert_eq!(generic.scheme(), EvolutionScheme::Generic);

        let configured = factory
            .with_scheme(EvolutionScheme::Generic)
            .build(&params(0.2))
            .unwrap();
        assert_eq!(configured, generic);
    }

    #[test]
    fn test_negative_volatility_policy() {
        let accepted = ConstantProcessFactory::new().build(&params(-0.1)).unwrap();
        assert_eq!(accepted.volatility(), -0.1);

        let strict =
            ConstantProcessFactory::new().with_volatility_policy(VolatilityPolicy::RejectNegative);
        assert_eq!(strict.volatility_policy(), VolatilityPolicy::RejectNegative);
        assert_eq!(
            strict.build(&params(-0.1)),
            Err(FreezeError::NegativeVolatility { volatility: -0.1 })
        );
        assert!(strict.build(&params(0.0)).is_ok());
    }
}
