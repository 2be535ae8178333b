//! Instrument error types.

use thiserror::Error;

/// Instrument construction errors.
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -40.0 };
/// assert!(format!("{}", err).contains("-40"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Strike is negative or not finite.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Barrier level is non-positive or not finite.
    #[error("Invalid barrier: B = {barrier}")]
    InvalidBarrier {
        /// The invalid barrier level
        barrier: f64,
    },

    /// Rebate is negative or not finite.
    #[error("Invalid rebate: {rebate}")]
    InvalidRebate {
        /// The invalid rebate
        rebate: f64,
    },

    /// Fixing schedule is empty, unsorted or extends past the exercise date.
    #[error("Invalid fixings: {message}")]
    InvalidFixings {
        /// Description of the schedule problem
        message: String,
    },

    /// Invalid parameter (general validation failure).
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the parameter error
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_barrier_display() {
        let err = InstrumentError::InvalidBarrier { barrier: 0.0 };
        assert_eq!(format!("{}", err), "Invalid barrier: B = 0");
    }

    #[test]
    fn test_invalid_fixings_display() {
        let err = InstrumentError::InvalidFixings {
            message: "no fixing dates".to_string(),
        };
        assert_eq!(format!("{}", err), "Invalid fixings: no fixing dates");
    }
}
