//! Scalar value sources.
//!
//! A [`ValueSource`] is anything that can report a current scalar value.
//! Frozen processes sample their sources once at construction; later
//! changes to a [`SimpleQuote`] do not reach an already built process.

use std::sync::{Arc, RwLock};

/// Source of a single scalar market value.
pub trait ValueSource {
    /// The value at the time of the call.
    fn current_value(&self) -> f64;
}

impl ValueSource for f64 {
    #[inline]
    fn current_value(&self) -> f64 {
        *self
    }
}

/// Settable quote shared between owners.
///
/// Clones share the same underlying value.
///
/// # Examples
/// ```
/// use pricer_models::models::{SimpleQuote, ValueSource};
///
/// let spot = SimpleQuote::new(36.0);
/// let handle = spot.clone();
/// handle.set_value(37.5);
/// assert_eq!(spot.current_value(), 37.5);
/// ```
#[derive(Debug, Clone)]
pub struct SimpleQuote {
    value: Arc<RwLock<f64>>,
}

impl SimpleQuote {
    /// Creates a quote holding `value`.
    pub fn new(value: f64) -> Self {
        Self {
            value: Arc::new(RwLock::new(value)),
        }
    }

    /// Replaces the quoted value.
    pub fn set_value(&self, value: f64) {
        match self.value.write() {
            Ok(mut guard) => *guard = value,
            Err(poisoned) => *poisoned.into_inner() = value,
        }
    }
}

impl ValueSource for SimpleQuote {
    fn current_value(&self) -> f64 {
        match self.value.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
