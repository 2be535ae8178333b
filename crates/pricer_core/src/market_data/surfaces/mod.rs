//! Black volatility term structures.
//!
//! This module provides:
//! - [`VolatilitySurface`]: Generic trait for Black volatility and total variance lookup
//! - [`FlatVol`]: Constant volatility
//! - [`BlackVarianceCurve`]: Strike-independent curve linear in total variance
//! - [`VolatilityEnum`]: Static dispatch enum wrapping the concrete surfaces

mod flat;
mod traits;
mod variance_curve;
mod vol_enum;

pub use flat::FlatVol;
pub use traits::VolatilitySurface;
pub use variance_curve::BlackVarianceCurve;
pub use vol_enum::VolatilityEnum;
