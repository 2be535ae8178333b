//! # pricer_core: Market Data Foundation
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Time types: `Date`, `DayCountConvention` (`types::time`)
//! - Error types: `DateError`, `InterpolationError` (`types::error`)
//! - Piecewise linear interpolation (`math::interpolators`)
//! - Yield curves and Black volatility term structures (`market_data`)
//!
//! Layer 1 has no dependencies on other pricer_* crates:
//! - num-traits: Traits for generic numerical computation
//! - chrono: Date arithmetic
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::curves::{FlatCurve, YieldCurve};
//! use pricer_core::types::{Date, DayCountConvention};
//!
//! let today = Date::from_ymd(2022, 2, 24).unwrap();
//! let maturity = today.add_months(3).unwrap();
//! let t = DayCountConvention::ActualActual365.year_fraction_dates(today, maturity);
//!
//! let curve = FlatCurve::new(0.01_f64);
//! let df = curve.discount_factor(t).unwrap();
//! assert!(df < 1.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Date` and `DayCountConvention`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;
