//! # Pricer Models (L2: Business Logic)
//!
//! Option instruments and one-dimensional diffusion processes.
//!
//! This crate provides:
//! - Instrument definitions: European, discrete arithmetic Asian and
//!   single-barrier options (`instruments`)
//! - The [`StochasticProcess1D`](models::StochasticProcess1D) trait with its
//!   live term-structure process and the frozen-parameter constant process
//!   (`models`)
//! - Closed-form Black-Scholes-Merton reference prices (`analytical`)
//!
//! ## Design Principles
//!
//! - **Enum-based dispatch** for instruments and processes
//! - **Validated constructors** returning `Result` rather than panicking

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod models;
