//! # stl-params
//!
//! Smoothing-parameter model for STL (Seasonal-Trend decomposition using
//! LOESS).
//!
//! STL decomposes a time series by repeatedly applying three LOESS smoothing
//! passes: seasonal, trend, and low-pass. This crate does not smooth or
//! decompose anything itself; it derives and assembles the parameters that
//! drive those passes. [`LoessConfig`] holds one pass's window width,
//! evaluation stride, and weight-update strategy, with `default_*`
//! constructors implementing the window-sizing recommendations of Cleveland
//! et al. (1990). [`StlParams`] bundles the three role configs with the
//! run's iteration counts behind a fluent builder.
//!
//! ```
//! use stl_params::StlParams;
//!
//! let params = StlParams::new(12, 35)?
//!     .with_robust_iterations(1)
//!     .with_quadratic_trend();
//! assert_eq!(params.trend().width, 19);
//! # Ok::<(), stl_params::ConfigError>(())
//! ```

pub mod error;
pub mod loess;
pub mod params;

pub use error::{ConfigError, Result};
pub use loess::{LoessConfig, WeightUpdate};
pub use params::StlParams;

pub mod prelude {
    pub use crate::error::{ConfigError, Result};
    pub use crate::loess::{LoessConfig, WeightUpdate};
    pub use crate::params::StlParams;
}
