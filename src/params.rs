//! Assembled run parameters for one STL decomposition invocation.
//!
//! [`StlParams`] bundles the three per-role [`LoessConfig`] values with the
//! iteration counts of the decomposition loop. Construction starts from the
//! paper's defaults and is refined through consuming `with_*` setters; the
//! finished value is handed to the decomposition driver and treated as
//! immutable for the rest of the run.

use crate::error::Result;
use crate::loess::{LoessConfig, WeightUpdate};

/// Parameters for a full STL decomposition run.
///
/// Setters apply in call order with last-write-wins semantics; no setter
/// validates across fields. Validation lives in the `LoessConfig::default_*`
/// constructors, so a caller supplying a hand-built [`LoessConfig`] is
/// responsible for keeping its width and jump positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StlParams {
    /// Seasonal smoothing pass configuration.
    seasonal: LoessConfig,
    /// Trend smoothing pass configuration.
    trend: LoessConfig,
    /// Low-pass filtering pass configuration.
    low_pass: LoessConfig,
    /// Seasonal/trend/low-pass passes per robustness iteration.
    inner_iterations: usize,
    /// Outlier-downweighting passes around the inner loop.
    robust_iterations: usize,
}

impl StlParams {
    /// Create run parameters with the paper's defaults for every role:
    /// two inner iterations, no robustness iterations, and the three
    /// role configs derived from `periodicity` and `seasonal_width`.
    ///
    /// # Errors
    /// Propagates the derivation errors of the `LoessConfig::default_*`
    /// constructors for zero inputs or a degenerate trend window.
    pub fn new(periodicity: usize, seasonal_width: usize) -> Result<Self> {
        Ok(Self {
            seasonal: LoessConfig::default_seasonal(seasonal_width)?,
            trend: LoessConfig::default_trend(periodicity, seasonal_width)?,
            low_pass: LoessConfig::default_low_pass(periodicity)?,
            inner_iterations: 2,
            robust_iterations: 0,
        })
    }

    /// Replace the seasonal smoothing configuration wholesale.
    pub fn with_seasonal_config(mut self, conf: LoessConfig) -> Self {
        self.seasonal = conf;
        self
    }

    /// Replace the trend smoothing configuration wholesale.
    pub fn with_trend_config(mut self, conf: LoessConfig) -> Self {
        self.trend = conf;
        self
    }

    /// Replace the low-pass filtering configuration wholesale.
    pub fn with_low_pass_config(mut self, conf: LoessConfig) -> Self {
        self.low_pass = conf;
        self
    }

    /// Set the number of robustness (outlier-downweighting) iterations.
    /// The default is 0.
    pub fn with_robust_iterations(mut self, n: usize) -> Self {
        self.robust_iterations = n;
        self
    }

    /// Set the number of inner seasonal/trend/low-pass iterations.
    /// The default is 2.
    pub fn with_inner_iterations(mut self, n: usize) -> Self {
        self.inner_iterations = n;
        self
    }

    /// Switch the trend pass to the quadratic weight update. Shorthand for
    /// mutating the trend configuration's weight field directly; the
    /// seasonal and low-pass passes are left untouched.
    pub fn with_quadratic_trend(mut self) -> Self {
        self.trend.weight_update = WeightUpdate::Quadratic;
        self
    }

    /// Get the seasonal smoothing configuration.
    pub fn seasonal(&self) -> LoessConfig {
        self.seasonal
    }

    /// Get the trend smoothing configuration.
    pub fn trend(&self) -> LoessConfig {
        self.trend
    }

    /// Get the low-pass filtering configuration.
    pub fn low_pass(&self) -> LoessConfig {
        self.low_pass
    }

    /// Get the number of inner iterations.
    pub fn inner_iterations(&self) -> usize {
        self.inner_iterations
    }

    /// Get the number of robustness iterations.
    pub fn robust_iterations(&self) -> usize {
        self.robust_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_assembles_role_defaults() {
        let params = StlParams::new(12, 35).unwrap();

        assert_eq!(params.seasonal(), LoessConfig::default_seasonal(35).unwrap());
        assert_eq!(params.trend(), LoessConfig::default_trend(12, 35).unwrap());
        assert_eq!(params.low_pass(), LoessConfig::default_low_pass(12).unwrap());
        assert_eq!(params.inner_iterations(), 2);
        assert_eq!(params.robust_iterations(), 0);
    }

    #[test]
    fn new_propagates_derivation_errors() {
        assert!(StlParams::new(0, 35).is_err());
        assert!(StlParams::new(12, 0).is_err());
        // Seasonal width of 1 makes the trend derivation overflow.
        assert!(StlParams::new(12, 1).is_err());
    }

    #[test]
    fn setters_apply_last_write_wins() {
        let params = StlParams::new(12, 35)
            .unwrap()
            .with_robust_iterations(3)
            .with_robust_iterations(5);
        assert_eq!(params.robust_iterations(), 5);

        let params = params.with_inner_iterations(1).with_inner_iterations(4);
        assert_eq!(params.inner_iterations(), 4);
    }

    #[test]
    fn wholesale_override_replaces_one_role() {
        let custom = LoessConfig {
            width: 101,
            jump: 10,
            weight_update: WeightUpdate::Quadratic,
        };
        let defaults = StlParams::new(12, 35).unwrap();
        let params = defaults.clone().with_trend_config(custom);

        assert_eq!(params.trend(), custom);
        assert_eq!(params.seasonal(), defaults.seasonal());
        assert_eq!(params.low_pass(), defaults.low_pass());
    }

    #[test]
    fn wholesale_override_is_idempotent() {
        let custom = LoessConfig {
            width: 7,
            jump: 1,
            weight_update: WeightUpdate::Linear,
        };
        let base = StlParams::new(12, 35).unwrap();

        let once = base.clone().with_seasonal_config(custom);
        let twice = base
            .with_seasonal_config(custom)
            .with_seasonal_config(custom);
        assert_eq!(once, twice);
    }

    #[test]
    fn quadratic_trend_touches_only_the_trend_role() {
        let defaults = StlParams::new(12, 35).unwrap();
        let params = defaults.clone().with_quadratic_trend();

        assert_eq!(params.trend().weight_update, WeightUpdate::Quadratic);
        assert_eq!(params.trend().width, defaults.trend().width);
        assert_eq!(params.trend().jump, defaults.trend().jump);
        assert_eq!(params.seasonal(), defaults.seasonal());
        assert_eq!(params.low_pass(), defaults.low_pass());
    }

    #[test]
    fn setters_do_not_cross_validate() {
        // Wasteful but not unsafe; assembly accepts it.
        let params = StlParams::new(12, 35)
            .unwrap()
            .with_inner_iterations(0)
            .with_robust_iterations(5);
        assert_eq!(params.inner_iterations(), 0);
        assert_eq!(params.robust_iterations(), 5);
    }
}
