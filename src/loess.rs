//! Per-role LOESS smoothing parameters and their default derivations.
//!
//! STL runs three LOESS smoothing passes per inner iteration: seasonal,
//! trend, and low-pass. Each pass is driven by a [`LoessConfig`] holding the
//! window width, the evaluation stride (jump), and the weight-update
//! strategy. The `default_*` constructors produce the values recommended by
//! the numerical analysis in Cleveland et al. (1990).

use crate::error::{ConfigError, Result};

/// Weight-update strategy applied by the LOESS smoother.
///
/// The smoother maps each regression residual to a nonnegative pointwise
/// weight; this enum only names which mapping is used. `Linear` is the
/// default for all three smoothing roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightUpdate {
    /// Linear weight update.
    #[default]
    Linear,
    /// Quadratic weight update.
    Quadratic,
}

/// Smoothing parameters for one STL role (seasonal, trend, or low-pass).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoessConfig {
    /// Width of the local-regression window, in data points. Must be
    /// positive.
    pub width: usize,
    /// Number of points to skip between directly-evaluated points;
    /// intermediate points are interpolated by the smoother. Must be
    /// positive.
    pub jump: usize,
    /// Which weight-update strategy the smoother applies.
    pub weight_update: WeightUpdate,
}

impl LoessConfig {
    /// Default configuration for the seasonal smoothing pass.
    ///
    /// The width is the caller's choice (typically odd and at least the
    /// periodicity). The jump is a tenth of the width, never below one.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidParameter`] if `width` is zero.
    pub fn default_seasonal(width: usize) -> Result<Self> {
        if width == 0 {
            return Err(ConfigError::InvalidParameter(
                "seasonal smoothing width must be positive".to_string(),
            ));
        }
        Ok(Self {
            width,
            jump: default_jump(width),
            weight_update: WeightUpdate::Linear,
        })
    }

    /// Default configuration for the trend smoothing pass.
    ///
    /// The width is derived from the periodicity and the chosen seasonal
    /// width so that the trend window stays wide enough not to compete with
    /// the seasonal component for the same frequency content. The jump is a
    /// tenth of the derived width, never below one.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidParameter`] if either argument is zero,
    /// or [`ConfigError::DerivationOverflow`] if the derived width is
    /// non-positive (seasonal width below 2).
    pub fn default_trend(periodicity: usize, seasonal_width: usize) -> Result<Self> {
        if periodicity == 0 {
            return Err(ConfigError::InvalidParameter(
                "trend smoothing periodicity must be positive".to_string(),
            ));
        }
        if seasonal_width == 0 {
            return Err(ConfigError::InvalidParameter(
                "trend smoothing seasonal width must be positive".to_string(),
            ));
        }
        let width = trend_width(periodicity, seasonal_width)?;
        Ok(Self {
            width,
            jump: default_jump(width),
            weight_update: WeightUpdate::Linear,
        })
    }

    /// Default configuration for the low-pass filtering pass.
    ///
    /// The width is the periodicity itself; the jump is a tenth of it,
    /// never below one.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidParameter`] if `periodicity` is zero.
    pub fn default_low_pass(periodicity: usize) -> Result<Self> {
        if periodicity == 0 {
            return Err(ConfigError::InvalidParameter(
                "low pass smoothing periodicity must be positive".to_string(),
            ));
        }
        Ok(Self {
            width: periodicity,
            jump: default_jump(periodicity),
            weight_update: WeightUpdate::Linear,
        })
    }
}

/// Default evaluation stride for a window: a tenth of the width, clamped to
/// a minimum of one so that narrow windows still advance point by point.
fn default_jump(width: usize) -> usize {
    ((0.1 * width as f64) as usize).max(1)
}

/// Trend window width from the STL paper's numerical analysis:
/// `1.5 p / (1 - 1.5 / w)` rounded to the nearest integer.
fn trend_width(periodicity: usize, seasonal_width: usize) -> Result<usize> {
    let p = periodicity as f64;
    let w = seasonal_width as f64;

    let derived = (1.5 * p / (1.0 - 1.5 / w) + 0.5).floor();
    if derived <= 0.0 {
        return Err(ConfigError::DerivationOverflow {
            periodicity,
            seasonal_width,
        });
    }
    Ok(derived as usize)
}
