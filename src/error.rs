//! Error types for the stl-params library.

use thiserror::Error;

/// Result type alias for parameter-derivation operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while deriving smoothing parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Invalid parameter value passed to a default-derivation function.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The trend-width formula produced a non-positive window. Happens
    /// whenever the seasonal width is too small relative to the
    /// periodicity (seasonal width below 2).
    #[error(
        "trend width derivation overflowed: periodicity {periodicity}, \
         seasonal width {seasonal_width}"
    )]
    DerivationOverflow {
        periodicity: usize,
        seasonal_width: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let err = ConfigError::InvalidParameter("width must be positive".to_string());
        assert_eq!(err.to_string(), "invalid parameter: width must be positive");

        let err = ConfigError::DerivationOverflow {
            periodicity: 12,
            seasonal_width: 1,
        };
        assert_eq!(
            err.to_string(),
            "trend width derivation overflowed: periodicity 12, seasonal width 1"
        );
    }

    #[test]
    fn errors_are_clonable_and_comparable() {
        let err1 = ConfigError::DerivationOverflow {
            periodicity: 12,
            seasonal_width: 1,
        };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    #[test]
    fn error_kinds_are_distinguishable() {
        let invalid = ConfigError::InvalidParameter("x".to_string());
        let overflow = ConfigError::DerivationOverflow {
            periodicity: 4,
            seasonal_width: 1,
        };
        assert_ne!(invalid, overflow);
    }
}
