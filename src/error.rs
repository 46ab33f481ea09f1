//! Error types for sway analysis operations.
//!
//! Every failure is terminal for the computation that raised it: there is no
//! partial result and retrying with the same input fails the same way.

use thiserror::Error;

/// Main error type for sway analysis operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwayError {
    /// Too few samples for the requested statistic or model.
    #[error("Insufficient data: need at least {min} samples, got {actual}")]
    InsufficientData { min: usize, actual: usize },

    /// Geometrically undefined input (collinear hull, zero covariance term).
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Malformed input table handed over by the loader.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Lateral and antero-posterior columns have different lengths.
    #[error("Length mismatch: {lateral} lateral samples vs {antero_posterior} antero-posterior samples")]
    LengthMismatch {
        lateral: usize,
        antero_posterior: usize,
    },

    /// Configuration validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for sway analysis operations.
pub type Result<T> = std::result::Result<T, SwayError>;

impl SwayError {
    /// Create an insufficient data error.
    #[must_use]
    pub const fn insufficient_data(min: usize, actual: usize) -> Self {
        Self::InsufficientData { min, actual }
    }

    /// Create a degenerate geometry error.
    #[must_use]
    pub fn degenerate_geometry(msg: impl Into<String>) -> Self {
        Self::DegenerateGeometry(msg.into())
    }

    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a length mismatch error.
    #[must_use]
    pub const fn length_mismatch(lateral: usize, antero_posterior: usize) -> Self {
        Self::LengthMismatch {
            lateral,
            antero_posterior,
        }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
