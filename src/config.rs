//! Configuration for sway analysis.
//!
//! [`AnalysisConfig`] holds the two knobs the analysis components depend on:
//! the acquisition sampling rate and the perimeter resolution of the ellipse
//! models.
//!
//! # Example
//!
//! ```
//! use sway_analysis::AnalysisConfig;
//!
//! let config = AnalysisConfig::default();
//! assert_eq!(config.sample_rate_hz, 10.0);
//! assert_eq!(config.boundary_points, 100);
//!
//! let print = AnalysisConfig::high_resolution();
//! assert!(print.validate().is_ok());
//! ```

use crate::error::{Result, SwayError};

/// Sampling rate of the force platform, in Hz.
pub const DEFAULT_SAMPLE_RATE_HZ: f64 = 10.0;

/// Number of perimeter points produced by the ellipse models.
pub const DEFAULT_BOUNDARY_POINTS: usize = 100;

/// Configuration for sway analysis.
///
/// Time-domain statistics assume a fixed, uniform sampling rate: sample `i`
/// was taken at `i / sample_rate_hz` seconds. The rate is never inferred from
/// the data.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Acquisition sampling rate in Hz.
    pub sample_rate_hz: f64,

    /// Number of points used to trace each ellipse perimeter.
    pub boundary_points: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
            boundary_points: DEFAULT_BOUNDARY_POINTS,
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the sampling rate is not a positive finite number
    /// or fewer than 3 boundary points are requested.
    pub fn validate(&self) -> Result<()> {
        if !self.sample_rate_hz.is_finite() || self.sample_rate_hz <= 0.0 {
            return Err(SwayError::invalid_config(
                "sample_rate_hz must be positive and finite",
            ));
        }
        if self.boundary_points < 3 {
            return Err(SwayError::invalid_config(
                "boundary_points must be at least 3",
            ));
        }
        Ok(())
    }

    /// Preset for a standard Romberg recording (10 Hz, 100-point ellipses).
    #[must_use]
    pub fn romberg() -> Self {
        Self::default()
    }

    /// Preset with a finer ellipse perimeter, for printed reports.
    #[must_use]
    pub fn high_resolution() -> Self {
        Self {
            boundary_points: 360,
            ..Self::default()
        }
    }

    /// Set the sampling rate.
    #[must_use]
    pub const fn with_sample_rate(mut self, hz: f64) -> Self {
        self.sample_rate_hz = hz;
        self
    }

    /// Set the number of ellipse perimeter points.
    #[must_use]
    pub const fn with_boundary_points(mut self, n: usize) -> Self {
        self.boundary_points = n;
        self
    }
}
