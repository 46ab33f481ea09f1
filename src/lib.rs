//! Postural Sway Analysis Library
//!
//! Kinematic statistics and dispersion-area models for center-of-pressure
//! (CoP) recordings from a Romberg balance test.
//!
//! The input is a [`SignalTable`]: ordered `[lateral, antero_posterior]`
//! displacement samples in millimeters, taken at a fixed 10 Hz. Four
//! independent, pure components consume it:
//!
//! | Component | Function | Output |
//! |-----------|----------|--------|
//! | Signal statistics | [`compute_signal_statistics`] | [`StatisticsResult`] |
//! | Bounding ellipse | [`compute_bounding_ellipse`] | [`AreaModelResult`] |
//! | Convex hull | [`compute_convex_hull`] | [`AreaModelResult`] |
//! | Oriented ellipse | [`compute_oriented_ellipse`] | [`AreaModelResult`] |
//!
//! [`analyze_sway`] runs all four and collects a [`SwayReport`].
//!
//! # Quick Start
//!
//! ```
//! use sway_analysis::{analyze_sway, AnalysisConfig, SignalTable};
//!
//! let rows = vec![
//!     vec![0.0, 0.0],
//!     vec![1.2, 0.4],
//!     vec![0.8, 1.5],
//!     vec![-0.3, 0.9],
//!     vec![-0.6, -0.2],
//! ];
//! let table = SignalTable::from_rows(&rows)?;
//!
//! let report = analyze_sway(&table, &AnalysisConfig::default())?;
//! let summary = report.summary();
//!
//! assert!(summary.lat_range > 0.0);
//! assert!(summary.ellipse_area > 0.0);
//! # Ok::<(), sway_analysis::SwayError>(())
//! ```
//!
//! # Determinism
//!
//! Every component is a pure function of its input table and configuration.
//! There is no caching or shared state, so components may run concurrently
//! on the same table.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]

pub mod area;
pub mod bounding_ellipse;
pub mod config;
pub mod convex_hull;
pub mod error;
pub mod math;
pub mod oriented_ellipse;
pub mod report;
pub mod signal;
pub mod statistics;

// Re-exports for convenient access
pub use area::{AreaModelKind, AreaModelResult};
pub use bounding_ellipse::compute_bounding_ellipse;
pub use config::AnalysisConfig;
pub use convex_hull::compute_convex_hull;
pub use error::{Result, SwayError};
pub use math::{BoundingBox, Covariance2};
pub use oriented_ellipse::{compute_oriented_ellipse, fit_oriented_ellipse, OrientedEllipse};
pub use report::{analyze_sway, SkippedModel, StudySummary, SwayReport};
pub use signal::SignalTable;
pub use statistics::{compute_signal_statistics, AxisStatistics, CopStatistics, StatisticsResult};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn generate_sway(n: usize) -> SignalTable {
        (0..n)
            .map(|i| {
                let t = i as f64 / 10.0;
                [
                    3.0 * (0.7 * t).sin() + 0.5 * (2.3 * t).cos(),
                    2.0 * (0.4 * t + 0.3).sin() + 0.8 * (1.1 * t).sin(),
                ]
            })
            .collect()
    }

    #[test]
    fn test_full_pipeline() {
        let table = generate_sway(300);
        let config = AnalysisConfig::default();

        let report = analyze_sway(&table, &config).unwrap();
        assert!(report.skipped.is_empty());
        assert_eq!(report.statistics.time.len(), 300);

        for model in report.area_models() {
            assert!(model.area > 0.0, "{} has no area", model.kind);
        }

        let summary = report.summary();
        assert!((summary.cop_frequency - summary.cop_velocity / (2.0 * PI)).abs() < 1e-12);
    }

    #[test]
    fn test_components_are_idempotent() {
        let table = generate_sway(120);
        let config = AnalysisConfig::default();

        assert_eq!(
            compute_signal_statistics(&table, &config).unwrap(),
            compute_signal_statistics(&table, &config).unwrap()
        );
        assert_eq!(
            compute_bounding_ellipse(&table, &config).unwrap(),
            compute_bounding_ellipse(&table, &config).unwrap()
        );
        assert_eq!(
            compute_oriented_ellipse(&table, &config).unwrap(),
            compute_oriented_ellipse(&table, &config).unwrap()
        );
        assert_eq!(
            compute_convex_hull(&table).unwrap(),
            compute_convex_hull(&table).unwrap()
        );
    }

    #[test]
    fn test_results_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SignalTable>();
        assert_send_sync::<StatisticsResult>();
        assert_send_sync::<AreaModelResult>();
        assert_send_sync::<SwayReport>();
        assert_send_sync::<SwayError>();
    }
}
