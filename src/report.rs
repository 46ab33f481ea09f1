//! One-call analysis of a recording.
//!
//! [`analyze_sway`] runs the four components on the same table. Statistics
//! and the bounding ellipse are required: their errors abort the report. The
//! convex hull and the oriented ellipse are undefined for some inputs
//! (collinear samples, zero covariance); those are recorded as skipped so the
//! caller can leave the corresponding chart empty.

use crate::area::{AreaModelKind, AreaModelResult};
use crate::bounding_ellipse::compute_bounding_ellipse;
use crate::config::AnalysisConfig;
use crate::convex_hull::compute_convex_hull;
use crate::error::{Result, SwayError};
use crate::oriented_ellipse::compute_oriented_ellipse;
use crate::signal::SignalTable;
use crate::statistics::{compute_signal_statistics, StatisticsResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An area model that could not be computed, and why.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkippedModel {
    pub kind: AreaModelKind,
    pub reason: String,
}

/// Every analysis result for one recording.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SwayReport {
    pub statistics: StatisticsResult,
    pub bounding_ellipse: AreaModelResult,
    pub convex_hull: Option<AreaModelResult>,
    pub oriented_ellipse: Option<AreaModelResult>,
    /// Area models left out of the report.
    pub skipped: Vec<SkippedModel>,
}

/// Scalar values stored per study.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StudySummary {
    pub lat_range: f64,
    pub lat_velocity: f64,
    pub lat_rms: f64,
    pub ap_range: f64,
    pub ap_velocity: f64,
    pub ap_rms: f64,
    pub cop_velocity: f64,
    pub cop_distance: f64,
    pub cop_frequency: f64,
    pub ellipse_area: f64,
    pub hull_area: Option<f64>,
    pub oriented_ellipse_area: Option<f64>,
}

impl SwayReport {
    /// Collapse the report to the per-study scalars.
    #[must_use]
    pub fn summary(&self) -> StudySummary {
        let lat = &self.statistics.lateral;
        let ap = &self.statistics.antero_posterior;
        let cop = &self.statistics.cop;
        StudySummary {
            lat_range: lat.range,
            lat_velocity: lat.mean_velocity,
            lat_rms: lat.rms,
            ap_range: ap.range,
            ap_velocity: ap.mean_velocity,
            ap_rms: ap.rms,
            cop_velocity: cop.mean_velocity,
            cop_distance: cop.mean_distance,
            cop_frequency: cop.mean_frequency,
            ellipse_area: self.bounding_ellipse.area,
            hull_area: self.convex_hull.as_ref().map(|r| r.area),
            oriented_ellipse_area: self.oriented_ellipse.as_ref().map(|r| r.area),
        }
    }

    /// The three area models that were computed, in a fixed order.
    pub fn area_models(&self) -> impl Iterator<Item = &AreaModelResult> {
        std::iter::once(&self.bounding_ellipse)
            .chain(self.convex_hull.as_ref())
            .chain(self.oriented_ellipse.as_ref())
    }
}

/// Run every analysis component on one recording.
///
/// # Errors
///
/// Returns the statistics or bounding-ellipse error (too few samples, invalid
/// configuration). Degenerate hull or oriented-ellipse geometry does not
/// fail the report; see [`SwayReport::skipped`].
///
/// # Example
///
/// ```
/// use sway_analysis::{analyze_sway, AnalysisConfig, SignalTable};
///
/// let table: SignalTable = (0..50)
///     .map(|i| {
///         let t = i as f64 * 0.1;
///         [t.sin() + 0.2 * t, (1.7 * t).cos()]
///     })
///     .collect();
///
/// let report = analyze_sway(&table, &AnalysisConfig::default())?;
/// assert!(report.skipped.is_empty());
/// assert_eq!(report.area_models().count(), 3);
/// # Ok::<(), sway_analysis::SwayError>(())
/// ```
pub fn analyze_sway(table: &SignalTable, config: &AnalysisConfig) -> Result<SwayReport> {
    let statistics = compute_signal_statistics(table, config)?;
    let bounding_ellipse = compute_bounding_ellipse(table, config)?;

    let mut skipped = Vec::new();
    let convex_hull = optional_model(
        AreaModelKind::ConvexHull,
        compute_convex_hull(table),
        &mut skipped,
    )?;
    let oriented_ellipse = optional_model(
        AreaModelKind::OrientedEllipse,
        compute_oriented_ellipse(table, config),
        &mut skipped,
    )?;

    Ok(SwayReport {
        statistics,
        bounding_ellipse,
        convex_hull,
        oriented_ellipse,
        skipped,
    })
}

/// Downgrade geometry errors to a skipped entry; anything else propagates.
fn optional_model(
    kind: AreaModelKind,
    outcome: Result<AreaModelResult>,
    skipped: &mut Vec<SkippedModel>,
) -> Result<Option<AreaModelResult>> {
    match outcome {
        Ok(result) => Ok(Some(result)),
        Err(err @ (SwayError::DegenerateGeometry(_) | SwayError::InvalidInput(_))) => {
            tracing::warn!(model = %kind, error = %err, "skipping area model");
            skipped.push(SkippedModel {
                kind,
                reason: err.to_string(),
            });
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
