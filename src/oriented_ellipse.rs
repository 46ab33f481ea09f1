//! Ellipse aligned to the principal axes of the CoP point cloud.
//!
//! # Algorithm
//!
//! 1. Centroid and population covariance (divisor `N`) of the samples.
//! 2. Largest eigenvalue `L1` of the 2x2 covariance, closed form.
//! 3. Frame rotation `rot = atan((L1 - cov_yy) / cov_xy)`.
//! 4. Rotate every centred sample by `rot` (polar round-trip) and take the
//!    axis-aligned extent of the rotated cloud: semi-axes `aa`, `bb`.
//! 5. Trace the ellipse in the rotated frame, rotate it back by `-rot` and
//!    translate by the centroid.
//! 6. `area = pi * aa * bb`.
//!
//! The rotation divides by `cov_xy`, so an exactly zero off-diagonal term is
//! rejected rather than producing NaN.

use std::f64::consts::PI;

use crate::area::{AreaModelKind, AreaModelResult};
use crate::config::AnalysisConfig;
use crate::error::{Result, SwayError};
use crate::math::geometry::{parametric_ellipse, rotate_polar, BoundingBox};
use crate::math::linalg::{centroid, Covariance2};
use crate::signal::SignalTable;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimum number of samples for [`compute_oriented_ellipse`].
pub const MIN_SAMPLES: usize = 2;

/// Oriented ellipse together with the frame it was fitted in.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrientedEllipse {
    /// Perimeter in original coordinates and enclosed area.
    pub result: AreaModelResult,
    /// Centroid of the samples.
    pub centroid: [f64; 2],
    /// Frame rotation angle (radians) applied before fitting.
    pub rotation: f64,
    /// Semi-axes `[aa, bb]` along the rotated frame's x and y.
    pub semi_axes: [f64; 2],
    /// Population covariance of the samples.
    pub covariance: Covariance2,
}

/// Fit the principal-axis ellipse, keeping the intermediate frame.
///
/// # Errors
///
/// Returns [`SwayError::InsufficientData`] with fewer than 2 samples,
/// [`SwayError::DegenerateGeometry`] when the off-diagonal covariance is
/// exactly zero, or [`SwayError::InvalidConfig`] if `config` does not
/// validate.
pub fn fit_oriented_ellipse(table: &SignalTable, config: &AnalysisConfig) -> Result<OrientedEllipse> {
    config.validate()?;

    let n = table.len();
    if n < MIN_SAMPLES {
        return Err(SwayError::insufficient_data(MIN_SAMPLES, n));
    }

    let samples = table.samples();
    let cen = centroid(samples);
    let covariance = Covariance2::population(samples, cen);
    let rot = covariance.principal_rotation()?;

    let rotated: Vec<[f64; 2]> = samples
        .iter()
        .map(|p| rotate_polar([p[0] - cen[0], p[1] - cen[1]], rot))
        .collect();

    let extent = BoundingBox::of_points(&rotated)
        .ok_or_else(|| SwayError::insufficient_data(MIN_SAMPLES, n))?;
    let [aa, bb] = extent.semi_axes();

    let boundary = parametric_ellipse(extent.center(), [aa, bb], config.boundary_points)
        .into_iter()
        .map(|p| {
            let q = rotate_polar(p, -rot);
            [q[0] + cen[0], q[1] + cen[1]]
        })
        .collect();

    let area = PI * aa * bb;

    tracing::debug!(
        samples = n,
        rotation = rot,
        aa,
        bb,
        area,
        "fitted oriented ellipse"
    );

    Ok(OrientedEllipse {
        result: AreaModelResult {
            kind: AreaModelKind::OrientedEllipse,
            boundary,
            area,
        },
        centroid: cen,
        rotation: rot,
        semi_axes: [aa, bb],
        covariance,
    })
}

/// Compute the principal-axis-oriented ellipse of a recording.
///
/// # Errors
///
/// See [`fit_oriented_ellipse`].
///
/// # Example
///
/// ```
/// use sway_analysis::{compute_oriented_ellipse, AnalysisConfig, SignalTable};
///
/// let table = SignalTable::new(vec![
///     [-2.0, -2.0], [-1.0, -1.0], [0.0, 0.0], [1.0, 1.0], [2.0, 2.0],
///     [-0.5, 0.5], [0.5, -0.5],
/// ]);
/// let ellipse = compute_oriented_ellipse(&table, &AnalysisConfig::default())?;
///
/// assert!((ellipse.area - 2.0 * std::f64::consts::PI).abs() < 1e-9);
/// # Ok::<(), sway_analysis::SwayError>(())
/// ```
pub fn compute_oriented_ellipse(
    table: &SignalTable,
    config: &AnalysisConfig,
) -> Result<AreaModelResult> {
    fit_oriented_ellipse(table, config).map(|fit| fit.result)
}
