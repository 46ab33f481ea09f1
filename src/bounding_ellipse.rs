//! Axis-aligned ellipse circumscribing the signal's coordinate extremes.

use std::f64::consts::PI;

use crate::area::{AreaModelKind, AreaModelResult};
use crate::config::AnalysisConfig;
use crate::error::{Result, SwayError};
use crate::math::geometry::{parametric_ellipse, BoundingBox};
use crate::signal::SignalTable;

/// Fit the axis-aligned bounding ellipse of a recording.
///
/// Semi-axes are half the lateral and antero-posterior ranges, the center is
/// the middle of the coordinate extent, and the area is `pi * a * b`. A
/// constant signal gives a zero-radius ellipse with zero area.
///
/// # Errors
///
/// Returns [`SwayError::InsufficientData`] for an empty table, or
/// [`SwayError::InvalidConfig`] if `config` does not validate.
///
/// # Example
///
/// ```
/// use sway_analysis::{compute_bounding_ellipse, AnalysisConfig, SignalTable};
///
/// let square = SignalTable::new(vec![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]]);
/// let ellipse = compute_bounding_ellipse(&square, &AnalysisConfig::default())?;
///
/// assert!((ellipse.area - std::f64::consts::PI).abs() < 1e-12);
/// assert_eq!(ellipse.boundary.len(), 100);
/// # Ok::<(), sway_analysis::SwayError>(())
/// ```
pub fn compute_bounding_ellipse(
    table: &SignalTable,
    config: &AnalysisConfig,
) -> Result<AreaModelResult> {
    config.validate()?;

    let extent = BoundingBox::of_points(table.samples())
        .ok_or_else(|| SwayError::insufficient_data(1, table.len()))?;

    let [a, b] = extent.semi_axes();
    let center = extent.center();
    let area = PI * a * b;

    tracing::debug!(samples = table.len(), a, b, area, "fitted bounding ellipse");

    Ok(AreaModelResult {
        kind: AreaModelKind::BoundingEllipse,
        boundary: parametric_ellipse(center, [a, b], config.boundary_points),
        area,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_square() {
        let table = SignalTable::new(vec![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]]);
        let result = compute_bounding_ellipse(&table, &AnalysisConfig::default()).unwrap();

        assert_eq!(result.kind, AreaModelKind::BoundingEllipse);
        assert_relative_eq!(result.area, PI);

        let bb = result.bounding_box().unwrap();
        assert_relative_eq!(bb.min_x, 0.0, epsilon = 1e-3);
        assert_relative_eq!(bb.max_x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(bb.min_y, 0.0, epsilon = 1e-3);
        assert_relative_eq!(bb.max_y, 2.0, epsilon = 1e-3);

        // First perimeter point sits at angle 0: (x0 + a, y0)
        assert_relative_eq!(result.boundary[0][0], 2.0);
        assert_relative_eq!(result.boundary[0][1], 1.0);
    }

    #[test]
    fn test_constant_signal_is_point() {
        let table = SignalTable::new(vec![[1.5, -0.5]; 4]);
        let result = compute_bounding_ellipse(&table, &AnalysisConfig::default()).unwrap();

        assert_eq!(result.area, 0.0);
        assert!(result.boundary.iter().all(|p| *p == [1.5, -0.5]));
    }

    #[test]
    fn test_single_sample() {
        let table = SignalTable::new(vec![[1.0, 2.0]]);
        let result = compute_bounding_ellipse(&table, &AnalysisConfig::default()).unwrap();
        assert_eq!(result.area, 0.0);
    }

    #[test]
    fn test_empty_table() {
        let err = compute_bounding_ellipse(&SignalTable::default(), &AnalysisConfig::default())
            .unwrap_err();
        assert_eq!(err, SwayError::insufficient_data(1, 0));
    }

    #[test]
    fn test_boundary_resolution() {
        let table = SignalTable::new(vec![[0.0, 0.0], [1.0, 3.0]]);
        let config = AnalysisConfig::default().with_boundary_points(12);
        let result = compute_bounding_ellipse(&table, &config).unwrap();
        assert_eq!(result.len(), 12);
    }
}
