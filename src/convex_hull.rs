//! Convex hull of the CoP point cloud.
//!
//! Uses Andrew's monotone chain. The hull is returned counter-clockwise,
//! starting at the lexicographically smallest point (lowest x, then lowest
//! y). Points lying on a hull edge and duplicate samples are not hull
//! vertices, so the output is identical for any ordering of the same point
//! set. Negative zero coordinates are treated as positive zero.

use std::cmp::Ordering;

use crate::area::{AreaModelKind, AreaModelResult};
use crate::error::{Result, SwayError};
use crate::math::geometry::{cross, polygon_area};
use crate::signal::SignalTable;

/// Minimum number of samples for [`compute_convex_hull`].
pub const MIN_SAMPLES: usize = 3;

/// Compute the convex hull of a recording and its enclosed area.
///
/// # Errors
///
/// Returns [`SwayError::DegenerateGeometry`] with fewer than 3 samples or
/// when all samples are collinear, and [`SwayError::InvalidInput`] if any
/// coordinate is NaN or infinite.
///
/// # Example
///
/// ```
/// use sway_analysis::{compute_convex_hull, SignalTable};
///
/// let table = SignalTable::new(vec![[0.0, 0.0], [2.0, 0.0], [1.0, 1.0], [2.0, 2.0], [0.0, 2.0]]);
/// let hull = compute_convex_hull(&table)?;
///
/// assert_eq!(hull.boundary.len(), 4);
/// assert!((hull.area - 4.0).abs() < 1e-12);
/// # Ok::<(), sway_analysis::SwayError>(())
/// ```
pub fn compute_convex_hull(table: &SignalTable) -> Result<AreaModelResult> {
    let n = table.len();
    if n < MIN_SAMPLES {
        return Err(SwayError::degenerate_geometry(format!(
            "convex hull needs at least {MIN_SAMPLES} points, got {n}"
        )));
    }
    if let Some(i) = table
        .iter()
        .position(|p| !p[0].is_finite() || !p[1].is_finite())
    {
        return Err(SwayError::invalid_input(format!(
            "sample {i} has a non-finite coordinate"
        )));
    }

    let vertices = monotone_chain(table.samples());
    let area = polygon_area(&vertices);

    if vertices.len() < 3 || area == 0.0 {
        return Err(SwayError::degenerate_geometry(
            "all points are collinear; convex hull is undefined",
        ));
    }

    tracing::debug!(
        samples = n,
        vertices = vertices.len(),
        area,
        "computed convex hull"
    );

    Ok(AreaModelResult {
        kind: AreaModelKind::ConvexHull,
        boundary: vertices,
        area,
    })
}

fn lexicographic(a: &[f64; 2], b: &[f64; 2]) -> Ordering {
    a[0].total_cmp(&b[0]).then(a[1].total_cmp(&b[1]))
}

/// Counter-clockwise hull vertices, without the closing repeat.
fn monotone_chain(points: &[[f64; 2]]) -> Vec<[f64; 2]> {
    // `total_cmp` orders -0.0 before 0.0
    let mut sorted: Vec<[f64; 2]> = points.iter().map(|p| [p[0] + 0.0, p[1] + 0.0]).collect();
    sorted.sort_by(lexicographic);
    sorted.dedup();

    if sorted.len() < 3 {
        return sorted;
    }

    let mut hull: Vec<[f64; 2]> = Vec::with_capacity(sorted.len() + 1);

    // Lower chain, left to right
    for &p in &sorted {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }

    // Upper chain, right to left
    let lower_len = hull.len() + 1;
    for &p in sorted.iter().rev().skip(1) {
        while hull.len() >= lower_len
            && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
        {
            hull.pop();
        }
        hull.push(p);
    }

    // Last point repeats the first
    hull.pop();
    hull
}
