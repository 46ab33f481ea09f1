//! Planar geometry helpers shared by the area models.

use std::f64::consts::PI;

use crate::signal::linspace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned extent of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Extent of `points`, or `None` when the iterator is empty.
    ///
    /// NaN coordinates are skipped unless every value on an axis is NaN.
    pub fn of_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a [f64; 2]>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let init = Self {
            min_x: first[0],
            max_x: first[0],
            min_y: first[1],
            max_y: first[1],
        };

        Some(iter.fold(init, |b, p| Self {
            min_x: b.min_x.min(p[0]),
            max_x: b.max_x.max(p[0]),
            min_y: b.min_y.min(p[1]),
            max_y: b.max_y.max(p[1]),
        }))
    }

    /// Half-widths `[a, b]` along x and y.
    #[must_use]
    pub fn semi_axes(&self) -> [f64; 2] {
        [
            (self.max_x - self.min_x) / 2.0,
            (self.max_y - self.min_y) / 2.0,
        ]
    }

    /// Box center, computed as `max - semi_axis` per axis.
    #[must_use]
    pub fn center(&self) -> [f64; 2] {
        let [a, b] = self.semi_axes();
        [self.max_x - a, self.max_y - b]
    }
}

/// Polar coordinates `(theta, rho)` of a vector.
#[must_use]
#[inline]
pub fn to_polar(v: [f64; 2]) -> (f64, f64) {
    (v[1].atan2(v[0]), (v[0] * v[0] + v[1] * v[1]).sqrt())
}

/// Cartesian coordinates of `(theta, rho)`.
#[must_use]
#[inline]
pub fn from_polar(theta: f64, rho: f64) -> [f64; 2] {
    [rho * theta.cos(), rho * theta.sin()]
}

/// Rotate a vector about the origin by `angle`, through a polar round-trip.
#[must_use]
#[inline]
pub fn rotate_polar(v: [f64; 2], angle: f64) -> [f64; 2] {
    let (theta, rho) = to_polar(v);
    from_polar(theta + angle, rho)
}

/// `n` perimeter points of an axis-aligned ellipse, angle evenly spaced over
/// `[0, 2pi]` with both ends included.
#[must_use]
pub fn parametric_ellipse(center: [f64; 2], semi_axes: [f64; 2], n: usize) -> Vec<[f64; 2]> {
    linspace(0.0, 2.0 * PI, n)
        .into_iter()
        .map(|t| {
            [
                center[0] + semi_axes[0] * t.cos(),
                center[1] + semi_axes[1] * t.sin(),
            ]
        })
        .collect()
}

/// Z component of `(a - o) x (b - o)`; positive for a left turn.
#[must_use]
#[inline]
pub fn cross(o: [f64; 2], a: [f64; 2], b: [f64; 2]) -> f64 {
    (a[0] - o[0]) * (b[1] - o[1]) - (a[1] - o[1]) * (b[0] - o[0])
}

/// Enclosed area of a simple polygon (shoelace formula).
#[must_use]
pub fn polygon_area(vertices: &[[f64; 2]]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let twice: f64 = vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(p, q)| p[0] * q[1] - q[0] * p[1])
        .sum();
    twice.abs() / 2.0
}

/// Whether `p` lies inside or on a counter-clockwise convex polygon.
///
/// `tolerance` absorbs rounding for points on an edge.
#[must_use]
pub fn convex_polygon_contains(vertices: &[[f64; 2]], p: [f64; 2], tolerance: f64) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .all(|(&a, &b)| cross(a, b, p) >= -tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_bounding_box() {
        let pts = [[1.0, -2.0], [3.0, 4.0], [-1.0, 0.0]];
        let bb = BoundingBox::of_points(&pts).unwrap();
        assert_eq!(bb.min_x, -1.0);
        assert_eq!(bb.max_x, 3.0);
        assert_eq!(bb.min_y, -2.0);
        assert_eq!(bb.max_y, 4.0);
        assert_eq!(bb.semi_axes(), [2.0, 3.0]);
        assert_eq!(bb.center(), [1.0, 1.0]);

        assert!(BoundingBox::of_points(&[] as &[[f64; 2]]).is_none());
    }

    #[test]
    fn test_polar_round_trip() {
        let v = [3.0, -4.0];
        let (theta, rho) = to_polar(v);
        assert_relative_eq!(rho, 5.0);
        let back = from_polar(theta, rho);
        assert_relative_eq!(back[0], 3.0, epsilon = 1e-12);
        assert_relative_eq!(back[1], -4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_polar() {
        let r = rotate_polar([1.0, 0.0], FRAC_PI_2);
        assert_relative_eq!(r[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(r[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parametric_ellipse_closes() {
        let pts = parametric_ellipse([1.0, 1.0], [2.0, 1.0], 100);
        assert_eq!(pts.len(), 100);
        assert_relative_eq!(pts[0][0], 3.0);
        assert_relative_eq!(pts[0][1], 1.0);
        assert_relative_eq!(pts[99][0], pts[0][0], epsilon = 1e-12);
        assert_relative_eq!(pts[99][1], pts[0][1], epsilon = 1e-12);
    }

    #[test]
    fn test_polygon_area() {
        let square = [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]];
        assert_relative_eq!(polygon_area(&square), 4.0);

        let clockwise: Vec<_> = square.iter().rev().copied().collect();
        assert_relative_eq!(polygon_area(&clockwise), 4.0);

        assert_eq!(polygon_area(&square[..2]), 0.0);
    }

    #[test]
    fn test_convex_polygon_contains() {
        let square = [[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]];
        assert!(convex_polygon_contains(&square, [1.0, 1.0], 0.0));
        assert!(convex_polygon_contains(&square, [2.0, 1.0], 0.0));
        assert!(!convex_polygon_contains(&square, [2.5, 1.0], 1e-9));
    }
}
