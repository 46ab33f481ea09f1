//! Linear algebra utilities for the oriented ellipse.
//!
//! This module provides the 2x2 population covariance of a point cloud and
//! its principal-axis decomposition. The major eigenvalue comes from
//! nalgebra's symmetric eigensolver; the closed-form 2x2 solution is kept
//! alongside for diagnostics.

use crate::error::{Result, SwayError};
use nalgebra::{Matrix2, SymmetricEigen};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Population covariance (divisor `N`) of a 2D point cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Covariance2 {
    /// Variance of the lateral axis.
    pub xx: f64,
    /// Lateral / antero-posterior covariance.
    pub xy: f64,
    /// Variance of the antero-posterior axis.
    pub yy: f64,
}

impl Covariance2 {
    /// Compute the population covariance of `points` around `centroid`.
    ///
    /// Returns the zero matrix for an empty slice.
    #[must_use]
    pub fn population(points: &[[f64; 2]], centroid: [f64; 2]) -> Self {
        if points.is_empty() {
            return Self {
                xx: 0.0,
                xy: 0.0,
                yy: 0.0,
            };
        }

        let (mut xx, mut xy, mut yy) = (0.0, 0.0, 0.0);
        for p in points {
            let dx = p[0] - centroid[0];
            let dy = p[1] - centroid[1];
            xx += dx * dx;
            xy += dx * dy;
            yy += dy * dy;
        }

        let n = points.len() as f64;
        Self {
            xx: xx / n,
            xy: xy / n,
            yy: yy / n,
        }
    }

    /// Trace `xx + yy`.
    #[must_use]
    #[inline]
    pub fn trace(&self) -> f64 {
        self.xx + self.yy
    }

    /// Determinant `xx * yy - xy^2`.
    #[must_use]
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.xx * self.yy - self.xy * self.xy
    }

    /// Eigenvalues `[major, minor]` from the closed-form 2x2 solution.
    ///
    /// `L1 = B/2 + sqrt(B^2 - 4C)/2` with `B` the trace and `C` the
    /// determinant. The discriminant is clamped at zero so rounding on
    /// near-isotropic clouds cannot produce NaN.
    #[must_use]
    pub fn eigenvalues(&self) -> [f64; 2] {
        let b = self.trace();
        let c = self.determinant();
        let root = (b * b - 4.0 * c).max(0.0).sqrt() / 2.0;
        [b / 2.0 + root, b / 2.0 - root]
    }

    /// Rotation angle of the principal-axis frame.
    ///
    /// Computed as `atan((L1 - yy) / xy)`, in `(-pi/2, pi/2)`, with `L1` the
    /// major eigenvalue from [`Self::symmetric_eigenvalues`]. Rotating the
    /// cloud by this angle brings the major axis onto the y axis and the
    /// minor axis onto the x axis.
    ///
    /// # Errors
    ///
    /// Returns [`SwayError::DegenerateGeometry`] if `xy` is exactly zero,
    /// since the principal direction then cannot be resolved this way.
    pub fn principal_rotation(&self) -> Result<f64> {
        if self.xy == 0.0 {
            return Err(SwayError::degenerate_geometry(
                "off-diagonal covariance is zero; principal axis rotation is undefined",
            ));
        }
        let [major, _] = self.symmetric_eigenvalues();
        Ok(((major - self.yy) / self.xy).atan())
    }

    /// Covariance as an nalgebra matrix.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix2<f64> {
        Matrix2::new(self.xx, self.xy, self.xy, self.yy)
    }

    /// Eigenvalues `[major, minor]` from nalgebra's general symmetric solver.
    #[must_use]
    pub fn symmetric_eigenvalues(&self) -> [f64; 2] {
        let eigen = SymmetricEigen::new(self.to_matrix());
        let (a, b) = (eigen.eigenvalues[0], eigen.eigenvalues[1]);
        if a >= b {
            [a, b]
        } else {
            [b, a]
        }
    }
}

/// Arithmetic mean of a point cloud (`[0, 0]` when empty).
#[must_use]
pub fn centroid(points: &[[f64; 2]]) -> [f64; 2] {
    if points.is_empty() {
        return [0.0, 0.0];
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p[0], sy + p[1]));
    [sx / n, sy / n]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_centroid() {
        let c = centroid(&[[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]]);
        assert_eq!(c, [1.0, 1.0]);
        assert_eq!(centroid(&[]), [0.0, 0.0]);
    }

    #[test]
    fn test_population_divisor() {
        // Two points one unit either side of the mean: population variance 1
        let points = [[-1.0, 0.0], [1.0, 0.0]];
        let cov = Covariance2::population(&points, [0.0, 0.0]);
        assert_relative_eq!(cov.xx, 1.0);
        assert_relative_eq!(cov.yy, 0.0);
        assert_relative_eq!(cov.xy, 0.0);
    }

    #[test]
    fn test_closed_form_matches_nalgebra() {
        let cov = Covariance2 {
            xx: 3.0,
            xy: 1.2,
            yy: 1.5,
        };
        let closed = cov.eigenvalues();
        let general = cov.symmetric_eigenvalues();
        assert_relative_eq!(closed[0], general[0], epsilon = 1e-12);
        assert_relative_eq!(closed[1], general[1], epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_aligns_major_axis() {
        let cov = Covariance2 {
            xx: 2.0,
            xy: 0.8,
            yy: 1.0,
        };
        let rot = cov.principal_rotation().unwrap();
        let eigen = SymmetricEigen::new(cov.to_matrix());
        let i = usize::from(eigen.eigenvalues[1] > eigen.eigenvalues[0]);
        let axis = eigen.eigenvectors.column(i);
        // Rotating the major axis by `rot` lands it on the y axis
        let angle = axis[1].atan2(axis[0]) + rot;
        assert_relative_eq!(angle.cos(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_off_diagonal_is_degenerate() {
        let cov = Covariance2 {
            xx: 2.0,
            xy: 0.0,
            yy: 1.0,
        };
        assert!(matches!(
            cov.principal_rotation(),
            Err(SwayError::DegenerateGeometry(_))
        ));
    }

    #[test]
    fn test_rotation_matches_closed_form() {
        let cov = Covariance2 {
            xx: 1.5,
            xy: 9.5 / 7.0,
            yy: 1.5,
        };
        let [major, _] = cov.eigenvalues();
        let closed = ((major - cov.yy) / cov.xy).atan();
        assert_relative_eq!(cov.principal_rotation().unwrap(), closed, epsilon = 1e-12);
    }

    #[test]
    fn test_isotropic_discriminant_is_finite() {
        let cov = Covariance2 {
            xx: 1.0,
            xy: 1e-300,
            yy: 1.0,
        };
        let [major, minor] = cov.eigenvalues();
        assert!(major.is_finite() && minor.is_finite());
    }
}
