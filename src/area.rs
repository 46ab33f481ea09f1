//! Shared result shape of the dispersion-area models.
//!
//! Each area model produces an [`AreaModelResult`]: the perimeter traced as
//! an ordered list of points, for plotting, and the enclosed area.

use std::fmt;

use crate::math::geometry::BoundingBox;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which area model produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AreaModelKind {
    /// Axis-aligned ellipse circumscribing the coordinate extremes.
    BoundingEllipse,
    /// Convex hull of the point cloud.
    ConvexHull,
    /// Ellipse aligned to the principal axes of the covariance.
    OrientedEllipse,
}

impl AreaModelKind {
    /// Stored study field name for this model's area.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::BoundingEllipse => "area_elipse",
            Self::ConvexHull => "area_hull",
            Self::OrientedEllipse => "area_pca",
        }
    }
}

impl fmt::Display for AreaModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BoundingEllipse => "bounding ellipse",
            Self::ConvexHull => "convex hull",
            Self::OrientedEllipse => "oriented ellipse",
        };
        f.write_str(name)
    }
}

/// Perimeter and enclosed area of one dispersion model.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AreaModelResult {
    /// Model that produced this result.
    pub kind: AreaModelKind,
    /// Perimeter points in drawing order.
    pub boundary: Vec<[f64; 2]>,
    /// Enclosed area (mm^2), never negative.
    pub area: f64,
}

impl AreaModelResult {
    /// Number of perimeter points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boundary.len()
    }

    /// Whether the perimeter is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boundary.is_empty()
    }

    /// Perimeter x coordinates.
    #[must_use]
    pub fn xs(&self) -> Vec<f64> {
        self.boundary.iter().map(|p| p[0]).collect()
    }

    /// Perimeter y coordinates.
    #[must_use]
    pub fn ys(&self) -> Vec<f64> {
        self.boundary.iter().map(|p| p[1]).collect()
    }

    /// Axis-aligned extent of the perimeter.
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::of_points(&self.boundary)
    }
}
