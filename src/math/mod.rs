//! Mathematical utilities for sway analysis.
//!
//! This module provides:
//! - [`geometry`]: bounding boxes, polar rotation, parametric ellipses, polygon area
//! - [`linalg`]: 2x2 covariance and principal-axis decomposition

pub mod geometry;
pub mod linalg;

pub use geometry::{polygon_area, rotate_polar, BoundingBox};
pub use linalg::{centroid, Covariance2};
