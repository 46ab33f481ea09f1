//! Property tests for the analysis components.

use proptest::prelude::*;
use sway_analysis::math::geometry::convex_polygon_contains;
use sway_analysis::{
    compute_bounding_ellipse, compute_convex_hull, compute_oriented_ellipse,
    compute_signal_statistics, fit_oriented_ellipse, AnalysisConfig, BoundingBox, SignalTable,
};

fn sway_samples(min: usize, max: usize) -> impl Strategy<Value = Vec<[f64; 2]>> {
    prop::collection::vec(
        (-50.0f64..50.0, -50.0f64..50.0).prop_map(|(x, y)| [x, y]),
        min..max,
    )
}

proptest! {
    #[test]
    fn prop_bounding_ellipse_matches_signal_extent(samples in sway_samples(1, 200)) {
        let table = SignalTable::new(samples);
        let result = compute_bounding_ellipse(&table, &AnalysisConfig::high_resolution()).unwrap();
        prop_assert!(result.area >= 0.0);

        let signal = BoundingBox::of_points(table.samples()).unwrap();
        let ellipse = result.bounding_box().unwrap();
        // 360 perimeter samples land within 1 - cos(pi / 359) of each extreme
        let tol = 1e-3 * (1.0 + signal.max_x - signal.min_x + signal.max_y - signal.min_y);
        prop_assert!((ellipse.min_x - signal.min_x).abs() <= tol);
        prop_assert!((ellipse.max_x - signal.max_x).abs() <= tol);
        prop_assert!((ellipse.min_y - signal.min_y).abs() <= tol);
        prop_assert!((ellipse.max_y - signal.max_y).abs() <= tol);
    }

    #[test]
    fn prop_hull_contains_every_sample(samples in sway_samples(3, 150)) {
        let table = SignalTable::new(samples);
        if let Ok(hull) = compute_convex_hull(&table) {
            prop_assert!(hull.area > 0.0);
            for p in table.iter() {
                prop_assert!(convex_polygon_contains(&hull.boundary, *p, 1e-7));
            }
        }
    }

    #[test]
    fn prop_oriented_area_rotation_invariant(
        samples in sway_samples(5, 100),
        phi in -3.0f64..3.0,
    ) {
        let table = SignalTable::new(samples);
        let config = AnalysisConfig::default();
        let (s, c) = phi.sin_cos();
        let rotated: SignalTable = table
            .iter()
            .map(|p| [p[0] * c - p[1] * s, p[0] * s + p[1] * c])
            .collect();

        if let (Ok(base), Ok(turned)) = (
            fit_oriented_ellipse(&table, &config),
            compute_oriented_ellipse(&rotated, &config),
        ) {
            // Near-isotropic clouds have no well-defined principal axis
            let [major, minor] = base.covariance.eigenvalues();
            prop_assume!(major - minor > 1e-6 * major);

            let scale = base.result.area.abs().max(1.0);
            prop_assert!((base.result.area - turned.area).abs() <= 1e-6 * scale);
        }
    }

    #[test]
    fn prop_statistics_idempotent(samples in sway_samples(2, 100)) {
        let table = SignalTable::new(samples);
        let config = AnalysisConfig::default();
        let first = compute_signal_statistics(&table, &config).unwrap();
        let second = compute_signal_statistics(&table, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_area_models_idempotent(samples in sway_samples(3, 100)) {
        let table = SignalTable::new(samples);
        let config = AnalysisConfig::default();

        prop_assert_eq!(
            compute_bounding_ellipse(&table, &config).unwrap(),
            compute_bounding_ellipse(&table, &config).unwrap()
        );
        prop_assert_eq!(compute_convex_hull(&table), compute_convex_hull(&table));
        prop_assert_eq!(
            compute_oriented_ellipse(&table, &config),
            compute_oriented_ellipse(&table, &config)
        );
    }
}
