//! Property-based tests for the routing pipeline.

use nalgebra::Point2;
use plan_spatial::WallFootprint;
use proptest::prelude::*;
use run_pathfind::{POINT_EPSILON, RunRouter, simplify_path};
use run_types::{PriceTable, RoutePath, RouterConfig, RunKind};

/// Strategy for a point within a modest floorplan extent.
fn point_strategy() -> impl Strategy<Value = Point2<f64>> {
    (-20.0..20.0f64, -20.0..20.0f64).prop_map(|(x, y)| Point2::new(x, y))
}

/// Strategy for up to four wall footprints.
fn walls_strategy() -> impl Strategy<Value = Vec<WallFootprint>> {
    prop::collection::vec(
        (-15.0..15.0f64, -15.0..15.0f64, 0.2..4.0f64, 0.2..8.0f64)
            .prop_map(|(x, y, w, h)| WallFootprint::new(x, y, w, h)),
        0..=4,
    )
}

/// Strategy for a grid walk: a start point plus a sequence of 8-direction
/// unit steps, matching the shape of raw search output.
fn grid_walk_strategy() -> impl Strategy<Value = Vec<Point2<f64>>> {
    (
        (-10.0..10.0f64, -10.0..10.0f64),
        prop::collection::vec(0usize..8, 1..40),
    )
        .prop_map(|((x, y), steps)| {
            const DIRS: [(f64, f64); 8] = [
                (1.0, 0.0),
                (-1.0, 0.0),
                (0.0, 1.0),
                (0.0, -1.0),
                (1.0, 1.0),
                (1.0, -1.0),
                (-1.0, 1.0),
                (-1.0, -1.0),
            ];
            let mut points = vec![Point2::new(x, y)];
            for step in steps {
                let (dx, dy) = DIRS[step];
                let last = points[points.len() - 1];
                points.push(Point2::new(last.x + dx, last.y + dy));
            }
            points
        })
}

proptest! {
    /// Routes always begin exactly at the requested start and end within
    /// point tolerance of the requested end.
    #[test]
    fn prop_route_endpoints(
        start in point_strategy(),
        end in point_strategy(),
        walls in walls_strategy(),
    ) {
        let prices = PriceTable::new();
        let router = RunRouter::new(&walls, &prices, RouterConfig::default()).unwrap();
        let route = router.compute_route(start, end, RunKind::Wire, "12awg");

        prop_assert_eq!(route.start(), Some(&start));
        let route_end = route.end().copied().unwrap();
        prop_assert!(nalgebra::distance(&route_end, &end) <= POINT_EPSILON);
    }

    /// Routed length is never shorter than the straight-line distance,
    /// up to the endpoint tolerance.
    #[test]
    fn prop_route_length_lower_bound(
        start in point_strategy(),
        end in point_strategy(),
        walls in walls_strategy(),
    ) {
        let prices = PriceTable::new();
        let router = RunRouter::new(&walls, &prices, RouterConfig::default()).unwrap();
        let route = router.compute_route(start, end, RunKind::Pipe, "pex-3/4");

        let straight = nalgebra::distance(&start, &end);
        prop_assert!(route.length() >= straight - 2.0 * POINT_EPSILON);
    }

    /// Identical inputs always produce identical routes.
    #[test]
    fn prop_routing_deterministic(
        start in point_strategy(),
        end in point_strategy(),
        walls in walls_strategy(),
    ) {
        let prices = PriceTable::new().with_price("12awg", 0.45);
        let router = RunRouter::new(&walls, &prices, RouterConfig::default()).unwrap();

        let a = router.compute_route(start, end, RunKind::Wire, "12awg");
        let b = router.compute_route(start, end, RunKind::Wire, "12awg");

        prop_assert_eq!(a.path().points(), b.path().points());
        prop_assert_eq!(a.cost().to_bits(), b.cost().to_bits());
    }

    /// Cost is the material unit price times the simplified length.
    #[test]
    fn prop_cost_is_price_times_length(
        start in point_strategy(),
        end in point_strategy(),
        unit_price in 0.01..100.0f64,
    ) {
        let walls = Vec::new();
        let prices = PriceTable::new().with_price("12awg", unit_price);
        let router = RunRouter::new(&walls, &prices, RouterConfig::default()).unwrap();
        let route = router.compute_route(start, end, RunKind::Wire, "12awg");

        prop_assert!((route.cost() - unit_price * route.length()).abs() <= 1e-9 * route.cost().abs().max(1.0));
    }

    /// Simplification preserves endpoints and length on grid-shaped paths.
    #[test]
    fn prop_simplify_preserves_endpoints_and_length(walk in grid_walk_strategy()) {
        let dense = RoutePath::new(walk);
        let simple = simplify_path(&dense);

        prop_assert_eq!(simple.start(), dense.start());
        prop_assert_eq!(simple.end(), dense.end());
        prop_assert!((simple.length() - dense.length()).abs() <= 1e-9);
    }

    /// Simplification is idempotent on grid-shaped paths: every heading
    /// change is a multiple of pi/4, so surviving corners survive again.
    #[test]
    fn prop_simplify_idempotent(walk in grid_walk_strategy()) {
        let dense = RoutePath::new(walk);
        let once = simplify_path(&dense);
        let twice = simplify_path(&once);

        prop_assert_eq!(once.points(), twice.points());
    }

    /// Fallback routes are exactly the requested segment regardless of walls.
    #[test]
    fn prop_fallback_is_direct_segment(
        start in point_strategy(),
        end in point_strategy(),
        walls in walls_strategy(),
    ) {
        let prices = PriceTable::new();
        let config = RouterConfig::default().with_max_expansions(0);
        let router = RunRouter::new(&walls, &prices, config).unwrap();

        let (route, stats) = router.compute_route_with_stats(start, end, RunKind::Wire, "12awg");
        prop_assert!(stats.used_fallback());
        prop_assert_eq!(route.path().points(), &[start, end][..]);
    }
}
