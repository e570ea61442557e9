//! Route assembly: search, simplify, price.
//!
//! [`RunRouter`] is the orchestration layer placement tools call. Each
//! request runs the wall-aware search over the current wall snapshot,
//! simplifies the dense grid path, prices the result against the supplied
//! table, and hands back an immutable [`RunRoute`]. Routing never fails:
//! degraded searches still produce a priced direct segment.
//!
//! # Example
//!
//! ```
//! use run_pathfind::router::RunRouter;
//! use run_types::{PriceTable, RouterConfig, RunKind};
//! use plan_spatial::WallFootprint;
//! use nalgebra::Point2;
//!
//! let walls = vec![WallFootprint::new(-0.25, 0.0, 0.5, 20.0)];
//! let prices = PriceTable::new().with_price("12awg", 0.45);
//! let router = RunRouter::new(&walls, &prices, RouterConfig::default())?;
//!
//! let route = router.compute_route(
//!     Point2::new(0.0, 0.0),
//!     Point2::new(0.0, 20.0),
//!     RunKind::Wire,
//!     "12awg",
//! );
//! assert!((route.length() - 20.0).abs() < 1e-9);
//! # Ok::<(), run_types::RoutingError>(())
//! ```

use nalgebra::Point2;
use plan_spatial::WallFootprint;
use run_types::{PriceTable, RoutePath, RouterConfig, RoutingError, RunKind, RunRoute, SearchStats};
use tracing::debug;

use crate::astar::WallAwareAStar;
use crate::simplify::simplify_path;

/// Stateless routing engine over a wall snapshot and price table.
///
/// Holds only borrows; the caller keeps ownership of the floorplan data and
/// may route many runs against one router. Wall edits between routes mean
/// building a fresh router over the new snapshot.
pub struct RunRouter<'a> {
    /// Read-only wall footprints for proximity queries.
    walls: &'a [WallFootprint],
    /// Per-material unit prices.
    prices: &'a PriceTable,
    /// Validated search configuration.
    config: RouterConfig,
}

impl<'a> RunRouter<'a> {
    /// Creates a router, rejecting unusable configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidConfig`] when the configuration fails
    /// hard validation (non-positive or non-finite grid size, negative
    /// thresholds).
    pub fn new(
        walls: &'a [WallFootprint],
        prices: &'a PriceTable,
        config: RouterConfig,
    ) -> Result<Self, RoutingError> {
        let config = config.validated()?;
        Ok(Self {
            walls,
            prices,
            config,
        })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Routes a run from `start` to `end` and prices it.
    ///
    /// Always returns a route; a degraded search yields the direct segment.
    #[must_use]
    pub fn compute_route(
        &self,
        start: Point2<f64>,
        end: Point2<f64>,
        kind: RunKind,
        material: &str,
    ) -> RunRoute {
        self.compute_route_with_stats(start, end, kind, material).0
    }

    /// Routes a run and also returns the search statistics.
    #[must_use]
    pub fn compute_route_with_stats(
        &self,
        start: Point2<f64>,
        end: Point2<f64>,
        kind: RunKind,
        material: &str,
    ) -> (RunRoute, SearchStats) {
        let search = WallAwareAStar::new(self.walls, &self.config);
        let outcome = search.search(start, end);
        let stats = outcome.stats();

        let dense = RoutePath::new(outcome.into_points());
        let path = simplify_path(&dense);
        let cost = self.prices.cost_of(material, path.length());

        debug!(
            %kind,
            material,
            length = path.length(),
            cost,
            nodes_expanded = stats.nodes_expanded(),
            fallback = stats.used_fallback(),
            "routed run"
        );

        (RunRoute::new(kind, material, path, cost), stats)
    }
}

/// One-shot convenience: builds a router and routes a single run.
///
/// # Errors
///
/// Returns [`RoutingError::InvalidConfig`] when `config` fails hard
/// validation. The routing itself never fails.
pub fn compute_route(
    start: Point2<f64>,
    end: Point2<f64>,
    kind: RunKind,
    material: &str,
    walls: &[WallFootprint],
    prices: &PriceTable,
    config: RouterConfig,
) -> Result<RunRoute, RoutingError> {
    let router = RunRouter::new(walls, prices, config)?;
    Ok(router.compute_route(start, end, kind, material))
}
