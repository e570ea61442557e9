//! Wall-aware routing engine for utility runs on 2D floorplans.
//!
//! Given a snapshot of wall footprints, this crate routes electrical wires
//! and plumbing pipes between two points, preferring paths that travel
//! alongside walls (where real installations run in-wall chases). The
//! pipeline is:
//!
//! 1. **Search** ([`astar`]): A* over an implicit 8-connected grid anchored
//!    at the start point, with near-wall edges discounted by the configured
//!    wall bonus. Degrades to the direct segment instead of failing.
//! 2. **Simplify** ([`simplify`]): collapse collinear grid runs so only the
//!    endpoints and real corners remain.
//! 3. **Price** ([`router`]): cost the simplified length against the
//!    caller's per-material price table.
//!
//! # Example
//!
//! ```
//! use run_pathfind::RunRouter;
//! use run_types::{PriceTable, RouterConfig, RunKind};
//! use plan_spatial::WallFootprint;
//! use nalgebra::Point2;
//!
//! // A single wall running north along x = 0
//! let walls = vec![WallFootprint::new(-0.25, 0.0, 0.5, 20.0)];
//! let prices = PriceTable::new().with_price("12awg", 0.45);
//!
//! let router = RunRouter::new(&walls, &prices, RouterConfig::default())?;
//! let route = router.compute_route(
//!     Point2::new(0.0, 0.0),
//!     Point2::new(0.0, 20.0),
//!     RunKind::Wire,
//!     "12awg",
//! );
//!
//! assert!((route.length() - 20.0).abs() < 1e-9);
//! assert!((route.cost() - 9.0).abs() < 1e-9);
//! # Ok::<(), run_types::RoutingError>(())
//! ```
//!
//! # Determinism
//!
//! Identical inputs produce bit-identical routes: neighbor order is fixed,
//! open-set ties break on lowest estimate then insertion order, and search
//! statistics carry no wall-clock measurements.
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for the underlying types

#![doc(html_root_url = "https://docs.rs/run-pathfind/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod astar;
pub mod router;
pub mod simplify;

// Re-export main types at crate root for convenience
pub use astar::{POINT_EPSILON, SearchOutcome, WallAwareAStar};
pub use router::{RunRouter, compute_route};
pub use simplify::{HEADING_TOLERANCE, simplify_path};
