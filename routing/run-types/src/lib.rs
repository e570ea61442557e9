//! Core types for utility-run routing: configuration, prices, paths, and
//! results.
//!
//! This crate provides the foundational types for routing electrical wires
//! and plumbing pipes across a 2D floorplan:
//!
//! - **Configuration**: search step, wall-proximity threshold, and wall
//!   bonus ([`RouterConfig`])
//! - **Pricing**: explicit per-call price tables and cost estimation
//!   ([`PriceTable`])
//! - **Paths**: immutable polylines with cached lengths ([`RoutePath`])
//! - **Results**: routed run records and search statistics ([`RunRoute`],
//!   [`SearchStats`])
//! - **Reporting**: bill-of-materials rollups ([`UsageSummary`],
//!   [`summarize_usage`])
//!
//! # Example
//!
//! ```
//! use run_types::{PriceTable, RouterConfig, RoutePath, RunKind, RunRoute};
//! use nalgebra::Point2;
//!
//! // Configure the router
//! let config = RouterConfig::default()
//!     .with_grid_size(1.0)
//!     .with_wall_bonus(0.5);
//! assert!(config.validate().is_empty());
//!
//! // Price the materials
//! let prices = PriceTable::new().with_price("12awg", 0.45);
//!
//! // A routed result (normally produced by run-pathfind)
//! let path = RoutePath::new(vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)]);
//! let cost = prices.cost_of("12awg", path.length());
//! let route = RunRoute::new(RunKind::Wire, "12awg", path, cost).with_id(1);
//!
//! assert!((route.cost() - 4.5).abs() < 1e-12);
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for all types

#![doc(html_root_url = "https://docs.rs/run-types/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod config;
pub mod error;
pub mod path;
pub mod price;
pub mod route;
pub mod summary;

// Re-export main types at crate root for convenience
pub use config::RouterConfig;
pub use error::RoutingError;
pub use path::RoutePath;
pub use price::{DEFAULT_UNIT_PRICE, PriceTable};
pub use route::{RunKind, RunRoute, SearchStats};
pub use summary::{MaterialUsage, UsageSummary, summarize_usage};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod integration_tests {
    use super::*;
    use nalgebra::Point2;

    /// All types constructed and used together, placement-tool style.
    #[test]
    fn test_full_workflow_types() {
        let config = RouterConfig::default()
            .with_grid_size(0.5)
            .with_wall_proximity(1.5)
            .with_wall_bonus(0.25)
            .validated()
            .unwrap();
        assert!(config.validate().is_empty());

        let prices = PriceTable::new()
            .with_price("12awg", 0.45)
            .with_price("pex-3/4", 1.10);

        let path = RoutePath::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 12.0),
            Point2::new(4.0, 12.0),
        ]);
        let cost = prices.cost_of("12awg", path.length());
        let route = RunRoute::new(RunKind::Wire, "12awg", path, cost).with_id(3);

        assert!((route.length() - 16.0).abs() < 1e-12);
        assert!((route.cost() - 7.2).abs() < 1e-12);

        let summary = summarize_usage(std::slice::from_ref(&route));
        assert_eq!(summary.by_material().len(), 1);
        assert!((summary.total_cost() - route.cost()).abs() < 1e-12);
    }

    /// Hard config validation produces a typed error.
    #[test]
    fn test_error_types() {
        let result = RouterConfig::default().with_grid_size(-1.0).validated();
        match result {
            Err(error) => {
                assert!(error.is_invalid_config());
                assert!(error.to_string().contains("grid_size"));
            }
            Ok(_) => panic!("negative grid size must be rejected"),
        }
    }
}
