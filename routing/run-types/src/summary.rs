//! Bill-of-materials aggregation over stored routes.
//!
//! Callers persist [`RunRoute`]s after each placement; this module rolls
//! them up by run kind and material for a usage/cost summary view. It only
//! consumes results and never reaches into routing internals.
//!
//! # Example
//!
//! ```
//! use run_types::{summarize_usage, RunRoute, RunKind, RoutePath};
//! use nalgebra::Point2;
//!
//! let routes = vec![
//!     RunRoute::new(
//!         RunKind::Wire,
//!         "12awg",
//!         RoutePath::new(vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)]),
//!         4.5,
//!     ),
//!     RunRoute::new(
//!         RunKind::Wire,
//!         "12awg",
//!         RoutePath::new(vec![Point2::new(0.0, 0.0), Point2::new(0.0, 5.0)]),
//!         2.25,
//!     ),
//! ];
//!
//! let summary = summarize_usage(&routes);
//! let usage = &summary.by_material()[0];
//! assert_eq!(usage.run_count(), 2);
//! assert!((usage.total_length() - 15.0).abs() < 1e-12);
//! ```

use std::collections::BTreeMap;

use crate::route::{RunKind, RunRoute};

/// Aggregated usage for one `(kind, material)` group.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialUsage {
    /// The run kind this group covers.
    kind: RunKind,
    /// The material/gauge key this group covers.
    material: String,
    /// Number of routes in the group.
    run_count: usize,
    /// Sum of route lengths.
    total_length: f64,
    /// Sum of route costs.
    total_cost: f64,
}

impl MaterialUsage {
    /// Returns the run kind.
    #[must_use]
    pub const fn kind(&self) -> RunKind {
        self.kind
    }

    /// Returns the material/gauge key.
    #[must_use]
    pub fn material(&self) -> &str {
        &self.material
    }

    /// Returns the number of routes aggregated.
    #[must_use]
    pub const fn run_count(&self) -> usize {
        self.run_count
    }

    /// Returns the total routed length.
    #[must_use]
    pub const fn total_length(&self) -> f64 {
        self.total_length
    }

    /// Returns the total estimated cost.
    #[must_use]
    pub const fn total_cost(&self) -> f64 {
        self.total_cost
    }
}

/// A bill-of-materials style rollup of stored routes.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UsageSummary {
    /// Per-group usage, ordered by kind then material.
    by_material: Vec<MaterialUsage>,
}

impl UsageSummary {
    /// Returns the per-material usage groups.
    #[must_use]
    pub fn by_material(&self) -> &[MaterialUsage] {
        &self.by_material
    }

    /// Returns the grand-total cost across all groups.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.by_material.iter().map(MaterialUsage::total_cost).sum()
    }

    /// Returns the grand-total routed length across all groups.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.by_material
            .iter()
            .map(MaterialUsage::total_length)
            .sum()
    }
}

/// Aggregates routes by `(kind, material)`.
///
/// Group order is deterministic: wires before pipes, then by material key.
#[must_use]
pub fn summarize_usage(routes: &[RunRoute]) -> UsageSummary {
    let mut groups: BTreeMap<(u8, String), MaterialUsage> = BTreeMap::new();

    for route in routes {
        let order = match route.kind() {
            RunKind::Wire => 0,
            RunKind::Pipe => 1,
        };
        let entry = groups
            .entry((order, route.material().to_owned()))
            .or_insert_with(|| MaterialUsage {
                kind: route.kind(),
                material: route.material().to_owned(),
                run_count: 0,
                total_length: 0.0,
                total_cost: 0.0,
            });
        entry.run_count += 1;
        entry.total_length += route.length();
        entry.total_cost += route.cost();
    }

    UsageSummary {
        by_material: groups.into_values().collect(),
    }
}
