//! Routed run results and search statistics.
//!
//! A [`RunRoute`] is the immutable record handed back to the caller: the
//! final polyline, its length, the estimated material cost, and the tags
//! identifying the run. The engine holds no reference to it after returning.

use nalgebra::Point2;

use crate::path::RoutePath;

/// The kind of utility run a route carries.
///
/// Used only for tagging the result record; both kinds route identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunKind {
    /// An electrical wire run.
    Wire,
    /// A plumbing pipe run.
    Pipe,
}

impl std::fmt::Display for RunKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wire => write!(f, "wire"),
            Self::Pipe => write!(f, "pipe"),
        }
    }
}

/// Statistics about a single search invocation.
///
/// Deliberately excludes wall-clock time so that identical inputs always
/// produce identical values.
///
/// # Example
///
/// ```
/// use run_types::SearchStats;
///
/// let stats = SearchStats::new()
///     .with_nodes_expanded(240)
///     .with_open_set_size(31);
///
/// assert_eq!(stats.nodes_expanded(), 240);
/// assert!(!stats.used_fallback());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Number of nodes expanded during search.
    nodes_expanded: usize,
    /// Number of entries left in the open set at completion.
    open_set_size: usize,
    /// Whether the direct two-point fallback was used.
    used_fallback: bool,
}

impl SearchStats {
    /// Creates empty statistics.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes_expanded: 0,
            open_set_size: 0,
            used_fallback: false,
        }
    }

    /// Sets the number of nodes expanded.
    #[must_use]
    pub const fn with_nodes_expanded(mut self, count: usize) -> Self {
        self.nodes_expanded = count;
        self
    }

    /// Sets the open set size at completion.
    #[must_use]
    pub const fn with_open_set_size(mut self, size: usize) -> Self {
        self.open_set_size = size;
        self
    }

    /// Sets whether the fallback path was used.
    #[must_use]
    pub const fn with_fallback(mut self, used: bool) -> Self {
        self.used_fallback = used;
        self
    }

    /// Returns the number of nodes expanded.
    #[must_use]
    pub const fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    /// Returns the open set size at completion.
    #[must_use]
    pub const fn open_set_size(&self) -> usize {
        self.open_set_size
    }

    /// Returns whether the direct two-point fallback was used.
    #[must_use]
    pub const fn used_fallback(&self) -> bool {
        self.used_fallback
    }
}

/// An immutable routed run: path, length, cost, and tags.
///
/// Owned by the caller once returned. The start and end accessors read from
/// the path itself, so the record cannot disagree with its geometry.
///
/// # Example
///
/// ```
/// use run_types::{RunRoute, RunKind, RoutePath};
/// use nalgebra::Point2;
///
/// let path = RoutePath::new(vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)]);
/// let route = RunRoute::new(RunKind::Wire, "12awg", path, 4.5).with_id(7);
///
/// assert_eq!(route.id(), 7);
/// assert_eq!(route.material(), "12awg");
/// assert!((route.length() - 10.0).abs() < 1e-12);
/// assert!((route.cost() - 4.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunRoute {
    /// Caller-assigned identifier; defaults to 0.
    id: u64,
    /// Whether this run is a wire or a pipe.
    kind: RunKind,
    /// Material or gauge key used for pricing.
    material: String,
    /// The routed polyline.
    path: RoutePath,
    /// Estimated material cost for the path length.
    cost: f64,
}

impl RunRoute {
    /// Creates a route record from its components.
    #[must_use]
    pub fn new(kind: RunKind, material: impl Into<String>, path: RoutePath, cost: f64) -> Self {
        Self {
            id: 0,
            kind,
            material: material.into(),
            path,
            cost,
        }
    }

    /// Sets the caller-assigned identifier.
    #[must_use]
    pub const fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

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

    /// Returns the routed path.
    #[must_use]
    pub const fn path(&self) -> &RoutePath {
        &self.path
    }

    /// Returns the first point of the path, if any.
    #[must_use]
    pub fn start(&self) -> Option<&Point2<f64>> {
        self.path.start()
    }

    /// Returns the last point of the path, if any.
    #[must_use]
    pub fn end(&self) -> Option<&Point2<f64>> {
        self.path.end()
    }

    /// Returns the total path length.
    #[must_use]
    pub const fn length(&self) -> f64 {
        self.path.length()
    }

    /// Returns the estimated cost.
    #[must_use]
    pub const fn cost(&self) -> f64 {
        self.cost
    }

    /// Consumes the route and returns the path.
    #[must_use]
    pub fn into_path(self) -> RoutePath {
        self.path
    }
}
