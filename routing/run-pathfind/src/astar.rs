//! Wall-aware A* over an implicit 2D grid.
//!
//! The search walks an 8-connected grid stepped at the configured grid size
//! and anchored at the start point (inputs need not be grid-aligned). Walls
//! are never obstacles; instead, edges ending near a wall are discounted by
//! the wall bonus so routes prefer wall-adjacent cells.
//!
//! The search cannot fail: an exhausted open set or an expansion budget
//! overrun degrades to the direct two-point segment, so the caller always
//! receives a usable path.
//!
//! # Example
//!
//! ```
//! use run_pathfind::astar::WallAwareAStar;
//! use run_types::RouterConfig;
//! use plan_spatial::WallFootprint;
//! use nalgebra::Point2;
//!
//! let walls = vec![WallFootprint::new(-0.25, 0.0, 0.5, 20.0)];
//! let config = RouterConfig::default();
//! let search = WallAwareAStar::new(&walls, &config);
//!
//! let outcome = search.search(Point2::new(0.0, 0.0), Point2::new(0.0, 20.0));
//! assert!(!outcome.stats().used_fallback());
//! assert_eq!(outcome.points().last(), Some(&Point2::new(0.0, 20.0)));
//! ```

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use nalgebra::Point2;
use plan_spatial::{PlanBounds, WallFootprint, is_near_wall};
use run_types::{RouterConfig, SearchStats};

/// Tolerance for treating two plane points as the same grid cell.
///
/// Grid arithmetic in floating point does not always reproduce identical bit
/// patterns for the same logical cell, so set membership is keyed on
/// coordinates quantized to this tolerance rather than exact equality.
pub const POINT_EPSILON: f64 = 0.01;

/// The 8 neighbor directions: axis-aligned first, then diagonals.
///
/// The order is fixed; together with the fully specified tie-break rule it
/// makes the search deterministic.
const DIRECTIONS: [(f64, f64); 8] = [
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (1.0, 1.0),
    (1.0, -1.0),
    (-1.0, 1.0),
    (-1.0, -1.0),
];

/// A search node in the per-call arena.
///
/// Parents are arena indices rather than pointers; the arena lives only for
/// one search invocation and is discarded after path reconstruction.
#[derive(Debug, Clone)]
struct SearchNode {
    /// Position on the implicit grid.
    point: Point2<f64>,
    /// Accumulated wall-discounted cost from the start.
    g: f64,
    /// Euclidean estimate to the goal.
    h: f64,
    /// Arena index of the node this one was reached from.
    parent: Option<usize>,
    /// Whether the node has been expanded.
    closed: bool,
}

/// Open-set entry ordered for a max-heap so the best node pops first.
///
/// Best means lowest `f = g + h`; ties break on lowest `h`, then earliest
/// insertion. Entries are lazily deleted: a relaxed node gets a fresh entry
/// and the stale one is skipped when popped.
#[derive(Debug, Clone, Copy)]
struct OpenEntry {
    f: f64,
    h: f64,
    seq: u64,
    index: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

/// The result of one search invocation.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    points: Vec<Point2<f64>>,
    stats: SearchStats,
}

impl SearchOutcome {
    /// Returns the path points, start to goal.
    #[must_use]
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    /// Returns the search statistics.
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Consumes the outcome and returns the path points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2<f64>> {
        self.points
    }
}

/// Wall-aware A* pathfinder.
///
/// Borrows a read-only wall snapshot and configuration for the duration of
/// the call; holds no state across invocations, so concurrent searches over
/// the same snapshot are safe.
///
/// # Example
///
/// ```
/// use run_pathfind::astar::WallAwareAStar;
/// use run_types::RouterConfig;
/// use nalgebra::Point2;
///
/// let config = RouterConfig::default();
/// let search = WallAwareAStar::new(&[], &config);
///
/// let outcome = search.search(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
/// assert_eq!(outcome.points().first(), Some(&Point2::new(0.0, 0.0)));
/// assert_eq!(outcome.points().last(), Some(&Point2::new(10.0, 0.0)));
/// ```
pub struct WallAwareAStar<'a> {
    /// Read-only wall footprint snapshot.
    walls: &'a [WallFootprint],
    /// Search configuration.
    config: &'a RouterConfig,
}

impl<'a> WallAwareAStar<'a> {
    /// Creates a pathfinder over the given wall snapshot and configuration.
    #[must_use]
    pub const fn new(walls: &'a [WallFootprint], config: &'a RouterConfig) -> Self {
        Self { walls, config }
    }

    /// Finds a wall-preferring path from `start` to `end`.
    ///
    /// The returned path always begins exactly at `start`. On success it
    /// ends exactly at `end` (the goal is appended once a node within one
    /// grid step of it is expanded); when the search degrades it is the
    /// direct `[start, end]` segment. Never fails.
    #[must_use]
    pub fn search(&self, start: Point2<f64>, end: Point2<f64>) -> SearchOutcome {
        let grid = self.config.grid_size();
        let bounds = PlanBounds::around(&[start, end], self.walls, self.config.bounds_margin());

        let mut arena: Vec<SearchNode> = Vec::new();
        let mut cell_index: HashMap<(i64, i64), usize> = HashMap::new();
        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        let mut seq: u64 = 0;
        let mut expanded: usize = 0;

        let start_h = nalgebra::distance(&start, &end);
        arena.push(SearchNode {
            point: start,
            g: 0.0,
            h: start_h,
            parent: None,
            closed: false,
        });
        cell_index.insert(cell_key(&start), 0);
        open.push(OpenEntry {
            f: start_h,
            h: start_h,
            seq,
            index: 0,
        });

        while let Some(entry) = open.pop() {
            let (g, h, closed) = {
                let node = &arena[entry.index];
                (node.g, node.h, node.closed)
            };
            // Lazy deletion: skip entries superseded by relaxation.
            if closed || (g + h).total_cmp(&entry.f) != Ordering::Equal {
                continue;
            }

            if expanded >= self.config.max_expansions() {
                return self.fallback(start, end, expanded, open.len());
            }

            let current = arena[entry.index].point;
            if nalgebra::distance(&current, &end) <= grid + POINT_EPSILON {
                let points = reconstruct(&arena, entry.index, &end);
                let stats = SearchStats::new()
                    .with_nodes_expanded(expanded)
                    .with_open_set_size(open.len());
                return SearchOutcome { points, stats };
            }

            arena[entry.index].closed = true;
            expanded += 1;

            for (dx, dy) in DIRECTIONS {
                let neighbor = Point2::new(current.x + dx * grid, current.y + dy * grid);
                if !bounds.contains(&neighbor) {
                    continue;
                }

                let step = nalgebra::distance(&current, &neighbor);
                let near = is_near_wall(&neighbor, self.walls, self.config.wall_proximity());
                let edge = if near {
                    step - self.config.wall_bonus()
                } else {
                    step
                };
                let tentative = arena[entry.index].g + edge;

                let key = cell_key(&neighbor);
                match cell_index.get(&key) {
                    Some(&existing) => {
                        let node = &mut arena[existing];
                        if node.closed || tentative >= node.g {
                            continue;
                        }
                        node.g = tentative;
                        node.parent = Some(entry.index);
                        seq += 1;
                        open.push(OpenEntry {
                            f: tentative + node.h,
                            h: node.h,
                            seq,
                            index: existing,
                        });
                    }
                    None => {
                        let nh = nalgebra::distance(&neighbor, &end);
                        let index = arena.len();
                        arena.push(SearchNode {
                            point: neighbor,
                            g: tentative,
                            h: nh,
                            parent: Some(entry.index),
                            closed: false,
                        });
                        cell_index.insert(key, index);
                        seq += 1;
                        open.push(OpenEntry {
                            f: tentative + nh,
                            h: nh,
                            seq,
                            index,
                        });
                    }
                }
            }
        }

        // Open set exhausted without reaching the goal.
        self.fallback(start, end, expanded, 0)
    }

    /// Builds the direct two-point degraded result.
    fn fallback(
        &self,
        start: Point2<f64>,
        end: Point2<f64>,
        expanded: usize,
        open_len: usize,
    ) -> SearchOutcome {
        SearchOutcome {
            points: vec![start, end],
            stats: SearchStats::new()
                .with_nodes_expanded(expanded)
                .with_open_set_size(open_len)
                .with_fallback(true),
        }
    }
}

/// Quantizes a point to its epsilon-tolerant cell key.
fn cell_key(point: &Point2<f64>) -> (i64, i64) {
    #[allow(clippy::cast_possible_truncation)]
    (
        (point.x / POINT_EPSILON).round() as i64,
        (point.y / POINT_EPSILON).round() as i64,
    )
}

/// Walks parent indices back to the start and returns the path in
/// start-to-goal order, appending the exact goal point when the final node
/// is not already on it.
fn reconstruct(arena: &[SearchNode], goal_index: usize, end: &Point2<f64>) -> Vec<Point2<f64>> {
    let mut points = Vec::new();
    let mut cursor = Some(goal_index);
    while let Some(index) = cursor {
        points.push(arena[index].point);
        cursor = arena[index].parent;
    }
    points.reverse();

    if let Some(last) = points.last() {
        if nalgebra::distance(last, end) > POINT_EPSILON {
            points.push(*end);
        }
    }
    points
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn open_field() -> Vec<WallFootprint> {
        Vec::new()
    }

    #[test]
    fn test_search_straight_line_no_walls() {
        let walls = open_field();
        let config = RouterConfig::default();
        let search = WallAwareAStar::new(&walls, &config);

        let outcome = search.search(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));

        assert!(!outcome.stats().used_fallback());
        assert_eq!(outcome.points().first(), Some(&Point2::new(0.0, 0.0)));
        assert_eq!(outcome.points().last(), Some(&Point2::new(10.0, 0.0)));
    }

    #[test]
    fn test_search_trivial_start_equals_end() {
        let walls = open_field();
        let config = RouterConfig::default();
        let search = WallAwareAStar::new(&walls, &config);

        let p = Point2::new(5.0, 5.0);
        let outcome = search.search(p, p);

        assert_eq!(outcome.points(), &[p]);
        assert_eq!(outcome.stats().nodes_expanded(), 0);
    }

    #[test]
    fn test_search_off_grid_endpoints() {
        let walls = open_field();
        let config = RouterConfig::default();
        let search = WallAwareAStar::new(&walls, &config);

        let start = Point2::new(0.3, 0.7);
        let end = Point2::new(7.9, 3.2);
        let outcome = search.search(start, end);

        assert_eq!(outcome.points().first(), Some(&start));
        // Goal appended exactly.
        assert_eq!(outcome.points().last(), Some(&end));

        // The node before the appended goal is within one grid step of it.
        let n = outcome.points().len();
        let last_node = outcome.points()[n - 2];
        assert!(nalgebra::distance(&last_node, &end) <= config.grid_size() + POINT_EPSILON);
    }

    #[test]
    fn test_search_hugs_wall() {
        let walls = vec![WallFootprint::new(-0.25, 0.0, 0.5, 20.0)];
        let config = RouterConfig::default();
        let search = WallAwareAStar::new(&walls, &config);

        let outcome = search.search(Point2::new(0.0, 0.0), Point2::new(0.0, 20.0));
        assert!(!outcome.stats().used_fallback());

        let near = outcome
            .points()
            .iter()
            .filter(|p| is_near_wall(p, &walls, config.wall_proximity()))
            .count();
        assert_eq!(near, outcome.points().len());
    }

    #[test]
    fn test_search_expansion_budget_fallback() {
        let walls = open_field();
        let config = RouterConfig::default().with_max_expansions(0);
        let search = WallAwareAStar::new(&walls, &config);

        let start = Point2::new(0.0, 0.0);
        let end = Point2::new(50.0, 50.0);
        let outcome = search.search(start, end);

        assert!(outcome.stats().used_fallback());
        assert_eq!(outcome.points(), &[start, end]);
    }

    #[test]
    fn test_search_deterministic() {
        let walls = vec![
            WallFootprint::new(3.0, -2.0, 0.5, 10.0),
            WallFootprint::new(7.0, 2.0, 0.5, 10.0),
        ];
        let config = RouterConfig::default();
        let search = WallAwareAStar::new(&walls, &config);

        let start = Point2::new(0.0, 0.0);
        let end = Point2::new(10.0, 6.0);
        let a = search.search(start, end);
        let b = search.search(start, end);

        assert_eq!(a.points(), b.points());
        assert_eq!(a.stats(), b.stats());
    }

    #[test]
    fn test_search_consecutive_steps_bounded() {
        let walls = open_field();
        let config = RouterConfig::default();
        let search = WallAwareAStar::new(&walls, &config);

        let outcome = search.search(Point2::new(0.0, 0.0), Point2::new(6.0, 9.0));
        let diag = config.grid_size() * std::f64::consts::SQRT_2;

        for pair in outcome.points().windows(2) {
            let step = nalgebra::distance(&pair[0], &pair[1]);
            assert!(step <= diag + POINT_EPSILON);
        }
    }

    #[test]
    fn test_cell_key_tolerance() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(1.0 + 1e-9, 2.0 - 1e-9);
        assert_eq!(cell_key(&a), cell_key(&b));

        let c = Point2::new(1.02, 2.0);
        assert_ne!(cell_key(&a), cell_key(&c));
    }

    #[test]
    fn test_stats_counts_expansions() {
        let walls = open_field();
        let config = RouterConfig::default();
        let search = WallAwareAStar::new(&walls, &config);

        let outcome = search.search(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        // A straight 10-unit run expands one node per grid step.
        assert!(outcome.stats().nodes_expanded() >= 9);
        assert!(outcome.stats().nodes_expanded() < 100);
    }

    #[test]
    fn test_fine_grid() {
        let walls = open_field();
        let config = RouterConfig::default()
            .with_grid_size(0.25)
            .with_wall_bonus(0.1);
        let search = WallAwareAStar::new(&walls, &config);

        let start = Point2::new(0.0, 0.0);
        let end = Point2::new(3.0, 0.0);
        let outcome = search.search(start, end);

        assert!(!outcome.stats().used_fallback());
        assert_eq!(outcome.points().last(), Some(&end));

        let raw_length: f64 = outcome
            .points()
            .windows(2)
            .map(|pair| nalgebra::distance(&pair[0], &pair[1]))
            .sum();
        assert_relative_eq!(raw_length, 3.0, epsilon = 1e-9);
    }
}
