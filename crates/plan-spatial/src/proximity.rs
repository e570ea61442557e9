//! Wall proximity queries.
//!
//! These are the queries the routing engine uses to bias its edge costs
//! toward wall-adjacent cells. Both are pure and total: there are no failure
//! conditions, and an empty wall list simply reports "not near any wall",
//! which degrades routing to plain Euclidean-distance search.

use nalgebra::Point2;

use crate::wall::WallFootprint;

/// Returns the distance from `point` to the nearest wall footprint.
///
/// Returns `f64::INFINITY` when `walls` is empty, so every proximity
/// threshold classifies the point as "not near a wall".
///
/// # Example
///
/// ```
/// use plan_spatial::{WallFootprint, distance_to_nearest_wall};
/// use nalgebra::Point2;
///
/// let walls = vec![
///     WallFootprint::new(0.0, 0.0, 0.5, 10.0),
///     WallFootprint::new(8.0, 0.0, 0.5, 10.0),
/// ];
///
/// let d = distance_to_nearest_wall(&Point2::new(2.0, 5.0), &walls);
/// assert!((d - 1.5).abs() < 1e-12);
///
/// assert!(distance_to_nearest_wall(&Point2::new(2.0, 5.0), &[]).is_infinite());
/// ```
#[must_use]
pub fn distance_to_nearest_wall(point: &Point2<f64>, walls: &[WallFootprint]) -> f64 {
    walls
        .iter()
        .map(|wall| wall.distance_to(point))
        .fold(f64::INFINITY, f64::min)
}

/// Returns `true` if `point` is within `threshold` of any wall footprint.
///
/// Always `false` for an empty wall list.
///
/// # Example
///
/// ```
/// use plan_spatial::{WallFootprint, is_near_wall};
/// use nalgebra::Point2;
///
/// let walls = vec![WallFootprint::new(0.0, 0.0, 0.5, 10.0)];
///
/// assert!(is_near_wall(&Point2::new(1.5, 5.0), &walls, 2.0));
/// assert!(!is_near_wall(&Point2::new(5.0, 5.0), &walls, 2.0));
/// ```
#[must_use]
pub fn is_near_wall(point: &Point2<f64>, walls: &[WallFootprint], threshold: f64) -> bool {
    distance_to_nearest_wall(point, walls) <= threshold
}
