//! Axis-aligned plan regions.
//!
//! [`PlanBounds`] confines the implicit search grid used during routing: the
//! search space is the bounding region of the route endpoints and the wall
//! footprints, padded by a margin. This keeps the otherwise-unbounded grid
//! finite so an exhausted search terminates instead of expanding forever.

use nalgebra::Point2;

use crate::wall::WallFootprint;

/// An axis-aligned rectangular region of the floorplan.
///
/// # Example
///
/// ```
/// use plan_spatial::{PlanBounds, WallFootprint};
/// use nalgebra::Point2;
///
/// let walls = vec![WallFootprint::new(0.0, 0.0, 0.5, 10.0)];
/// let bounds = PlanBounds::around(
///     &[Point2::new(-1.0, 0.0), Point2::new(4.0, 4.0)],
///     &walls,
///     2.0,
/// );
///
/// assert!(bounds.contains(&Point2::new(0.0, 9.0)));
/// assert!(!bounds.contains(&Point2::new(100.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanBounds {
    /// Minimum corner.
    min: Point2<f64>,
    /// Maximum corner.
    max: Point2<f64>,
}

impl PlanBounds {
    /// Creates bounds from two opposite corners, in any order.
    #[must_use]
    pub fn from_corners(a: Point2<f64>, b: Point2<f64>) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates the smallest region containing `points` and `walls`, grown by
    /// `margin` on every side.
    ///
    /// `points` must be non-empty in practice (routing always supplies the
    /// start and end); with no points and no walls the region collapses to a
    /// margin-sized box around the origin.
    #[must_use]
    pub fn around(points: &[Point2<f64>], walls: &[WallFootprint], margin: f64) -> Self {
        let mut min = Point2::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);

        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        for wall in walls {
            min.x = min.x.min(wall.min().x);
            min.y = min.y.min(wall.min().y);
            max.x = max.x.max(wall.max().x);
            max.y = max.y.max(wall.max().y);
        }

        if min.x > max.x {
            min = Point2::origin();
            max = Point2::origin();
        }

        Self {
            min: Point2::new(min.x - margin, min.y - margin),
            max: Point2::new(max.x + margin, max.y + margin),
        }
    }

    /// Returns the minimum corner.
    #[must_use]
    pub const fn min(&self) -> &Point2<f64> {
        &self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub const fn max(&self) -> &Point2<f64> {
        &self.max
    }

    /// Returns `true` if the point lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, point: &Point2<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Returns the region's extents as `(width, height)`.
    #[must_use]
    pub fn extents(&self) -> (f64, f64) {
        (self.max.x - self.min.x, self.max.y - self.min.y)
    }
}
