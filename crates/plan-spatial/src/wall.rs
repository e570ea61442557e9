//! Wall footprints: axis-aligned 2D wall projections.
//!
//! A [`WallFootprint`] is the 2D rectangular projection of a wall onto the
//! floorplan, independent of the wall's 3D height or thickness. Footprints
//! are caller-owned snapshots; routing treats them as read-only for the
//! duration of a call and never mutates them.

use nalgebra::Point2;

/// Axis-aligned rectangular footprint of a wall on the floorplan.
///
/// Constructed from a top-left position plus width and height, matching how
/// floorplan tools describe walls. Corners are auto-ordered, so negative
/// extents are tolerated.
///
/// # Example
///
/// ```
/// use plan_spatial::WallFootprint;
/// use nalgebra::Point2;
///
/// let wall = WallFootprint::new(2.0, 3.0, 4.0, 0.5);
///
/// assert!((wall.width() - 4.0).abs() < 1e-12);
/// assert!((wall.height() - 0.5).abs() < 1e-12);
/// assert!(wall.contains(&Point2::new(3.0, 3.25)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallFootprint {
    /// Minimum corner (smallest x and y).
    min: Point2<f64>,
    /// Maximum corner (largest x and y).
    max: Point2<f64>,
}

impl WallFootprint {
    /// Creates a footprint from a top-left position and extents.
    ///
    /// Negative extents are normalized so `min`/`max` are always ordered.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_corners(Point2::new(x, y), Point2::new(x + width, y + height))
    }

    /// Creates a footprint from two opposite corners, in any order.
    ///
    /// # Example
    ///
    /// ```
    /// use plan_spatial::WallFootprint;
    /// use nalgebra::Point2;
    ///
    /// let a = WallFootprint::from_corners(Point2::new(4.0, 1.0), Point2::new(0.0, 3.0));
    /// let b = WallFootprint::from_corners(Point2::new(0.0, 1.0), Point2::new(4.0, 3.0));
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn from_corners(a: Point2<f64>, b: Point2<f64>) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
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

    /// Returns the footprint width (x extent).
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Returns the footprint height (y extent).
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns the center of the footprint.
    #[must_use]
    pub fn center(&self) -> Point2<f64> {
        Point2::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// Returns `true` if the point lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, point: &Point2<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Returns the point on (or inside) the footprint closest to `point`.
    ///
    /// Each coordinate is clamped to the footprint's extents. For a point
    /// inside the footprint this is the point itself.
    #[must_use]
    pub fn closest_point(&self, point: &Point2<f64>) -> Point2<f64> {
        Point2::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
        )
    }

    /// Returns the Euclidean distance from `point` to the footprint.
    ///
    /// Zero if the point is inside or on the boundary.
    ///
    /// # Example
    ///
    /// ```
    /// use plan_spatial::WallFootprint;
    /// use nalgebra::Point2;
    ///
    /// let wall = WallFootprint::new(0.0, 0.0, 2.0, 2.0);
    ///
    /// // 3-4-5 triangle from the (2, 2) corner.
    /// let d = wall.distance_to(&Point2::new(5.0, 6.0));
    /// assert!((d - 5.0).abs() < 1e-12);
    ///
    /// // Inside: distance is zero.
    /// assert!(wall.distance_to(&Point2::new(1.0, 1.0)) < 1e-12);
    /// ```
    #[must_use]
    pub fn distance_to(&self, point: &Point2<f64>) -> f64 {
        nalgebra::distance(point, &self.closest_point(point))
    }

    /// Returns the smallest footprint containing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Returns this footprint grown by `margin` on every side.
    #[must_use]
    pub fn inflated(&self, margin: f64) -> Self {
        Self {
            min: Point2::new(self.min.x - margin, self.min.y - margin),
            max: Point2::new(self.max.x + margin, self.max.y + margin),
        }
    }
}
