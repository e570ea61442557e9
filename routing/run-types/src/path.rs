//! Routed path geometry.
//!
//! A [`RoutePath`] is an ordered polyline of plane points with a cached
//! total length (the sum of consecutive-point Euclidean distances).
//!
//! # Example
//!
//! ```
//! use run_types::RoutePath;
//! use nalgebra::Point2;
//!
//! let path = RoutePath::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(3.0, 4.0),
//!     Point2::new(3.0, 10.0),
//! ]);
//!
//! assert_eq!(path.len(), 3);
//! assert!((path.length() - 11.0).abs() < 1e-12);
//! ```

use nalgebra::Point2;

/// An ordered polyline through the floorplan.
///
/// The length is computed once at construction; the point sequence is
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePath {
    /// Ordered sequence of plane points.
    points: Vec<Point2<f64>>,
    /// Cached total length (sum of segment lengths).
    length: f64,
}

impl RoutePath {
    /// Creates a path from a sequence of points.
    ///
    /// The total length is computed automatically.
    #[must_use]
    pub fn new(points: Vec<Point2<f64>>) -> Self {
        let length = Self::compute_length(&points);
        Self { points, length }
    }

    /// Creates an empty path.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            points: Vec::new(),
            length: 0.0,
        }
    }

    /// Creates a path containing a single point.
    ///
    /// # Example
    ///
    /// ```
    /// use run_types::RoutePath;
    /// use nalgebra::Point2;
    ///
    /// let path = RoutePath::from_single(Point2::new(5.0, 5.0));
    /// assert_eq!(path.len(), 1);
    /// assert!((path.length() - 0.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn from_single(point: Point2<f64>) -> Self {
        Self {
            points: vec![point],
            length: 0.0,
        }
    }

    /// Returns the points of the path.
    #[must_use]
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the path has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the total path length.
    ///
    /// Always `>= 0`; zero for paths of fewer than two points.
    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Returns the first point, if any.
    #[must_use]
    pub fn start(&self) -> Option<&Point2<f64>> {
        self.points.first()
    }

    /// Returns the last point, if any.
    #[must_use]
    pub fn end(&self) -> Option<&Point2<f64>> {
        self.points.last()
    }

    /// Consumes the path and returns its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2<f64>> {
        self.points
    }

    /// Computes the sum of consecutive-point Euclidean distances.
    fn compute_length(points: &[Point2<f64>]) -> f64 {
        points
            .windows(2)
            .map(|pair| nalgebra::distance(&pair[0], &pair[1]))
            .sum()
    }
}

impl Default for RoutePath {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length_straight() {
        let path = RoutePath::new(vec![Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)]);
        assert_relative_eq!(path.length(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_length_polyline() {
        let path = RoutePath::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 4.0), // 5
            Point2::new(3.0, 10.0), // 6
        ]);
        assert_relative_eq!(path.length(), 11.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty() {
        let path = RoutePath::empty();
        assert!(path.is_empty());
        assert_relative_eq!(path.length(), 0.0, epsilon = 1e-12);
        assert!(path.start().is_none());
        assert!(path.end().is_none());
    }

    #[test]
    fn test_single_point() {
        let path = RoutePath::from_single(Point2::new(5.0, 5.0));
        assert_eq!(path.len(), 1);
        assert_relative_eq!(path.length(), 0.0, epsilon = 1e-12);
        assert_eq!(path.start(), path.end());
    }

    #[test]
    fn test_start_end() {
        let path = RoutePath::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 0.0),
        ]);
        assert_eq!(path.start(), Some(&Point2::new(0.0, 0.0)));
        assert_eq!(path.end(), Some(&Point2::new(2.0, 0.0)));
    }

    #[test]
    fn test_into_points() {
        let points = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        let path = RoutePath::new(points.clone());
        assert_eq!(path.into_points(), points);
    }

    #[test]
    fn test_degenerate_zero_length_segments() {
        let p = Point2::new(2.0, 2.0);
        let path = RoutePath::new(vec![p, p, p]);
        assert_relative_eq!(path.length(), 0.0, epsilon = 1e-12);
    }
}
