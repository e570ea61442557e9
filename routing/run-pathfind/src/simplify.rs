//! Collinear-run path simplification.
//!
//! Grid search produces one point per step; long straight stretches are
//! redundant. The simplifier keeps an interior point only when the heading
//! changes there by more than [`HEADING_TOLERANCE`] radians, so a straight
//! 20-step corridor collapses to its two endpoints while every real corner
//! survives.
//!
//! # Example
//!
//! ```
//! use run_pathfind::simplify::simplify_path;
//! use run_types::RoutePath;
//! use nalgebra::Point2;
//!
//! let dense = RoutePath::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(2.0, 1.0),
//!     Point2::new(2.0, 2.0),
//! ]);
//!
//! let simple = simplify_path(&dense);
//! assert_eq!(simple.len(), 3);
//! assert!((simple.length() - dense.length()).abs() < 1e-12);
//! ```

use nalgebra::Point2;
use run_types::RoutePath;

/// Minimum heading change, in radians, for an interior point to survive.
///
/// Comfortably below the smallest turn an 8-connected grid can produce
/// (pi/4), and above floating-point noise on long straight runs.
pub const HEADING_TOLERANCE: f64 = 0.1;

/// Removes interior points where the path heading is unchanged.
///
/// Endpoints are always kept, headings are measured against the original
/// dense path, and paths with two or fewer points pass through untouched.
/// Points on a straight line contribute no length, so the simplified path
/// measures the same as the input.
#[must_use]
pub fn simplify_path(path: &RoutePath) -> RoutePath {
    let points = path.points();
    if points.len() <= 2 {
        return path.clone();
    }

    let mut kept = Vec::with_capacity(points.len());
    kept.push(points[0]);
    for window in points.windows(3) {
        let incoming = heading(&window[0], &window[1]);
        let outgoing = heading(&window[1], &window[2]);
        if heading_difference(incoming, outgoing) > HEADING_TOLERANCE {
            kept.push(window[1]);
        }
    }
    kept.push(points[points.len() - 1]);

    RoutePath::new(kept)
}

/// Heading of the segment from `a` to `b`, in radians.
fn heading(a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    (b.y - a.y).atan2(b.x - a.x)
}

/// Absolute angular difference between two headings, wrapped to `[0, pi]`.
fn heading_difference(a: f64, b: f64) -> f64 {
    let tau = std::f64::consts::TAU;
    let diff = (b - a).rem_euclid(tau);
    diff.min(tau - diff)
}
