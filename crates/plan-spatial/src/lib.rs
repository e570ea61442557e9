//! 2D floorplan geometry for utility routing.
//!
//! This crate provides the spatial foundation used by the routing stack:
//!
//! - [`WallFootprint`] - Axis-aligned 2D projection of a wall
//! - [`PlanBounds`] - Axis-aligned region bounding a search area
//! - [`distance_to_nearest_wall`] and [`is_near_wall`] - Proximity queries
//!
//! All coordinates are in plane units (feet) on a single 2D floorplan, using
//! `nalgebra::Point2<f64>` for positions.
//!
//! # Proximity queries
//!
//! Wall proximity drives cost shaping during routing: edges that end near a
//! wall are discounted so runs prefer in-wall chases. The queries here are
//! pure and total; an empty wall list reports "not near any wall" for every
//! point.
//!
//! ```
//! use plan_spatial::{WallFootprint, distance_to_nearest_wall, is_near_wall};
//! use nalgebra::Point2;
//!
//! let walls = vec![WallFootprint::new(0.0, 0.0, 0.5, 20.0)];
//!
//! let p = Point2::new(1.5, 10.0);
//! assert!((distance_to_nearest_wall(&p, &walls) - 1.0).abs() < 1e-12);
//! assert!(is_near_wall(&p, &walls, 2.0));
//! assert!(!is_near_wall(&p, &walls, 0.5));
//!
//! // No walls: never near.
//! assert!(!is_near_wall(&p, &[], 1000.0));
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for all types

#![doc(html_root_url = "https://docs.rs/plan-spatial/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod bounds;
pub mod proximity;
pub mod wall;

pub use bounds::PlanBounds;
pub use proximity::{distance_to_nearest_wall, is_near_wall};
pub use wall::WallFootprint;
