//! Configuration for the wall-aware router.
//!
//! # Example
//!
//! ```
//! use run_types::RouterConfig;
//!
//! let config = RouterConfig::default()
//!     .with_grid_size(0.5)
//!     .with_wall_proximity(1.5)
//!     .with_wall_bonus(0.25);
//! ```

use crate::error::RoutingError;

/// Configuration for wall-aware A* routing.
///
/// Controls the search step, the wall-proximity classification, the cost
/// discount applied to wall-adjacent edges, and the resource bounds that
/// keep the implicit grid search finite.
///
/// # Wall bonus
///
/// The wall bonus is a heuristic shaping device, not a physical cost: edges
/// ending near a wall are discounted by a fixed amount, which pulls routes
/// alongside walls (emulating in-wall chases). In wall-dense regions the
/// adjusted edge cost can undercut true distance, making the search behave
/// greedily. That wall-hugging behavior is the product behavior and is
/// preserved as-is; [`RouterConfig::validate`] reports configurations where
/// the effect becomes extreme.
///
/// # Example
///
/// ```
/// use run_types::RouterConfig;
///
/// let config = RouterConfig::default()
///     .with_grid_size(1.0)
///     .with_max_expansions(50_000);
///
/// assert!(config.validate().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouterConfig {
    /// Step size of the implicit search grid, in plane units.
    grid_size: f64,
    /// Oracle distance at or below which a point counts as near-wall.
    wall_proximity: f64,
    /// Cost discount applied to edges whose endpoint is near-wall.
    wall_bonus: f64,
    /// Maximum node expansions before degrading to the direct fallback.
    max_expansions: usize,
    /// Padding around the start/end/wall bounding region that confines
    /// the search grid.
    bounds_margin: f64,
}

impl RouterConfig {
    /// Creates a configuration with default settings.
    ///
    /// Defaults:
    /// - Grid size: 1.0 plane unit
    /// - Wall proximity threshold: 2.0
    /// - Wall bonus: 0.5
    /// - Max expansions: 20,000
    /// - Bounds margin: 8.0
    #[must_use]
    pub const fn new() -> Self {
        Self {
            grid_size: 1.0,
            wall_proximity: 2.0,
            wall_bonus: 0.5,
            max_expansions: 20_000,
            bounds_margin: 8.0,
        }
    }

    /// Sets the grid step size.
    #[must_use]
    pub const fn with_grid_size(mut self, size: f64) -> Self {
        self.grid_size = size;
        self
    }

    /// Sets the wall proximity threshold.
    #[must_use]
    pub const fn with_wall_proximity(mut self, threshold: f64) -> Self {
        self.wall_proximity = threshold;
        self
    }

    /// Sets the wall bonus discount.
    #[must_use]
    pub const fn with_wall_bonus(mut self, bonus: f64) -> Self {
        self.wall_bonus = bonus;
        self
    }

    /// Sets the maximum number of node expansions.
    ///
    /// Exceeding the limit never fails the call; the router degrades to the
    /// direct two-point fallback.
    #[must_use]
    pub const fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = max;
        self
    }

    /// Sets the search-bounds margin.
    #[must_use]
    pub const fn with_bounds_margin(mut self, margin: f64) -> Self {
        self.bounds_margin = margin;
        self
    }

    /// Returns the grid step size.
    #[must_use]
    pub const fn grid_size(&self) -> f64 {
        self.grid_size
    }

    /// Returns the wall proximity threshold.
    #[must_use]
    pub const fn wall_proximity(&self) -> f64 {
        self.wall_proximity
    }

    /// Returns the wall bonus discount.
    #[must_use]
    pub const fn wall_bonus(&self) -> f64 {
        self.wall_bonus
    }

    /// Returns the maximum number of node expansions.
    #[must_use]
    pub const fn max_expansions(&self) -> usize {
        self.max_expansions
    }

    /// Returns the search-bounds margin.
    #[must_use]
    pub const fn bounds_margin(&self) -> f64 {
        self.bounds_margin
    }

    /// Validates the configuration and returns any soft issues.
    ///
    /// Soft issues are legal but worth flagging, e.g. a wall bonus at or
    /// above the grid size drives near-wall edge costs to zero or below and
    /// makes the search strongly greedy.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.wall_bonus >= self.grid_size {
            issues.push(format!(
                "wall_bonus {} >= grid_size {}: near-wall edge costs are non-positive",
                self.wall_bonus, self.grid_size
            ));
        }
        if self.max_expansions == 0 {
            issues.push("max_expansions is 0: every route degrades to the fallback".to_owned());
        }

        issues
    }

    /// Validates hard requirements, returning the configuration on success.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidConfig`] if the grid size is not a
    /// positive finite number, or a threshold is negative or non-finite.
    pub fn validated(self) -> Result<Self, RoutingError> {
        if !self.grid_size.is_finite() || self.grid_size <= 0.0 {
            return Err(RoutingError::invalid_config(format!(
                "grid_size must be positive and finite, got {}",
                self.grid_size
            )));
        }
        if !self.wall_proximity.is_finite() || self.wall_proximity < 0.0 {
            return Err(RoutingError::invalid_config(format!(
                "wall_proximity must be non-negative and finite, got {}",
                self.wall_proximity
            )));
        }
        if !self.wall_bonus.is_finite() || self.wall_bonus < 0.0 {
            return Err(RoutingError::invalid_config(format!(
                "wall_bonus must be non-negative and finite, got {}",
                self.wall_bonus
            )));
        }
        if !self.bounds_margin.is_finite() || self.bounds_margin < 0.0 {
            return Err(RoutingError::invalid_config(format!(
                "bounds_margin must be non-negative and finite, got {}",
                self.bounds_margin
            )));
        }
        Ok(self)
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}
