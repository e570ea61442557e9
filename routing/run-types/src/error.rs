//! Error types for routing operations.
//!
//! Routing itself is total by design: an exhausted search degrades to the
//! direct two-point fallback, degenerate inputs yield zero-length results,
//! and unknown materials fall back to a default unit price. The only errors
//! left are construction-time configuration problems.

/// Errors that can occur while setting up a router.
///
/// # Example
///
/// ```
/// use run_types::RoutingError;
///
/// let error = RoutingError::invalid_config("grid_size must be positive");
/// assert!(error.to_string().contains("grid_size"));
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RoutingError {
    /// An invalid configuration parameter was provided.
    ///
    /// Check the configuration values for valid ranges.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl RoutingError {
    /// Creates an invalid configuration error with the given message.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Returns `true` if this is an invalid-configuration error.
    #[must_use]
    pub const fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig(_))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let error = RoutingError::invalid_config("wall_proximity must be finite");
        assert!(error.to_string().contains("invalid configuration"));
        assert!(error.to_string().contains("wall_proximity"));
    }

    #[test]
    fn test_is_invalid_config() {
        let error = RoutingError::invalid_config("test");
        assert!(error.is_invalid_config());
    }

    #[test]
    fn test_error_debug() {
        let error = RoutingError::invalid_config("x");
        let debug_str = format!("{error:?}");
        assert!(debug_str.contains("InvalidConfig"));
    }
}
