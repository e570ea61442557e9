//! Material price tables and cost estimation.
//!
//! Prices are supplied explicitly on every routing call rather than read
//! from global state, so they are fully overridable per call and trivially
//! testable. Cost is linear in routed length:
//! `cost = unit_price(material) × length`.
//!
//! # Example
//!
//! ```
//! use run_types::PriceTable;
//!
//! let prices = PriceTable::new()
//!     .with_price("12awg", 0.45)
//!     .with_price("pex-3/4", 1.10);
//!
//! assert!((prices.cost_of("12awg", 20.0) - 9.0).abs() < 1e-12);
//! ```

use std::collections::HashMap;

/// Unit price used when a material key is missing from the table.
///
/// Lookups never fail and never produce NaN; an unrecognized gauge or pipe
/// material is priced at this baseline per plane unit.
pub const DEFAULT_UNIT_PRICE: f64 = 1.0;

/// Per-unit-length prices keyed by material or wire gauge.
///
/// # Example
///
/// ```
/// use run_types::{PriceTable, DEFAULT_UNIT_PRICE};
///
/// let prices = PriceTable::new().with_price("14awg", 0.30);
///
/// assert!((prices.unit_price("14awg") - 0.30).abs() < 1e-12);
/// // Unknown keys fall back to the default.
/// assert!((prices.unit_price("unobtainium") - DEFAULT_UNIT_PRICE).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceTable {
    /// Price per plane unit, keyed by material/gauge.
    prices: HashMap<String, f64>,
    /// Fallback price for unknown keys; `None` means [`DEFAULT_UNIT_PRICE`].
    default_price: Option<f64>,
}

impl PriceTable {
    /// Creates an empty price table.
    ///
    /// Every lookup against an empty table returns the default unit price.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the price for a material key.
    #[must_use]
    pub fn with_price(mut self, material: impl Into<String>, price: f64) -> Self {
        self.prices.insert(material.into(), price);
        self
    }

    /// Overrides the fallback price used for unknown material keys.
    #[must_use]
    pub fn with_default_price(mut self, price: f64) -> Self {
        self.default_price = Some(price);
        self
    }

    /// Returns the unit price for a material key.
    ///
    /// Unknown keys resolve to the fallback price rather than failing.
    #[must_use]
    pub fn unit_price(&self, material: &str) -> f64 {
        self.prices
            .get(material)
            .copied()
            .unwrap_or_else(|| self.default_price.unwrap_or(DEFAULT_UNIT_PRICE))
    }

    /// Returns `true` if the table has an explicit price for the key.
    #[must_use]
    pub fn contains(&self, material: &str) -> bool {
        self.prices.contains_key(material)
    }

    /// Returns the number of explicit entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns `true` if the table has no explicit entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Estimates the cost of routing `length` plane units of `material`.
    ///
    /// This is the cost estimator: `unit_price × length`. Total and
    /// NaN-free for any key and any finite non-negative length.
    ///
    /// # Example
    ///
    /// ```
    /// use run_types::PriceTable;
    ///
    /// let prices = PriceTable::new().with_price("copper-1/2", 2.5);
    /// assert!((prices.cost_of("copper-1/2", 4.0) - 10.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn cost_of(&self, material: &str, length: f64) -> f64 {
        self.unit_price(material) * length
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for PriceTable {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            prices: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            default_price: None,
        }
    }
}
