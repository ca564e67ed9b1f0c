//! Typed search filter.
//!
//! A `SweetFilter` accumulates optional predicates. Every predicate that is
//! set must hold for a sweet to match; an empty filter matches everything.
//! Store implementations translate the filter into their own query language
//! and may use [`SweetFilter::matches`] when they filter in memory.

use crate::sweet::Sweet;

/// Inclusive price bounds. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceRange {
    /// Lowest accepted price, inclusive.
    pub min: Option<f64>,
    /// Highest accepted price, inclusive.
    pub max: Option<f64>,
}

impl PriceRange {
    /// Returns `true` when neither bound is set.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Returns `true` if `price` lies within the bounds.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        self.min.is_none_or(|min| price >= min) && self.max.is_none_or(|max| price <= max)
    }
}

/// Result ordering for `find` queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Cheapest first.
    PriceAscending,
}

/// Conjunction of optional search predicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweetFilter {
    name_contains: Option<String>,
    category: Option<String>,
    price: PriceRange,
}

impl SweetFilter {
    /// Creates a filter that matches every sweet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the name to contain `needle`, ignoring case.
    #[must_use]
    pub fn name_contains(mut self, needle: impl Into<String>) -> Self {
        self.name_contains = Some(needle.into());
        self
    }

    /// Requires the category to equal `category` exactly.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Requires the price to be at least `min`.
    #[must_use]
    pub fn min_price(mut self, min: f64) -> Self {
        self.price.min = Some(min);
        self
    }

    /// Requires the price to be at most `max`.
    #[must_use]
    pub fn max_price(mut self, max: f64) -> Self {
        self.price.max = Some(max);
        self
    }

    /// The name substring predicate, if any.
    #[must_use]
    pub fn name_needle(&self) -> Option<&str> {
        self.name_contains.as_deref()
    }

    /// The exact category predicate, if any.
    #[must_use]
    pub fn category_eq(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// The price bounds.
    #[must_use]
    pub fn price_range(&self) -> PriceRange {
        self.price
    }

    /// Returns `true` when no predicate is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name_contains.is_none() && self.category.is_none() && self.price.is_unbounded()
    }

    /// Evaluates the filter against a single sweet.
    #[must_use]
    pub fn matches(&self, sweet: &Sweet) -> bool {
        let name_ok = self.name_contains.as_deref().is_none_or(|needle| {
            sweet
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase())
        });
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|category| sweet.category == category);

        name_ok && category_ok && self.price.contains(sweet.price)
    }
}
