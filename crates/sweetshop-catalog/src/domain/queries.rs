//! Queries for the catalog.

use sweetshop_core::filter::SweetFilter;

/// Search parameters exactly as they arrived in the query string.
#[derive(Debug, Clone, Default)]
pub struct SearchSweets {
    /// Case-insensitive substring of the name.
    pub name: Option<String>,
    /// Exact category.
    pub category: Option<String>,
    /// Inclusive lower price bound, as text.
    pub min_price: Option<String>,
    /// Inclusive upper price bound, as text.
    pub max_price: Option<String>,
}

impl SearchSweets {
    /// Builds the store filter.
    ///
    /// Empty parameters are skipped. Price bounds that do not parse to a
    /// finite number are dropped rather than rejected.
    #[must_use]
    pub fn to_filter(&self) -> SweetFilter {
        let mut filter = SweetFilter::new();
        if let Some(name) = non_empty(self.name.as_deref()) {
            filter = filter.name_contains(name);
        }
        if let Some(category) = non_empty(self.category.as_deref()) {
            filter = filter.category(category);
        }
        if let Some(min) = price_bound(self.min_price.as_deref()) {
            filter = filter.min_price(min);
        }
        if let Some(max) = price_bound(self.max_price.as_deref()) {
            filter = filter.max_price(max);
        }
        filter
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

fn price_bound(value: Option<&str>) -> Option<f64> {
    value
        .map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|n| n.is_finite())
}
