use crate::models::{parse_amount, Listing, ListingFilters};

/// Category selection, either a label or a price ceiling such as "Under $500K"
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryFilter {
    Any,
    Label(String),
    UnderPrice(f64),
}

impl CategoryFilter {
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() || normalized == "all" {
            return CategoryFilter::Any;
        }

        if let Some(rest) = normalized.strip_prefix("under") {
            let amount = rest.trim_start_matches(|c: char| c == '-' || c == '_' || c.is_whitespace());
            if let Some(ceiling) = parse_amount(amount) {
                return CategoryFilter::UnderPrice(ceiling);
            }
        }

        CategoryFilter::Label(normalized)
    }

    #[inline]
    pub fn matches(&self, listing: &Listing) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Label(label) => listing.category.to_lowercase().contains(label.as_str()),
            CategoryFilter::UnderPrice(ceiling) => within_ceiling(listing, *ceiling),
        }
    }
}

/// Filters compiled once per ranking call
#[derive(Debug, Clone)]
pub struct CompiledFilters {
    category: CategoryFilter,
    free_text: Option<String>,
    max_price: Option<f64>,
}

impl CompiledFilters {
    pub fn new(filters: &ListingFilters) -> Self {
        let category = filters
            .category
            .as_deref()
            .map(CategoryFilter::parse)
            .unwrap_or(CategoryFilter::Any);

        let free_text = filters
            .free_text
            .as_deref()
            .map(|query| query.trim().to_lowercase())
            .filter(|query| !query.is_empty());

        Self {
            category,
            free_text,
            max_price: filters.max_price.filter(|max| !max.is_nan()),
        }
    }

    /// Check whether a listing passes every active predicate
    #[inline]
    pub fn matches(&self, listing: &Listing) -> bool {
        if !self.category.matches(listing) {
            return false;
        }

        if let Some(query) = &self.free_text {
            if !matches_free_text(listing, query) {
                return false;
            }
        }

        if let Some(max_price) = self.max_price {
            if !within_ceiling(listing, max_price) {
                return false;
            }
        }

        true
    }
}

/// Case-insensitive substring search over the listing's searchable fields.
/// `query` must already be lowercased.
#[inline]
pub fn matches_free_text(listing: &Listing, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    listing
        .searchable_text()
        .iter()
        .any(|field| field.to_lowercase().contains(query))
}

/// Listings without a usable price never satisfy a price ceiling
#[inline]
fn within_ceiling(listing: &Listing, ceiling: f64) -> bool {
    listing
        .matchable_price()
        .map(|price| price <= ceiling)
        .unwrap_or(false)
}
