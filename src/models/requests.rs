use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::scoring::MatchContext;
use crate::models::domain::{BuyerProfile, Listing, ListingFilters};

/// Request to rank listings for a buyer
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[serde(default)]
    pub profile: Option<BuyerProfile>,
    /// Listings to rank; the service inventory is used when absent
    #[serde(default)]
    pub listings: Option<Vec<Listing>>,
    #[serde(default)]
    pub filters: Option<ListingFilters>,
    #[serde(default)]
    pub context: Option<MatchContext>,
    /// Explicit tolerance window, overrides `context`
    #[validate(range(exclusive_min = 0.0, max = 1.0))]
    #[serde(default)]
    pub tolerance: Option<f64>,
}

/// Request for synthetic suggestions
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SuggestRequest {
    #[serde(default)]
    pub profile: Option<BuyerProfile>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub count: Option<usize>,
}
