// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{BuyerProfile, Listing, ListingFilters, MatchScore, ScoredListing, RankedResult, parse_amount};
pub use requests::{RankRequest, SuggestRequest};
pub use responses::{RankResponse, SuggestResponse, HealthResponse, ErrorResponse};
