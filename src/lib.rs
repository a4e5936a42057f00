//! HomeMatch - buyer-to-listing matching service
//!
//! This library provides the matching engine used to rank property listings
//! for a pre-qualified buyer: a deterministic score per listing, a strong-match
//! gate, and a stable two-bucket ranking with strong matches first.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{MatchingEngine, EngineConfig, MatchContext, score, SEARCH_TOLERANCE, DASHBOARD_TOLERANCE};
pub use models::{BuyerProfile, Listing, ListingFilters, MatchScore, ScoredListing, RankedResult};
