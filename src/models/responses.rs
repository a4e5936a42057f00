use serde::{Deserialize, Serialize};
use crate::models::domain::ScoredListing;

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    #[serde(rename = "requestId")]
    pub request_id: String,
    #[serde(rename = "strongMatches")]
    pub strong_matches: Vec<ScoredListing>,
    pub others: Vec<ScoredListing>,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
    #[serde(rename = "showMatchedSection")]
    pub show_matched_section: bool,
}

/// Response for the suggest endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestResponse {
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub suggestions: Vec<ScoredListing>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "inventorySize")]
    pub inventory_size: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
