use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::MatchingEngine;
use crate::models::{
    ErrorResponse, HealthResponse, RankRequest, RankResponse, SuggestRequest, SuggestResponse,
};
use crate::services::InventoryStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: MatchingEngine,
    pub inventory: Arc<InventoryStore>,
}

/// Configure all listing-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/listings/rank", web::post().to(rank_listings))
        .route("/listings/suggest", web::post().to(suggest_listings));
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        inventory_size: state.inventory.len(),
    })
}

/// Rank listings endpoint
///
/// POST /api/v1/listings/rank
///
/// Request body:
/// ```json
/// {
///   "profile": { "qualifiedAmount": 1000000, "qualificationScore": 80 },
///   "listings": [{ "id": "string", "price": 950000, "category": "house" }],
///   "filters": { "category": "house", "freeText": "string", "maxPrice": 1200000 },
///   "context": "search|dashboard",
///   "tolerance": 0.3
/// }
/// ```
///
/// Every field is optional. Without `listings` the service inventory is ranked.
async fn rank_listings(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: field_errors={:?}", errors);
        return validation_failed(errors);
    }

    let req = req.into_inner();
    let request_id = uuid::Uuid::new_v4().to_string();

    // No qualification on file behaves like a zero-amount profile
    let profile = req.profile.unwrap_or_default();
    let filters = req.filters.unwrap_or_default();
    let context = req.context.unwrap_or_default();
    let tolerance = req
        .tolerance
        .unwrap_or_else(|| state.engine.tolerance_for(context));

    let listings = match &req.listings {
        Some(listings) => listings.as_slice(),
        None => state.inventory.listings(),
    };

    tracing::info!(
        "Ranking {} listings (request {}, context {:?}, tolerance {})",
        listings.len(),
        request_id,
        context,
        tolerance
    );

    let result = state.engine.rank(&profile, listings, &filters, tolerance);

    let response = RankResponse {
        request_id,
        total_results: result.len(),
        show_matched_section: result.has_strong_matches(),
        strong_matches: result.strong_matches,
        others: result.others,
    };

    tracing::info!(
        "Returning {} strong matches and {} others (request {})",
        response.strong_matches.len(),
        response.others.len(),
        response.request_id
    );

    HttpResponse::Ok().json(response)
}

/// Synthetic suggestions endpoint
///
/// POST /api/v1/listings/suggest
///
/// Request body:
/// ```json
/// {
///   "profile": { "qualifiedAmount": 1000000, "qualificationScore": 90 },
///   "count": 3
/// }
/// ```
async fn suggest_listings(
    state: web::Data<AppState>,
    req: web::Json<SuggestRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let max_suggestions = state.engine.config().max_suggestions;
    if let Some(count) = req.count.filter(|count| *count > max_suggestions) {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: format!("count must be at most {}, got {}", max_suggestions, count),
            status_code: 400,
        });
    }

    let profile = req.profile.unwrap_or_default();
    let suggestions = state.engine.suggest(&profile, req.count);

    tracing::debug!("Returning {} suggestions", suggestions.len());

    HttpResponse::Ok().json(SuggestResponse {
        request_id: uuid::Uuid::new_v4().to_string(),
        suggestions,
    })
}
