// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod suggest;

pub use filters::{CategoryFilter, CompiledFilters, matches_free_text};
pub use matcher::{EngineConfig, MatchingEngine};
pub use scoring::{score, score_price, MatchContext, SEARCH_TOLERANCE, DASHBOARD_TOLERANCE};
pub use suggest::{generate_suggestions, suggestion_window};
