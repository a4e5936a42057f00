use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{BuyerProfile, Listing, ListingFilters, RankedResult, ScoredListing};
use crate::core::{
    filters::CompiledFilters,
    scoring::{score, MatchContext, DASHBOARD_TOLERANCE, SEARCH_TOLERANCE},
    suggest::{generate_suggestions, DEFAULT_SUGGESTION_COUNT},
};

/// Tunables for the matching engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub search_tolerance: f64,
    pub dashboard_tolerance: f64,
    pub suggestion_count: usize,
    pub max_suggestions: usize,
    /// Fixed seed for suggestion jitter; `None` draws from the thread RNG
    pub suggestion_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_tolerance: SEARCH_TOLERANCE,
            dashboard_tolerance: DASHBOARD_TOLERANCE,
            suggestion_count: DEFAULT_SUGGESTION_COUNT,
            max_suggestions: 12,
            suggestion_seed: None,
        }
    }
}

/// Buyer-to-listing matching orchestrator
///
/// # Pipeline Stages
/// 1. Category, free-text and price filtering
/// 2. Scoring against the buyer profile
/// 3. Partition into strong matches and others
/// 4. Stable sort of each partition by score
///
/// The engine holds no mutable state and can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    config: EngineConfig,
}

impl MatchingEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Tolerance configured for a call site
    pub fn tolerance_for(&self, context: MatchContext) -> f64 {
        match context {
            MatchContext::Search => self.config.search_tolerance,
            MatchContext::Dashboard => self.config.dashboard_tolerance,
        }
    }

    /// Rank listings for a buyer
    ///
    /// # Arguments
    /// * `profile` - The buyer's qualification facts
    /// * `listings` - Inventory to rank, left untouched
    /// * `filters` - Category, free-text and price predicates
    /// * `tolerance` - Price proximity window as a fraction of the qualified amount
    ///
    /// # Returns
    /// RankedResult with strong matches ahead of the rest. Listings that cannot
    /// be scored are kept with a score of zero.
    pub fn rank(
        &self,
        profile: &BuyerProfile,
        listings: &[Listing],
        filters: &ListingFilters,
        tolerance: f64,
    ) -> RankedResult {
        let compiled = CompiledFilters::new(filters);

        let (mut strong_matches, mut others): (Vec<ScoredListing>, Vec<ScoredListing>) = listings
            .iter()
            // Stage 1: Filtering
            .filter(|listing| compiled.matches(listing))
            // Stage 2: Scoring
            .map(|listing| ScoredListing::new(listing.clone(), score(profile, listing, tolerance)))
            // Stage 3: Partition
            .partition(|scored| scored.is_strong_match);

        // Stage 4: sort_by is stable, ties keep input order
        sort_by_score(&mut strong_matches);
        sort_by_score(&mut others);

        tracing::debug!(
            "Ranked {} of {} listings: {} strong, {} other (tolerance {})",
            strong_matches.len() + others.len(),
            listings.len(),
            strong_matches.len(),
            others.len(),
            tolerance
        );

        RankedResult {
            strong_matches,
            others,
        }
    }

    /// Rank with the tolerance configured for `context`
    pub fn rank_for(
        &self,
        profile: &BuyerProfile,
        listings: &[Listing],
        filters: &ListingFilters,
        context: MatchContext,
    ) -> RankedResult {
        self.rank(profile, listings, filters, self.tolerance_for(context))
    }

    /// Synthetic suggestions for when there is no real inventory
    ///
    /// `count` defaults to the configured suggestion count and is capped at
    /// `max_suggestions`. Jitter comes from the configured seed when set.
    pub fn suggest(&self, profile: &BuyerProfile, count: Option<usize>) -> Vec<ScoredListing> {
        match self.config.suggestion_seed {
            Some(seed) => self.suggest_with_rng(profile, count, &mut StdRng::seed_from_u64(seed)),
            None => self.suggest_with_rng(profile, count, &mut rand::thread_rng()),
        }
    }

    pub fn suggest_with_rng<R: Rng + ?Sized>(
        &self,
        profile: &BuyerProfile,
        count: Option<usize>,
        rng: &mut R,
    ) -> Vec<ScoredListing> {
        let count = count
            .unwrap_or(self.config.suggestion_count)
            .min(self.config.max_suggestions);

        let suggestions = generate_suggestions(profile, count, self.config.dashboard_tolerance, rng);

        tracing::trace!("Generated {} synthetic suggestions", suggestions.len());
        suggestions
    }
}

#[inline]
fn sort_by_score(scored: &mut [ScoredListing]) {
    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
}
