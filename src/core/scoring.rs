use serde::{Deserialize, Serialize};

use crate::models::{BuyerProfile, Listing, MatchScore};

/// Tolerance window used by search and browse views
pub const SEARCH_TOLERANCE: f64 = 0.30;

/// Wider tolerance used by the dashboard "suggested properties" view
pub const DASHBOARD_TOLERANCE: f64 = 0.40;

/// Strong-match gate, independent of the scoring tolerance
pub const STRONG_MATCH_WINDOW: f64 = 0.30;

/// Minimum score for a strong match
pub const STRONG_MATCH_MIN_SCORE: u8 = 60;

/// Points available from price proximity
pub const PRICE_WEIGHT: f64 = 60.0;

/// Fraction of the qualification score counted towards the match
pub const QUALIFICATION_WEIGHT: f64 = 0.40;

/// Call site a ranking is computed for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchContext {
    #[default]
    Search,
    Dashboard,
}

impl MatchContext {
    pub fn tolerance(self) -> f64 {
        match self {
            MatchContext::Search => SEARCH_TOLERANCE,
            MatchContext::Dashboard => DASHBOARD_TOLERANCE,
        }
    }
}

/// Score a listing (0-100) against a buyer profile
///
/// Scoring formula:
/// score = (
///     price_proximity * 60 +        # linear decay to 0 at `tolerance` away
///     qualification_score * 0.40    # buyer readiness
/// )
///
/// A listing is a strong match when its price lies within 30% of the
/// qualified amount and the score reaches 60, whatever `tolerance` is.
/// Unqualified profiles and unpriced listings score zero.
pub fn score(profile: &BuyerProfile, listing: &Listing, tolerance: f64) -> MatchScore {
    if !profile.is_qualified() {
        return MatchScore::NONE;
    }

    let Some(price) = listing.matchable_price() else {
        return MatchScore::NONE;
    };

    score_price(profile, price, tolerance)
}

/// Score a bare price point, used for synthetic suggestions
pub fn score_price(profile: &BuyerProfile, price: f64, tolerance: f64) -> MatchScore {
    if !profile.is_qualified() || !price.is_finite() || price <= 0.0 {
        return MatchScore::NONE;
    }

    let qualified = profile.qualified_amount;
    let price_difference = (price - qualified).abs();
    let max_difference = qualified * tolerance;

    let price_component = calculate_price_component(price_difference, max_difference);
    let score_component = profile.normalized_score() * QUALIFICATION_WEIGHT;

    let match_score = (price_component + score_component).round().clamp(0.0, 100.0) as u8;

    let is_strong_match = price_difference <= qualified * STRONG_MATCH_WINDOW
        && match_score >= STRONG_MATCH_MIN_SCORE;

    MatchScore {
        match_score,
        is_strong_match,
    }
}

/// Price proximity points (0-60)
/// Full points at the qualified amount, linear decay to 0 at `max_difference`
#[inline]
fn calculate_price_component(price_difference: f64, max_difference: f64) -> f64 {
    if !max_difference.is_finite() || max_difference <= 0.0 {
        return if price_difference == 0.0 { PRICE_WEIGHT } else { 0.0 };
    }

    let ratio = price_difference / max_difference;
    PRICE_WEIGHT * (1.0 - ratio).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> BuyerProfile {
        BuyerProfile::new(1_000_000.0, 80.0)
    }

    #[test]
    fn test_exact_price_scores_full_proximity() {
        let listing = Listing::new("a", 1_000_000.0, "house");
        let result = score(&profile(), &listing, SEARCH_TOLERANCE);

        assert_eq!(result.match_score, 92);
        assert!(result.is_strong_match);
    }

    #[test]
    fn test_price_outside_window_keeps_only_buyer_points() {
        let listing = Listing::new("b", 1_450_000.0, "house");
        let result = score(&profile(), &listing, SEARCH_TOLERANCE);

        assert_eq!(result.match_score, 32);
        assert!(!result.is_strong_match);
    }

    #[test]
    fn test_unqualified_profile_scores_zero() {
        let listing = Listing::new("c", 1_000_000.0, "house");
        let result = score(&BuyerProfile::default(), &listing, SEARCH_TOLERANCE);

        assert_eq!(result, MatchScore::NONE);
    }

    #[test]
    fn test_degenerate_prices_score_zero() {
        for price in [0.0, -250_000.0, f64::NAN, f64::INFINITY] {
            let listing = Listing::new("d", price, "house");
            assert_eq!(score(&profile(), &listing, SEARCH_TOLERANCE), MatchScore::NONE);
        }

        let mut missing = Listing::new("e", 1.0, "house");
        missing.price = None;
        assert_eq!(score(&profile(), &missing, SEARCH_TOLERANCE), MatchScore::NONE);
    }

    #[test]
    fn test_linear_decay() {
        // 15% off with a 30% window: half the price points
        let listing = Listing::new("f", 850_000.0, "house");
        let result = score(&profile(), &listing, SEARCH_TOLERANCE);
        assert_eq!(result.match_score, 62); // 30 + 32
        assert!(result.is_strong_match);
    }

    #[test]
    fn test_dashboard_tolerance_is_more_lenient() {
        let listing = Listing::new("g", 1_200_000.0, "house");
        let search = score(&profile(), &listing, SEARCH_TOLERANCE);
        let dashboard = score(&profile(), &listing, DASHBOARD_TOLERANCE);

        assert!(dashboard.match_score > search.match_score);
    }

    #[test]
    fn test_strong_gate_uses_thirty_percent_window() {
        // 35% off: scores 79 under a 100% window, but sits outside the 30% gate
        let buyer = BuyerProfile::new(1_000_000.0, 100.0);
        let listing = Listing::new("h", 1_350_000.0, "house");
        let result = score(&buyer, &listing, 1.0);

        assert_eq!(result.match_score, 79);
        assert!(!result.is_strong_match);
    }

    #[test]
    fn test_out_of_range_qualification_score_clamped() {
        let listing = Listing::new("i", 1_000_000.0, "house");
        let high = score(&BuyerProfile::new(1_000_000.0, 500.0), &listing, SEARCH_TOLERANCE);
        let low = score(&BuyerProfile::new(1_000_000.0, -500.0), &listing, SEARCH_TOLERANCE);

        assert_eq!(high.match_score, 100);
        assert_eq!(low.match_score, 60);
    }

    #[test]
    fn test_zero_tolerance_only_rewards_exact_price() {
        let exact = Listing::new("j", 1_000_000.0, "house");
        let near = Listing::new("k", 1_000_001.0, "house");

        assert_eq!(score(&profile(), &exact, 0.0).match_score, 92);
        assert_eq!(score(&profile(), &near, 0.0).match_score, 32);
    }

    #[test]
    fn test_context_tolerances() {
        assert_eq!(MatchContext::Search.tolerance(), SEARCH_TOLERANCE);
        assert_eq!(MatchContext::Dashboard.tolerance(), DASHBOARD_TOLERANCE);
        assert_eq!(MatchContext::default(), MatchContext::Search);
    }
}
