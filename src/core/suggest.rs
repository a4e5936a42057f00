use rand::Rng;
use serde_json::Map;

use crate::core::scoring::score_price;
use crate::models::{BuyerProfile, Listing, ScoredListing};

/// Default number of synthetic suggestions
pub const DEFAULT_SUGGESTION_COUNT: usize = 3;

/// Half-width of the price window for a perfect qualification score
const MIN_WINDOW: f64 = 0.05;

/// Extra half-width added as the qualification score drops to zero
const WINDOW_SPREAD: f64 = 0.25;

const SUGGESTED_CATEGORIES: [&str; 3] = ["house", "townhouse", "apartment"];

/// Half-width of the suggestion window as a fraction of the qualified amount.
/// 5% for a score of 100, widening linearly to 30% for a score of 0.
#[inline]
pub fn suggestion_window(profile: &BuyerProfile) -> f64 {
    MIN_WINDOW + WINDOW_SPREAD * (1.0 - profile.normalized_score() / 100.0)
}

/// Generate `count` synthetic listings priced around the qualified amount
///
/// Points are spread evenly across `[-w, +w]` and nudged by up to `w / 4` of
/// jitter drawn from `rng`, then clamped back into the window. Results are
/// scored with `tolerance` and returned best first. An unqualified profile
/// gets no suggestions.
pub fn generate_suggestions<R: Rng + ?Sized>(
    profile: &BuyerProfile,
    count: usize,
    tolerance: f64,
    rng: &mut R,
) -> Vec<ScoredListing> {
    if !profile.is_qualified() || count == 0 {
        return Vec::new();
    }

    let window = suggestion_window(profile);
    let jitter = window / 4.0;

    let mut suggestions: Vec<ScoredListing> = (0..count)
        .map(|i| {
            let base = if count == 1 {
                0.0
            } else {
                -window + 2.0 * window * i as f64 / (count - 1) as f64
            };
            let offset = (base + rng.gen_range(-jitter..=jitter)).clamp(-window, window);
            let price = (profile.qualified_amount * (1.0 + offset)).round();

            let listing = synthetic_listing(i, price);
            let match_score = score_price(profile, price, tolerance);
            ScoredListing::new(listing, match_score)
        })
        .collect();

    suggestions.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    suggestions
}

fn synthetic_listing(index: usize, price: f64) -> Listing {
    let category = SUGGESTED_CATEGORIES[index % SUGGESTED_CATEGORIES.len()];

    let mut attributes = Map::new();
    attributes.insert("synthetic".to_string(), true.into());

    Listing {
        id: format!("suggested-{}", index + 1),
        price: Some(price),
        category: category.to_string(),
        title: format!("Suggested {}", category),
        address: String::new(),
        attributes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scoring::DASHBOARD_TOLERANCE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_window_narrows_with_score() {
        let confident = suggestion_window(&BuyerProfile::new(1_000_000.0, 100.0));
        let unsure = suggestion_window(&BuyerProfile::new(1_000_000.0, 0.0));

        assert!((confident - 0.05).abs() < 1e-9);
        assert!((unsure - 0.30).abs() < 1e-9);
    }

    #[test]
    fn test_prices_stay_within_window() {
        let profile = BuyerProfile::new(800_000.0, 40.0);
        let window = suggestion_window(&profile);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            for suggestion in generate_suggestions(&profile, 5, DASHBOARD_TOLERANCE, &mut rng) {
                let price = suggestion.listing.price.unwrap();
                let offset = (price - 800_000.0).abs() / 800_000.0;
                assert!(offset <= window + 1e-6, "offset {} exceeds window {}", offset, window);
            }
        }
    }

    #[test]
    fn test_same_seed_same_suggestions() {
        let profile = BuyerProfile::new(650_000.0, 70.0);
        let first = generate_suggestions(&profile, 3, DASHBOARD_TOLERANCE, &mut StdRng::seed_from_u64(42));
        let second = generate_suggestions(&profile, 3, DASHBOARD_TOLERANCE, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn test_unqualified_profile_gets_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_suggestions(&BuyerProfile::default(), 3, DASHBOARD_TOLERANCE, &mut rng).is_empty());
    }

    #[test]
    fn test_synthetic_listing_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        let suggestions = generate_suggestions(&BuyerProfile::new(500_000.0, 50.0), 1, DASHBOARD_TOLERANCE, &mut rng);

        assert_eq!(suggestions.len(), 1);
        let listing = &suggestions[0].listing;
        assert_eq!(listing.id, "suggested-1");
        assert_eq!(listing.category, "house");
        assert_eq!(listing.attributes.get("synthetic"), Some(&serde_json::Value::Bool(true)));
    }
}
