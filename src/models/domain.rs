use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Buyer pre-qualification facts used as the basis for matching
///
/// Produced by an external qualification flow. A profile with a zero
/// `qualified_amount` means "no qualification on file" and disables scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BuyerProfile {
    #[serde(rename = "qualifiedAmount", default)]
    pub qualified_amount: f64,
    #[serde(rename = "qualificationScore", default)]
    pub qualification_score: f64,
}

impl BuyerProfile {
    pub fn new(qualified_amount: f64, qualification_score: f64) -> Self {
        Self {
            qualified_amount,
            qualification_score,
        }
    }

    /// True when there is a usable qualified amount to match against
    pub fn is_qualified(&self) -> bool {
        self.qualified_amount.is_finite() && self.qualified_amount > 0.0
    }

    /// Qualification score clamped to the documented [0, 100] range
    pub fn normalized_score(&self) -> f64 {
        if self.qualification_score.is_nan() {
            return 0.0;
        }
        self.qualification_score.clamp(0.0, 100.0)
    }
}

/// Property listing as supplied by the listing repository
///
/// Only `price`, `category` and the searchable text fields take part in
/// matching. Everything else (bedrooms, bathrooms, size, images, ...) is kept
/// verbatim in `attributes` and passed through to the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    #[serde(
        default,
        deserialize_with = "lenient_price",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub address: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Listing {
    pub fn new(id: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            price: Some(price),
            category: category.into(),
            title: String::new(),
            address: String::new(),
            attributes: Map::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Price usable for scoring: finite and strictly positive
    #[inline]
    pub fn matchable_price(&self) -> Option<f64> {
        self.price.filter(|price| price.is_finite() && *price > 0.0)
    }

    /// Fields consulted by free-text search
    #[inline]
    pub fn searchable_text(&self) -> [&str; 3] {
        [&self.title, &self.address, &self.category]
    }
}

/// Accepts numbers, numeric strings ("$1,250,000") and garbage alike.
/// Anything that is not a number becomes `None` instead of failing the
/// whole payload.
fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_amount(&text),
        _ => None,
    }))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => text,
        Some(Value::Number(number)) => number.to_string(),
        _ => String::new(),
    })
}

/// Parse a human-entered amount such as `"$1,250,000"`, `"500k"` or `"1.2M"`
pub fn parse_amount(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',' && *c != '_' && !c.is_whitespace())
        .collect();

    let lower = cleaned.to_ascii_lowercase();
    let (digits, multiplier) = match lower.chars().last()? {
        'k' => (&lower[..lower.len() - 1], 1_000.0),
        'm' => (&lower[..lower.len() - 1], 1_000_000.0),
        _ => (lower.as_str(), 1.0),
    };

    digits
        .parse::<f64>()
        .ok()
        .map(|amount| amount * multiplier)
        .filter(|amount| amount.is_finite())
}

/// Optional predicates applied before scoring
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingFilters {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "freeText", alias = "free_text", default)]
    pub free_text: Option<String>,
    #[serde(rename = "maxPrice", alias = "max_price", default)]
    pub max_price: Option<f64>,
}

impl ListingFilters {
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn free_text(mut self, query: impl Into<String>) -> Self {
        self.free_text = Some(query.into());
        self
    }

    pub fn max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }
}

/// Output of the score calculator for one (profile, listing) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "isStrongMatch")]
    pub is_strong_match: bool,
}

impl MatchScore {
    pub const NONE: MatchScore = MatchScore {
        match_score: 0,
        is_strong_match: false,
    };
}

/// Listing annotated with its match score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredListing {
    pub listing: Listing,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "isStrongMatch")]
    pub is_strong_match: bool,
}

impl ScoredListing {
    pub fn new(listing: Listing, score: MatchScore) -> Self {
        Self {
            listing,
            match_score: score.match_score,
            is_strong_match: score.is_strong_match,
        }
    }

    pub fn id(&self) -> &str {
        &self.listing.id
    }
}

/// Presentation-ready ranking: strong matches first, then everything else
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    #[serde(rename = "strongMatches")]
    pub strong_matches: Vec<ScoredListing>,
    pub others: Vec<ScoredListing>,
}

impl RankedResult {
    pub fn len(&self) -> usize {
        self.strong_matches.len() + self.others.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strong_matches.is_empty() && self.others.is_empty()
    }

    /// Whether the "matched" section should be rendered at all
    pub fn has_strong_matches(&self) -> bool {
        !self.strong_matches.is_empty()
    }

    /// Combined presentation order
    pub fn iter(&self) -> impl Iterator<Item = &ScoredListing> {
        self.strong_matches.iter().chain(self.others.iter())
    }

    pub fn into_ordered(self) -> Vec<ScoredListing> {
        let mut ordered = self.strong_matches;
        ordered.extend(self.others);
        ordered
    }
}
