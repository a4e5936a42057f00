use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::models::Listing;

/// Errors that can occur while loading listing inventory
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported inventory format: {0}")]
    UnsupportedFormat(String),
}

/// Inventory file layout: either a bare array or `{ listings = [...] }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InventoryFile {
    Wrapped { listings: Vec<Listing> },
    Bare(Vec<Listing>),
}

impl From<InventoryFile> for Vec<Listing> {
    fn from(file: InventoryFile) -> Self {
        match file {
            InventoryFile::Wrapped { listings } => listings,
            InventoryFile::Bare(listings) => listings,
        }
    }
}

/// Read-only listing inventory
///
/// Loaded once at startup and shared across workers. Ranking requests that
/// do not carry their own listings are matched against this inventory.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    listings: Vec<Listing>,
}

impl InventoryStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_listings(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// Load inventory from a `.json` or `.toml` file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, InventoryError> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        let listings = Self::parse(&contents, &extension)?;

        tracing::info!("Loaded {} listings from {}", listings.len(), path.display());

        Ok(Self { listings })
    }

    fn parse(contents: &str, extension: &str) -> Result<Vec<Listing>, InventoryError> {
        let file: InventoryFile = match extension {
            "json" => serde_json::from_str(contents)?,
            "toml" => toml::from_str(contents)?,
            other => return Err(InventoryError::UnsupportedFormat(other.to_string())),
        };
        Ok(file.into())
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_bare_json_array() {
        let listings = InventoryStore::parse(
            r#"[{"id": "a", "price": 500000, "category": "house"}, {"id": "b", "price": "n/a"}]"#,
            "json",
        )
        .unwrap();

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[1].price, None);
    }

    #[test]
    fn test_parse_wrapped_toml() {
        let listings = InventoryStore::parse(
            r#"
            [[listings]]
            id = "t1"
            price = 725000
            category = "townhouse"
            title = "Corner townhouse"
            bedrooms = 3
            "#,
            "toml",
        )
        .unwrap();

        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].price, Some(725_000.0));
        assert!(listings[0].attributes.contains_key("bedrooms"));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = InventoryStore::parse("", "csv").unwrap_err();
        assert!(matches!(err, InventoryError::UnsupportedFormat(ext) if ext == "csv"));
    }

    #[actix_web::test]
    async fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"listings": [{{"id": "f1", "price": 1000}}]}}"#).unwrap();

        let store = InventoryStore::load(file.path()).await.unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.listings()[0].id, "f1");
    }

    #[actix_web::test]
    async fn test_load_missing_file() {
        let result = InventoryStore::load("/nonexistent/inventory.json").await;
        assert!(matches!(result, Err(InventoryError::Io(_))));
    }
}
