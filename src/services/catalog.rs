use serde::Deserialize;
use thiserror::Error;

use crate::models::{Property, ReferenceLocation};

/// Embedded catalog document, compiled into the binary
const CATALOG_JSON: &str = include_str!("../../data/catalog.json");

/// Errors that can occur while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog section is empty: {0}")]
    Empty(&'static str),
}

/// The static property catalog and reference-location set
///
/// Loaded once at startup; both sections are immutable afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub properties: Vec<Property>,
    pub reference_locations: Vec<ReferenceLocation>,
}

impl Catalog {
    /// Parse the catalog document embedded in the binary
    pub fn load_embedded() -> Result<Self, CatalogError> {
        Self::from_json(CATALOG_JSON)
    }

    /// Parse a catalog from a JSON document
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;

        if catalog.properties.is_empty() {
            return Err(CatalogError::Empty("properties"));
        }
        if catalog.reference_locations.is_empty() {
            return Err(CatalogError::Empty("reference_locations"));
        }

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::load_embedded().expect("embedded catalog should parse");
        assert_eq!(catalog.properties.len(), 23);
        assert_eq!(catalog.reference_locations.len(), 5);
    }

    #[test]
    fn test_reference_keys_are_lowercase() {
        let catalog = Catalog::load_embedded().unwrap();
        for location in &catalog.reference_locations {
            assert_eq!(location.key, location.key.to_lowercase());
        }
    }

    #[test]
    fn test_malformed_document_is_rejected() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_sections_are_rejected() {
        let json = r#"{"properties": [], "reference_locations": []}"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::Empty("properties"))
        ));
    }
}
