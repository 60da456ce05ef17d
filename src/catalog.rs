//! Product catalog
//!
//! Products are loaded from config/products.json - the storefront ships no
//! hardcoded inventory. The gallery seeds its deck from this list, and the
//! detail screen reads price and description from it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog contains no products")]
    Empty,
}

/// One product record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    /// Image asset name; the gallery deck is built from these
    pub image_name: String,
    /// Unit price in won
    pub price: i64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load the catalog from a JSON file. The gallery needs at least one
    /// product to seed its deck, so an empty catalog is an error here
    /// rather than undefined behavior downstream.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;
        let catalog = Self::from_json(&contents)?;
        info!(
            products = catalog.products.len(),
            path = %path.display(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_json(contents: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(contents)?;
        if catalog.products.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn by_image(&self, image_name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.image_name == image_name)
    }

    /// Image list for the gallery deck, catalog order
    pub fn gallery_images(&self) -> Vec<String> {
        self.products.iter().map(|p| p.image_name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "products": [
            {
                "id": 1,
                "name": "Avocado",
                "image_name": "avocado",
                "price": 3500,
                "description": "Buttery and rich, ready to eat"
            },
            {
                "id": 2,
                "name": "Banana",
                "image_name": "banana",
                "price": 1500,
                "description": "Sweet, easy energy"
            }
        ]
    }"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.products().len(), 2);
        assert_eq!(catalog.products()[0].name, "Avocado");
        assert_eq!(catalog.products()[1].price, 1500);
    }

    #[test]
    fn test_gallery_images_preserve_catalog_order() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.gallery_images(), ["avocado", "banana"]);
    }

    #[test]
    fn test_lookup_by_image() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.by_image("banana").unwrap().id, 2);
        assert!(catalog.by_image("durian").is_none());
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let err = Catalog::from_json(r#"{"products": []}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn test_malformed_catalog_is_an_error() {
        let err = Catalog::from_json("{").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
