//! Product catalog types and JSON loading.
//!
//! Catalog contents are caller data; Vitrine only depends on item identity
//! and insertion order (which breaks ranking ties).

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Immutable identity of one catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub name: String,
    pub brand: String,
    pub price: f64,
    /// Reference image (path on disk)
    pub image: String,
}

/// An insertion-ordered product catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog from items, preserving their order.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// Parse a catalog from a JSON array of items.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let items: Vec<CatalogItem> = serde_json::from_str(json)?;
        Ok(Self { items })
    }

    /// Load a catalog from a JSON file on disk.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Look up an item by id.
    pub fn get(&self, id: u32) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A catalog item with its similarity to the current query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedItem {
    #[serde(flatten)]
    pub item: CatalogItem,

    /// Cosine similarity to the query embedding
    pub relevance: f32,
}
