//! Pre-computed item embeddings for fast ranking.
//!
//! The store maps catalog item ids to unit-norm embedding vectors. It is
//! built once in a batch indexing pass and is append-only afterwards; items
//! whose embedding failed are simply absent, which the ranker treats as
//! "not searchable".

use std::collections::HashMap;

use crate::catalog::Catalog;
use crate::math::l2_normalize_in_place;
use crate::perception::EmbeddingModel;

/// Incremental progress of the batch indexing pass, for status rendering.
#[derive(Debug, Clone, Copy)]
pub struct IndexProgress<'a> {
    /// 1-based index of the item being embedded
    pub current: usize,
    pub total: usize,
    pub item_name: &'a str,
}

/// Unit-norm embedding per catalog item, keyed by item id.
#[derive(Debug, Clone, Default)]
pub struct EmbeddingStore {
    embeddings: HashMap<u32, Vec<f32>>,
}

impl EmbeddingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Embed every catalog item's reference image and build the store.
    ///
    /// Items are embedded sequentially to avoid overwhelming the model.
    /// A failure for one item is logged and that item is excluded; the
    /// batch as a whole never aborts. `progress` is invoked before each
    /// item so a caller can render indexing status.
    pub async fn index<F>(catalog: &Catalog, model: &dyn EmbeddingModel, mut progress: F) -> Self
    where
        F: FnMut(IndexProgress<'_>),
    {
        let total = catalog.len();
        let mut store = Self::new();

        for (i, item) in catalog.items().iter().enumerate() {
            progress(IndexProgress {
                current: i + 1,
                total,
                item_name: &item.name,
            });

            let image = match image::open(&item.image) {
                Ok(image) => image,
                Err(e) => {
                    tracing::warn!(
                        "Skipping \"{}\": failed to load reference image {}: {e}",
                        item.name,
                        item.image
                    );
                    continue;
                }
            };

            match model.embed_image(&image).await {
                Ok(embedding) => store.insert(item.id, embedding),
                Err(e) => {
                    tracing::warn!("Skipping \"{}\": {e}", item.name);
                }
            }
        }

        tracing::info!(
            "Indexed {}/{} catalog items",
            store.len(),
            total
        );
        store
    }

    /// Normalize and insert an embedding for an item.
    ///
    /// The store is append-only: an id that is already present keeps its
    /// original vector.
    pub fn insert(&mut self, item_id: u32, mut embedding: Vec<f32>) {
        l2_normalize_in_place(&mut embedding);
        self.embeddings.entry(item_id).or_insert(embedding);
    }

    /// The unit-norm embedding for an item, if it was indexed.
    pub fn get(&self, item_id: u32) -> Option<&[f32]> {
        self.embeddings.get(&item_id).map(Vec::as_slice)
    }

    pub fn contains(&self, item_id: u32) -> bool {
        self.embeddings.contains_key(&item_id)
    }

    pub fn len(&self) -> usize {
        self.embeddings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.embeddings.is_empty()
    }
}
