//! Brute-force cosine ranking of a query embedding against the store.

use crate::catalog::{Catalog, RankedItem};
use crate::math::dot;

use super::store::EmbeddingStore;

/// Rank catalog items by similarity to a unit-norm query embedding.
///
/// Score is the dot product of two pre-normalized vectors, i.e. cosine
/// similarity. Only indexed items participate; ties keep catalog insertion
/// order (stable sort). Returns at most `k` items, and an empty list for
/// `k = 0`, an empty query, or an empty store.
pub fn rank(
    query: &[f32],
    store: &EmbeddingStore,
    catalog: &Catalog,
    k: usize,
) -> Vec<RankedItem> {
    if k == 0 || query.is_empty() || store.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<RankedItem> = catalog
        .items()
        .iter()
        .filter_map(|item| {
            store.get(item.id).map(|embedding| RankedItem {
                item: item.clone(),
                relevance: dot(query, embedding),
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(k);
    ranked
}
