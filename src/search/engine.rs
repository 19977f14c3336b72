//! Debounced semantic search orchestration.
//!
//! Composes query derivation, text embedding, and ranking. Rapid query-state
//! changes are collapsed: a delayed search task is (re)scheduled on every
//! change and only the final settled state is embedded and ranked.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::catalog::{Catalog, RankedItem};
use crate::config::SearchConfig;
use crate::math::l2_normalize;
use crate::perception::EmbeddingModel;

use super::query::{build_query, QueryState};
use super::ranker::rank;
use super::store::EmbeddingStore;

/// Semantic search over the indexed catalog.
///
/// Results are published on a watch channel so a presentation layer can
/// observe the latest ranking without holding the engine itself.
pub struct SearchEngine {
    inner: Arc<EngineInner>,
    /// Single-slot delayed search; rescheduling aborts the previous one.
    pending: Option<JoinHandle<()>>,
}

struct EngineInner {
    store: EmbeddingStore,
    catalog: Catalog,
    model: Arc<dyn EmbeddingModel>,
    config: SearchConfig,
    results: watch::Sender<Vec<RankedItem>>,
}

impl SearchEngine {
    pub fn new(
        store: EmbeddingStore,
        catalog: Catalog,
        model: Arc<dyn EmbeddingModel>,
        config: SearchConfig,
    ) -> Self {
        let (results, _) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(EngineInner {
                store,
                catalog,
                model,
                config,
                results,
            }),
            pending: None,
        }
    }

    /// Observe the most recently published ranking.
    pub fn subscribe(&self) -> watch::Receiver<Vec<RankedItem>> {
        self.inner.results.subscribe()
    }

    /// Schedule a debounced search for the given intent.
    ///
    /// Any still-pending scheduled search is cancelled first (last write
    /// wins); an already-dispatched embedding call is never cancelled. The
    /// search runs after the configured quiet period with no further
    /// `submit` calls.
    pub fn submit(&mut self, state: QueryState, customer_style: Option<String>) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let inner = Arc::clone(&self.inner);
        let delay = Duration::from_millis(inner.config.debounce_ms);
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            inner.run_search(&state, customer_style.as_deref()).await;
        }));
    }

    /// Search immediately, bypassing the debounce (explicit submission).
    pub async fn search_now(
        &self,
        state: &QueryState,
        customer_style: Option<&str>,
    ) -> Vec<RankedItem> {
        self.inner.run_search(state, customer_style).await
    }
}

impl EngineInner {
    /// Derive, embed, and rank one query; publish the result.
    ///
    /// An empty store short-circuits without touching the embedding model.
    /// An embedding failure is logged and leaves the last published ranking
    /// intact.
    async fn run_search(&self, state: &QueryState, customer_style: Option<&str>) -> Vec<RankedItem> {
        if self.store.is_empty() {
            return Vec::new();
        }

        let query = build_query(state, customer_style);
        tracing::debug!("Searching catalog for: {query}");

        let embedding = match self.model.embed_text(&query).await {
            Ok(embedding) => embedding,
            Err(e) => {
                tracing::warn!("Query embedding failed: {e}");
                return Vec::new();
            }
        };

        let query_vec = l2_normalize(&embedding);
        let ranked = rank(&query_vec, &self.store, &self.catalog, self.config.top_k);
        self.results.send_replace(ranked.clone());
        ranked
    }
}
