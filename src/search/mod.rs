//! Embedding-based semantic retrieval over the product catalog.
//!
//! - **store**: pre-computed unit-norm item embeddings, built once at startup
//! - **ranker**: brute-force cosine ranking of a query against the store
//! - **query**: deterministic query-string derivation from UI intent
//! - **engine**: debounced search orchestration against the embedding model

pub mod engine;
pub mod query;
pub mod ranker;
pub mod store;

// Re-exports for convenient access
pub use engine::SearchEngine;
pub use query::{build_query, Preset, QueryState};
pub use ranker::rank;
pub use store::{EmbeddingStore, IndexProgress};
