//! Vitrine - Real-time retail perception core.
//!
//! Vitrine continuously observes a live video feed, extracts perceptual
//! attributes from the customer in front of the camera, and matches those
//! attributes (or an explicit query) against a product catalog using
//! embedding-based semantic similarity.
//!
//! # Architecture
//!
//! Two independent pipelines share a set of narrow collaborator traits:
//!
//! ```text
//! Video feed → AnalysisScheduler → Detection → StyleClassification → Suggestions
//! Query controls → build_query → EmbeddingModel → rank → RankedItem list
//! ```
//!
//! The perception models themselves (face detection, zero-shot style
//! classification, text/image embedding) are external collaborators behind
//! the traits in [`perception`]; Vitrine owns the scheduling, arbitration,
//! and retrieval logic around them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vitrine::{AnalysisScheduler, Config, EmbeddingStore, SearchEngine};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::load().unwrap_or_default();
//!     let store = EmbeddingStore::index(&catalog, embedder.as_ref(), |p| {
//!         println!("indexing {}/{}: {}", p.current, p.total, p.item_name);
//!     })
//!     .await;
//!
//!     let scheduler = Arc::new(AnalysisScheduler::new(
//!         video, detector, classifier, config.scheduler, config.classification,
//!     ));
//!     let mut results = scheduler.subscribe();
//!     tokio::spawn(scheduler.run());
//! }
//! ```

// Module declarations
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod math;
pub mod perception;
pub mod scheduler;
pub mod search;
pub mod suggestions;
pub mod types;

// Re-exports for convenient access
pub use catalog::{Catalog, CatalogItem, RankedItem};
pub use config::Config;
pub use error::{ConfigError, PerceptionError, PerceptionResult, Result, VitrineError};
pub use scheduler::{AnalysisScheduler, TickOutcome};
pub use search::{build_query, rank, EmbeddingStore, IndexProgress, QueryState, SearchEngine};
pub use types::{AnalysisResult, Detection, StyleClassification, Suggestions};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
