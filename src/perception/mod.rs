//! External collaborator seams for the perception pipeline.
//!
//! Vitrine treats every model as a black box behind a narrow trait: the host
//! application wires in real implementations (ONNX sessions, platform camera
//! APIs, remote services); the core only schedules and arbitrates calls.
//! Traits use `async_trait` because inference calls suspend and the scheduler
//! holds them as `Arc<dyn Trait>` for dynamic dispatch.

pub mod crop;

pub use crop::crop_subject;

use async_trait::async_trait;
use image::DynamicImage;

use crate::error::PerceptionResult;
use crate::types::Detection;

/// A live video feed.
///
/// Returns `None` until the capture device has produced its first frame;
/// scheduler ticks are no-ops while the source is not ready.
pub trait VideoSource: Send + Sync {
    fn current_frame(&self) -> Option<DynamicImage>;
}

/// Face/expression perception model.
#[async_trait]
pub trait FaceDetector: Send + Sync {
    /// Detect all subjects in a frame. An empty result means no subject is
    /// present; ordering is not trusted by callers.
    async fn detect(&self, frame: &DynamicImage) -> PerceptionResult<Vec<Detection>>;
}

/// Zero-shot style classification model.
#[async_trait]
pub trait StyleClassifier: Send + Sync {
    /// Whether the model has finished loading. Classification is skipped
    /// (and retried next cycle) while this is false.
    fn is_ready(&self) -> bool;

    /// Score an image against a set of label phrases.
    ///
    /// Returns `(label, score)` pairs with scores in [0, 1]; result order is
    /// not significant.
    async fn classify(
        &self,
        image: &DynamicImage,
        labels: &[String],
    ) -> PerceptionResult<Vec<(String, f32)>>;
}

/// Text/image embedding model.
///
/// Both modalities must produce vectors of the same dimension so that
/// cosine similarity is meaningful cross-modally.
#[async_trait]
pub trait EmbeddingModel: Send + Sync {
    async fn embed_text(&self, text: &str) -> PerceptionResult<Vec<f32>>;

    async fn embed_image(&self, image: &DynamicImage) -> PerceptionResult<Vec<f32>>;
}
