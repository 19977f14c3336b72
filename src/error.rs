//! Error types for the Vitrine perception and retrieval core.
//!
//! Errors are organized by collaborator: configuration problems are separate
//! from perception-model failures, and no error in this crate is fatal to a
//! running pipeline - a failed cycle degrades to "no update" and a failed
//! item embedding degrades to "item not searchable".

use thiserror::Error;

/// Top-level error type for Vitrine operations.
#[derive(Error, Debug)]
pub enum VitrineError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Perception-model errors
    #[error("Perception error: {0}")]
    Perception(#[from] PerceptionError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors (catalog loading)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Errors surfaced by the external perception collaborators.
#[derive(Error, Debug)]
pub enum PerceptionError {
    /// The capture device cannot deliver frames
    #[error("Capture device unavailable: {message}")]
    CaptureUnavailable { message: String },

    /// Face detection failed for one frame
    #[error("Detection failed: {message}")]
    Detection { message: String },

    /// Zero-shot style classification failed for one crop
    #[error("Classification failed: {message}")]
    Classification { message: String },

    /// Text or image embedding failed
    #[error("Embedding failed for {subject}: {message}")]
    Embedding { subject: String, message: String },

    /// A model was asked for inference before it finished loading
    #[error("{model} model not loaded")]
    ModelNotReady { model: String },
}

/// Convenience type alias for Vitrine results.
pub type Result<T> = std::result::Result<T, VitrineError>;

/// Convenience type alias for perception-collaborator results.
pub type PerceptionResult<T> = std::result::Result<T, PerceptionError>;
