//! Model loading and inference error types.

use vsa_core::errors::CoreError;

/// Errors that can occur while loading or running a classifier.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Fetching config, weights, or tokenizer from the Hub failed.
    #[error("Model download failed: {0}")]
    Download(String),

    /// The tokenizer could not be loaded or could not encode the input.
    #[error("Tokenization failed: {0}")]
    Tokenization(String),

    /// The forward pass or score extraction failed.
    #[error("Inference failed: {0}")]
    Inference(String),

    /// Config parsing or weight loading failed.
    #[error("Model initialization failed: {0}")]
    InitFailed(String),

    /// Neither the selected backend nor its alternate could be loaded.
    #[error("All backends failed to load ({primary}: {primary_error}; {alternate}: {alternate_error})")]
    AllBackendsFailed {
        primary: String,
        primary_error: String,
        alternate: String,
        alternate_error: String,
    },

    /// The backend identifier is not one of the known models.
    #[error("Unknown backend '{0}' (expected modernbert-base or modernbert-large)")]
    UnknownBackend(String),
}

impl From<hf_hub::api::sync::ApiError> for ModelError {
    fn from(e: hf_hub::api::sync::ApiError) -> Self {
        Self::Download(e.to_string())
    }
}

impl From<ModelError> for CoreError {
    fn from(e: ModelError) -> Self {
        Self::Inference(e.to_string())
    }
}
