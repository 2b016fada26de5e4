//! Cross-cutting error types.
//!
//! Domain-specific errors (`DatabaseError`, `ModelError`, `AnalysisError`)
//! live in their respective crates. Everything converges into `anyhow` in
//! `vsa-cli`.

use thiserror::Error;

/// Errors that can be raised by any `vsa` crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (unknown label, empty text, bad format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A sentiment backend failed to produce a prediction.
    #[error("Inference failed: {0}")]
    Inference(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
