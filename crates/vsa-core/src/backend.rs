//! The seam between the sentiment pipeline and a concrete classifier.
//!
//! `vsa-model` implements [`SentimentBackend`] for the transformer models;
//! tests implement it with fixed predictions so the arbitration rules can be
//! exercised without downloading weights.

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A backend's top prediction, in the backend's own label vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPrediction {
    /// Native label (e.g. `"positive"`, `"LABEL_2"`, `"4 stars"`).
    pub label: String,
    /// Probability of `label`, in `[0, 1]`.
    pub score: f32,
}

impl RawPrediction {
    #[must_use]
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// A pre-trained sentiment classifier.
pub trait SentimentBackend: Send + Sync {
    /// Identifier of the loaded model (e.g. `"modernbert-base"`).
    fn name(&self) -> &str;

    /// Classify one normalized sentence.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Inference`] when tokenization or the forward
    /// pass fails.
    fn classify(&self, text: &str) -> Result<RawPrediction, CoreError>;
}

impl<B: SentimentBackend + ?Sized> SentimentBackend for Box<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn classify(&self, text: &str) -> Result<RawPrediction, CoreError> {
        (**self).classify(text)
    }
}

impl<B: SentimentBackend + ?Sized> SentimentBackend for &B {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn classify(&self, text: &str) -> Result<RawPrediction, CoreError> {
        (**self).classify(text)
    }
}
