use serde::{Deserialize, Serialize};

use crate::enums::Sentiment;
use crate::responses::SentimentOutput;

/// Result of analyzing one sentence. Never persisted verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    /// The text as submitted (not normalized).
    pub text: String,
    pub sentiment: Sentiment,
    /// Final confidence in `[0, 1]`.
    pub confidence: f32,
    /// The backend's native label, when the backend was consulted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_label: Option<String>,
    /// Human-readable failure, set for invalid input and inference failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResult {
    /// A recovered failure: NEUTRAL at zero confidence carrying `message`.
    #[must_use]
    pub fn failed(text: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sentiment: Sentiment::Neutral,
            confidence: 0.0,
            raw_label: None,
            error: Some(message.into()),
        }
    }

    /// Whether this result should be saved and shown as a classification.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    #[must_use]
    pub fn output(&self) -> SentimentOutput {
        SentimentOutput {
            text: self.text.clone(),
            sentiment: self.sentiment,
        }
    }
}
