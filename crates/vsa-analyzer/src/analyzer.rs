//! The sentiment pipeline: validate, normalize, count keywords, classify,
//! arbitrate.

use vsa_core::backend::SentimentBackend;
use vsa_core::entities::AnalysisResult;

use crate::arbitration::arbitrate;
use crate::error::AnalysisError;
use crate::keywords::Gazetteer;
use crate::labels::map_label;
use crate::normalize::{is_valid, normalize};

/// Classifies Vietnamese sentences with a backend plus keyword arbitration.
///
/// Holds no mutable state; results are not persisted here.
pub struct SentimentAnalyzer<B = Box<dyn SentimentBackend>> {
    backend: B,
    gazetteer: Gazetteer,
}

impl<B: SentimentBackend> SentimentAnalyzer<B> {
    #[must_use]
    pub const fn new(backend: B, gazetteer: Gazetteer) -> Self {
        Self { backend, gazetteer }
    }

    /// Analyzer over the bundled Vietnamese gazetteer.
    #[must_use]
    pub const fn vietnamese(backend: B) -> Self {
        Self::new(backend, Gazetteer::vietnamese())
    }

    /// Name of the backend in use.
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Analyze one sentence. Never fails: invalid input and backend errors
    /// come back as NEUTRAL at zero confidence with `error` set.
    #[must_use]
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        match self.try_analyze(text) {
            Ok(result) => result,
            Err(e) => {
                if matches!(e, AnalysisError::InferenceFailure(_)) {
                    tracing::warn!(error = %e, "sentiment analysis failed");
                } else {
                    tracing::debug!("rejected input shorter than minimum length");
                }
                AnalysisResult::failed(text, e.to_string())
            }
        }
    }

    /// Analyze each text in order.
    #[must_use]
    pub fn analyze_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<AnalysisResult> {
        texts.iter().map(|t| self.analyze(t.as_ref())).collect()
    }

    fn try_analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        if !is_valid(text) {
            return Err(AnalysisError::InvalidInput);
        }

        let normalized = normalize(text);
        let counts = self.gazetteer.count(text);

        let prediction = self
            .backend
            .classify(&normalized)
            .map_err(|e| AnalysisError::InferenceFailure(e.to_string()))?;
        if !prediction.score.is_finite() {
            return Err(AnalysisError::InferenceFailure(format!(
                "non-finite score {} for label '{}'",
                prediction.score, prediction.label
            )));
        }
        let model_sentiment = map_label(&prediction.label);
        let verdict = arbitrate(&counts, model_sentiment, prediction.score);

        tracing::debug!(
            backend = self.backend.name(),
            raw_label = %prediction.label,
            score = prediction.score,
            ?counts,
            rule = ?verdict.rule,
            sentiment = %verdict.sentiment,
            "arbitrated"
        );

        Ok(AnalysisResult {
            text: text.to_string(),
            sentiment: verdict.sentiment,
            confidence: verdict.confidence.clamp(0.0, 1.0),
            raw_label: Some(prediction.label),
            error: None,
        })
    }
}
