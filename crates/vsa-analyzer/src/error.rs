//! Pipeline error types. Both variants are recovered inside
//! [`SentimentAnalyzer::analyze`](crate::SentimentAnalyzer::analyze) and
//! surface as the `error` field of a NEUTRAL result.

use thiserror::Error;

/// Message shown to the user for any rejected or failed sentence.
pub const INVALID_INPUT_MESSAGE: &str = "Câu không hợp lệ, thử lại!";

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Empty, blank, or shorter than the minimum length after trimming.
    #[error("Câu không hợp lệ, thử lại!")]
    InvalidInput,

    /// The backend raised while classifying.
    #[error("Câu không hợp lệ, thử lại! ({0})")]
    InferenceFailure(String),
}
