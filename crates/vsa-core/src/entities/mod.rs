//! Entity structs for the sentiment assistant.
//!
//! [`ClassificationRecord`] is what the store persists; [`AnalysisResult`] is
//! the ephemeral output of the pipeline, of which only `text` and `sentiment`
//! survive into storage.

mod analysis;
mod record;

pub use analysis::AnalysisResult;
pub use record::{ClassificationRecord, TIMESTAMP_FORMAT};
