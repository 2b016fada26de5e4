//! # vsa-analyzer
//!
//! Vietnamese sentence sentiment: a pre-trained classifier behind the
//! [`SentimentBackend`](vsa_core::backend::SentimentBackend) seam, arbitrated
//! against a keyword heuristic.
//!
//! ```ignore
//! let analyzer = SentimentAnalyzer::vietnamese(backend);
//! let result = analyzer.analyze("Hôm nay tôi rất vui");
//! assert_eq!(result.sentiment, Sentiment::Positive);
//! ```

pub mod analyzer;
pub mod arbitration;
pub mod error;
pub mod keywords;
pub mod labels;
pub mod normalize;

pub use analyzer::SentimentAnalyzer;
pub use error::{AnalysisError, INVALID_INPUT_MESSAGE};
pub use keywords::{Candidate, Gazetteer, KeywordCounts};
