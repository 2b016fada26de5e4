//! Response types returned as JSON by `vsa` commands and the dashboard API.

use serde::{Deserialize, Serialize};

use crate::entities::{AnalysisResult, ClassificationRecord};
use crate::enums::Sentiment;

/// The canonical two-field result shape shown by every presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentimentOutput {
    pub text: String,
    pub sentiment: Sentiment,
}

/// Response from `vsa <TEXT>` and `POST /api/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzeResponse {
    pub result: AnalysisResult,
    /// The stored record, absent when the analysis failed.
    pub saved: Option<ClassificationRecord>,
}

/// One page of history, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryResponse {
    pub records: Vec<ClassificationRecord>,
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
}

impl HistoryResponse {
    /// Records beyond this page.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        let seen = u64::from(self.offset) + self.records.len() as u64;
        self.total.saturating_sub(seen)
    }
}

/// Response from `vsa clear` and `DELETE /api/history`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClearResponse {
    pub deleted: u64,
}

/// Response from `GET /api/model`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelResponse {
    /// Identifier of the loaded backend.
    pub backend: String,
    /// Identifiers that can be selected.
    pub available: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(records: usize, total: u64, offset: u32) -> HistoryResponse {
        let records = (0..records)
            .map(|i| ClassificationRecord {
                id: i as i64,
                text: format!("câu số {i}"),
                sentiment: Sentiment::Neutral,
                timestamp: "2025-01-01 00:00:00".to_string(),
            })
            .collect();
        HistoryResponse {
            records,
            total,
            limit: 50,
            offset,
        }
    }

    #[test]
    fn remaining_counts_records_after_page() {
        assert_eq!(page(50, 120, 0).remaining(), 70);
        assert_eq!(page(50, 120, 50).remaining(), 20);
        assert_eq!(page(20, 120, 100).remaining(), 0);
    }

    #[test]
    fn remaining_never_underflows() {
        assert_eq!(page(3, 2, 5).remaining(), 0);
    }
}
