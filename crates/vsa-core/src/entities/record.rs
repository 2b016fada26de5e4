use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::enums::Sentiment;
use crate::responses::SentimentOutput;

/// Fixed timestamp layout of stored records.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One persisted classification event. Immutable once written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClassificationRecord {
    pub id: i64,
    pub text: String,
    pub sentiment: Sentiment,
    /// Local time, `YYYY-MM-DD HH:MM:SS`.
    pub timestamp: String,
}

impl ClassificationRecord {
    /// Parse [`Self::timestamp`]. Returns `None` for rows written in another format.
    #[must_use]
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT).ok()
    }

    /// Canonical `{text, sentiment}` view of the record.
    #[must_use]
    pub fn output(&self) -> SentimentOutput {
        SentimentOutput {
            text: self.text.clone(),
            sentiment: self.sentiment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(timestamp: &str) -> ClassificationRecord {
        ClassificationRecord {
            id: 1,
            text: "Hôm nay tôi rất vui".to_string(),
            sentiment: Sentiment::Positive,
            timestamp: timestamp.to_string(),
        }
    }

    #[test]
    fn parses_fixed_timestamp_format() {
        let parsed = record("2025-03-01 14:05:09").parsed_timestamp().unwrap();
        assert_eq!(parsed.format("%H:%M").to_string(), "14:05");
    }

    #[test]
    fn rejects_rfc3339_timestamp() {
        assert!(record("2025-03-01T14:05:09Z").parsed_timestamp().is_none());
    }

    #[test]
    fn output_drops_id_and_timestamp() {
        let json = serde_json::to_value(record("2025-03-01 14:05:09").output()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"text": "Hôm nay tôi rất vui", "sentiment": "POSITIVE"})
        );
    }
}
