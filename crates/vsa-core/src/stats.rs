//! Aggregate statistics and the hourly timeline used by the dashboard charts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::ClassificationRecord;
use crate::enums::Sentiment;

/// Counts per sentiment across the whole store.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentimentStats {
    pub total: u64,
    pub positive: u64,
    pub neutral: u64,
    pub negative: u64,
}

impl SentimentStats {
    #[must_use]
    pub const fn count(&self, sentiment: Sentiment) -> u64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    /// Fraction of records with `sentiment`, `0.0` for an empty store.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn share(&self, sentiment: Sentiment) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(sentiment) as f64 / self.total as f64
    }

    /// `positive + neutral + negative == total`.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.positive + self.neutral + self.negative == self.total
    }
}

/// Number of records of one sentiment within one clock hour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineBucket {
    /// Start of the hour, `YYYY-MM-DD HH:00:00`.
    pub hour: String,
    pub sentiment: Sentiment,
    pub count: u64,
}

/// Group records per hour and sentiment, oldest hour first.
///
/// Records whose timestamp does not parse are skipped.
#[must_use]
pub fn timeline(records: &[ClassificationRecord]) -> Vec<TimelineBucket> {
    let mut buckets: BTreeMap<(String, Sentiment), u64> = BTreeMap::new();
    for record in records {
        let Some(ts) = record.parsed_timestamp() else {
            continue;
        };
        let hour = ts.format("%Y-%m-%d %H:00:00").to_string();
        *buckets.entry((hour, record.sentiment)).or_default() += 1;
    }

    buckets
        .into_iter()
        .map(|((hour, sentiment), count)| TimelineBucket {
            hour,
            sentiment,
            count,
        })
        .collect()
}
