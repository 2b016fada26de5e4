//! Aggregate views over the history: per-sentiment counts and the hourly
//! timeline.

use vsa_core::enums::Sentiment;
use vsa_core::stats::{self, SentimentStats, TimelineBucket};

use crate::SentimentStore;
use crate::error::DatabaseError;
use crate::helpers::count_to_u64;

impl SentimentStore {
    /// Totals per sentiment. An empty store yields all zeros.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn statistics(&self) -> Result<SentimentStats, DatabaseError> {
        let conn = self.connect()?;
        let mut rows = conn
            .query(
                "SELECT COUNT(*), \
                 COALESCE(SUM(CASE WHEN sentiment = ?1 THEN 1 ELSE 0 END), 0), \
                 COALESCE(SUM(CASE WHEN sentiment = ?2 THEN 1 ELSE 0 END), 0), \
                 COALESCE(SUM(CASE WHEN sentiment = ?3 THEN 1 ELSE 0 END), 0) \
                 FROM sentiments",
                libsql::params![
                    Sentiment::Positive.as_str(),
                    Sentiment::Neutral.as_str(),
                    Sentiment::Negative.as_str(),
                ],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;

        let stats = SentimentStats {
            total: count_to_u64(row.get::<i64>(0)?)?,
            positive: count_to_u64(row.get::<i64>(1)?)?,
            neutral: count_to_u64(row.get::<i64>(2)?)?,
            negative: count_to_u64(row.get::<i64>(3)?)?,
        };
        if !stats.is_consistent() {
            return Err(DatabaseError::InvalidState(format!(
                "sentiment counts do not add up to total {}",
                stats.total
            )));
        }
        Ok(stats)
    }

    /// Hourly counts per sentiment over the most recent `limit` records.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the history query fails.
    pub async fn timeline(&self, limit: u32) -> Result<Vec<TimelineBucket>, DatabaseError> {
        let records = self.history(limit, 0).await?;
        Ok(stats::timeline(&records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    async fn store() -> (TempDir, SentimentStore) {
        let dir = TempDir::new().unwrap();
        let store = SentimentStore::open(dir.path().join("history.db"))
            .await
            .unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn empty_store_has_zero_stats() {
        let (_dir, store) = store().await;
        assert_eq!(store.statistics().await.unwrap(), SentimentStats::default());
    }

    #[tokio::test]
    async fn stats_count_each_sentiment() {
        let (_dir, store) = store().await;
        store.save("Hôm nay tôi rất vui", Sentiment::Positive).await.unwrap();
        store.save("Món ăn này dở quá", Sentiment::Negative).await.unwrap();
        store.save("Thời tiết bình thường", Sentiment::Neutral).await.unwrap();
        store.save("Cảm ơn bạn rất nhiều", Sentiment::Positive).await.unwrap();

        let stats = store.statistics().await.unwrap();
        assert_eq!(
            stats,
            SentimentStats {
                total: 4,
                positive: 2,
                neutral: 1,
                negative: 1,
            }
        );
    }

    #[tokio::test]
    async fn timeline_buckets_recent_records() {
        let (_dir, store) = store().await;
        store.save("Hôm nay tôi rất vui", Sentiment::Positive).await.unwrap();
        store.save("Cảm ơn bạn rất nhiều", Sentiment::Positive).await.unwrap();

        let buckets = store.timeline(50).await.unwrap();
        let total: u64 = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, 2);
        assert!(buckets.iter().all(|b| b.sentiment == Sentiment::Positive));
        assert!(buckets.iter().all(|b| b.hour.ends_with(":00:00")));
    }
}
