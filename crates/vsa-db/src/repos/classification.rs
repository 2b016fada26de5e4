//! Classification record repository: append, page, count, clear.

use vsa_core::entities::ClassificationRecord;
use vsa_core::enums::Sentiment;

use crate::SentimentStore;
use crate::error::DatabaseError;
use crate::helpers::{count_to_u64, now_timestamp, row_to_record};

const SELECT_PAGE: &str = "SELECT id, text, sentiment, timestamp FROM sentiments \
     ORDER BY timestamp DESC, id DESC LIMIT ?1 OFFSET ?2";

impl SentimentStore {
    /// Append one classification stamped with the current local time.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidInput` for blank text, or a libSQL
    /// error if the insert fails.
    pub async fn save(
        &self,
        text: &str,
        sentiment: Sentiment,
    ) -> Result<ClassificationRecord, DatabaseError> {
        if text.trim().is_empty() {
            return Err(DatabaseError::InvalidInput(
                "text must not be blank".to_string(),
            ));
        }

        let timestamp = now_timestamp();
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO sentiments (text, sentiment, timestamp) VALUES (?1, ?2, ?3)",
            libsql::params![text, sentiment.as_str(), timestamp.as_str()],
        )
        .await?;
        let id = conn.last_insert_rowid();

        tracing::debug!(id, sentiment = %sentiment, "saved classification");
        Ok(ClassificationRecord {
            id,
            text: text.to_string(),
            sentiment,
            timestamp,
        })
    }

    /// One page of history, newest first.
    ///
    /// Records sharing a timestamp come back in descending `id` order, so
    /// paging is stable within the same second.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row is malformed.
    pub async fn history(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<ClassificationRecord>, DatabaseError> {
        let conn = self.connect()?;
        let mut rows = conn
            .query(
                SELECT_PAGE,
                libsql::params![i64::from(limit), i64::from(offset)],
            )
            .await?;

        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            records.push(row_to_record(&row)?);
        }
        Ok(records)
    }

    /// Number of stored records.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn total_count(&self) -> Result<u64, DatabaseError> {
        let conn = self.connect()?;
        let mut rows = conn.query("SELECT COUNT(*) FROM sentiments", ()).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        count_to_u64(row.get::<i64>(0)?)
    }

    /// Delete every record. Returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the delete fails.
    pub async fn clear(&self) -> Result<u64, DatabaseError> {
        let conn = self.connect()?;
        let deleted = conn.execute("DELETE FROM sentiments", ()).await?;
        tracing::info!(deleted, "cleared classification history");
        Ok(deleted)
    }
}
