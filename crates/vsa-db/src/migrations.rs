//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! store open. All statements use `IF NOT EXISTS` for idempotent re-running.

use crate::SentimentStore;
use crate::error::DatabaseError;

/// Initial schema: the `sentiments` table and its two indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl SentimentStore {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        let conn = self.connect()?;
        conn.execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        Ok(())
    }
}
