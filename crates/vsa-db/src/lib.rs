//! # vsa-db
//!
//! libSQL record store for sentiment classification history.
//!
//! A single append-only table, `sentiments(id, text, sentiment, timestamp)`,
//! with aggregate statistics. Every operation opens its own connection from
//! the file-backed database and releases it on return; nothing spans two
//! operations. All values are bound as parameters.
//!
//! The store needs a file path: each libSQL connection to `":memory:"` would
//! see its own empty database.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;

use std::path::{Path, PathBuf};

use error::DatabaseError;
use libsql::Builder;

/// Handle to the local classification history file.
pub struct SentimentStore {
    db: libsql::Database,
    path: PathBuf,
}

impl SentimentStore {
    /// Open (or create) the store at `path`.
    ///
    /// Creates the parent directory if needed and runs migrations.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the directory cannot be created, the
    /// database cannot be opened, or migrations fail.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let db = Builder::new_local(&path).build().await?;
        let store = Self { db, path };
        store.run_migrations().await?;
        tracing::debug!(path = %store.path.display(), "opened sentiment store");
        Ok(store)
    }

    /// Location of the store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection for one operation.
    pub(crate) fn connect(&self) -> Result<libsql::Connection, DatabaseError> {
        Ok(self.db.connect()?)
    }
}
