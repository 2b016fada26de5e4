//! Record store configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_path() -> String {
    "data/sentiment_history.db".to_string()
}

/// Default page size for history listings.
const fn default_history_limit() -> u32 {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Path to the libSQL file holding the `sentiments` table.
    #[serde(default = "default_path")]
    pub path: String,

    /// Page size for `vsa history` and the dashboard history tab.
    #[serde(default = "default_history_limit")]
    pub history_limit: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            history_limit: default_history_limit(),
        }
    }
}

impl StoreConfig {
    #[must_use]
    pub fn path_buf(&self) -> PathBuf {
        PathBuf::from(&self.path)
    }
}
