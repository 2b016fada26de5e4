//! Sentiment model configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_backend() -> String {
    "modernbert-base".to_string()
}

const fn default_fallback() -> bool {
    true
}

/// Longest token sequence fed to the classifier.
const fn default_max_length() -> usize {
    512
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Backend identifier (`modernbert-base` or `modernbert-large`).
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Try the alternate backend once when the selected one fails to load.
    #[serde(default = "default_fallback")]
    pub fallback: bool,

    /// Hugging Face cache directory. Empty means `~/.vsa/cache/hf`.
    #[serde(default)]
    pub cache_dir: String,

    /// Token sequences longer than this are truncated.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            fallback: default_fallback(),
            cache_dir: String::new(),
            max_length: default_max_length(),
        }
    }
}

impl ModelConfig {
    /// Resolve the model cache directory.
    #[must_use]
    pub fn resolved_cache_dir(&self) -> PathBuf {
        if !self.cache_dir.is_empty() {
            return PathBuf::from(&self.cache_dir);
        }
        dirs::home_dir().map_or_else(
            || PathBuf::from(".vsa_cache"),
            |h| h.join(".vsa").join("cache").join("hf"),
        )
    }
}
