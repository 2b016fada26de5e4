use anyhow::Context;

use vsa_analyzer::SentimentAnalyzer;
use vsa_config::{ModelConfig, VsaConfig};
use vsa_core::backend::SentimentBackend;
use vsa_db::SentimentStore;
use vsa_model::BackendKind;

use crate::progress::Progress;

/// Session state shared by every command: configuration, the history store,
/// and the classifier once something needs it.
pub struct AppContext {
    pub config: VsaConfig,
    pub store: SentimentStore,
    analyzer: Option<SentimentAnalyzer>,
}

impl AppContext {
    /// Open the store. The classifier is loaded lazily by [`Self::analyzer`].
    pub async fn init(config: VsaConfig) -> anyhow::Result<Self> {
        // Reject a bad --model before any work happens.
        config
            .model
            .backend
            .parse::<BackendKind>()
            .context("invalid model selection")?;

        let store = SentimentStore::open(config.store.path_buf())
            .await
            .with_context(|| format!("failed to open history store at {}", config.store.path))?;

        Ok(Self {
            config,
            store,
            analyzer: None,
        })
    }

    /// The loaded analyzer, loading the configured backend on first use.
    pub async fn analyzer(&mut self) -> anyhow::Result<&SentimentAnalyzer> {
        if self.analyzer.is_none() {
            let model = self.config.model.clone();
            let progress = Progress::spinner(&format!("Đang tải model {}...", model.backend));
            let loaded = tokio::task::spawn_blocking(move || load_analyzer(&model))
                .await
                .context("model loading task panicked")?;
            match loaded {
                Ok(analyzer) => {
                    progress.finish_clear();
                    self.set_analyzer(analyzer);
                }
                Err(error) => {
                    progress.finish_err("Không tải được model");
                    return Err(error);
                }
            }
        }
        self.analyzer
            .as_ref()
            .context("analyzer missing after load")
    }

    /// Replace the analyzer, recording which backend actually loaded.
    pub fn set_analyzer(&mut self, analyzer: SentimentAnalyzer) {
        analyzer
            .backend_name()
            .clone_into(&mut self.config.model.backend);
        self.analyzer = Some(analyzer);
    }

    /// The loaded analyzer, if any, without triggering a load.
    pub const fn loaded_analyzer(&self) -> Option<&SentimentAnalyzer> {
        self.analyzer.as_ref()
    }
}

/// Load a classifier (with fallback) and wrap it in the keyword pipeline.
/// Blocking; call from `spawn_blocking` or a blocking thread.
pub fn load_analyzer(model: &ModelConfig) -> anyhow::Result<SentimentAnalyzer> {
    let backend = vsa_model::load_backend(model).context("failed to load sentiment model")?;
    tracing::info!(backend = backend.kind().as_str(), "sentiment model ready");
    let backend: Box<dyn SentimentBackend> = Box::new(backend);
    Ok(SentimentAnalyzer::vietnamese(backend))
}
