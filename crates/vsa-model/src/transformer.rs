//! ModernBERT sequence classifier running on candle.
//!
//! Weights, `config.json`, and `tokenizer.json` come from the Hub repository
//! named by [`BackendKind::repo_id`], cached under the configured directory.
//! Safetensors are read into memory and loaded through the buffered loader.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use candle_core::{D, DType, Device, Tensor};
use candle_nn::{VarBuilder, ops::softmax};
use candle_transformers::models::modernbert::{
    ClassifierConfig, ClassifierPooling, Config, ModernBertForSequenceClassification,
};
use hf_hub::api::sync::{Api, ApiBuilder};
use hf_hub::{Repo, RepoType};
use serde::Deserialize;
use tokenizers::{Tokenizer, TruncationParams};

use vsa_core::backend::{RawPrediction, SentimentBackend};
use vsa_core::errors::CoreError;

use crate::error::ModelError;
use crate::kind::BackendKind;

/// Label fields of a Hub `config.json`. `label2id` values are integers there,
/// unlike candle's [`ClassifierConfig`].
#[derive(Deserialize)]
struct LabelConfigJson {
    #[serde(default)]
    id2label: HashMap<String, String>,
    #[serde(default)]
    label2id: HashMap<String, u32>,
}

/// Files fetched from one Hub repository.
struct RepoFiles {
    config: PathBuf,
    weights: PathBuf,
    tokenizer: PathBuf,
}

/// A loaded transformer classifier.
pub struct TransformerBackend {
    kind: BackendKind,
    model: ModernBertForSequenceClassification,
    tokenizer: Tokenizer,
    id2label: HashMap<String, String>,
    device: Device,
}

impl TransformerBackend {
    /// Download (or reuse from cache) and load `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Download`] when the Hub cannot provide the files,
    /// [`ModelError::Tokenization`] for a broken tokenizer, and
    /// [`ModelError::InitFailed`] when the config or weights do not load.
    pub fn load(
        kind: BackendKind,
        cache_dir: &Path,
        max_length: usize,
    ) -> Result<Self, ModelError> {
        let device = Device::cuda_if_available(0)
            .map_err(|e| ModelError::InitFailed(format!("device selection: {e}")))?;
        tracing::debug!(backend = %kind, ?device, cache = %cache_dir.display(), "loading classifier");

        let api = ApiBuilder::new()
            .with_cache_dir(cache_dir.to_path_buf())
            .with_progress(false)
            .build()?;
        let files = fetch_files(&api, kind)?;

        let config_str = std::fs::read_to_string(&files.config)
            .map_err(|e| ModelError::InitFailed(format!("reading config.json: {e}")))?;
        let mut config: Config = serde_json::from_str(&config_str)
            .map_err(|e| ModelError::InitFailed(format!("parsing config.json: {e}")))?;
        let labels: LabelConfigJson = serde_json::from_str(&config_str)
            .map_err(|e| ModelError::InitFailed(format!("parsing labels: {e}")))?;
        if labels.id2label.is_empty() {
            return Err(ModelError::InitFailed(format!(
                "{} has no id2label mapping",
                kind.repo_id()
            )));
        }
        install_classifier_config(&mut config, &labels);

        let vb = var_builder(&files.weights, &device)?;
        let model = ModernBertForSequenceClassification::load(vb, &config)
            .map_err(|e| ModelError::InitFailed(format!("building model: {e}")))?;

        let mut tokenizer = Tokenizer::from_file(&files.tokenizer).map_err(|e| {
            ModelError::Tokenization(format!(
                "loading '{}': {e}",
                files.tokenizer.display()
            ))
        })?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length,
                ..TruncationParams::default()
            }))
            .map_err(|e| ModelError::Tokenization(format!("truncation: {e}")))?;

        tracing::info!(backend = %kind, labels = labels.id2label.len(), "classifier loaded");
        Ok(Self {
            kind,
            model,
            tokenizer,
            id2label: labels.id2label,
            device,
        })
    }

    #[must_use]
    pub const fn kind(&self) -> BackendKind {
        self.kind
    }

    fn predict(&self, text: &str) -> Result<RawPrediction, ModelError> {
        let encoding = self.tokenizer.encode(text, true).map_err(|e| {
            ModelError::Tokenization(format!(
                "'{}': {e}",
                text.chars().take(50).collect::<String>()
            ))
        })?;

        let logits = self
            .forward(encoding.get_ids(), encoding.get_attention_mask())
            .map_err(|e| ModelError::Inference(e.to_string()))?;
        let probs = softmax(&logits, D::Minus1)
            .and_then(|p| p.squeeze(0))
            .and_then(|p| p.to_vec1::<f32>())
            .map_err(|e| ModelError::Inference(e.to_string()))?;

        let (idx, score) = top_class(&probs)
            .ok_or_else(|| ModelError::Inference("classifier returned no scores".to_string()))?;
        let label = self.id2label.get(&idx.to_string()).ok_or_else(|| {
            let mut available: Vec<&str> = self.id2label.keys().map(String::as_str).collect();
            available.sort_unstable();
            ModelError::Inference(format!(
                "predicted class {idx} not in id2label (available: {})",
                available.join(", ")
            ))
        })?;

        tracing::debug!(backend = %self.kind, label, score, "classified");
        Ok(RawPrediction::new(label.clone(), score))
    }

    fn forward(&self, ids: &[u32], mask: &[u32]) -> candle_core::Result<Tensor> {
        let input_ids = Tensor::new(ids, &self.device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(mask, &self.device)?.unsqueeze(0)?;
        self.model.forward(&input_ids, &attention_mask)
    }
}

impl SentimentBackend for TransformerBackend {
    fn name(&self) -> &str {
        self.kind.as_str()
    }

    fn classify(&self, text: &str) -> Result<RawPrediction, CoreError> {
        Ok(self.predict(text)?)
    }
}

fn fetch_files(api: &Api, kind: BackendKind) -> Result<RepoFiles, ModelError> {
    let repo = api.repo(Repo::new(kind.repo_id().to_string(), RepoType::Model));
    let config = repo.get("config.json")?;
    let weights = repo
        .get("model.safetensors")
        .or_else(|_| repo.get("pytorch_model.bin"))?;
    let tokenizer = repo.get("tokenizer.json")?;
    Ok(RepoFiles {
        config,
        weights,
        tokenizer,
    })
}

fn var_builder(weights: &Path, device: &Device) -> Result<VarBuilder<'static>, ModelError> {
    let vb = if weights.extension().is_some_and(|e| e == "safetensors") {
        let bytes = std::fs::read(weights)
            .map_err(|e| ModelError::InitFailed(format!("reading weights: {e}")))?;
        VarBuilder::from_buffered_safetensors(bytes, DType::F32, device)
    } else {
        VarBuilder::from_pth(weights, DType::F32, device)
    };
    vb.map_err(|e| ModelError::InitFailed(format!("loading weights: {e}")))
}

/// Give candle's config the real label set so the head has the right width.
fn install_classifier_config(config: &mut Config, labels: &LabelConfigJson) {
    let num_labels = labels.id2label.len().max(labels.label2id.len());
    let matches = config
        .classifier_config
        .as_ref()
        .is_some_and(|c| c.id2label.len() == num_labels);
    if matches {
        return;
    }

    let label2id = labels
        .id2label
        .iter()
        .map(|(id, label)| (label.clone(), id.clone()))
        .collect();
    config.classifier_config = Some(ClassifierConfig {
        id2label: labels.id2label.clone(),
        label2id,
        classifier_pooling: ClassifierPooling::default(),
    });
}

/// Index and probability of the most likely class.
///
/// Ties keep the lowest index; NaN scores never win.
pub(crate) fn top_class(probs: &[f32]) -> Option<(usize, f32)> {
    probs
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, p)| !p.is_nan())
        .fold(None, |best, (i, p)| match best {
            Some((_, bp)) if bp >= p => best,
            _ => Some((i, p)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn top_class_picks_highest_probability() {
        assert_eq!(top_class(&[0.1, 0.7, 0.2]), Some((1, 0.7)));
    }

    #[test]
    fn top_class_keeps_first_on_tie() {
        assert_eq!(top_class(&[0.5, 0.5]), Some((0, 0.5)));
    }

    #[test]
    fn top_class_skips_nan_and_handles_empty() {
        assert_eq!(top_class(&[f32::NAN, 0.2]), Some((1, 0.2)));
        assert_eq!(top_class(&[]), None);
    }

    #[test]
    fn softmax_then_top_class_matches_argmax() {
        let logits = Tensor::new(&[[1.0f32, 3.0, 0.5]], &Device::Cpu).unwrap();
        let probs = softmax(&logits, D::Minus1)
            .unwrap()
            .squeeze(0)
            .unwrap()
            .to_vec1::<f32>()
            .unwrap();
        let (idx, score) = top_class(&probs).unwrap();
        assert_eq!(idx, 1);
        assert!(score > 0.5 && score <= 1.0);
        assert!((probs.iter().sum::<f32>() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn label_config_parses_integer_label2id() {
        let json = r#"{
            "id2label": {"0": "negative", "1": "neutral", "2": "positive"},
            "label2id": {"negative": 0, "neutral": 1, "positive": 2}
        }"#;
        let labels: LabelConfigJson = serde_json::from_str(json).unwrap();
        assert_eq!(labels.id2label.len(), 3);
        assert_eq!(labels.label2id["positive"], 2);
    }
}
