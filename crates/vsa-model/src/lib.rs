//! # vsa-model
//!
//! Pre-trained multilingual sentiment classifiers, run locally with candle.
//!
//! ## Backends
//!
//! | Identifier | Hub repository |
//! |---|---|
//! | `modernbert-base` (default) | `clapAI/modernBERT-base-multilingual-sentiment` |
//! | `modernbert-large` | `clapAI/modernBERT-large-multilingual-sentiment` |
//!
//! Files are downloaded on first use and cached at `~/.vsa/cache/hf/` unless
//! `[model] cache_dir` says otherwise. If the selected backend cannot be
//! loaded, the other one is tried once (see [`load_with_fallback`]).
//!
//! ## Async usage
//!
//! Loading and inference are synchronous and CPU-bound. From async code,
//! wrap the load in [`tokio::task::spawn_blocking`].

pub mod error;
pub mod kind;
pub mod loader;
pub mod transformer;

pub use error::ModelError;
pub use kind::BackendKind;
pub use loader::{load_backend, load_with_fallback};
pub use transformer::TransformerBackend;
