use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::warn;

use crate::pipeline::analyze::{DEFAULT_CONCURRENCY, DEFAULT_MAX_BATCH};

/// Which polarity classifier backend to use.
#[derive(Debug, Clone, PartialEq)]
pub enum SentimentBackend {
    /// Local ONNX model (default), lexicon fallback on any failure
    Onnx,
    /// Lexicon scorer only: no model loaded
    Lexicon,
}

impl SentimentBackend {
    /// Parse a `COMPASS_SENTIMENT` value. Unset means ONNX; an unknown
    /// value also means ONNX, with a warning.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            None | Some("") | Some("onnx") => SentimentBackend::Onnx,
            Some("lexicon") => SentimentBackend::Lexicon,
            Some(other) => {
                warn!(
                    value = other,
                    "Unknown COMPASS_SENTIMENT, expected onnx or lexicon; using onnx"
                );
                SentimentBackend::Onnx
            }
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    pub sentiment_backend: SentimentBackend,
    /// Directory containing the ONNX model files
    pub model_dir: PathBuf,
    pub bind: String,
    pub port: u16,
    /// Comments annotated concurrently within one batch
    pub concurrency: usize,
    /// Largest accepted batch
    pub max_batch: usize,
}

impl Config {
    /// Load configuration from environment variables. Every setting has a default.
    pub fn load() -> Result<Self> {
        let sentiment_backend =
            SentimentBackend::from_env_value(env::var("COMPASS_SENTIMENT").ok().as_deref());

        let model_dir = env::var("COMPASS_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| crate::sentiment::download::default_model_dir());

        Ok(Self {
            sentiment_backend,
            model_dir,
            bind: env::var("COMPASS_BIND").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_env("COMPASS_PORT", 8000)?,
            concurrency: parse_env("COMPASS_CONCURRENCY", DEFAULT_CONCURRENCY)?.max(1),
            max_batch: parse_env("COMPASS_MAX_BATCH", DEFAULT_MAX_BATCH)?,
        })
    }

    /// Whether the ONNX model should be loaded and is present on disk.
    pub fn model_available(&self) -> bool {
        self.sentiment_backend == SentimentBackend::Onnx
            && crate::sentiment::download::model_files_present(&self.model_dir)
    }
}

/// Parse a numeric env var, using `default` when unset.
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a number, got {raw:?}")),
        Err(_) => Ok(default),
    }
}
