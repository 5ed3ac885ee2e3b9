// Batch analysis pipeline: annotate every comment -> generate ideas -> summarize.
//
// Annotation fans out across comments with a bounded number in flight.
// `buffered` (not `buffer_unordered`) keeps results in input order, which
// the output contract requires. Idea generation waits for the full batch.

use std::sync::Arc;
use std::time::Instant;

use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use super::annotate::Annotator;
use super::error::{AnalysisError, Result};
use crate::comments::models::{AnalysisResult, AnalyzeRequest, AnnotatedComment, RawComment};
use crate::config::{Config, SentimentBackend};
use crate::language::detect::WhatlangDetector;
use crate::sentiment::onnx::OnnxPolarityClassifier;
use crate::sentiment::traits::{PolarityClassifier, UnavailableClassifier};
use crate::scoring::ideas::generate_content_ideas;
use crate::stats::summarize;

/// Default number of comments annotated concurrently.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Default cap on comments per batch.
pub const DEFAULT_MAX_BATCH: usize = 5000;

/// Runs the whole pipeline over a batch. Cheap to clone; the annotator
/// is shared read-only.
#[derive(Clone)]
pub struct Analyzer {
    annotator: Arc<Annotator>,
    concurrency: usize,
    max_batch: usize,
}

impl Analyzer {
    pub fn new(annotator: Arc<Annotator>) -> Self {
        Self {
            annotator,
            concurrency: DEFAULT_CONCURRENCY,
            max_batch: DEFAULT_MAX_BATCH,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_max_batch(mut self, max_batch: usize) -> Self {
        self.max_batch = max_batch;
        self
    }

    pub fn max_batch(&self) -> usize {
        self.max_batch
    }

    /// Load capabilities per the configuration. Called once at startup.
    ///
    /// A missing model is not fatal: the service runs with an always-failing
    /// classifier so every comment takes the lexicon path.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let classifier: Arc<dyn PolarityClassifier> = match config.sentiment_backend {
            SentimentBackend::Lexicon => {
                info!("Sentiment backend: lexicon only");
                Arc::new(UnavailableClassifier)
            }
            SentimentBackend::Onnx if config.model_available() => {
                info!(model_dir = %config.model_dir.display(), "Sentiment backend: ONNX");
                Arc::new(OnnxPolarityClassifier::load(&config.model_dir)?)
            }
            SentimentBackend::Onnx => {
                warn!(
                    model_dir = %config.model_dir.display(),
                    "Sentiment model not found; run `comment-compass download-model`. Using lexicon fallback"
                );
                Arc::new(UnavailableClassifier)
            }
        };

        let annotator = Annotator::new(Arc::new(WhatlangDetector), classifier)?;

        Ok(Self::new(Arc::new(annotator))
            .with_concurrency(config.concurrency)
            .with_max_batch(config.max_batch))
    }

    /// Parse a JSON request body and analyze it.
    pub async fn analyze_json(&self, body: &[u8]) -> Result<AnalysisResult> {
        let request: AnalyzeRequest = serde_json::from_slice(body)?;
        self.analyze(request.comments).await
    }

    /// Analyze a batch. Output comments match the input one-to-one, in order.
    pub async fn analyze(&self, comments: Vec<RawComment>) -> Result<AnalysisResult> {
        if comments.len() > self.max_batch {
            return Err(AnalysisError::BatchTooLarge {
                size: comments.len(),
                max: self.max_batch,
            });
        }

        let started = Instant::now();
        let batch_size = comments.len();

        let annotated: Vec<AnnotatedComment> = stream::iter(comments)
            .map(|comment| {
                let annotator = Arc::clone(&self.annotator);
                async move { annotator.annotate(comment).await }
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        let content_ideas = generate_content_ideas(&annotated);
        let stats = summarize(&annotated);

        info!(
            comments = batch_size,
            ideas = content_ideas.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Analyzed comment batch"
        );

        Ok(AnalysisResult {
            comments: annotated,
            content_ideas,
            stats,
        })
    }
}
