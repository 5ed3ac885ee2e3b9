// Polarity classifier trait: the swap-ready abstraction.
//
// The default implementation runs a local ONNX sentiment model. Any error
// from a classifier is absorbed by the annotator, which falls back to the
// lexicon scorer for that comment.

use anyhow::Result;
use async_trait::async_trait;

/// The raw output of a polarity classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Polarity {
    /// Model label, e.g. "POSITIVE" or "NEGATIVE"
    pub label: String,
    /// Confidence for the label, 0.0 to 1.0
    pub score: f64,
}

/// Stand-in used when no model is loaded. Every call fails, so every
/// comment is scored by the lexicon fallback.
pub struct UnavailableClassifier;

#[async_trait]
impl PolarityClassifier for UnavailableClassifier {
    async fn classify(&self, _text: &str) -> Result<Polarity> {
        anyhow::bail!("No sentiment model loaded")
    }
}

/// Trait for classifying text polarity. Async because inference is
/// offloaded from the request runtime.
#[async_trait]
pub trait PolarityClassifier: Send + Sync {
    /// Classify a single text.
    async fn classify(&self, text: &str) -> Result<Polarity>;

    /// Classify multiple texts, returning results in the same order.
    /// Default implementation calls classify sequentially.
    async fn classify_batch(&self, texts: &[String]) -> Result<Vec<Polarity>> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.classify(text).await?);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unavailable_classifier_always_fails() {
        assert!(UnavailableClassifier.classify("great video").await.is_err());
        assert!(UnavailableClassifier.classify("").await.is_err());
    }

    #[tokio::test]
    async fn test_batch_propagates_failure() {
        let texts = vec!["a".to_string(), "b".to_string()];
        assert!(UnavailableClassifier.classify_batch(&texts).await.is_err());
    }
}
