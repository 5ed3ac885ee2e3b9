// Local ONNX polarity classifier using DistilBERT fine-tuned on SST-2.
//
// Runs entirely on the local CPU: no API calls, no network dependency.
// Model: Xenova/distilbert-base-uncased-finetuned-sst-2-english (quantized)
// Output: 2 logits per text (NEGATIVE, POSITIVE), converted with softmax.

use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use async_trait::async_trait;
use ort::session::Session;
use ort::value::Tensor;
use tokenizers::Tokenizer;
use tracing::debug;

use super::download::{MODEL_FILE, TOKENIZER_FILE};
use super::traits::{Polarity, PolarityClassifier};

/// Labels output by the SST-2 head, in the order the model returns them.
const LABEL_ORDER: [&str; 2] = ["NEGATIVE", "POSITIVE"];

/// DistilBERT's positional embedding limit.
const MAX_SEQ_LEN: usize = 512;

/// BERT [PAD] token id.
const PAD_ID: i64 = 0;

/// Local ONNX-based polarity classifier. The session sits behind
/// Arc<Mutex> because `Session::run` takes `&mut self` and inference runs
/// on spawn_blocking threads.
pub struct OnnxPolarityClassifier {
    session: Arc<Mutex<Session>>,
    tokenizer: Arc<Tokenizer>,
}

impl OnnxPolarityClassifier {
    /// Load the ONNX model and tokenizer from the given directory.
    ///
    /// Call `download::download_model()` first if they don't exist.
    pub fn load(model_dir: &Path) -> Result<Self> {
        let model_path = model_dir.join(MODEL_FILE);
        let tokenizer_path = model_dir.join(TOKENIZER_FILE);

        if !model_path.exists() {
            anyhow::bail!(
                "Model file not found: {}\nRun `comment-compass download-model` to download it.",
                model_path.display()
            );
        }
        if !tokenizer_path.exists() {
            anyhow::bail!(
                "Tokenizer file not found: {}\nRun `comment-compass download-model` to download it.",
                tokenizer_path.display()
            );
        }

        let session = Session::builder()
            .context("Failed to create ONNX session builder")?
            .commit_from_file(&model_path)
            .with_context(|| format!("Failed to load ONNX model from {}", model_path.display()))?;

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| anyhow::anyhow!("Failed to load tokenizer: {}", e))?;

        debug!("Loaded ONNX sentiment model from {}", model_dir.display());

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            tokenizer: Arc::new(tokenizer),
        })
    }
}

#[async_trait]
impl PolarityClassifier for OnnxPolarityClassifier {
    async fn classify(&self, text: &str) -> Result<Polarity> {
        let mut results = self.classify_batch(&[text.to_string()]).await?;
        results
            .pop()
            .context("Sentiment model returned no result")
    }

    /// Batch inference: tokenize all texts, run one forward pass, softmax
    /// the logits and take the argmax label per row.
    async fn classify_batch(&self, texts: &[String]) -> Result<Vec<Polarity>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        if texts.iter().any(|t| t.trim().is_empty()) {
            anyhow::bail!("Cannot classify empty text");
        }

        let session = Arc::clone(&self.session);
        let tokenizer = Arc::clone(&self.tokenizer);
        let texts = texts.to_vec();

        tokio::task::spawn_blocking(move || {
            let encodings: Vec<_> = texts
                .iter()
                .map(|t| {
                    tokenizer
                        .encode(t.as_str(), true)
                        .map_err(|e| anyhow::anyhow!("Tokenization failed: {}", e))
                })
                .collect::<Result<Vec<_>>>()?;

            let batch_size = encodings.len();
            let max_len = encodings
                .iter()
                .map(|e| e.get_ids().len().min(MAX_SEQ_LEN))
                .max()
                .unwrap_or(0);

            // Shape: [batch_size, max_len], right-padded
            let mut input_ids_flat: Vec<i64> = Vec::with_capacity(batch_size * max_len);
            let mut attention_mask_flat: Vec<i64> = Vec::with_capacity(batch_size * max_len);

            for enc in &encodings {
                let ids = enc.get_ids();
                let mask = enc.get_attention_mask();
                let seq_len = ids.len().min(MAX_SEQ_LEN);

                input_ids_flat.extend(ids[..seq_len].iter().map(|&id| id as i64));
                attention_mask_flat.extend(mask[..seq_len].iter().map(|&m| m as i64));

                for _ in seq_len..max_len {
                    input_ids_flat.push(PAD_ID);
                    attention_mask_flat.push(0);
                }
            }

            let shape = [batch_size as i64, max_len as i64];

            let input_ids_tensor = Tensor::from_array((shape, input_ids_flat))
                .context("Failed to create input_ids tensor")?;
            let attention_mask_tensor = Tensor::from_array((shape, attention_mask_flat))
                .context("Failed to create attention_mask tensor")?;

            let logits_data = {
                let mut session = session
                    .lock()
                    .map_err(|e| anyhow::anyhow!("Session lock poisoned: {}", e))?;

                let outputs = session
                    .run(ort::inputs! {
                        "input_ids" => input_ids_tensor,
                        "attention_mask" => attention_mask_tensor
                    })
                    .context("ONNX inference failed")?;

                // Output shape: [batch_size, 2], raw logits
                let (_out_shape, data) = outputs[0]
                    .try_extract_tensor::<f32>()
                    .context("Failed to extract output tensor")?;

                data.to_vec()
            };

            if logits_data.len() != batch_size * LABEL_ORDER.len() {
                anyhow::bail!(
                    "Unexpected output size {} for batch of {}",
                    logits_data.len(),
                    batch_size
                );
            }

            let mut results = Vec::with_capacity(batch_size);
            for (i, text) in texts.iter().enumerate() {
                let offset = i * LABEL_ORDER.len();
                let row: Vec<f64> = logits_data[offset..offset + LABEL_ORDER.len()]
                    .iter()
                    .map(|&l| l as f64)
                    .collect();

                let polarity = polarity_from_logits(&row);

                debug!(
                    label = %polarity.label,
                    score = polarity.score,
                    text_preview = %crate::output::truncate_chars(text, 50),
                    "ONNX classified text"
                );

                results.push(polarity);
            }

            Ok(results)
        })
        .await
        .context("spawn_blocking panicked")?
    }
}

/// Numerically stable softmax.
fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|&l| (l - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.iter().map(|&e| e / sum).collect()
}

/// Pick the most probable label from one row of logits.
fn polarity_from_logits(logits: &[f64]) -> Polarity {
    let probs = softmax(logits);
    let (best, score) = probs
        .iter()
        .copied()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |acc, (i, p)| if p > acc.1 { (i, p) } else { acc });

    Polarity {
        label: LABEL_ORDER.get(best).copied().unwrap_or("NEUTRAL").to_string(),
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_softmax_sums_to_one() {
        let probs = softmax(&[1.5, -2.0]);
        let sum: f64 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_softmax_equal_logits() {
        let probs = softmax(&[3.0, 3.0]);
        assert!((probs[0] - 0.5).abs() < 1e-10);
        assert!((probs[1] - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_softmax_large_logits_do_not_overflow() {
        let probs = softmax(&[1000.0, 0.0]);
        assert!((probs[0] - 1.0).abs() < 1e-10);
        assert!(probs[1].is_finite());
    }

    #[test]
    fn test_polarity_positive_logits() {
        let p = polarity_from_logits(&[-3.1, 3.4]);
        assert_eq!(p.label, "POSITIVE");
        assert!(p.score > 0.99);
    }

    #[test]
    fn test_polarity_negative_logits() {
        let p = polarity_from_logits(&[4.0, -4.0]);
        assert_eq!(p.label, "NEGATIVE");
        assert!(p.score > 0.99);
    }

    #[test]
    fn test_load_missing_model_fails() {
        let dir = std::env::temp_dir().join("comment-compass-test-no-model");
        assert!(OnnxPolarityClassifier::load(&dir).is_err());
    }
}
