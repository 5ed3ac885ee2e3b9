// Language identification trait.
//
// Detection is cheap and CPU-bound, so unlike the polarity classifier this
// is a plain synchronous call. Failures are absorbed by the annotator.

use anyhow::Result;

/// Trait for guessing the language of a text.
pub trait LanguageDetector: Send + Sync {
    /// Return an ISO language code for the text, or an error when the text
    /// carries no usable signal.
    fn detect(&self, text: &str) -> Result<String>;
}
