// Batch-fatal errors.
//
// Per-comment failures never reach this type; they are absorbed by the
// annotator's fallbacks. These abort the whole batch with no partial result.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Malformed comment batch: {0}")]
    MalformedInput(String),

    #[error("Batch of {size} comments exceeds the limit of {max}")]
    BatchTooLarge { size: usize, max: usize },

    #[error("Request body exceeds the limit of {limit} bytes")]
    BodyTooLarge { limit: usize },
}

impl AnalysisError {
    /// Generic classification reported to callers alongside the message.
    pub fn kind(&self) -> &'static str {
        "internal_error"
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        AnalysisError::MalformedInput(err.to_string())
    }
}
