// Sentiment: trait-based polarity classification with a lexicon fallback.
//
// The PolarityClassifier trait defines the model interface. OnnxPolarityClassifier
// implements it with a local DistilBERT model; LexiconScorer is the infallible
// rule-based scorer used whenever a classifier call fails.

pub mod download;
pub mod lexicon;
pub mod onnx;
pub mod traits;
