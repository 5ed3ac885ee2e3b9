// Pipeline: per-comment annotation and batch orchestration.

pub mod analyze;
pub mod annotate;
pub mod error;
