// Scoring: per-comment relevance and batch-level content idea ranking.

pub mod ideas;
pub mod relevance;
