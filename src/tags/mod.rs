// Tag classification: declarative pattern table plus the multi-label matcher.

pub mod classifier;
pub mod patterns;
