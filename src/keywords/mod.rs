// Keyword extraction: per-comment salient terms.

pub mod extractor;
