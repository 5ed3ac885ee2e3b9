// Keyword extraction for single comments.
//
// Primary path: the `keyword_extraction` tokenizer with the NLTK English
// list from `stop-words`, keeping lowercase alphanumeric tokens longer than two
// characters. If the stopword resource is unavailable the extractor drops
// to a Unicode word-boundary scan that keeps tokens longer than three
// characters. Either way the first MAX_KEYWORDS distinct tokens in scan
// order are returned.

use std::collections::HashSet;

use anyhow::{Context, Result};
use keyword_extraction::tokenizer::Tokenizer;
use regex::Regex;
use stop_words::{get, LANGUAGE};
use tracing::debug;

/// Upper bound on keywords per comment.
pub const MAX_KEYWORDS: usize = 5;

/// Reduces a comment to a handful of salient terms.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stop_words: Vec<String>,
    stop_set: HashSet<String>,
    word_re: Regex,
}

impl KeywordExtractor {
    /// Build an extractor with the NLTK English stopword list.
    pub fn new() -> Result<Self> {
        Self::with_stop_words(get(LANGUAGE::English))
    }

    /// Build an extractor with an explicit stopword list. An empty list
    /// means the stopword resource is unavailable.
    pub fn with_stop_words(stop_words: Vec<String>) -> Result<Self> {
        let stop_set = stop_words.iter().map(|w| w.to_lowercase()).collect();
        let word_re = Regex::new(r"\b\w+\b").context("Invalid word-boundary pattern")?;
        Ok(Self {
            stop_words,
            stop_set,
            word_re,
        })
    }

    /// Up to MAX_KEYWORDS distinct keywords. Never fails; empty or
    /// non-alphabetic input yields an empty list.
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        match self.primary(text) {
            Ok(keywords) => keywords,
            Err(e) => {
                debug!(error = %e, "Keyword tokenizer unavailable, using fallback scan");
                self.fallback(text)
            }
        }
    }

    fn primary(&self, text: &str) -> Result<Vec<String>> {
        if self.stop_set.is_empty() {
            anyhow::bail!("English stopword list is empty");
        }

        let lower = text.to_lowercase();
        let tokens = Tokenizer::new(&lower, &self.stop_words, None).split_into_words();

        Ok(first_distinct(tokens.into_iter().filter(|t| {
            t.chars().count() > 2
                && t.chars().all(char::is_alphanumeric)
                && !self.stop_set.contains(t.as_str())
        })))
    }

    fn fallback(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        first_distinct(
            self.word_re
                .find_iter(&lower)
                .map(|m| m.as_str().to_string())
                .filter(|w| w.chars().count() > 3),
        )
    }
}

/// Deduplicate in scan order and keep the first MAX_KEYWORDS.
fn first_distinct(tokens: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    tokens
        .filter(|t| seen.insert(t.clone()))
        .take(MAX_KEYWORDS)
        .collect()
}
