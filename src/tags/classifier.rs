// Multi-label tag classifier.
//
// Five independent detectors: question (punctuation or lead word) plus one
// regex set per phrase category. A comment may get any subset of tags,
// including none.

use anyhow::{Context, Result};
use regex_lite::Regex;

use super::patterns::{phrase_table, QUESTION_WORDS};
use crate::comments::models::Tag;

/// Compiled tag detectors. Build once and share; matching is read-only.
#[derive(Debug, Clone)]
pub struct TagClassifier {
    rules: Vec<(Tag, Vec<Regex>)>,
}

impl TagClassifier {
    /// Compile the pattern table.
    pub fn new() -> Result<Self> {
        let rules = phrase_table()
            .into_iter()
            .map(|(tag, patterns)| {
                let compiled = patterns
                    .iter()
                    .map(|p| {
                        Regex::new(p).with_context(|| format!("Invalid {tag} pattern: {p}"))
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok((tag, compiled))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// Tags for a comment, in `Tag` declaration order, without duplicates.
    pub fn extract_tags(&self, text: &str) -> Vec<Tag> {
        let lower = text.to_lowercase();
        let mut tags = Vec::new();

        if is_question(text, &lower) {
            tags.push(Tag::Question);
        }

        for (tag, patterns) in &self.rules {
            if patterns.iter().any(|re| re.is_match(&lower)) {
                tags.push(*tag);
            }
        }

        tags
    }
}

fn is_question(text: &str, lower: &str) -> bool {
    text.contains('?') || QUESTION_WORDS.iter().any(|w| lower.contains(w))
}
