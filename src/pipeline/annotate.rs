// Comment annotator: one annotated record per raw comment.
//
// Steps, each with its own fallback:
// 1. Language detection (failure -> "en")
// 2. Polarity classification (failure -> lexicon scorer)
// 3. Tag classification
// 4. Keyword extraction (tokenizer failure -> word-boundary scan)
// 5. Relevance scoring (from the raw comment only)
//
// `annotate` is total: no input, however malformed, makes it fail.

use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::comments::models::{AnnotatedComment, Annotation, RawComment, Sentiment};
use crate::keywords::extractor::KeywordExtractor;
use crate::language::traits::LanguageDetector;
use crate::output::truncate_chars;
use crate::scoring::relevance::{compute_relevance, RelevanceWeights};
use crate::sentiment::lexicon::LexiconScorer;
use crate::sentiment::traits::PolarityClassifier;
use crate::tags::classifier::TagClassifier;

/// Language reported when detection fails.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Holds the loaded capabilities. Built once before serving, then only
/// read; share it behind an `Arc`.
pub struct Annotator {
    language: Arc<dyn LanguageDetector>,
    classifier: Arc<dyn PolarityClassifier>,
    lexicon: LexiconScorer,
    tags: TagClassifier,
    keywords: KeywordExtractor,
    weights: RelevanceWeights,
}

impl Annotator {
    /// Build an annotator around the given external capabilities.
    pub fn new(
        language: Arc<dyn LanguageDetector>,
        classifier: Arc<dyn PolarityClassifier>,
    ) -> Result<Self> {
        Ok(Self {
            language,
            classifier,
            lexicon: LexiconScorer,
            tags: TagClassifier::new()?,
            keywords: KeywordExtractor::new()?,
            weights: RelevanceWeights::default(),
        })
    }

    /// Replace the keyword extractor (e.g. one without a stopword list).
    pub fn with_keyword_extractor(mut self, keywords: KeywordExtractor) -> Self {
        self.keywords = keywords;
        self
    }

    /// Annotate a single comment.
    pub async fn annotate(&self, comment: RawComment) -> AnnotatedComment {
        let text = comment.text.as_str();

        let language = self.detect_language(text);
        let sentiment = self.classify_sentiment(text).await;
        let tags = self.tags.extract_tags(text);
        let keywords = self.keywords.extract_keywords(text);
        let relevance = compute_relevance(&comment, &self.weights);

        AnnotatedComment {
            analysis: Annotation {
                language,
                sentiment,
                tags,
                keywords,
                relevance,
            },
            comment,
        }
    }

    /// Language code for the text, or DEFAULT_LANGUAGE.
    pub fn detect_language(&self, text: &str) -> String {
        match self.language.detect(text) {
            Ok(code) => code,
            Err(e) => {
                debug!(
                    error = %e,
                    text_preview = %truncate_chars(text, 50),
                    "Language detection failed, defaulting to {DEFAULT_LANGUAGE}"
                );
                DEFAULT_LANGUAGE.to_string()
            }
        }
    }

    /// Model polarity, or the lexicon score when the model errors.
    pub async fn classify_sentiment(&self, text: &str) -> Sentiment {
        match self.classifier.classify(text).await {
            Ok(polarity) => Sentiment::from_label(&polarity.label),
            Err(e) => {
                let fallback = self.lexicon.score(text);
                debug!(
                    error = %e,
                    fallback = %fallback,
                    "Sentiment classifier failed, used lexicon"
                );
                fallback
            }
        }
    }
}
