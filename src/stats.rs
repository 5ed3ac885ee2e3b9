// Batch summary: sentiment, category, language and keyword counts.
//
// Computed after annotation so dashboards get per-batch totals without
// re-walking every comment.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::comments::models::{AnnotatedComment, Sentiment, Tag};

/// Keywords reported per batch.
pub const TOP_KEYWORDS: usize = 20;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub questions: usize,
    pub praise: usize,
    pub suggestions: usize,
    pub complaints: usize,
    pub spam: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchStats {
    pub sentiment: SentimentCounts,
    pub categories: CategoryCounts,
    /// Language code -> comment count, sorted by code
    pub languages: BTreeMap<String, usize>,
    /// Most frequent keywords, count descending, ties in first-seen order
    pub keywords: Vec<KeywordCount>,
}

/// Summarize an annotated batch.
pub fn summarize(comments: &[AnnotatedComment]) -> BatchStats {
    let mut stats = BatchStats::default();
    let mut keyword_index: HashMap<&str, usize> = HashMap::new();

    for c in comments {
        let analysis = &c.analysis;

        match analysis.sentiment {
            Sentiment::Positive => stats.sentiment.positive += 1,
            Sentiment::Neutral => stats.sentiment.neutral += 1,
            Sentiment::Negative => stats.sentiment.negative += 1,
        }

        for tag in &analysis.tags {
            match tag {
                Tag::Question => stats.categories.questions += 1,
                Tag::Praise => stats.categories.praise += 1,
                Tag::Suggestion => stats.categories.suggestions += 1,
                Tag::Complaint => stats.categories.complaints += 1,
                Tag::Spam => stats.categories.spam += 1,
            }
        }

        *stats
            .languages
            .entry(analysis.language.clone())
            .or_insert(0) += 1;

        for keyword in &analysis.keywords {
            match keyword_index.get(keyword.as_str()) {
                Some(&i) => stats.keywords[i].count += 1,
                None => {
                    keyword_index.insert(keyword.as_str(), stats.keywords.len());
                    stats.keywords.push(KeywordCount {
                        word: keyword.clone(),
                        count: 1,
                    });
                }
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts
    stats.keywords.sort_by(|a, b| b.count.cmp(&a.count));
    stats.keywords.truncate(TOP_KEYWORDS);
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comments::models::{Annotation, RawComment};

    fn annotated(sentiment: Sentiment, tags: Vec<Tag>, lang: &str, kws: &[&str]) -> AnnotatedComment {
        AnnotatedComment {
            comment: RawComment {
                id: "c".to_string(),
                author: "a".to_string(),
                text: String::new(),
                timestamp: None,
                like_count: 0,
                is_reply: false,
                parent_id: None,
            },
            analysis: Annotation {
                language: lang.to_string(),
                sentiment,
                tags,
                keywords: kws.iter().map(|k| k.to_string()).collect(),
                relevance: 0.5,
            },
        }
    }

    #[test]
    fn test_empty_batch() {
        assert_eq!(summarize(&[]), BatchStats::default());
    }

    #[test]
    fn test_counts() {
        let batch = vec![
            annotated(Sentiment::Positive, vec![Tag::Praise], "en", &["camera", "lens"]),
            annotated(Sentiment::Positive, vec![Tag::Question, Tag::Suggestion], "en", &["lens"]),
            annotated(Sentiment::Negative, vec![Tag::Complaint], "es", &["audio"]),
        ];

        let stats = summarize(&batch);
        assert_eq!(stats.sentiment.positive, 2);
        assert_eq!(stats.sentiment.negative, 1);
        assert_eq!(stats.sentiment.neutral, 0);
        assert_eq!(stats.categories.praise, 1);
        assert_eq!(stats.categories.questions, 1);
        assert_eq!(stats.categories.suggestions, 1);
        assert_eq!(stats.categories.complaints, 1);
        assert_eq!(stats.categories.spam, 0);
        assert_eq!(stats.languages["en"], 2);
        assert_eq!(stats.languages["es"], 1);

        let words: Vec<(&str, usize)> = stats
            .keywords
            .iter()
            .map(|k| (k.word.as_str(), k.count))
            .collect();
        assert_eq!(words, vec![("lens", 2), ("camera", 1), ("audio", 1)]);
    }

    #[test]
    fn test_keywords_capped() {
        let kws: Vec<String> = (0..30).map(|i| format!("word{i}")).collect();
        let batch: Vec<AnnotatedComment> = kws
            .chunks(5)
            .map(|chunk| {
                let refs: Vec<&str> = chunk.iter().map(|s| s.as_str()).collect();
                annotated(Sentiment::Neutral, vec![], "en", &refs)
            })
            .collect();
        let stats = summarize(&batch);
        assert_eq!(stats.keywords.len(), TOP_KEYWORDS);
        assert_eq!(stats.keywords[0].word, "word0");
    }
}
