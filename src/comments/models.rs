// Data models: the records that flow through the annotation pipeline.
//
// Field names serialize in camelCase to match the wire format the creator
// dashboard and browser extension already speak (likeCount, isReply, ...).

use serde::{Deserialize, Serialize};

use crate::stats::BatchStats;

/// A comment as received from the platform. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawComment {
    /// Unique within a batch
    pub id: String,
    pub author: String,
    pub text: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub like_count: u64,
    #[serde(default)]
    pub is_reply: bool,
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// Request body for a batch analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub comments: Vec<RawComment>,
}

/// Polarity of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Map a classifier label onto a sentiment. Unknown labels are neutral.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("positive") {
            Sentiment::Positive
        } else if label.eq_ignore_ascii_case("negative") {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intent categories a comment can carry. The declaration order is the
/// order tags appear in an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Question,
    Praise,
    Suggestion,
    Complaint,
    Spam,
}

impl Tag {
    pub const ALL: [Tag; 5] = [
        Tag::Question,
        Tag::Praise,
        Tag::Suggestion,
        Tag::Complaint,
        Tag::Spam,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Question => "question",
            Tag::Praise => "praise",
            Tag::Suggestion => "suggestion",
            Tag::Complaint => "complaint",
            Tag::Spam => "spam",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything derived from a single comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// ISO 639-1 code where one exists, "en" when detection fails
    pub language: String,
    pub sentiment: Sentiment,
    /// No duplicates, in `Tag` declaration order
    pub tags: Vec<Tag>,
    /// At most 5 entries
    pub keywords: Vec<String>,
    /// Always within [0.0, 1.0]
    pub relevance: f64,
}

impl Annotation {
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }
}

/// A raw comment plus its annotation. One per input comment, same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedComment {
    #[serde(flatten)]
    pub comment: RawComment,
    pub analysis: Annotation,
}

/// A suggestion for future content, derived from one comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentIdea {
    pub idea: String,
    /// Human-readable provenance, e.g. "Question from alice"
    pub source: String,
    pub relevance: f64,
}

/// The terminal output of one batch analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub comments: Vec<AnnotatedComment>,
    /// At most 10, relevance non-increasing
    pub content_ideas: Vec<ContentIdea>,
    pub stats: BatchStats,
}
