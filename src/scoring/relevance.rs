// Comment relevance heuristic.
//
// A base score nudged by engagement and length, then clamped to [0, 1].
// Each adjustment pair is an if/else: a comment gets at most one like
// bonus and at most one length adjustment.

use crate::comments::models::RawComment;

/// Configurable weights for the relevance formula.
pub struct RelevanceWeights {
    /// Starting score before adjustments (default 0.5)
    pub base: f64,
    /// Likes above this earn `high_like_bonus` (default 100)
    pub high_like_threshold: u64,
    pub high_like_bonus: f64,
    /// Likes above this (but not above the high threshold) earn `like_bonus` (default 10)
    pub like_threshold: u64,
    pub like_bonus: f64,
    /// Texts longer than this many characters earn `long_text_bonus` (default 200)
    pub long_text_chars: usize,
    pub long_text_bonus: f64,
    /// Texts shorter than this many characters lose `short_text_penalty` (default 20)
    pub short_text_chars: usize,
    pub short_text_penalty: f64,
}

impl Default for RelevanceWeights {
    fn default() -> Self {
        Self {
            base: 0.5,
            high_like_threshold: 100,
            high_like_bonus: 0.3,
            like_threshold: 10,
            like_bonus: 0.1,
            long_text_chars: 200,
            long_text_bonus: 0.1,
            short_text_chars: 20,
            short_text_penalty: 0.1,
        }
    }
}

/// Compute a comment's relevance. Pure and total; always within [0.0, 1.0].
pub fn compute_relevance(comment: &RawComment, weights: &RelevanceWeights) -> f64 {
    let mut score = weights.base;

    if comment.like_count > weights.high_like_threshold {
        score += weights.high_like_bonus;
    } else if comment.like_count > weights.like_threshold {
        score += weights.like_bonus;
    }

    let length = comment.text.chars().count();
    if length > weights.long_text_chars {
        score += weights.long_text_bonus;
    } else if length < weights.short_text_chars {
        score -= weights.short_text_penalty;
    }

    score.clamp(0.0, 1.0)
}
