// Rule-based polarity scorer used whenever the model classifier fails.
//
// Counts how many words from each list appear anywhere in the lowercased
// text (substring match, each list word counted at most once) and picks
// the side with more hits. Ties, including 0-0, are neutral.

use crate::comments::models::Sentiment;

const POSITIVE_WORDS: [&str; 8] = [
    "good", "great", "awesome", "excellent", "love", "like", "best", "amazing",
];

const NEGATIVE_WORDS: [&str; 8] = [
    "bad", "terrible", "awful", "worst", "hate", "dislike", "poor", "horrible",
];

/// Lexicon sentiment scorer. Infallible over any input.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn score(&self, text: &str) -> Sentiment {
        let lower = text.to_lowercase();
        let positive = count_present(&POSITIVE_WORDS, &lower);
        let negative = count_present(&NEGATIVE_WORDS, &lower);

        match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        }
    }
}

fn count_present(words: &[&str], lower: &str) -> usize {
    words.iter().filter(|w| lower.contains(*w)).count()
}
