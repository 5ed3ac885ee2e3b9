// Content idea generation.
//
// Questions and suggestions are the two comment kinds that point at future
// content. Each partition is ranked by likes (stable, so input order breaks
// ties) and capped, then the merged candidates are ranked by relevance and
// truncated. A comment tagged as both contributes one idea to each side.

use crate::comments::models::{AnnotatedComment, ContentIdea, Tag};

/// Candidates taken from each partition.
pub const MAX_PER_KIND: usize = 5;

/// Ideas returned per batch.
pub const MAX_IDEAS: usize = 10;

/// Derive ranked content ideas from an annotated batch.
///
/// Output is sorted by relevance descending (stable: questions before
/// suggestions at equal relevance) and holds at most MAX_IDEAS entries.
pub fn generate_content_ideas(annotated: &[AnnotatedComment]) -> Vec<ContentIdea> {
    let questions = top_by_likes(annotated, Tag::Question);
    let suggestions = top_by_likes(annotated, Tag::Suggestion);

    let mut ideas: Vec<ContentIdea> = questions
        .into_iter()
        .map(|c| ContentIdea {
            idea: format!("Answer: {}", question_title(&c.comment.text)),
            source: format!("Question from {}", c.comment.author),
            relevance: idea_relevance(c.comment.like_count),
        })
        .chain(suggestions.into_iter().map(|c| ContentIdea {
            idea: c.comment.text.clone(),
            source: format!("Suggestion from {}", c.comment.author),
            relevance: idea_relevance(c.comment.like_count),
        }))
        .collect();

    // sort_by is stable, so equal scores keep question-then-suggestion order
    ideas.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ideas.truncate(MAX_IDEAS);
    ideas
}

/// The MAX_PER_KIND most-liked comments carrying `tag`, ties in input order.
fn top_by_likes(annotated: &[AnnotatedComment], tag: Tag) -> Vec<&AnnotatedComment> {
    let mut tagged: Vec<&AnnotatedComment> = annotated
        .iter()
        .filter(|c| c.analysis.has_tag(tag))
        .collect();
    tagged.sort_by(|a, b| b.comment.like_count.cmp(&a.comment.like_count));
    tagged.truncate(MAX_PER_KIND);
    tagged
}

/// Trim the question and drop a single trailing '?'.
fn question_title(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed.strip_suffix('?').unwrap_or(trimmed)
}

/// 0.5 plus one point per hundred likes, capped at 1.0.
pub fn idea_relevance(like_count: u64) -> f64 {
    (0.5 + like_count as f64 / 100.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_title() {
        assert_eq!(question_title("  How do you edit?  "), "How do you edit");
        assert_eq!(question_title("Why??"), "Why?");
        assert_eq!(question_title("what mic"), "what mic");
        assert_eq!(question_title("?"), "");
    }

    #[test]
    fn test_idea_relevance() {
        assert!((idea_relevance(0) - 0.5).abs() < 1e-9);
        assert!((idea_relevance(25) - 0.75).abs() < 1e-9);
        assert_eq!(idea_relevance(50), 1.0);
        assert_eq!(idea_relevance(10_000), 1.0);
    }

    #[test]
    fn test_empty_batch() {
        assert!(generate_content_ideas(&[]).is_empty());
    }
}
