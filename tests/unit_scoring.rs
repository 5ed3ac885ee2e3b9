// Unit tests for relevance scoring and content idea generation.
//
// Tests isolated pure functions: compute_relevance boundary conditions and
// generate_content_ideas partitioning, capping, ordering and text cleanup.

use comment_compass::comments::models::{
    AnnotatedComment, Annotation, RawComment, Sentiment, Tag,
};
use comment_compass::scoring::ideas::{generate_content_ideas, MAX_IDEAS, MAX_PER_KIND};
use comment_compass::scoring::relevance::{compute_relevance, RelevanceWeights};

fn raw(id: &str, author: &str, text: &str, likes: u64) -> RawComment {
    RawComment {
        id: id.to_string(),
        author: author.to_string(),
        text: text.to_string(),
        timestamp: None,
        like_count: likes,
        is_reply: false,
        parent_id: None,
    }
}

fn tagged(id: &str, text: &str, likes: u64, tags: Vec<Tag>) -> AnnotatedComment {
    AnnotatedComment {
        comment: raw(id, &format!("user-{id}"), text, likes),
        analysis: Annotation {
            language: "en".to_string(),
            sentiment: Sentiment::Neutral,
            tags,
            keywords: vec![],
            relevance: 0.5,
        },
    }
}

// ============================================================
// compute_relevance: boundary conditions
// ============================================================

#[test]
fn relevance_popular_short() {
    let score = compute_relevance(&raw("1", "a", "ok", 150), &RelevanceWeights::default());
    assert!((score - 0.7).abs() < 1e-9, "Expected 0.7, got {score}");
}

#[test]
fn relevance_long_unpopular() {
    let text = "x".repeat(250);
    let score = compute_relevance(&raw("1", "a", &text, 5), &RelevanceWeights::default());
    assert!((score - 0.6).abs() < 1e-9, "Expected 0.6, got {score}");
}

#[test]
fn relevance_eleven_likes_gets_small_bonus() {
    let text = "exactly twenty chars";
    assert_eq!(text.len(), 20);
    let score = compute_relevance(&raw("1", "a", text, 11), &RelevanceWeights::default());
    assert!((score - 0.6).abs() < 1e-9, "Expected 0.6, got {score}");
}

#[test]
fn relevance_ten_likes_gets_nothing() {
    let text = "exactly twenty chars";
    let score = compute_relevance(&raw("1", "a", text, 10), &RelevanceWeights::default());
    assert!((score - 0.5).abs() < 1e-9, "Expected 0.5, got {score}");
}

#[test]
fn relevance_maximum_is_point_nine() {
    let text = "w".repeat(201);
    let score = compute_relevance(&raw("1", "a", &text, 101), &RelevanceWeights::default());
    assert!((score - 0.9).abs() < 1e-9, "Expected 0.9, got {score}");
}

#[test]
fn relevance_always_in_unit_interval() {
    let weights = RelevanceWeights::default();
    for likes in [0, 10, 11, 100, 101, u64::MAX] {
        for len in [0, 19, 20, 200, 201, 5000] {
            let text = "a".repeat(len);
            let score = compute_relevance(&raw("1", "a", &text, likes), &weights);
            assert!((0.0..=1.0).contains(&score), "{likes}/{len} -> {score}");
        }
    }
}

// ============================================================
// generate_content_ideas: partitioning and caps
// ============================================================

#[test]
fn only_top_five_questions_by_likes() {
    let batch: Vec<AnnotatedComment> = (0..6)
        .map(|i| tagged(&format!("q{i}"), &format!("question {i}?"), i * 3, vec![Tag::Question]))
        .collect();

    let ideas = generate_content_ideas(&batch);
    assert_eq!(ideas.len(), MAX_PER_KIND);
    // q0 has the fewest likes and must be dropped
    assert!(ideas.iter().all(|i| i.source != "Question from user-q0"));
}

#[test]
fn two_candidates_two_ideas() {
    let batch = vec![
        tagged("a", "how does this work?", 3, vec![Tag::Question]),
        tagged("b", "you should try vlogging", 1, vec![Tag::Suggestion]),
        tagged("c", "nice", 100, vec![Tag::Praise]),
    ];
    let ideas = generate_content_ideas(&batch);
    assert_eq!(ideas.len(), 2);
}

#[test]
fn capped_at_ten_and_sorted() {
    let mut batch = Vec::new();
    for i in 0..8u64 {
        batch.push(tagged(&format!("q{i}"), "what?", i * 7, vec![Tag::Question]));
        batch.push(tagged(&format!("s{i}"), "you should try x", i * 5, vec![Tag::Suggestion]));
    }

    let ideas = generate_content_ideas(&batch);
    assert_eq!(ideas.len(), MAX_IDEAS);
    for pair in ideas.windows(2) {
        assert!(pair[0].relevance >= pair[1].relevance);
    }
    assert!(ideas.iter().all(|i| (0.0..=1.0).contains(&i.relevance)));
}

#[test]
fn comment_tagged_both_contributes_twice() {
    let batch = vec![tagged(
        "x",
        "could you please make a video on lenses? you should try it",
        20,
        vec![Tag::Question, Tag::Suggestion],
    )];
    let ideas = generate_content_ideas(&batch);
    assert_eq!(ideas.len(), 2);
    assert_eq!(ideas[0].source, "Question from user-x");
    assert_eq!(ideas[1].source, "Suggestion from user-x");
}

#[test]
fn equal_relevance_keeps_questions_first() {
    let batch = vec![
        tagged("s", "you should try streaming", 60, vec![Tag::Suggestion]),
        tagged("q", "why?", 80, vec![Tag::Question]),
    ];
    // both clamp to 1.0
    let ideas = generate_content_ideas(&batch);
    assert_eq!(ideas[0].source, "Question from user-q");
    assert_eq!(ideas[1].source, "Suggestion from user-s");
}

#[test]
fn like_ties_keep_input_order() {
    let batch: Vec<AnnotatedComment> = (0..7)
        .map(|i| tagged(&format!("q{i}"), "which camera?", 5, vec![Tag::Question]))
        .collect();
    let ideas = generate_content_ideas(&batch);
    let sources: Vec<&str> = ideas.iter().map(|i| i.source.as_str()).collect();
    assert_eq!(
        sources,
        vec![
            "Question from user-q0",
            "Question from user-q1",
            "Question from user-q2",
            "Question from user-q3",
            "Question from user-q4",
        ]
    );
}

// ============================================================
// generate_content_ideas: idea text
// ============================================================

#[test]
fn question_text_is_trimmed_and_loses_one_question_mark() {
    let batch = vec![tagged("q", "   What lens do you use??  ", 0, vec![Tag::Question])];
    let ideas = generate_content_ideas(&batch);
    assert_eq!(ideas[0].idea, "Answer: What lens do you use?");
    assert!((ideas[0].relevance - 0.5).abs() < 1e-9);
}

#[test]
fn suggestion_text_is_verbatim() {
    let text = "  you should try a night shoot ";
    let batch = vec![tagged("s", text, 30, vec![Tag::Suggestion])];
    let ideas = generate_content_ideas(&batch);
    assert_eq!(ideas[0].idea, text);
    assert!((ideas[0].relevance - 0.8).abs() < 1e-9);
}
