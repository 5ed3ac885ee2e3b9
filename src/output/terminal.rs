// Colored terminal output for batch analysis results.

use colored::{ColoredString, Colorize};

use crate::comments::models::{AnalysisResult, Sentiment};

use super::truncate_chars;

/// Display a full analysis report: annotated comments, ideas, summary.
pub fn display_analysis(result: &AnalysisResult) {
    if result.comments.is_empty() {
        println!("No comments in batch.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Comment Analysis ({} comments) ===", result.comments.len()).bold()
    );
    println!();

    println!(
        "  {:<16} {:<18} {:<5} {:<9} {:>5}  {}",
        "Id".dimmed(),
        "Author".dimmed(),
        "Lang".dimmed(),
        "Sentiment".dimmed(),
        "Rel".dimmed(),
        "Tags".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for c in &result.comments {
        let tags: Vec<&str> = c.analysis.tags.iter().map(|t| t.as_str()).collect();
        println!(
            "  {:<16} {:<18} {:<5} {:<9} {:>5.2}  {}",
            truncate_chars(&c.comment.id, 13),
            truncate_chars(&c.comment.author, 15),
            c.analysis.language,
            colorize_sentiment(c.analysis.sentiment),
            c.analysis.relevance,
            tags.join(", "),
        );
        println!("      {}", truncate_chars(&c.comment.text, 70).dimmed());
        if !c.analysis.keywords.is_empty() {
            println!("      Keywords: {}", c.analysis.keywords.join(", ").dimmed());
        }
    }

    display_ideas(result);
    display_summary(result);
}

fn display_ideas(result: &AnalysisResult) {
    println!();
    if result.content_ideas.is_empty() {
        println!("{}", "No content ideas (no questions or suggestions found).".dimmed());
        return;
    }

    println!("{}", "=== Content Ideas ===".bold());
    println!();
    for (i, idea) in result.content_ideas.iter().enumerate() {
        println!(
            "  {:>2}. {} {}",
            i + 1,
            format!("[{:.2}]", idea.relevance).bright_green(),
            truncate_chars(&idea.idea, 80).bold(),
        );
        println!("      {}", idea.source.dimmed());
    }
}

fn display_summary(result: &AnalysisResult) {
    let stats = &result.stats;

    println!();
    println!("{}", "=== Summary ===".bold());
    println!(
        "  Sentiment: {} positive, {} neutral, {} negative",
        stats.sentiment.positive.to_string().green(),
        stats.sentiment.neutral,
        stats.sentiment.negative.to_string().red(),
    );
    println!(
        "  Categories: {} questions, {} praise, {} suggestions, {} complaints, {} spam",
        stats.categories.questions,
        stats.categories.praise,
        stats.categories.suggestions,
        stats.categories.complaints,
        stats.categories.spam,
    );

    let languages: Vec<String> = stats
        .languages
        .iter()
        .map(|(lang, count)| format!("{lang} ({count})"))
        .collect();
    println!("  Languages: {}", languages.join(", "));

    if !stats.keywords.is_empty() {
        let keywords: Vec<String> = stats
            .keywords
            .iter()
            .take(10)
            .map(|k| format!("{} ({})", k.word, k.count))
            .collect();
        println!("  Top keywords: {}", keywords.join(", ").dimmed());
    }
    println!();
}

fn colorize_sentiment(sentiment: Sentiment) -> ColoredString {
    let label = format!("{:<9}", sentiment.as_str());
    match sentiment {
        Sentiment::Positive => label.green(),
        Sentiment::Negative => label.red(),
        Sentiment::Neutral => label.normal(),
    }
}
