// Pattern table for the tag classifier.
//
// Each category is a list of regular expressions matched against the
// lowercased comment. Pattern text must stay byte-for-byte stable, since
// previously stored annotations were tagged with it. Empty alternatives
// such as `(please|)` still require the surrounding spaces.

use crate::comments::models::Tag;

/// Interrogative lead words. Matched as plain substrings, so "show"
/// counts because it contains "how".
pub const QUESTION_WORDS: [&str; 7] = ["how", "what", "when", "where", "why", "who", "which"];

pub const PRAISE_PATTERNS: &[&str] = &[
    r"(great|good|awesome|excellent|amazing|love|best|fantastic) (video|content|job|work)",
    r"(love|like) (your|this) (channel|content|videos)",
    r"(keep|continue) (up|it|the) (good|great) work",
    r"(thank|thanks) (you|for)",
];

pub const SUGGESTION_PATTERNS: &[&str] = &[
    r"(you|please) (should|could|might) (try|make|do|consider)",
    r"(can|would) you (please|) (make|do|try)",
    r"(please|) (make|do) (a|another|more) (video|content) (on|about)",
    r"(would|i'd) (like|love) to see",
];

pub const COMPLAINT_PATTERNS: &[&str] = &[
    r"(don't|do not|didn't|did not) (like|work|agree)",
    r"(this is|that was) (bad|terrible|awful|wrong|incorrect)",
    r"(not|isn't|ain't) (good|working|helpful|useful)",
    r"(disappointed|disappointing|waste of time)",
];

pub const SPAM_PATTERNS: &[&str] = &[
    r"(check|visit|subscribe to) (my|our) (channel|page|profile)",
    r"(follow|add) me",
    r"(click|tap) (the|my) link",
    r"(earn|make) money",
    r"(free|cheap) (followers|subscribers|likes)",
];

/// Phrase patterns per tag. Questions are detected separately (punctuation
/// and lead words) and have no entry here.
pub fn phrase_table() -> [(Tag, &'static [&'static str]); 4] {
    [
        (Tag::Praise, PRAISE_PATTERNS),
        (Tag::Suggestion, SUGGESTION_PATTERNS),
        (Tag::Complaint, COMPLAINT_PATTERNS),
        (Tag::Spam, SPAM_PATTERNS),
    ]
}
