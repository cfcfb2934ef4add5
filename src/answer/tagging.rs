//! Semantic tagging of heading-like lines
//!
//!     A line is lower-cased and tested against an ordered list of keyword groups. The first
//!     group with a match decides the tag; nothing matching falls through to
//!     [SemanticTag::Default]. Keywords match as substrings, so "trend" also hits "trends"
//!     and "end" hits "weekend".
//!
//!     Priority order matters. "This is a trend but also an issue" is an observation, because
//!     the observation group is listed before the issue group.
//!
//!     The tag is display metadata only. How a tag is painted depends on the [palette].

pub mod palette;

pub use palette::{Palette, PaletteChoice, Rgb};

use crate::answer::ast::SemanticTag;
use once_cell::sync::Lazy;
use regex::Regex;

/// Keyword groups in priority order
const KEYWORD_GROUPS: [(SemanticTag, &str); 15] = [
    (SemanticTag::Summary, r"summary|overview|synopsis|gist"),
    (SemanticTag::Observation, r"observation|trend|pattern|noted|seen"),
    (SemanticTag::Issue, r"issue|problem|error|bug|fault|concern"),
    (SemanticTag::Cause, r"cause|reason|factor|root|source|origin"),
    (SemanticTag::Impact, r"impact|effect|result|outcome|consequence"),
    (
        SemanticTag::Recommendation,
        r"recommendation|action|suggestion|proposal|advice|next step",
    ),
    (SemanticTag::Analysis, r"analysis|insight|breakdown|exploration|review"),
    (SemanticTag::Conclusion, r"conclusion|final|closing|wrap-up|end"),
    (SemanticTag::Note, r"note|important|alert|warning|attention"),
    (SemanticTag::Question, r"question|query|doubt"),
    (SemanticTag::Metric, r"data|statistic|number|metric"),
    (SemanticTag::Goal, r"goal|objective|target|aim"),
    (
        SemanticTag::Increase,
        r"increase|rise|growth|gain|improve|improvement",
    ),
    (
        SemanticTag::Decrease,
        r"decrease|drop|decline|fall|loss|reduction",
    ),
    (SemanticTag::Fluctuation, r"fluctuation|change|variance|variation"),
];

static RULES: Lazy<Vec<(SemanticTag, Regex)>> = Lazy::new(|| {
    KEYWORD_GROUPS
        .iter()
        .map(|(tag, pattern)| {
            (
                *tag,
                Regex::new(pattern).expect("keyword group pattern is valid"),
            )
        })
        .collect()
});

/// Classify a line into a semantic tag, first matching keyword group wins
pub fn classify(text: &str) -> SemanticTag {
    let lowered = text.to_lowercase();
    RULES
        .iter()
        .find(|(_, rule)| rule.is_match(&lowered))
        .map(|(tag, _)| *tag)
        .unwrap_or(SemanticTag::Default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_group_wins() {
        assert_eq!(
            classify("This is a trend but also an issue"),
            SemanticTag::Observation
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("EXECUTIVE SUMMARY:"), SemanticTag::Summary);
        assert_eq!(classify("Root Cause:"), SemanticTag::Cause);
    }

    #[test]
    fn test_multi_word_keywords() {
        assert_eq!(classify("Next steps:"), SemanticTag::Recommendation);
        assert_eq!(classify("Wrap-up:"), SemanticTag::Conclusion);
    }

    #[test]
    fn test_falls_through_to_default() {
        assert_eq!(classify("Battery cells:"), SemanticTag::Default);
        assert_eq!(classify(""), SemanticTag::Default);
    }

    #[test]
    fn test_every_group_is_reachable() {
        for (tag, pattern) in KEYWORD_GROUPS {
            let first_keyword = pattern.split('|').next().unwrap();
            assert_eq!(classify(first_keyword), tag, "keyword {first_keyword}");
        }
    }
}
