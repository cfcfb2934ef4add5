//! Semantic tag element
//!
//!     A category attached to callout headings. The tag only selects presentation (colour,
//!     label); it never changes the parsed text. Classification rules live in
//!     [crate::answer::tagging].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Keyword-derived category of a heading-like line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticTag {
    Summary,
    Observation,
    Issue,
    Cause,
    Impact,
    Recommendation,
    Analysis,
    Conclusion,
    Note,
    Question,
    Metric,
    Goal,
    Increase,
    Decrease,
    Fluctuation,
    Default,
}

impl SemanticTag {
    /// Every tag, in classification priority order with `Default` last
    pub const ALL: [SemanticTag; 16] = [
        SemanticTag::Summary,
        SemanticTag::Observation,
        SemanticTag::Issue,
        SemanticTag::Cause,
        SemanticTag::Impact,
        SemanticTag::Recommendation,
        SemanticTag::Analysis,
        SemanticTag::Conclusion,
        SemanticTag::Note,
        SemanticTag::Question,
        SemanticTag::Metric,
        SemanticTag::Goal,
        SemanticTag::Increase,
        SemanticTag::Decrease,
        SemanticTag::Fluctuation,
        SemanticTag::Default,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticTag::Summary => "summary",
            SemanticTag::Observation => "observation",
            SemanticTag::Issue => "issue",
            SemanticTag::Cause => "cause",
            SemanticTag::Impact => "impact",
            SemanticTag::Recommendation => "recommendation",
            SemanticTag::Analysis => "analysis",
            SemanticTag::Conclusion => "conclusion",
            SemanticTag::Note => "note",
            SemanticTag::Question => "question",
            SemanticTag::Metric => "metric",
            SemanticTag::Goal => "goal",
            SemanticTag::Increase => "increase",
            SemanticTag::Decrease => "decrease",
            SemanticTag::Fluctuation => "fluctuation",
            SemanticTag::Default => "default",
        }
    }
}

impl fmt::Display for SemanticTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
