//! Reasoning-depth signal.
//!
//! A coarse marker-counting heuristic over the free-text reasoning
//! field. Best-effort only, not validated psychometrics; it never fails
//! analysis and callers should treat it as a bonus signal.

use serde::{Deserialize, Serialize};

use crate::domain::session::Response;

/// Qualifying language suggesting hedged, conditional reasoning.
const QUALIFIER_MARKERS: &[&str] = &[
    "however",
    "although",
    "though",
    "unless",
    "depends",
    "might",
    "perhaps",
    "probably",
    "reluctantly",
];

/// Phrases suggesting the respondent weighed competing considerations.
const TRADEOFF_MARKERS: &[&str] = &[
    "on the other hand",
    "trade-off",
    "tradeoff",
    "outweigh",
    "weigh",
    "versus",
    "at the cost",
    "competing",
    "tension",
    "both sides",
];

/// Coarse grade of reasoning elaboration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasoningDepth {
    Minimal,
    Moderate,
    Elaborated,
}

impl ReasoningDepth {
    /// Returns the human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ReasoningDepth::Minimal => "minimal",
            ReasoningDepth::Moderate => "moderate",
            ReasoningDepth::Elaborated => "elaborated",
        }
    }
}

/// Aggregate heuristic signals over a session's reasoning text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasoningSignal {
    /// How many responses carried reasoning text.
    pub responses_with_reasoning: usize,
    /// Total qualifier-marker hits across all reasoning text.
    pub qualifier_hits: usize,
    /// Total competing-consideration-marker hits.
    pub tradeoff_hits: usize,
    /// Mean word count of reasoning texts.
    pub average_word_count: usize,
    /// Coarse grade derived from the counts above.
    pub depth: ReasoningDepth,
}

impl ReasoningSignal {
    /// Assesses reasoning text across a response set.
    ///
    /// Returns `None` when no response carries reasoning text.
    pub fn assess(responses: &[Response]) -> Option<ReasoningSignal> {
        let texts: Vec<&str> = responses.iter().filter_map(|r| r.reasoning()).collect();
        if texts.is_empty() {
            return None;
        }

        let mut qualifier_hits = 0usize;
        let mut tradeoff_hits = 0usize;
        let mut total_words = 0usize;
        for text in &texts {
            let lower = text.to_lowercase();
            qualifier_hits += QUALIFIER_MARKERS
                .iter()
                .filter(|m| lower.contains(*m))
                .count();
            tradeoff_hits += TRADEOFF_MARKERS
                .iter()
                .filter(|m| lower.contains(*m))
                .count();
            total_words += text.split_whitespace().count();
        }

        let responses_with_reasoning = texts.len();
        let average_word_count = total_words / responses_with_reasoning;
        let marker_density =
            (qualifier_hits + tradeoff_hits) as f64 / responses_with_reasoning as f64;

        let depth = if marker_density >= 1.0 && average_word_count >= 12 {
            ReasoningDepth::Elaborated
        } else if marker_density >= 0.5 || average_word_count >= 8 {
            ReasoningDepth::Moderate
        } else {
            ReasoningDepth::Minimal
        };

        Some(ReasoningSignal {
            responses_with_reasoning,
            qualifier_hits,
            tradeoff_hits,
            average_word_count,
            depth,
        })
    }
}
