//! Ethical profile - the analyzer's output.
//!
//! A pure derivation from one session's responses: motif tallies,
//! primary motifs, framework alignment, and an optional reasoning
//! signal. Owned transiently by the generation request; never persisted
//! or mutated by the core.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Framework;
use crate::domain::foundation::{MotifId, Percentage};

use super::ReasoningSignal;

/// How often one motif was chosen, with its share of all responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotifTally {
    pub motif: MotifId,
    pub count: usize,
    pub share: Percentage,
}

/// One framework bucket's normalized share of the weighted contributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkShare {
    pub framework: Framework,
    pub percentage: Percentage,
}

/// Aggregated motif/framework statistics for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EthicalProfile {
    motif_tallies: Vec<MotifTally>,
    primary_motifs: Vec<MotifId>,
    framework_alignment: Vec<FrameworkShare>,
    response_count: usize,
    reasoning: Option<ReasoningSignal>,
}

impl EthicalProfile {
    pub(crate) fn new(
        motif_tallies: Vec<MotifTally>,
        primary_motifs: Vec<MotifId>,
        framework_alignment: Vec<FrameworkShare>,
        response_count: usize,
        reasoning: Option<ReasoningSignal>,
    ) -> Self {
        Self {
            motif_tallies,
            primary_motifs,
            framework_alignment,
            response_count,
            reasoning,
        }
    }

    /// Motif tallies, sorted by count descending, ties in catalog
    /// declaration order.
    pub fn motif_tallies(&self) -> &[MotifTally] {
        &self.motif_tallies
    }

    /// The top-N motifs by count.
    pub fn primary_motifs(&self) -> &[MotifId] {
        &self.primary_motifs
    }

    /// Framework alignment shares, descending, summing to exactly 100.
    pub fn framework_alignment(&self) -> &[FrameworkShare] {
        &self.framework_alignment
    }

    /// Total number of responses analyzed.
    pub fn response_count(&self) -> usize {
        self.response_count
    }

    /// Best-effort reasoning signal, if reasoning text was assessed.
    pub fn reasoning(&self) -> Option<&ReasoningSignal> {
        self.reasoning.as_ref()
    }

    /// Looks up the tally for one motif.
    pub fn tally_for(&self, motif: &MotifId) -> Option<&MotifTally> {
        self.motif_tallies.iter().find(|t| &t.motif == motif)
    }

    /// The strongest framework bucket, if any.
    pub fn dominant_framework(&self) -> Option<&FrameworkShare> {
        self.framework_alignment.first()
    }
}
