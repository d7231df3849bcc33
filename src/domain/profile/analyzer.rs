//! Ethical profile analyzer.
//!
//! Single-pass, deterministic aggregation of a session's responses into
//! an [`EthicalProfile`]. Ordering never depends on map iteration:
//! tallies tie-break by catalog declaration order and alignment
//! tie-breaks by framework declaration order.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::catalog::{Catalog, Framework};
use crate::domain::foundation::Percentage;
use crate::domain::session::Response;

use super::{
    AnalysisError, DataIntegrityError, EthicalProfile, FrameworkShare, MotifTally,
    ReasoningSignal,
};

/// Default number of primary motifs selected from the tally.
pub const DEFAULT_PRIMARY_MOTIF_COUNT: usize = 5;

/// Tunables for profile analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// How many top motifs become "primary".
    pub primary_motif_count: usize,
    /// Whether to run the best-effort reasoning heuristic.
    pub assess_reasoning: bool,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            primary_motif_count: DEFAULT_PRIMARY_MOTIF_COUNT,
            assess_reasoning: true,
        }
    }
}

/// Aggregates responses into an ethical profile against one catalog.
#[derive(Debug, Clone)]
pub struct ProfileAnalyzer<'a> {
    catalog: &'a Catalog,
    options: AnalyzerOptions,
}

impl<'a> ProfileAnalyzer<'a> {
    /// Creates an analyzer over a catalog with default options.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_options(catalog, AnalyzerOptions::default())
    }

    /// Creates an analyzer with explicit options.
    pub fn with_options(catalog: &'a Catalog, options: AnalyzerOptions) -> Self {
        Self { catalog, options }
    }

    /// Analyzes a session's responses.
    ///
    /// Pure and deterministic: identical `(responses, catalog)` input
    /// always yields an identical profile.
    ///
    /// # Errors
    ///
    /// - `EmptyInput` for zero responses
    /// - `DataIntegrity` for unknown dilemmas, unmapped choices, or
    ///   duplicate responses per dilemma; nothing is guessed or skipped
    pub fn analyze(&self, responses: &[Response]) -> Result<EthicalProfile, AnalysisError> {
        if responses.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let motifs = self.catalog.motifs();
        let mut counts = vec![0usize; motifs.len()];
        let mut framework_totals = [0f64; Framework::ALL.len()];
        let mut seen_dilemmas = HashSet::with_capacity(responses.len());

        for response in responses {
            let dilemma_id = response.dilemma_id();
            if !seen_dilemmas.insert(dilemma_id.clone()) {
                return Err(DataIntegrityError::DuplicateResponse {
                    dilemma_id: dilemma_id.clone(),
                }
                .into());
            }

            let dilemma = self.catalog.dilemma(dilemma_id).ok_or_else(|| {
                DataIntegrityError::UnknownDilemma {
                    dilemma_id: dilemma_id.clone(),
                }
            })?;
            let motif_id = dilemma.motif_for(response.chosen()).ok_or_else(|| {
                DataIntegrityError::UnmappedChoice {
                    dilemma_id: dilemma_id.clone(),
                    chosen: response.chosen(),
                }
            })?;
            let rank = self.catalog.motif_rank(motif_id).ok_or_else(|| {
                DataIntegrityError::UnknownMotif {
                    motif_id: motif_id.clone(),
                }
            })?;

            counts[rank] += 1;
            for (framework, weight) in motifs[rank].weighted_contributions() {
                framework_totals[framework.rank()] += weight;
            }
        }

        let motif_tallies = self.rank_tallies(&counts)?;
        let primary_motifs = motif_tallies
            .iter()
            .take(self.options.primary_motif_count)
            .map(|t| t.motif.clone())
            .collect();
        let framework_alignment = Self::align_frameworks(&framework_totals)?;
        let reasoning = if self.options.assess_reasoning {
            let signal = ReasoningSignal::assess(responses);
            if signal.is_none() {
                warn!("no reasoning text in any response; reasoning signal skipped");
            }
            signal
        } else {
            None
        };

        debug!(
            responses = responses.len(),
            distinct_motifs = motif_tallies.len(),
            "profile analysis complete"
        );

        Ok(EthicalProfile::new(
            motif_tallies,
            primary_motifs,
            framework_alignment,
            responses.len(),
            reasoning,
        ))
    }

    /// Sorts motif counts descending, ties in declaration order, and
    /// attaches each motif's integer share of all responses.
    fn rank_tallies(&self, counts: &[usize]) -> Result<Vec<MotifTally>, AnalysisError> {
        let mut ranked: Vec<(usize, usize)> = counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(rank, &count)| (rank, count))
            .collect();
        // Stable sort: equal counts keep catalog declaration order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let weights: Vec<f64> = ranked.iter().map(|(_, count)| *count as f64).collect();
        let shares = Percentage::distribute(&weights)?;

        Ok(ranked
            .into_iter()
            .zip(shares)
            .map(|((rank, count), share)| MotifTally {
                motif: self.catalog.motifs()[rank].id.clone(),
                count,
                share,
            })
            .collect())
    }

    /// Normalizes the per-framework weighted totals into shares summing
    /// to exactly 100, descending, ties in framework declaration order.
    fn align_frameworks(totals: &[f64]) -> Result<Vec<FrameworkShare>, AnalysisError> {
        let contributing: Vec<Framework> = Framework::ALL
            .into_iter()
            .filter(|f| totals[f.rank()] > 0.0)
            .collect();
        let weights: Vec<f64> = contributing.iter().map(|f| totals[f.rank()]).collect();
        let shares = Percentage::distribute(&weights)?;

        let mut alignment: Vec<FrameworkShare> = contributing
            .into_iter()
            .zip(shares)
            .map(|(framework, percentage)| FrameworkShare {
                framework,
                percentage,
            })
            .collect();
        alignment.sort_by(|a, b| b.percentage.cmp(&a.percentage));
        Ok(alignment)
    }
}
