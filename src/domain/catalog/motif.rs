//! Motif reference data.
//!
//! A motif is a named ethical disposition that a dilemma choice can
//! represent. Motifs are loaded once at catalog construction and never
//! mutated at runtime. Relations to other motifs are explicit id sets,
//! not delimited strings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::MotifId;

use super::Framework;

/// A weighted contribution of a motif to one ethical framework bucket.
///
/// Contributions are declared in the catalog, never computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkContribution {
    pub framework: Framework,
    pub weight: f64,
}

impl FrameworkContribution {
    pub fn new(framework: Framework, weight: f64) -> Self {
        Self { framework, weight }
    }
}

/// A named ethical disposition with framework contributions and
/// conflict/synergy relations to other motifs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Motif {
    /// Unique catalog key, e.g. `NUMBERS_FIRST`.
    pub id: MotifId,

    /// Display name.
    pub name: String,

    /// Category label, e.g. `quantitative` or `care_ethics`.
    pub category: String,

    /// Free-text description used in generated documents.
    pub description: String,

    /// Default salience multiplier applied to framework contributions.
    #[serde(default = "default_weight")]
    pub weight: f64,

    /// Motifs this motif is in tension with.
    #[serde(default)]
    pub conflicts_with: BTreeSet<MotifId>,

    /// Motifs this motif reinforces.
    #[serde(default)]
    pub synergies_with: BTreeSet<MotifId>,

    /// Framework buckets this motif contributes to.
    pub contributions: Vec<FrameworkContribution>,
}

fn default_weight() -> f64 {
    1.0
}

impl Motif {
    /// Creates a motif with a single framework contribution and no
    /// relations. Relations can be filled in afterwards; catalog
    /// construction validates the full record either way.
    pub fn new(
        id: MotifId,
        name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        framework: Framework,
        contribution_weight: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            description: description.into(),
            weight: default_weight(),
            conflicts_with: BTreeSet::new(),
            synergies_with: BTreeSet::new(),
            contributions: vec![FrameworkContribution::new(framework, contribution_weight)],
        }
    }

    /// Total weighted contribution of one chosen response for this motif,
    /// per framework bucket: the motif's salience times the declared
    /// contribution weight.
    pub fn weighted_contributions(&self) -> impl Iterator<Item = (Framework, f64)> + '_ {
        self.contributions
            .iter()
            .map(move |c| (c.framework, self.weight * c.weight))
    }

    /// Checks whether this motif conflicts with another.
    pub fn conflicts_with(&self, other: &MotifId) -> bool {
        self.conflicts_with.contains(other)
    }

    /// Checks whether this motif is synergistic with another.
    pub fn synergizes_with(&self, other: &MotifId) -> bool {
        self.synergies_with.contains(other)
    }
}
