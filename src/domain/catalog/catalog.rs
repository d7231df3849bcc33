//! The dilemma/motif catalog.
//!
//! Reference data mapping each dilemma's choices to named ethical motifs.
//! A catalog is validated once at construction and immutable afterwards;
//! motif declaration order is the canonical tie-break order for the
//! analyzer.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::domain::foundation::{DilemmaId, MotifId, ValidationError};

use super::{CatalogError, ChoiceLetter, Dilemma, Motif};

/// Serialized catalog shape for YAML files.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    motifs: Vec<Motif>,
    dilemmas: Vec<Dilemma>,
}

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    // The embedded catalog ships with the crate and must always validate.
    #[allow(clippy::expect_used)]
    Catalog::from_yaml_str(include_str!("default_catalog.yaml"))
        .expect("embedded default catalog is valid")
});

/// Validated, immutable dilemma/motif reference data.
#[derive(Debug, Clone)]
pub struct Catalog {
    motifs: Vec<Motif>,
    dilemmas: Vec<Dilemma>,
    motif_index: HashMap<MotifId, usize>,
    dilemma_index: HashMap<DilemmaId, usize>,
}

impl Catalog {
    /// Builds a catalog from motif and dilemma lists.
    ///
    /// Declaration order of `motifs` is preserved and used as the
    /// analyzer's tie-break order.
    ///
    /// # Errors
    ///
    /// Rejects duplicate ids, choices mapped to unknown motifs, relation
    /// sets referencing unknown motifs, non-positive salience weights,
    /// and motifs without a positive framework contribution.
    pub fn new(motifs: Vec<Motif>, dilemmas: Vec<Dilemma>) -> Result<Self, CatalogError> {
        let mut motif_index = HashMap::with_capacity(motifs.len());
        for (rank, motif) in motifs.iter().enumerate() {
            if motif.name.trim().is_empty() {
                return Err(ValidationError::empty_field("motif name").into());
            }
            if !(motif.weight.is_finite() && motif.weight > 0.0) {
                return Err(CatalogError::InvalidWeight {
                    motif_id: motif.id.clone(),
                    weight: motif.weight,
                });
            }
            let has_positive = motif
                .contributions
                .iter()
                .any(|c| c.weight.is_finite() && c.weight > 0.0);
            if !has_positive {
                return Err(CatalogError::MissingContribution {
                    motif_id: motif.id.clone(),
                });
            }
            if motif_index.insert(motif.id.clone(), rank).is_some() {
                return Err(CatalogError::DuplicateMotif {
                    motif_id: motif.id.clone(),
                });
            }
        }

        for motif in &motifs {
            for (relation, set) in [
                ("conflicts_with", &motif.conflicts_with),
                ("synergies_with", &motif.synergies_with),
            ] {
                for refers_to in set {
                    if !motif_index.contains_key(refers_to) {
                        return Err(CatalogError::UnknownRelation {
                            motif_id: motif.id.clone(),
                            relation,
                            refers_to: refers_to.clone(),
                        });
                    }
                }
            }
        }

        let mut dilemma_index = HashMap::with_capacity(dilemmas.len());
        for (i, dilemma) in dilemmas.iter().enumerate() {
            if dilemma_index.insert(dilemma.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateDilemma {
                    dilemma_id: dilemma.id.clone(),
                });
            }
            for choice in &dilemma.choices {
                if !motif_index.contains_key(&choice.motif) {
                    return Err(CatalogError::UnknownChoiceMotif {
                        dilemma_id: dilemma.id.clone(),
                        letter: choice.letter,
                        motif_id: choice.motif.clone(),
                    });
                }
            }
        }

        Ok(Self {
            motifs,
            dilemmas,
            motif_index,
            dilemma_index,
        })
    }

    /// Parses and validates a catalog from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        Self::new(file.motifs, file.dilemmas)
    }

    /// Loads and validates a catalog from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Returns the catalog embedded in the crate.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// All motifs in declaration order.
    pub fn motifs(&self) -> &[Motif] {
        &self.motifs
    }

    /// All dilemmas in declaration order.
    pub fn dilemmas(&self) -> &[Dilemma] {
        &self.dilemmas
    }

    /// Looks up a motif by id.
    pub fn motif(&self, id: &MotifId) -> Option<&Motif> {
        self.motif_index.get(id).map(|&rank| &self.motifs[rank])
    }

    /// Looks up a dilemma by id.
    pub fn dilemma(&self, id: &DilemmaId) -> Option<&Dilemma> {
        self.dilemma_index.get(id).map(|&i| &self.dilemmas[i])
    }

    /// Declaration-order rank of a motif, the deterministic tie-break key.
    pub fn motif_rank(&self, id: &MotifId) -> Option<usize> {
        self.motif_index.get(id).copied()
    }

    /// Resolves a (dilemma, letter) pair to its motif id.
    pub fn motif_for_choice(&self, dilemma_id: &DilemmaId, letter: ChoiceLetter) -> Option<&MotifId> {
        self.dilemma(dilemma_id)
            .and_then(|d| d.motif_for(letter))
    }
}
