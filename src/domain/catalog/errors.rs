//! Catalog construction and loading errors.

use thiserror::Error;

use crate::domain::foundation::{DilemmaId, MotifId, ValidationError};

use super::ChoiceLetter;

/// Errors raised while building or loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog defines motif '{motif_id}' more than once")]
    DuplicateMotif { motif_id: MotifId },

    #[error("catalog defines dilemma '{dilemma_id}' more than once")]
    DuplicateDilemma { dilemma_id: DilemmaId },

    #[error("dilemma '{dilemma_id}' choice {letter} references unknown motif '{motif_id}'")]
    UnknownChoiceMotif {
        dilemma_id: DilemmaId,
        letter: ChoiceLetter,
        motif_id: MotifId,
    },

    #[error("motif '{motif_id}' {relation} relation references unknown motif '{refers_to}'")]
    UnknownRelation {
        motif_id: MotifId,
        relation: &'static str,
        refers_to: MotifId,
    },

    #[error("motif '{motif_id}' declares no positive framework contribution")]
    MissingContribution { motif_id: MotifId },

    #[error("motif '{motif_id}' has non-positive salience weight {weight}")]
    InvalidWeight { motif_id: MotifId, weight: f64 },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
}
