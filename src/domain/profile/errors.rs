//! Analysis errors.
//!
//! Integrity violations are surfaced verbatim, never skipped or
//! defaulted: reproducibility of a profile depends on rejecting input
//! the catalog cannot account for.

use thiserror::Error;

use crate::domain::catalog::ChoiceLetter;
use crate::domain::foundation::{DilemmaId, MotifId, ValidationError};

/// A response references data absent from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataIntegrityError {
    #[error("response references unknown dilemma '{dilemma_id}'")]
    UnknownDilemma { dilemma_id: DilemmaId },

    #[error("dilemma '{dilemma_id}' defines no motif for choice {chosen}")]
    UnmappedChoice {
        dilemma_id: DilemmaId,
        chosen: ChoiceLetter,
    },

    #[error("multiple responses supplied for dilemma '{dilemma_id}'")]
    DuplicateResponse { dilemma_id: DilemmaId },

    #[error("choice resolved to motif '{motif_id}' which is not in the catalog")]
    UnknownMotif { motif_id: MotifId },

    #[error("chosen option '{raw}' is not one of A-D")]
    InvalidChoiceOption { raw: String },
}

/// Errors raised by profile analysis.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("no responses supplied")]
    EmptyInput,

    #[error(transparent)]
    DataIntegrity(#[from] DataIntegrityError),

    #[error("alignment normalization failed: {0}")]
    Normalization(#[from] ValidationError),
}
