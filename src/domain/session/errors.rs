//! Session errors.

use thiserror::Error;

use crate::domain::foundation::DilemmaId;

/// Errors raised while recording responses into a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session is complete; its response set is immutable")]
    AlreadyComplete,

    #[error("session already holds a response for dilemma '{dilemma_id}'")]
    DuplicateResponse { dilemma_id: DilemmaId },

    #[error("session target must be at least 1")]
    InvalidTarget,
}
