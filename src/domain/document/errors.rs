//! Document generation errors.

use thiserror::Error;

/// Invalid template or option values. Fails fast, before any computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("unknown template '{name}'")]
    UnknownTemplate { name: String },

    #[error("invalid value '{value}' for option '{option}'")]
    InvalidOption { option: &'static str, value: String },
}

/// Errors raised while rendering a values document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("cannot generate a document for an empty profile")]
    EmptyProfile,
}
