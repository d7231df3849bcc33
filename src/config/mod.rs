//! Application configuration module.
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `VALUES_MD`
//! prefix and `__` as the nesting separator, e.g.
//! `VALUES_MD_GENERATION__PRIMARY_MOTIF_COUNT=4`.

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::domain::catalog::{Catalog, CatalogError};
use crate::domain::profile::{AnalyzerOptions, DEFAULT_PRIMARY_MOTIF_COUNT};
use crate::domain::session::DEFAULT_SESSION_TARGET;

/// Smallest allowed primary-motif count.
pub const MIN_PRIMARY_MOTIFS: usize = 3;

/// Largest allowed primary-motif count.
pub const MAX_PRIMARY_MOTIFS: usize = 6;

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] config::ConfigError),

    #[error("primary_motif_count must be between {MIN_PRIMARY_MOTIFS} and {MAX_PRIMARY_MOTIFS}, got {actual}")]
    InvalidPrimaryMotifCount { actual: usize },

    #[error("session_target must be at least 1")]
    InvalidSessionTarget,
}

/// Analyzer and session tunables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// How many top motifs become "primary" (3-6).
    pub primary_motif_count: usize,
    /// Expected responses per session.
    pub session_target: usize,
    /// Whether the best-effort reasoning heuristic runs.
    pub assess_reasoning: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            primary_motif_count: DEFAULT_PRIMARY_MOTIF_COUNT,
            session_target: DEFAULT_SESSION_TARGET,
            assess_reasoning: true,
        }
    }
}

/// Catalog source configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Optional YAML catalog file; the embedded catalog is used when unset.
    pub path: Option<PathBuf>,
}

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub generation: GenerationConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Loads configuration from the environment.
    ///
    /// Reads a `.env` file if present, then `VALUES_MD`-prefixed
    /// environment variables, then validates.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let loaded: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("VALUES_MD")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Validates field ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PRIMARY_MOTIFS..=MAX_PRIMARY_MOTIFS)
            .contains(&self.generation.primary_motif_count)
        {
            return Err(ConfigError::InvalidPrimaryMotifCount {
                actual: self.generation.primary_motif_count,
            });
        }
        if self.generation.session_target == 0 {
            return Err(ConfigError::InvalidSessionTarget);
        }
        Ok(())
    }

    /// Analyzer options derived from this configuration.
    pub fn analyzer_options(&self) -> AnalyzerOptions {
        AnalyzerOptions {
            primary_motif_count: self.generation.primary_motif_count,
            assess_reasoning: self.generation.assess_reasoning,
        }
    }

    /// Loads the configured catalog, falling back to the embedded one.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog.path {
            Some(path) => {
                let catalog = Catalog::from_yaml_file(path)?;
                info!(path = %path.display(), motifs = catalog.motifs().len(), "loaded catalog file");
                Ok(catalog)
            }
            None => Ok(Catalog::builtin().clone()),
        }
    }
}
