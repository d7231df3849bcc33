//! Profile module - Ethical profile analysis.
//!
//! Aggregates a session's responses into motif tallies, primary motifs,
//! framework alignment, and an optional reasoning signal.

mod analyzer;
mod errors;
#[allow(clippy::module_inception)]
mod profile;
mod reasoning;

pub use analyzer::{AnalyzerOptions, ProfileAnalyzer, DEFAULT_PRIMARY_MOTIF_COUNT};
pub use errors::{AnalysisError, DataIntegrityError};
pub use profile::{EthicalProfile, FrameworkShare, MotifTally};
pub use reasoning::{ReasoningDepth, ReasoningSignal};
