//! Catalog module - Dilemma/motif reference data.
//!
//! Static mapping from each dilemma's four choices to named ethical
//! motifs, each motif carrying framework contributions and
//! conflict/synergy relations. Loaded once, immutable at runtime.

mod catalog;
mod dilemma;
mod errors;
mod framework;
mod motif;

pub use catalog::Catalog;
pub use dilemma::{Choice, ChoiceLetter, Dilemma};
pub use errors::CatalogError;
pub use framework::Framework;
pub use motif::{FrameworkContribution, Motif};
