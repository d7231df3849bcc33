//! Document module - Values document generation.
//!
//! Renders ethical profiles into markdown documents under one of a
//! small closed set of templates.

mod errors;
mod generator;
mod options;
mod template;

pub use errors::{ConfigurationError, GenerationError};
pub use generator::ValuesDocumentGenerator;
pub use options::{ComplexityLevel, GenerationOptions, TargetAudience};
pub use template::TemplateId;
