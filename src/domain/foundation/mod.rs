//! Foundation module - Shared domain primitives.
//!
//! Contains identifier newtypes, the timestamp wrapper, the percentage
//! value object, and field-level validation errors that form the
//! vocabulary of the VALUES.md domain.

mod errors;
mod ids;
mod percentage;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{DilemmaId, MotifId, SessionId};
pub use percentage::Percentage;
pub use timestamp::Timestamp;
