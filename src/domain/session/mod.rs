//! Session module - Response collection.
//!
//! Records, per session, the sequence of answered dilemmas that the
//! profile analyzer later consumes as an immutable snapshot.

mod aggregate;
mod errors;
mod response;

pub use aggregate::{Session, DEFAULT_SESSION_TARGET};
pub use errors::SessionError;
pub use response::{Response, MAX_DIFFICULTY, MIN_DIFFICULTY};
