//! Domain layer - catalog, sessions, profiles, and document generation.
//!
//! Data flows strictly forward: catalog -> responses -> profile ->
//! document. No component mutates a predecessor's state.

pub mod catalog;
pub mod document;
pub mod foundation;
pub mod profile;
pub mod session;
