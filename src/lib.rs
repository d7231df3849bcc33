//! VALUES.md - Ethical Values Profiling
//!
//! This crate turns a user's responses to ethical dilemmas into a
//! personalized markdown values document. Choices map to ethical
//! motifs through a validated catalog; weighted aggregation produces a
//! profile of motif tallies and framework alignment, and the generator
//! renders it under one of several templates.

pub mod application;
pub mod config;
pub mod domain;
pub mod telemetry;
