//! Response value object.
//!
//! One answered dilemma: the chosen option, optional free-text
//! reasoning, response latency, and self-reported difficulty. Created
//! once when a user answers, never mutated.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::ChoiceLetter;
use crate::domain::foundation::{DilemmaId, ValidationError};

/// Minimum self-reported difficulty.
pub const MIN_DIFFICULTY: u8 = 1;

/// Maximum self-reported difficulty.
pub const MAX_DIFFICULTY: u8 = 10;

/// A single answered dilemma.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    dilemma_id: DilemmaId,
    chosen: ChoiceLetter,
    reasoning: Option<String>,
    response_time_ms: u64,
    difficulty: u8,
}

impl Response {
    /// Creates a response.
    ///
    /// Blank reasoning collapses to `None`; difficulty must be 1-10.
    pub fn new(
        dilemma_id: DilemmaId,
        chosen: ChoiceLetter,
        reasoning: Option<String>,
        response_time_ms: u64,
        difficulty: u8,
    ) -> Result<Self, ValidationError> {
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(ValidationError::out_of_range(
                "difficulty",
                MIN_DIFFICULTY as i64,
                MAX_DIFFICULTY as i64,
                difficulty as i64,
            ));
        }
        let reasoning = reasoning.filter(|r| !r.trim().is_empty());

        Ok(Self {
            dilemma_id,
            chosen,
            reasoning,
            response_time_ms,
            difficulty,
        })
    }

    /// Returns the answered dilemma's id.
    pub fn dilemma_id(&self) -> &DilemmaId {
        &self.dilemma_id
    }

    /// Returns the chosen option letter.
    pub fn chosen(&self) -> ChoiceLetter {
        self.chosen
    }

    /// Returns the free-text reasoning, if any was given.
    pub fn reasoning(&self) -> Option<&str> {
        self.reasoning.as_deref()
    }

    /// Returns the response latency in milliseconds.
    pub fn response_time_ms(&self) -> u64 {
        self.response_time_ms
    }

    /// Returns the self-reported difficulty (1-10).
    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }
}
