//! Dilemma reference data.
//!
//! A dilemma is a four-option ethical scenario. Each option letter maps
//! to exactly one motif. Dilemmas are immutable reference data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DilemmaId, MotifId, ValidationError};

/// One of the four dilemma option letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChoiceLetter {
    A,
    B,
    C,
    D,
}

impl ChoiceLetter {
    /// All letters in order.
    pub const ALL: [ChoiceLetter; 4] = [
        ChoiceLetter::A,
        ChoiceLetter::B,
        ChoiceLetter::C,
        ChoiceLetter::D,
    ];

    /// Returns the letter as a string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChoiceLetter::A => "A",
            ChoiceLetter::B => "B",
            ChoiceLetter::C => "C",
            ChoiceLetter::D => "D",
        }
    }
}

impl fmt::Display for ChoiceLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChoiceLetter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" | "a" => Ok(ChoiceLetter::A),
            "B" | "b" => Ok(ChoiceLetter::B),
            "C" | "c" => Ok(ChoiceLetter::C),
            "D" | "d" => Ok(ChoiceLetter::D),
            other => Err(ValidationError::invalid_format(
                "chosen option",
                format!("'{}' is not one of A-D", other),
            )),
        }
    }
}

/// One selectable option of a dilemma, mapped to a motif.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub letter: ChoiceLetter,
    pub text: String,
    pub motif: MotifId,
}

impl Choice {
    pub fn new(letter: ChoiceLetter, text: impl Into<String>, motif: MotifId) -> Self {
        Self {
            letter,
            text: text.into(),
            motif,
        }
    }
}

/// A four-option ethical scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dilemma {
    pub id: DilemmaId,
    pub title: String,
    pub scenario: String,
    pub choices: Vec<Choice>,
}

impl Dilemma {
    /// Creates a dilemma, rejecting duplicate option letters.
    ///
    /// A full dilemma carries all four letters; catalog validation treats
    /// a missing letter as an unmapped choice when a response selects it.
    pub fn new(
        id: DilemmaId,
        title: impl Into<String>,
        scenario: impl Into<String>,
        choices: Vec<Choice>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("dilemma title"));
        }
        if choices.is_empty() {
            return Err(ValidationError::empty_field("dilemma choices"));
        }
        for letter in ChoiceLetter::ALL {
            if choices.iter().filter(|c| c.letter == letter).count() > 1 {
                return Err(ValidationError::invalid_format(
                    "dilemma choices",
                    format!("duplicate choice letter {}", letter),
                ));
            }
        }

        Ok(Self {
            id,
            title,
            scenario: scenario.into(),
            choices,
        })
    }

    /// Resolves an option letter to the motif it represents.
    pub fn motif_for(&self, letter: ChoiceLetter) -> Option<&MotifId> {
        self.choices
            .iter()
            .find(|c| c.letter == letter)
            .map(|c| &c.motif)
    }
}
