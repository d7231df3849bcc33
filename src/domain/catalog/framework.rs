//! Ethical framework buckets that motifs contribute to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// A named ethical tradition that motif contributions are bucketed into.
///
/// Declaration order is the canonical tie-break order wherever frameworks
/// are sorted, so alignment output never depends on map iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Framework {
    Utilitarian,
    Deontological,
    CareEthics,
    VirtueEthics,
    JusticeFairness,
}

impl Framework {
    /// All frameworks in declaration order.
    pub const ALL: [Framework; 5] = [
        Framework::Utilitarian,
        Framework::Deontological,
        Framework::CareEthics,
        Framework::VirtueEthics,
        Framework::JusticeFairness,
    ];

    /// Returns the index of this framework in declaration order.
    pub fn rank(&self) -> usize {
        Self::ALL
            .iter()
            .position(|f| f == self)
            .unwrap_or(Self::ALL.len())
    }

    /// Returns the human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Framework::Utilitarian => "Utilitarian",
            Framework::Deontological => "Deontological",
            Framework::CareEthics => "Care Ethics",
            Framework::VirtueEthics => "Virtue Ethics",
            Framework::JusticeFairness => "Justice & Fairness",
        }
    }

    /// Returns the snake_case key used in catalog files.
    pub fn as_key(&self) -> &'static str {
        match self {
            Framework::Utilitarian => "utilitarian",
            Framework::Deontological => "deontological",
            Framework::CareEthics => "care_ethics",
            Framework::VirtueEthics => "virtue_ethics",
            Framework::JusticeFairness => "justice_fairness",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Framework {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Framework::ALL
            .iter()
            .find(|f| f.as_key() == s)
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format("framework", format!("unknown framework '{}'", s))
            })
    }
}
