//! Document templates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ConfigurationError;

/// The closed set of values-document templates.
///
/// The richer "contextual" prose of the source system is expressed as
/// the `Narrative` template plus complexity levels; there is no second
/// generator code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    Standard,
    Narrative,
    Minimal,
    Technical,
}

impl TemplateId {
    /// All templates in declaration order.
    pub const ALL: [TemplateId; 4] = [
        TemplateId::Standard,
        TemplateId::Narrative,
        TemplateId::Minimal,
        TemplateId::Technical,
    ];

    /// Returns the template's wire key.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Standard => "standard",
            TemplateId::Narrative => "narrative",
            TemplateId::Minimal => "minimal",
            TemplateId::Technical => "technical",
        }
    }
}

impl Default for TemplateId {
    fn default() -> Self {
        TemplateId::Standard
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| ConfigurationError::UnknownTemplate {
                name: s.to_string(),
            })
    }
}
