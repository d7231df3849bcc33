//! Generation options.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ConfigurationError;

/// Who the generated document is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetAudience {
    Personal,
    Technical,
}

impl TargetAudience {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetAudience::Personal => "personal",
            TargetAudience::Technical => "technical",
        }
    }
}

impl Default for TargetAudience {
    fn default() -> Self {
        TargetAudience::Personal
    }
}

impl fmt::Display for TargetAudience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TargetAudience {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "personal" => Ok(TargetAudience::Personal),
            "technical" => Ok(TargetAudience::Technical),
            other => Err(ConfigurationError::InvalidOption {
                option: "target_audience",
                value: other.to_string(),
            }),
        }
    }
}

/// How many motifs and how much explanatory prose to include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityLevel {
    Essential,
    Nuanced,
    Comprehensive,
}

impl ComplexityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityLevel::Essential => "essential",
            ComplexityLevel::Nuanced => "nuanced",
            ComplexityLevel::Comprehensive => "comprehensive",
        }
    }
}

impl Default for ComplexityLevel {
    fn default() -> Self {
        ComplexityLevel::Nuanced
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComplexityLevel {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "essential" => Ok(ComplexityLevel::Essential),
            "nuanced" => Ok(ComplexityLevel::Nuanced),
            "comprehensive" => Ok(ComplexityLevel::Comprehensive),
            other => Err(ConfigurationError::InvalidOption {
                option: "complexity_level",
                value: other.to_string(),
            }),
        }
    }
}

/// Options controlling document content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    pub target_audience: TargetAudience,
    pub complexity_level: ComplexityLevel,
    pub include_framework_alignment: bool,
    pub include_decision_patterns: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            target_audience: TargetAudience::default(),
            complexity_level: ComplexityLevel::default(),
            include_framework_alignment: true,
            include_decision_patterns: true,
        }
    }
}
