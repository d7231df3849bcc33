//! Wire-facing data transfer objects.
//!
//! The HTTP layer that consumes this crate serializes these types
//! directly; the core itself never touches the network.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::catalog::{Catalog, ChoiceLetter};
use crate::domain::document::{GenerationOptions, TemplateId};
use crate::domain::foundation::{DilemmaId, MotifId, Percentage, Timestamp};
use crate::domain::profile::{DataIntegrityError, EthicalProfile};
use crate::domain::session::Response;

use super::GenerateDocumentError;

fn default_difficulty() -> u8 {
    5
}

/// One answered dilemma as submitted over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseDto {
    pub dilemma_id: String,
    pub chosen_option: String,
    #[serde(default)]
    pub reasoning: Option<String>,
    #[serde(default)]
    pub response_time_ms: u64,
    #[serde(default = "default_difficulty")]
    pub difficulty: u8,
}

impl ResponseDto {
    /// Converts to the domain response.
    ///
    /// An option outside A-D is a data integrity violation, matching
    /// how the analyzer treats catalog mismatches.
    pub fn into_domain(self) -> Result<Response, GenerateDocumentError> {
        let dilemma_id = DilemmaId::try_new(self.dilemma_id)?;
        let chosen: ChoiceLetter = self.chosen_option.parse().map_err(|_| {
            GenerateDocumentError::from_integrity(DataIntegrityError::InvalidChoiceOption {
                raw: self.chosen_option.clone(),
            })
        })?;
        Ok(Response::new(
            dilemma_id,
            chosen,
            self.reasoning,
            self.response_time_ms,
            self.difficulty,
        )?)
    }
}

/// Request body for document generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateDocumentRequest {
    pub responses: Vec<ResponseDto>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub options: Option<GenerationOptions>,
}

/// One primary motif with its share, as reported in metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryMotifDto {
    pub motif: MotifId,
    pub name: String,
    pub share: Percentage,
}

/// Generation metadata the presentation layer depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationMetadata {
    pub generation_id: Uuid,
    pub primary_motifs: Vec<PrimaryMotifDto>,
    pub response_count: usize,
    pub generated_at: Timestamp,
    pub template: TemplateId,
    pub options: GenerationOptions,
}

impl GenerationMetadata {
    /// Builds metadata from a freshly computed profile.
    pub fn from_profile(
        profile: &EthicalProfile,
        catalog: &Catalog,
        template: TemplateId,
        options: GenerationOptions,
    ) -> Self {
        let primary_motifs = profile
            .primary_motifs()
            .iter()
            .filter_map(|id| profile.tally_for(id))
            .map(|tally| PrimaryMotifDto {
                motif: tally.motif.clone(),
                name: catalog
                    .motif(&tally.motif)
                    .map(|m| m.name.clone())
                    .unwrap_or_else(|| tally.motif.as_str().to_string()),
                share: tally.share,
            })
            .collect();

        Self {
            generation_id: Uuid::new_v4(),
            primary_motifs,
            response_count: profile.response_count(),
            generated_at: Timestamp::now(),
            template,
            options,
        }
    }
}

/// Response body for document generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateDocumentResponse {
    pub success: bool,
    pub values_markdown: String,
    pub metadata: GenerationMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_dto_converts_to_domain() {
        let dto = ResponseDto {
            dilemma_id: "runaway-tram".to_string(),
            chosen_option: "A".to_string(),
            reasoning: Some("Counting lives.".to_string()),
            response_time_ms: 3000,
            difficulty: 7,
        };
        let response = dto.into_domain().unwrap();
        assert_eq!(response.chosen(), ChoiceLetter::A);
        assert_eq!(response.difficulty(), 7);
    }

    #[test]
    fn option_outside_a_to_d_is_integrity_error() {
        let dto = ResponseDto {
            dilemma_id: "runaway-tram".to_string(),
            chosen_option: "E".to_string(),
            reasoning: None,
            response_time_ms: 0,
            difficulty: 5,
        };
        let err = dto.into_domain().unwrap_err();
        assert_eq!(err.kind(), "DATA_INTEGRITY");
    }

    #[test]
    fn request_deserializes_with_defaults() {
        let json = r#"{
            "responses": [
                {"dilemma_id": "runaway-tram", "chosen_option": "B"}
            ]
        }"#;
        let request: GenerateDocumentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.responses.len(), 1);
        assert_eq!(request.responses[0].difficulty, 5);
        assert!(request.session_id.is_none());
        assert!(request.template.is_none());
    }
}
