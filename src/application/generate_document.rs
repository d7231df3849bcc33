//! GenerateValuesDocument - the one application operation.
//!
//! Runs the full forward pipeline for a request: convert wire
//! responses, analyze against the catalog, render the markdown
//! document, and assemble metadata. All failures are local to the call;
//! there is nothing to roll back.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, info_span};

use crate::domain::catalog::Catalog;
use crate::domain::document::{
    ConfigurationError, GenerationError, TemplateId, ValuesDocumentGenerator,
};
use crate::domain::foundation::{SessionId, ValidationError};
use crate::domain::profile::{AnalysisError, AnalyzerOptions, DataIntegrityError, ProfileAnalyzer};
use crate::domain::session::Response;

use super::{
    CacheKey, DocumentCache, GenerateDocumentRequest, GenerateDocumentResponse,
    GenerationMetadata,
};

/// Errors surfaced by document generation, one taxonomy kind each.
///
/// The HTTP layer maps kinds to status codes; that mapping lives
/// outside the core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateDocumentError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl GenerateDocumentError {
    pub(crate) fn from_integrity(err: DataIntegrityError) -> Self {
        GenerateDocumentError::Analysis(AnalysisError::DataIntegrity(err))
    }

    /// Stable kind string for callers mapping errors to status codes.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerateDocumentError::Analysis(AnalysisError::EmptyInput) => "EMPTY_INPUT",
            GenerateDocumentError::Analysis(AnalysisError::DataIntegrity(_)) => "DATA_INTEGRITY",
            GenerateDocumentError::Analysis(AnalysisError::Normalization(_)) => "INTERNAL",
            GenerateDocumentError::Configuration(_) => "CONFIGURATION",
            GenerateDocumentError::Generation(GenerationError::Configuration(_)) => {
                "CONFIGURATION"
            }
            GenerateDocumentError::Generation(GenerationError::EmptyProfile) => "INTERNAL",
            GenerateDocumentError::Validation(_) => "VALIDATION",
        }
    }
}

/// Handler wiring catalog, analyzer, generator, and the optional cache.
pub struct GenerateValuesDocumentHandler {
    catalog: Arc<Catalog>,
    analyzer_options: AnalyzerOptions,
    cache: Option<DocumentCache>,
}

impl GenerateValuesDocumentHandler {
    /// Creates a handler with default analyzer options and no cache.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            analyzer_options: AnalyzerOptions::default(),
            cache: None,
        }
    }

    /// Overrides the analyzer options.
    pub fn with_analyzer_options(mut self, options: AnalyzerOptions) -> Self {
        self.analyzer_options = options;
        self
    }

    /// Enables the write-once document cache.
    pub fn with_cache(mut self) -> Self {
        self.cache = Some(DocumentCache::new());
        self
    }

    /// Handles one generation request.
    ///
    /// Template and option parsing fail fast, before any analysis.
    pub fn handle(
        &self,
        request: GenerateDocumentRequest,
    ) -> Result<GenerateDocumentResponse, GenerateDocumentError> {
        let span = info_span!("generate_values_document", session = request.session_id.as_deref());
        let _guard = span.enter();

        let template = match request.template.as_deref() {
            Some(raw) => raw.parse::<TemplateId>()?,
            None => TemplateId::default(),
        };
        let options = request.options.unwrap_or_default();
        let session_id = request
            .session_id
            .as_deref()
            .map(SessionId::try_new)
            .transpose()?;

        let cache_key = session_id.map(|session_id| CacheKey {
            session_id,
            template,
            options,
        });
        if let (Some(cache), Some(key)) = (&self.cache, &cache_key) {
            if let Some(hit) = cache.get(key) {
                debug!(template = %template, "document cache hit");
                return Ok((*hit).clone());
            }
        }

        let responses = request
            .responses
            .into_iter()
            .map(|dto| dto.into_domain())
            .collect::<Result<Vec<Response>, _>>()?;

        let analyzer =
            ProfileAnalyzer::with_options(&self.catalog, self.analyzer_options.clone());
        let profile = analyzer.analyze(&responses)?;

        let generator = ValuesDocumentGenerator::new(&self.catalog);
        let values_markdown = generator.generate(&profile, template, &options)?;
        let metadata = GenerationMetadata::from_profile(&profile, &self.catalog, template, options);

        info!(
            template = %template,
            responses = metadata.response_count,
            primary_motifs = metadata.primary_motifs.len(),
            "values document generated"
        );

        let response = GenerateDocumentResponse {
            success: true,
            values_markdown,
            metadata,
        };
        if let (Some(cache), Some(key)) = (&self.cache, cache_key) {
            return Ok((*cache.publish(key, response)).clone());
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ResponseDto;

    fn dto(dilemma: &str, option: &str) -> ResponseDto {
        ResponseDto {
            dilemma_id: dilemma.to_string(),
            chosen_option: option.to_string(),
            reasoning: None,
            response_time_ms: 1200,
            difficulty: 5,
        }
    }

    fn handler() -> GenerateValuesDocumentHandler {
        GenerateValuesDocumentHandler::new(Arc::new(Catalog::builtin().clone()))
    }

    fn request(responses: Vec<ResponseDto>) -> GenerateDocumentRequest {
        GenerateDocumentRequest {
            responses,
            session_id: None,
            template: None,
            options: None,
        }
    }

    #[test]
    fn generates_document_with_metadata() {
        let response = handler()
            .handle(request(vec![
                dto("runaway-tram", "A"),
                dto("triage-night", "C"),
            ]))
            .unwrap();

        assert!(response.success);
        assert!(response.values_markdown.contains("# My Values"));
        assert_eq!(response.metadata.response_count, 2);
        assert_eq!(response.metadata.template, TemplateId::Standard);
        assert!(!response.metadata.primary_motifs.is_empty());
    }

    #[test]
    fn unknown_template_fails_before_analysis() {
        let mut req = request(vec![dto("ghost-dilemma", "A")]);
        req.template = Some("nonexistent-template".to_string());

        // The bad dilemma id never gets the chance to fail: template
        // parsing rejects the request first.
        let err = handler().handle(req).unwrap_err();
        assert_eq!(err.kind(), "CONFIGURATION");
    }

    #[test]
    fn empty_responses_fail_with_empty_input() {
        let err = handler().handle(request(vec![])).unwrap_err();
        assert_eq!(err.kind(), "EMPTY_INPUT");
        assert_eq!(
            err,
            GenerateDocumentError::Analysis(AnalysisError::EmptyInput)
        );
    }

    #[test]
    fn unknown_dilemma_fails_with_data_integrity() {
        let err = handler()
            .handle(request(vec![dto("ghost-dilemma", "A")]))
            .unwrap_err();
        assert_eq!(err.kind(), "DATA_INTEGRITY");
    }

    #[test]
    fn cache_returns_identical_document_for_same_session() {
        let handler = handler().with_cache();
        let mut req = request(vec![dto("runaway-tram", "A")]);
        req.session_id = Some("session-42".to_string());

        let first = handler.handle(req.clone()).unwrap();
        let second = handler.handle(req).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn uncached_requests_differ_only_in_generation_identity() {
        let handler = handler();
        let req = request(vec![dto("runaway-tram", "A")]);

        let first = handler.handle(req.clone()).unwrap();
        let second = handler.handle(req).unwrap();
        assert_eq!(first.values_markdown, second.values_markdown);
        assert_ne!(
            first.metadata.generation_id,
            second.metadata.generation_id
        );
    }
}
