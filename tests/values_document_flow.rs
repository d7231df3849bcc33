//! End-to-end flow: collect responses in a session, run the generation
//! handler, and check the rendered document and its metadata.

use std::io::Write;
use std::sync::Arc;

use values_md::application::{
    GenerateDocumentRequest, GenerateValuesDocumentHandler, ResponseDto,
};
use values_md::config::AppConfig;
use values_md::domain::catalog::{Catalog, ChoiceLetter};
use values_md::domain::document::TemplateId;
use values_md::domain::foundation::{DilemmaId, SessionId};
use values_md::domain::session::{Response, Session};

fn handler() -> GenerateValuesDocumentHandler {
    GenerateValuesDocumentHandler::new(Arc::new(Catalog::builtin().clone()))
}

fn dto(dilemma: &str, option: &str, reasoning: Option<&str>) -> ResponseDto {
    ResponseDto {
        dilemma_id: dilemma.to_string(),
        chosen_option: option.to_string(),
        reasoning: reasoning.map(String::from),
        response_time_ms: 2500,
        difficulty: 6,
    }
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
fn session_responses_flow_into_a_document() {
    // A short session over the embedded catalog.
    let catalog = Catalog::builtin();
    let mut session =
        Session::new(SessionId::try_new("integration-session").unwrap(), 5).unwrap();
    let answers = [
        ("runaway-tram", ChoiceLetter::A),
        ("triage-night", ChoiceLetter::A),
        ("whistle-or-wait", ChoiceLetter::C),
        ("scholarship-seat", ChoiceLetter::A),
        ("village-bridge", ChoiceLetter::B),
    ];
    for (dilemma, chosen) in answers {
        let response = Response::new(
            DilemmaId::try_new(dilemma).unwrap(),
            chosen,
            Some("Weighing who is affected, although the rule matters too.".to_string()),
            3000,
            7,
        )
        .unwrap();
        session.record_response(response).unwrap();
    }
    assert!(session.is_complete());

    let responses = session
        .responses()
        .iter()
        .map(|r| ResponseDto {
            dilemma_id: r.dilemma_id().as_str().to_string(),
            chosen_option: r.chosen().as_str().to_string(),
            reasoning: r.reasoning().map(String::from),
            response_time_ms: r.response_time_ms(),
            difficulty: r.difficulty(),
        })
        .collect();

    let response = handler().handle(request(responses)).unwrap();
    assert!(response.success);
    assert!(response.values_markdown.starts_with("# My Values"));
    assert!(response.values_markdown.contains("## Instructions for AI Systems"));
    assert_eq!(response.metadata.response_count, 5);

    // Every reported primary motif resolves against the catalog.
    assert!(!response.metadata.primary_motifs.is_empty());
    for primary in &response.metadata.primary_motifs {
        let motif = catalog.motif(&primary.motif).unwrap();
        assert_eq!(primary.name, motif.name);
    }
}

#[test]
fn each_template_renders_its_own_header() {
    let handler = handler();
    let headers = [
        ("standard", "# My Values"),
        ("narrative", "# How I Weigh Hard Choices"),
        ("minimal", "# Values"),
        ("technical", "# Values Profile"),
    ];
    for (template, header) in headers {
        let mut req = request(vec![dto("runaway-tram", "A", None)]);
        req.template = Some(template.to_string());
        let response = handler.handle(req).unwrap();
        assert!(
            response.values_markdown.starts_with(header),
            "template {} should start with {:?}",
            template,
            header
        );
    }
}

#[test]
fn error_kinds_cover_the_failure_modes() {
    let handler = handler();

    let empty = handler.handle(request(vec![])).unwrap_err();
    assert_eq!(empty.kind(), "EMPTY_INPUT");

    let unknown_dilemma = handler
        .handle(request(vec![dto("not-in-catalog", "A", None)]))
        .unwrap_err();
    assert_eq!(unknown_dilemma.kind(), "DATA_INTEGRITY");

    let bad_option = handler
        .handle(request(vec![dto("runaway-tram", "Z", None)]))
        .unwrap_err();
    assert_eq!(bad_option.kind(), "DATA_INTEGRITY");

    let mut bad_template = request(vec![dto("runaway-tram", "A", None)]);
    bad_template.template = Some("glossy".to_string());
    assert_eq!(handler.handle(bad_template).unwrap_err().kind(), "CONFIGURATION");

    let duplicate = handler
        .handle(request(vec![
            dto("runaway-tram", "A", None),
            dto("runaway-tram", "B", None),
        ]))
        .unwrap_err();
    assert_eq!(duplicate.kind(), "DATA_INTEGRITY");
}

#[test]
fn request_and_response_cross_the_wire_as_json() {
    let json = r#"{
        "responses": [
            {"dilemma_id": "runaway-tram", "chosen_option": "A",
             "reasoning": "Most lives saved.", "response_time_ms": 4200, "difficulty": 8},
            {"dilemma_id": "triage-night", "chosen_option": "c"}
        ],
        "session_id": "wire-session",
        "template": "technical"
    }"#;
    let req: GenerateDocumentRequest = serde_json::from_str(json).unwrap();
    let response = handler().handle(req).unwrap();

    assert_eq!(response.metadata.template, TemplateId::Technical);
    let body = serde_json::to_value(&response).unwrap();
    assert_eq!(body["success"], true);
    assert!(body["values_markdown"].as_str().unwrap().contains("## Motif Tally"));
    assert!(body["metadata"]["generation_id"].is_string());
    assert_eq!(body["metadata"]["response_count"], 2);
}

#[test]
fn configured_catalog_file_drives_generation() {
    let yaml = r#"
motifs:
  - id: LOCAL_FIRST
    name: Local First
    category: community
    description: Favor the people in front of you.
    contributions:
      - framework: care_ethics
        weight: 1.0
  - id: LEDGER_FIRST
    name: Ledger First
    category: quantitative
    description: Favor whatever the totals favor.
    contributions:
      - framework: utilitarian
        weight: 1.0
dilemmas:
  - id: town-grant
    title: The Town Grant
    scenario: One grant, two worthy uses.
    choices:
      - letter: A
        text: Fund the neighborhood clinic
        motif: LOCAL_FIRST
      - letter: B
        text: Fund whichever project scores highest
        motif: LEDGER_FIRST
"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let mut config = AppConfig::default();
    config.catalog.path = Some(file.path().to_path_buf());
    let catalog = config.load_catalog().unwrap();
    assert_eq!(catalog.motifs().len(), 2);

    let handler = GenerateValuesDocumentHandler::new(Arc::new(catalog))
        .with_analyzer_options(config.analyzer_options());
    let response = handler
        .handle(request(vec![dto("town-grant", "A", None)]))
        .unwrap();
    assert!(response.values_markdown.contains("Local First"));
    assert!(!response.values_markdown.contains("Ledger First"));
}

#[test]
fn cached_session_documents_share_generation_identity() {
    let handler = handler().with_cache();
    let mut req = request(vec![dto("runaway-tram", "D", None)]);
    req.session_id = Some("cache-session".to_string());

    let first = handler.handle(req.clone()).unwrap();
    let second = handler.handle(req.clone()).unwrap();
    assert_eq!(first.metadata.generation_id, second.metadata.generation_id);

    // Different template, same session: a distinct cache entry.
    req.template = Some("minimal".to_string());
    let minimal = handler.handle(req).unwrap();
    assert_ne!(minimal.metadata.generation_id, first.metadata.generation_id);
}
