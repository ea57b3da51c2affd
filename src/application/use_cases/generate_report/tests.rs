use super::*;
use crate::adapters::outbound::memory::InMemoryGraphSource;
use crate::application::dto::OutputFormat;
use crate::report::domain::{Edge, Identifier};
use std::cell::RefCell;

// Mock implementations for testing
#[derive(Default)]
struct MockProgressReporter {
    messages: RefCell<Vec<String>>,
}

impl MockProgressReporter {
    fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_count(&self, count: usize, label: &str) {
        self.messages
            .borrow_mut()
            .push(format!("Count: {} {}", count, label));
    }

    fn report_error(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(format!("Completed: {}", message));
    }
}

/// Source whose edges fail after a number of good records
struct FaultyEdgeSource {
    good_edges: usize,
}

impl GraphSource for FaultyEdgeSource {
    fn identifiers(&self) -> Result<RecordStream<'_, Identifier>> {
        let identifier = Identifier::new("MIT", "Permissive");
        Ok(Box::new(std::iter::once(Ok::<_, anyhow::Error>(identifier))))
    }

    fn edges(&self) -> Result<RecordStream<'_, Edge>> {
        let good = (0..self.good_edges).map(|i| Ok(Edge::new(format!("file{}.c", i), "MIT")));
        let fault = std::iter::once(Err(anyhow::anyhow!("connection reset")));
        Ok(Box::new(good.chain(fault)))
    }
}

/// Source that cannot open its edges
struct UnopenableSource;

impl GraphSource for UnopenableSource {
    fn identifiers(&self) -> Result<RecordStream<'_, Identifier>> {
        Ok(Box::new(std::iter::empty::<Result<Identifier>>()))
    }

    fn edges(&self) -> Result<RecordStream<'_, Edge>> {
        anyhow::bail!("edges table missing")
    }
}

fn scenario_source() -> InMemoryGraphSource {
    InMemoryGraphSource::default()
        .with_identifier("MIT", "Permissive")
        .with_identifier("GPL-2.0", "Copyleft")
        .with_edge("fileA.c", "MIT")
        .with_edge("fileB.c", "GPL-2.0")
}

#[test]
fn test_execute_markdown_report() {
    let use_case = GenerateReportUseCase::new(scenario_source(), MockProgressReporter::default());

    let response = use_case
        .execute(ReportRequest::new(OutputFormat::Markdown))
        .unwrap();

    assert_eq!(
        response.content,
        "## Identifiers\nMIT - Permissive\nGPL-2.0 - Copyleft\n\n## edges\nfileA.c MIT\nfileB.c GPL-2.0\n"
    );
    assert_eq!(response.identifier_count, 2);
    assert_eq!(response.edge_count, 2);
}

#[test]
fn test_execute_json_report() {
    let use_case = GenerateReportUseCase::new(scenario_source(), MockProgressReporter::default());

    let response = use_case
        .execute(ReportRequest::new(OutputFormat::Json))
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&response.content).unwrap();
    assert_eq!(parsed["identifiers"][1]["name"], "GPL-2.0");
    assert_eq!(parsed["edges"][1]["source"], "fileB.c");
    assert_eq!(response.identifier_count, 2);
    assert_eq!(response.edge_count, 2);
}

#[test]
fn test_execute_empty_graph() {
    let use_case = GenerateReportUseCase::new(
        InMemoryGraphSource::default(),
        MockProgressReporter::default(),
    );

    let response = use_case.execute(ReportRequest::default()).unwrap();

    assert_eq!(response.content, "## Identifiers\n\n## edges\n");
    assert_eq!(response.identifier_count, 0);
    assert_eq!(response.edge_count, 0);
}

#[test]
fn test_execute_reports_progress_in_order() {
    let reporter = MockProgressReporter::default();
    let use_case = GenerateReportUseCase::new(scenario_source(), reporter);

    use_case.execute(ReportRequest::default()).unwrap();

    let messages = use_case.progress_reporter.messages();
    assert_eq!(
        messages,
        vec![
            "📖 Opening graph sources...".to_string(),
            "📝 Generating Markdown report...".to_string(),
            "Count: 1 identifiers".to_string(),
            "Count: 2 identifiers".to_string(),
            "Count: 1 edges".to_string(),
            "Count: 2 edges".to_string(),
            "Completed: ✅ Rendered 2 identifier(s) and 2 edge(s)".to_string(),
        ]
    );
}

#[test]
fn test_execute_propagates_stream_fault() {
    let use_case = GenerateReportUseCase::new(
        FaultyEdgeSource { good_edges: 2 },
        MockProgressReporter::default(),
    );

    let result = use_case.execute(ReportRequest::default());

    assert!(result.is_err());
    assert_eq!(result.unwrap_err().to_string(), "connection reset");

    let messages = use_case.progress_reporter.messages();
    assert!(messages.contains(&"Count: 2 edges".to_string()));
    assert!(messages
        .iter()
        .any(|m| m == "Error: ❌ Report generation failed: connection reset"));
    assert!(!messages.iter().any(|m| m.starts_with("Completed:")));
}

#[test]
fn test_execute_fails_when_source_cannot_open() {
    let use_case = GenerateReportUseCase::new(UnopenableSource, MockProgressReporter::default());

    let result = use_case.execute(ReportRequest::default());

    assert_eq!(result.unwrap_err().to_string(), "edges table missing");
    assert_eq!(
        use_case.progress_reporter.messages(),
        vec!["📖 Opening graph sources...".to_string()]
    );
}
