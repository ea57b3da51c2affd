use crate::application::dto::{ReportRequest, ReportResponse};
use crate::application::factories::FormatterFactory;
use crate::ports::outbound::{GraphSource, ProgressReporter, RecordStream};
use crate::shared::Result;
use std::cell::Cell;

/// Section label used for identifier progress
const IDENTIFIERS_LABEL: &str = "identifiers";

/// Section label used for edge progress
const EDGES_LABEL: &str = "edges";

/// GenerateReportUseCase - Core use case for report generation
///
/// Opens both sequences of a graph source, streams them through the
/// formatter for the requested format, and reports progress along the way.
/// Presenting the result is left to the caller.
///
/// # Type Parameters
/// * `GS` - GraphSource implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<GS, PR> {
    graph_source: GS,
    progress_reporter: PR,
}

impl<GS, PR> GenerateReportUseCase<GS, PR>
where
    GS: GraphSource,
    PR: ProgressReporter,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(graph_source: GS, progress_reporter: PR) -> Self {
        Self {
            graph_source,
            progress_reporter,
        }
    }

    /// Executes the report generation use case
    ///
    /// # Errors
    /// Returns an error if either sequence cannot be opened, if a record
    /// fault surfaces while streaming, or if formatting fails. Nothing is
    /// retried.
    pub fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        // Step 1: Open both sequences so a missing source fails before rendering
        self.progress_reporter.report("📖 Opening graph sources...");
        let identifiers = self.graph_source.identifiers()?;
        let edges = self.graph_source.edges()?;

        // Step 2: Stream both sequences through the formatter
        self.progress_reporter
            .report(FormatterFactory::progress_message(request.format));

        let identifier_count = Cell::new(0);
        let edge_count = Cell::new(0);
        let identifiers = self.counted(identifiers, &identifier_count, IDENTIFIERS_LABEL);
        let edges = self.counted(edges, &edge_count, EDGES_LABEL);

        let formatter = FormatterFactory::create(request.format);
        let content = formatter.format(identifiers, edges).inspect_err(|e| {
            self.progress_reporter
                .report_error(&format!("❌ Report generation failed: {}", e));
        })?;

        // Step 3: Build and return response
        let response =
            ReportResponse::new(content, identifier_count.get(), edge_count.get());
        self.progress_reporter.report_completion(&format!(
            "✅ Rendered {} identifier(s) and {} edge(s)",
            response.identifier_count, response.edge_count
        ));

        Ok(response)
    }

    /// Wraps a stream so every record pulled bumps `counter` and is reported
    fn counted<'a, T: 'a>(
        &'a self,
        stream: RecordStream<'a, T>,
        counter: &'a Cell<usize>,
        label: &'static str,
    ) -> RecordStream<'a, T> {
        Box::new(stream.inspect(move |record| {
            if record.is_ok() {
                counter.set(counter.get() + 1);
                self.progress_reporter.report_count(counter.get(), label);
            }
        }))
    }
}

#[cfg(test)]
mod tests;
