use crate::ports::outbound::{RecordStream, ReportFormatter};
use crate::report::domain::{Edge, Identifier};
use crate::report::services::ReportRenderer;
use crate::shared::Result;

/// MarkdownFormatter adapter producing the identifiers/edges report
///
/// This adapter implements the ReportFormatter port by handing both streams
/// to [`ReportRenderer`]. Values are written verbatim, with no Markdown
/// escaping.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(
        &self,
        identifiers: RecordStream<'_, Identifier>,
        edges: RecordStream<'_, Edge>,
    ) -> Result<String> {
        ReportRenderer::try_render(identifiers, edges)
    }
}
