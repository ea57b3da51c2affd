use crate::application::dto::OutputFormat;

/// ReportRequest - Internal request DTO for the report generation use case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportRequest {
    /// Layout to render the graph in
    pub format: OutputFormat,
}

impl ReportRequest {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}
