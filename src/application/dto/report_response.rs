/// ReportResponse - Internal response DTO from the report generation use case
///
/// Carries the rendered document along with how many records each
/// section received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportResponse {
    /// The formatted report
    pub content: String,
    /// Number of identifier records rendered
    pub identifier_count: usize,
    /// Number of edge records rendered
    pub edge_count: usize,
}

impl ReportResponse {
    pub fn new(content: String, identifier_count: usize, edge_count: usize) -> Self {
        Self {
            content,
            identifier_count,
            edge_count,
        }
    }
}
