use crate::ports::outbound::RecordStream;
use crate::report::domain::{Edge, Identifier};
use crate::shared::Result;

/// ReportFormatter port for turning graph sequences into report text
///
/// This port abstracts the output layout (the Markdown report, JSON, etc.).
pub trait ReportFormatter {
    /// Formats the identifiers and edges into a single document
    ///
    /// # Arguments
    /// * `identifiers` - Identifier records in report order
    /// * `edges` - Edge records in report order
    ///
    /// # Returns
    /// Formatted report content as a string
    ///
    /// # Errors
    /// Returns the first fault yielded by either stream, or a serialization error
    fn format(
        &self,
        identifiers: RecordStream<'_, Identifier>,
        edges: RecordStream<'_, Edge>,
    ) -> Result<String>;
}
