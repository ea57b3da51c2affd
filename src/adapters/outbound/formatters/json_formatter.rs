use crate::ports::outbound::{RecordStream, ReportFormatter};
use crate::report::domain::{Edge, Identifier};
use crate::shared::Result;
use serde::Serialize;

/// JSON document mirroring the two report sections
#[derive(Debug, Serialize)]
struct JsonReport {
    identifiers: Vec<Identifier>,
    edges: Vec<Edge>,
}

/// JsonFormatter adapter producing a machine-readable report
///
/// Output shape:
///
/// ```json
/// {
///   "identifiers": [{ "name": "MIT", "value": "Permissive" }],
///   "edges": [{ "source": "fileA.c", "target": "MIT" }]
/// }
/// ```
///
/// Records keep stream order. Unlike the Markdown report the whole graph is
/// collected before serialization.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(
        &self,
        identifiers: RecordStream<'_, Identifier>,
        edges: RecordStream<'_, Edge>,
    ) -> Result<String> {
        let report = JsonReport {
            identifiers: identifiers.collect::<Result<_>>()?,
            edges: edges.collect::<Result<_>>()?,
        };

        let mut json = serde_json::to_string_pretty(&report)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON report: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
