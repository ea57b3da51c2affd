use crate::ports::outbound::{GraphSource, RecordStream};
use crate::report::domain::{Edge, Identifier};
use crate::shared::Result;

/// InMemoryGraphSource adapter replaying identifiers and edges held in memory
///
/// Useful when the graph has already been computed by the caller. Unlike a
/// record file, the sequences can be opened any number of times.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGraphSource {
    identifiers: Vec<Identifier>,
    edges: Vec<Edge>,
}

impl InMemoryGraphSource {
    pub fn new(identifiers: Vec<Identifier>, edges: Vec<Edge>) -> Self {
        Self { identifiers, edges }
    }

    /// Appends an identifier after those already held
    pub fn with_identifier(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.identifiers.push(Identifier::new(name, value));
        self
    }

    /// Appends an edge after those already held
    pub fn with_edge(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.edges.push(Edge::new(source, target));
        self
    }
}

impl GraphSource for InMemoryGraphSource {
    fn identifiers(&self) -> Result<RecordStream<'_, Identifier>> {
        Ok(Box::new(self.identifiers.iter().cloned().map(Ok::<_, anyhow::Error>)))
    }

    fn edges(&self) -> Result<RecordStream<'_, Edge>> {
        Ok(Box::new(self.edges.iter().cloned().map(Ok::<_, anyhow::Error>)))
    }
}
