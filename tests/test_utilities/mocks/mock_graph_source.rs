use depgraph_report::prelude::*;
use std::cell::Cell;

/// Mock GraphSource for testing
///
/// Serves fixed records, optionally failing after a number of them, and
/// counts how often each sequence is opened.
pub struct MockGraphSource {
    pub identifiers: Vec<(String, String)>,
    pub edges: Vec<(String, String)>,
    pub fail_identifiers_after: Option<usize>,
    pub fail_edges_after: Option<usize>,
    pub identifier_opens: Cell<usize>,
    pub edge_opens: Cell<usize>,
}

impl MockGraphSource {
    pub fn new(identifiers: &[(&str, &str)], edges: &[(&str, &str)]) -> Self {
        Self {
            identifiers: Self::owned(identifiers),
            edges: Self::owned(edges),
            fail_identifiers_after: None,
            fail_edges_after: None,
            identifier_opens: Cell::new(0),
            edge_opens: Cell::new(0),
        }
    }

    fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    pub fn failing_identifiers_after(mut self, count: usize) -> Self {
        self.fail_identifiers_after = Some(count);
        self
    }

    pub fn failing_edges_after(mut self, count: usize) -> Self {
        self.fail_edges_after = Some(count);
        self
    }

    fn stream<'a, T: 'a>(
        records: &'a [(String, String)],
        fail_after: Option<usize>,
        build: fn(&str, &str) -> T,
    ) -> RecordStream<'a, T> {
        let good = records
            .iter()
            .take(fail_after.unwrap_or(usize::MAX))
            .map(move |(a, b)| Ok(build(a, b)));
        let fault = fail_after
            .map(|after| Err(anyhow::anyhow!("Mock source failure after {} record(s)", after)));
        Box::new(good.chain(fault))
    }
}

impl GraphSource for MockGraphSource {
    fn identifiers(&self) -> Result<RecordStream<'_, Identifier>> {
        self.identifier_opens.set(self.identifier_opens.get() + 1);
        Ok(Self::stream(
            &self.identifiers,
            self.fail_identifiers_after,
            |name, value| Identifier::new(name, value),
        ))
    }

    fn edges(&self) -> Result<RecordStream<'_, Edge>> {
        self.edge_opens.set(self.edge_opens.get() + 1);
        Ok(Self::stream(
            &self.edges,
            self.fail_edges_after,
            |source, target| Edge::new(source, target),
        ))
    }
}
