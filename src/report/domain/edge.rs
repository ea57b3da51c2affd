use serde::{Deserialize, Serialize};

/// A directed relationship from `source` to `target`, e.g. a file that
/// references a license identifier.
///
/// Neither end is checked against the known identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl<S, T> From<(S, T)> for Edge
where
    S: Into<String>,
    T: Into<String>,
{
    fn from((source, target): (S, T)) -> Self {
        Self::new(source, target)
    }
}

impl From<&Edge> for Edge {
    fn from(edge: &Edge) -> Self {
        edge.clone()
    }
}
