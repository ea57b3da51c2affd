use serde::{Deserialize, Serialize};

/// A name/value pair detected during a scan, such as a license token and
/// its classification.
///
/// Identifiers carry no uniqueness guarantee. Both fields are kept exactly
/// as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    pub value: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl<N, V> From<(N, V)> for Identifier
where
    N: Into<String>,
    V: Into<String>,
{
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}

impl From<&Identifier> for Identifier {
    fn from(identifier: &Identifier) -> Self {
        identifier.clone()
    }
}
