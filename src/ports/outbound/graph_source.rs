use crate::report::domain::{Edge, Identifier};
use crate::shared::Result;

/// A lazy, single-pass sequence of records.
///
/// Each item is pulled on demand; an `Err` item is an upstream fault
/// (I/O failure, malformed row) that the consumer propagates.
pub type RecordStream<'a, T> = Box<dyn Iterator<Item = Result<T>> + 'a>;

/// GraphSource port supplying the two ordered report sequences
///
/// This port abstracts where identifiers and edges come from (record files,
/// an in-memory graph, a query over scan results). The source decides the
/// order; consumers never re-sort.
pub trait GraphSource {
    /// Opens the identifiers sequence
    ///
    /// # Errors
    /// Returns an error if the sequence cannot be opened at all
    /// (e.g. its backing file is missing)
    fn identifiers(&self) -> Result<RecordStream<'_, Identifier>>;

    /// Opens the edges sequence
    ///
    /// # Errors
    /// Returns an error if the sequence cannot be opened at all
    fn edges(&self) -> Result<RecordStream<'_, Edge>>;
}

impl<S: GraphSource + ?Sized> GraphSource for &S {
    fn identifiers(&self) -> Result<RecordStream<'_, Identifier>> {
        (**self).identifiers()
    }

    fn edges(&self) -> Result<RecordStream<'_, Edge>> {
        (**self).edges()
    }
}
