/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr)
/// to provide user feedback while record streams are consumed.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports how many records of a section have been streamed so far
    ///
    /// # Arguments
    /// * `count` - Records consumed so far
    /// * `label` - Section being streamed (e.g. "identifiers")
    fn report_count(&self, count: usize, label: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
