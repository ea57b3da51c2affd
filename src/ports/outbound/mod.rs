/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (record files, file system, console, etc.).
pub mod formatter;
pub mod graph_source;
pub mod output_presenter;
pub mod progress_reporter;

pub use formatter::ReportFormatter;
pub use graph_source::{GraphSource, RecordStream};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
