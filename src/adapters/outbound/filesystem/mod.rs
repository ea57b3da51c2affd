/// Filesystem adapters for record file input and report output
mod file_writer;
mod record_file_source;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use record_file_source::RecordFileSource;
