use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report rendered and presented
    Success = 0,
    /// Application error (missing record file, malformed record, I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for report generation.
///
/// The renderer never produces these; they come from the graph sources,
/// presenters, and configuration loading around it.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Record file not found: {path}\n\n💡 Hint: {suggestion}")]
    RecordFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read record file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    RecordFileReadError { path: PathBuf, details: String },

    #[error("Malformed record in {path} at line {line}: {content:?}\n\n💡 Hint: Each line must hold two fields separated by a tab")]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Invalid config: {message}\n\n💡 Hint: {hint}")]
    InvalidConfig { message: String, hint: String },
}
