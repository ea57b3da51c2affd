//! depgraph-report - render identifier/edge provenance graphs as reports
//!
//! This library turns two ordered sequences, identifiers (name/value pairs
//! such as license tokens) and edges (source/target relationships), into a
//! fixed-layout Markdown report or a JSON document, following hexagonal
//! architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`report`): Identifier/edge types and the report renderer
//! - **Application Layer** (`application`): Use cases, DTOs, and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use depgraph_report::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let source = InMemoryGraphSource::default()
//!     .with_identifier("MIT", "Permissive")
//!     .with_edge("fileA.c", "MIT");
//!
//! let use_case = GenerateReportUseCase::new(source, StderrProgressReporter::new());
//! let response = use_case.execute(ReportRequest::new(OutputFormat::Markdown))?;
//!
//! assert_eq!(
//!     response.content,
//!     "## Identifiers\nMIT - Permissive\n\n## edges\nfileA.c MIT\n"
//! );
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod report;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, RecordFileSource, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::memory::InMemoryGraphSource;
    pub use crate::application::dto::{OutputFormat, ReportRequest, ReportResponse};
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::use_cases::GenerateReportUseCase;
    pub use crate::ports::outbound::{
        GraphSource, OutputPresenter, ProgressReporter, RecordStream, ReportFormatter,
    };
    pub use crate::report::domain::{Edge, Identifier};
    pub use crate::report::services::ReportRenderer;
    pub use crate::shared::Result;
}
