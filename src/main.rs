mod cli;

use cli::Args;
use depgraph_report::adapters::outbound::console::StderrProgressReporter;
use depgraph_report::adapters::outbound::filesystem::RecordFileSource;
use depgraph_report::application::dto::ReportRequest;
use depgraph_report::application::factories::{PresenterFactory, PresenterType};
use depgraph_report::application::use_cases::GenerateReportUseCase;
use depgraph_report::config::{discover_config, load_config_from_path};
use depgraph_report::shared::error::ExitCode;
use depgraph_report::shared::Result;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on invalid input)
    let args = Args::parse_args();

    // Load config: explicit path first, then auto-discovery in the working directory
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };
    let options = args.resolve(config)?;

    // Create adapters (Dependency Injection)
    let graph_source = RecordFileSource::new(options.identifiers, options.edges);
    let progress_reporter = StderrProgressReporter::new();

    let use_case = GenerateReportUseCase::new(graph_source, progress_reporter);
    let response = use_case.execute(ReportRequest::new(options.format))?;

    // Present output
    let presenter = PresenterFactory::create(PresenterType::from_output(options.output));
    presenter.present(&response.content)?;

    Ok(())
}
