use clap::Parser;
use depgraph_report::application::dto::OutputFormat;
use depgraph_report::config::ConfigFile;
use depgraph_report::shared::Result;
use std::path::PathBuf;

/// Render identifier/edge provenance graphs as Markdown or JSON reports
#[derive(Parser, Debug)]
#[command(name = "depgraph-report")]
#[command(version)]
#[command(about = "Render identifier/edge provenance graphs as Markdown or JSON reports", long_about = None)]
pub struct Args {
    /// Record file of identifiers, one `<name>\t<value>` per line
    #[arg(short, long, value_name = "FILE")]
    pub identifiers: Option<PathBuf>,

    /// Record file of edges, one `<source>\t<target>` per line
    #[arg(short, long, value_name = "FILE")]
    pub edges: Option<PathBuf>,

    /// Output format: markdown or json [default: markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file (defaults to depgraph-report.config.yml in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Options after merging command-line flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub identifiers: Option<PathBuf>,
    pub edges: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Merges these flags over `config`; a flag always wins over its config key.
    pub fn resolve(self, config: Option<ConfigFile>) -> Result<ResolvedOptions> {
        let config = config.unwrap_or_default();
        let format = match self.format {
            Some(format) => format,
            None => config.output_format()?.unwrap_or_default(),
        };

        Ok(ResolvedOptions {
            identifiers: self.identifiers.or(config.identifiers),
            edges: self.edges.or(config.edges),
            format,
            output: self.output.or(config.output),
        })
    }
}
