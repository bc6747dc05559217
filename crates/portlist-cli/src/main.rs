//! portlist - wiki listing of available ports
//!
//! Prints the report to stdout. Logs go to stderr.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use portlist_core::report::{self, DEFAULT_PROJECT, DEFAULT_SRC_URL, ReportConfig};

#[derive(Debug, Parser)]
#[command(name = "portlist")]
#[command(author, version, about = "Generate a wiki-formatted list of available ports")]
struct Cli {
    /// Log every port found while scanning
    #[arg(short, long)]
    verbose: bool,

    /// Repository root; ports are read from `<root>/ports`
    #[arg(long, env = "PORTLIST_ROOT", default_value = ".")]
    root: PathBuf,

    /// Base URL for source-browsing links
    #[arg(long, env = "PORTLIST_SRC_URL", default_value = DEFAULT_SRC_URL)]
    src_url: String,

    /// Project name shown in the report summary line
    #[arg(long, env = "PORTLIST_PROJECT", default_value = DEFAULT_PROJECT)]
    project: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ReportConfig::new(&cli.root)
        .with_src_url(cli.src_url)
        .with_project(cli.project);
    tracing::debug!("Scanning {}", config.ports_dir.display());

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let summary = report::generate(&config, &mut out)
        .with_context(|| format!("Failed to list ports under {}", cli.root.display()))?;
    out.flush().context("Failed to flush report")?;
    tracing::debug!("Wrote {} ports", summary.total());

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
