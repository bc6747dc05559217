//! Port list report generation
//!
//! The report has two tables: ports built from an upstream archive, then
//! local-only ports. Both list ports in name order.

use std::io::Write;
use std::path::PathBuf;

use crate::error::ReportError;
use crate::port::Port;
use crate::row::RowFormatter;
use crate::scan::scan_ports;

/// Default base URL for source-browsing links.
pub const DEFAULT_SRC_URL: &str = "https://chromium.googlesource.com/external/naclports/+/master";

/// Default project name shown in the summary line.
pub const DEFAULT_PROJECT: &str = "naclports";

/// Location of the generator, relative to the repository root.
pub const GENERATOR_PATH: &str = "crates/portlist-cli/src/main.rs";

/// Settings for a single report run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Repository root; links are relative to it.
    pub repo_root: PathBuf,
    /// Directory scanned for ports.
    pub ports_dir: PathBuf,
    /// Base URL for source-browsing links.
    pub src_url: String,
    /// Project name used in the header.
    pub project: String,
}

impl ReportConfig {
    /// Config for a repository whose ports live in `<repo_root>/ports`.
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        let repo_root = repo_root.into();
        Self {
            ports_dir: repo_root.join("ports"),
            repo_root,
            src_url: DEFAULT_SRC_URL.to_string(),
            project: DEFAULT_PROJECT.to_string(),
        }
    }

    /// Override the source-browsing URL.
    pub fn with_src_url(mut self, src_url: impl Into<String>) -> Self {
        self.src_url = src_url.into();
        self
    }

    /// Override the project name.
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }
}

/// Port counts for each table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Ports with an upstream archive.
    pub upstream: usize,
    /// Local-only ports.
    pub local: usize,
}

impl ReportSummary {
    /// All ports listed.
    pub fn total(&self) -> usize {
        self.upstream + self.local
    }
}

/// Fixed preamble and column headers.
pub fn header(config: &ReportConfig) -> String {
    let src_url = config.src_url.trim_end_matches('/');
    let project = &config.project;
    format!(
        "#summary List of ports available in {project}.
= List of available ports =

Ports are listed in alphabetical order, with links to the upstream
source archive and the patch used when building.
This listing is auto-generated by the
[{src_url}/{GENERATOR_PATH} portlist]
tool.

|| *Name* || *Version* || *Upstream Archive* || *Patch* || *Libc* || *Arch* || *Builds on* ||"
    )
}

/// Scan the configured port tree and write the report to `out`.
///
/// # Errors
///
/// Fails if any port cannot be loaded, a patch file cannot be inspected,
/// or `out` cannot be written. Nothing is recovered: a failure aborts the
/// whole report.
pub fn generate<W: Write>(config: &ReportConfig, out: &mut W) -> Result<ReportSummary, ReportError> {
    let mut ports = scan_ports(&config.ports_dir)?;
    ports.sort();
    render(config, &ports, out)
}

/// Write the report for an already sorted set of ports.
///
/// # Errors
///
/// Fails if a patch file cannot be inspected or `out` cannot be written.
pub fn render<W: Write>(
    config: &ReportConfig,
    ports: &[Port],
    out: &mut W,
) -> Result<ReportSummary, ReportError> {
    let formatter = RowFormatter::new(&config.repo_root, &config.src_url);
    let mut summary = ReportSummary::default();

    writeln!(out, "{}", header(config))?;

    for port in ports {
        if let Some(row) = formatter.upstream_row(port)? {
            writeln!(out, "{row}")?;
            summary.upstream += 1;
        }
    }
    writeln!(out, "\n_Total = {}_\n", summary.upstream)?;

    writeln!(out, "= Local Ports (not based on upstream sources) =\n")?;
    for port in ports.iter().filter(|p| p.is_local()) {
        writeln!(out, "{}", formatter.local_row(port))?;
        summary.local += 1;
    }
    writeln!(out, "\n_Total = {}_\n", summary.local)?;

    tracing::info!(
        "Listed {} upstream and {} local ports",
        summary.upstream,
        summary.local
    );
    Ok(summary)
}
