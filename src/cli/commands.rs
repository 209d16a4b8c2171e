//! CLI command implementation.
//!
//! Wires validated configuration, the HTTP client, the pipeline and the
//! chosen sink together.

use crate::cli::output::format_report;
use crate::cli::parser::Cli;
use crate::config::{Config, RunMode};
use crate::error::Result;
use crate::http::HttpClient;
use crate::pipeline::{Pipeline, RunReport};
use crate::sink::{DownloadSink, ListSink};
use std::io;

/// Executes a run.
///
/// Image URLs (list mode) or download progress lines are streamed to
/// stdout while the run proceeds.
///
/// # Returns
///
/// The formatted run summary.
///
/// # Errors
///
/// Returns an error if the arguments are invalid, the destination cannot
/// be created, or the blog cannot be looked up.
pub fn execute(cli: &Cli) -> Result<String> {
    let config = Config::from_cli(cli)?;
    let report = run(&config)?;
    Ok(format_report(&report, cli.is_download(), cli.format))
}

/// Runs the pipeline for a validated configuration.
///
/// # Errors
///
/// See [`execute`].
pub fn run(config: &Config) -> Result<RunReport> {
    let client = HttpClient::new(&config.http)?;
    let pipeline = Pipeline::new(&client, config);
    let stdout = io::stdout().lock();

    match &config.mode {
        RunMode::List => pipeline.run(&config.blog_url, &mut ListSink::new(stdout)),
        RunMode::Download { dir, on_conflict } => {
            let mut sink = DownloadSink::new(&client, dir, *on_conflict, stdout)?;
            pipeline.run(&config.blog_url, &mut sink)
        }
    }
}
