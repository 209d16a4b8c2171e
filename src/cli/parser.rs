//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::cli::output::OutputFormat;
use crate::config::{ConflictPolicy, DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use clap::Parser;
use std::path::PathBuf;

/// Find images in Blogger posts that link to a larger image.
///
/// Without a destination directory the resolved full-size image URLs are
/// printed one per line. With one, each image is downloaded into it.
#[derive(Parser, Debug)]
#[command(name = "blogger-linked-images")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Public URL of the blog, e.g. `http://myblog.blogspot.com`.
    pub blog_url: String,

    /// Blogger API key.
    pub api_key: String,

    /// Directory to download images into (list URLs if omitted).
    pub destination: Option<PathBuf>,

    /// What to do when a downloaded file name already exists.
    #[arg(long, value_enum, default_value_t = ConflictPolicy::Overwrite)]
    pub on_conflict: ConflictPolicy,

    /// Number of posts requested per API page (1-500).
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Request timeout in seconds.
    #[arg(long, env = "BLI_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// User-Agent header sent with every request.
    #[arg(long, env = "BLI_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Root URL of the Blogger JSON API.
    #[arg(long, env = "BLI_API_BASE", default_value = DEFAULT_API_BASE, hide = true)]
    pub api_base: String,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format for the run summary.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Cli {
    /// Returns true when images will be downloaded rather than listed.
    #[must_use]
    pub const fn is_download(&self) -> bool {
        self.destination.is_some()
    }
}
