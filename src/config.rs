//! Run configuration.
//!
//! The CLI parser produces raw arguments; [`Config::from_cli`] validates them
//! and turns them into the settings the pipeline consumes.

use crate::cli::parser::Cli;
use crate::error::{Error, Result};
use clap::ValueEnum;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Root of the Blogger v3 JSON API.
pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/blogger/v3";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Largest `maxResults` value the Blogger API accepts.
pub const MAX_PAGE_SIZE: u32 = 500;

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// What to do when a download's file name already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Replace the existing file.
    #[default]
    Overwrite,
    /// Leave the existing file and skip the download.
    Skip,
    /// Write to a new name with a numeric suffix.
    Rename,
}

/// Whether resolved URLs are printed or downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Print one URL per line.
    List,
    /// Save each image into `dir`.
    Download {
        /// Destination directory.
        dir: PathBuf,
        /// Collision policy.
        on_conflict: ConflictPolicy,
    },
}

/// Settings shared by every HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Per-request timeout.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Validated configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Public URL of the blog.
    pub blog_url: Url,
    /// Blogger API key.
    pub api_key: String,
    /// API root.
    pub api_base: Url,
    /// Posts per page (`maxResults`); API default when `None`.
    pub page_size: Option<u32>,
    /// List or download.
    pub mode: RunMode,
    /// HTTP client settings.
    pub http: HttpConfig,
}

impl Config {
    /// Validates parsed CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for a malformed blog or API URL, an empty
    /// API key, a zero timeout, or a page size outside `1..=500`.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let blog_url = parse_http_url(&cli.blog_url, "blog URL")?;
        let api_base = parse_http_url(&cli.api_base, "API base")?;

        let api_key = cli.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(config_error("API key must not be empty"));
        }

        if cli.timeout == 0 {
            return Err(config_error("timeout must be at least 1 second"));
        }

        if let Some(size) = cli.page_size
            && !(1..=MAX_PAGE_SIZE).contains(&size)
        {
            return Err(config_error(format!(
                "page size {size} out of range 1..={MAX_PAGE_SIZE}"
            )));
        }

        let mode = cli
            .destination
            .as_ref()
            .map_or(RunMode::List, |dir| RunMode::Download {
                dir: dir.clone(),
                on_conflict: cli.on_conflict,
            });

        Ok(Self {
            blog_url,
            api_key,
            api_base,
            page_size: cli.page_size,
            mode,
            http: HttpConfig {
                timeout: Duration::from_secs(cli.timeout),
                user_agent: cli.user_agent.clone(),
            },
        })
    }
}

fn parse_http_url(raw: &str, what: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| config_error(format!("invalid {what} {raw:?}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(config_error(format!("{what} must use http or https: {raw}")));
    }
    Ok(url)
}

fn config_error(message: impl Into<String>) -> Error {
    Error::Config {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["blogger-linked-images"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_list_mode_by_default() {
        let config = Config::from_cli(&parse(&["http://myblog.blogspot.com", "KEY"])).unwrap();
        assert_eq!(config.mode, RunMode::List);
        assert_eq!(config.api_key, "KEY");
        assert_eq!(config.api_base.as_str(), DEFAULT_API_BASE);
        assert_eq!(config.http, HttpConfig::default());
        assert!(config.page_size.is_none());
    }

    #[test]
    fn test_download_mode_with_destination() {
        let config = Config::from_cli(&parse(&[
            "http://myblog.blogspot.com",
            "KEY",
            "out",
            "--on-conflict",
            "rename",
        ]))
        .unwrap();
        assert_eq!(
            config.mode,
            RunMode::Download {
                dir: PathBuf::from("out"),
                on_conflict: ConflictPolicy::Rename,
            }
        );
    }

    #[test]
    fn test_rejects_non_http_blog_url() {
        let err = Config::from_cli(&parse(&["ftp://myblog.blogspot.com", "KEY"])).unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[test]
    fn test_rejects_unparseable_blog_url() {
        let err = Config::from_cli(&parse(&["myblog", "KEY"])).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_rejects_blank_key() {
        let err = Config::from_cli(&parse(&["http://myblog.blogspot.com", "  "])).unwrap_err();
        assert!(err.to_string().contains("API key"));
    }

    #[test]
    fn test_page_size_bounds() {
        let ok = parse(&["http://b.blogspot.com", "KEY", "--page-size", "500"]);
        assert_eq!(Config::from_cli(&ok).unwrap().page_size, Some(500));

        let too_big = parse(&["http://b.blogspot.com", "KEY", "--page-size", "501"]);
        assert!(Config::from_cli(&too_big).is_err());

        let zero = parse(&["http://b.blogspot.com", "KEY", "--page-size", "0"]);
        assert!(Config::from_cli(&zero).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let cli = parse(&["http://b.blogspot.com", "KEY", "--timeout", "0"]);
        assert!(Config::from_cli(&cli).is_err());
    }

    #[test]
    fn test_default_user_agent_names_crate() {
        assert!(DEFAULT_USER_AGENT.starts_with("blogger-linked-images/"));
    }
}
