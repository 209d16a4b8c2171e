//! # blogger-linked-images
//!
//! Finds images in Blogger posts that link to a larger version and either
//! lists the full-size URLs or downloads them.
//!
//! A run walks every post of a blog through the Blogger JSON API, picks out
//! `<a href=...><img ...></a>` pairs whose link points at an image, and
//! resolves each link:
//!
//! - **Direct**: the link serves the image itself
//! - **Wrapper page**: the link serves an HTML page showing the image, which
//!   is located by matching it against the thumbnail
//!
//! ## Example
//!
//! ```no_run
//! use blogger_linked_images::{Config, Pipeline, ListSink, HttpClient, Cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["blogger-linked-images", "http://myblog.blogspot.com", "KEY"]);
//! let config = Config::from_cli(&cli)?;
//! let client = HttpClient::new(&config.http)?;
//! let report = Pipeline::new(&client, &config)
//!     .run(&config.blog_url, &mut ListSink::new(std::io::stdout()))?;
//! assert!(report.posts > 0);
//! # Ok::<(), blogger_linked_images::Error>(())
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod extract;
pub mod http;
pub mod io;
pub mod logging;
pub mod pipeline;
pub mod resolve;
pub mod sink;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{ImageLink, Post, Resolution};

// Re-export pipeline stages
pub use api::{BloggerApi, Posts};
pub use extract::find_linked_images;
pub use http::{Fetcher, HttpClient, Response};
pub use pipeline::{Pipeline, RunReport};
pub use resolve::LinkResolver;
pub use sink::{DownloadSink, ListSink, Sink, SinkOutcome};

// Re-export configuration and CLI types
pub use cli::{Cli, OutputFormat};
pub use config::{Config, ConflictPolicy, RunMode};
