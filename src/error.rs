//! Error types for blogger-linked-images.
//!
//! This module provides the error hierarchy using `thiserror` for every stage
//! of the pipeline: talking to the Blogger API, fetching resources, resolving
//! links, writing files, and validating configuration.

use thiserror::Error;

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Blogger API errors (blog lookup, post listing).
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Transport-level errors while fetching a resource.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// A linked image could not be resolved.
    #[error("resolve error: {0}")]
    Resolve(#[from] ResolveError),

    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

/// Errors returned while talking to the Blogger API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The response body was not the JSON we expected.
    #[error("unexpected response from {endpoint}: {reason}")]
    InvalidResponse {
        /// API endpoint (without credentials).
        endpoint: String,
        /// Parser message.
        reason: String,
    },

    /// The blog lookup returned no usable id.
    #[error("blog not found: {url}")]
    BlogNotFound {
        /// Blog URL that was looked up.
        url: String,
    },

    /// The API handed back a page token it had already given us.
    #[error("page token repeated: {token}")]
    RepeatedPageToken {
        /// The repeated token.
        token: String,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Transport errors for a single HTTP request.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    Status {
        /// Requested URL (without credentials).
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// Connection, TLS or timeout failure.
    #[error("request failed: {0}")]
    Transport(String),

    /// A URL could not be parsed or joined.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Reasons a linked image could not be turned into a real image URL.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The wrapper page had no image we trust.
    #[error("no matching image in wrapper page {url} ({candidates} candidates)")]
    NoConfidentMatch {
        /// Wrapper page URL.
        url: String,
        /// Number of `<img>` elements inspected.
        candidates: usize,
    },

    /// The link target is neither an image nor an HTML page.
    #[error("unsupported content type {content_type} at {url}")]
    UnsupportedContent {
        /// Link target URL.
        url: String,
        /// Reported content type.
        content_type: String,
    },
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Directory creation error.
    #[error("failed to create directory: {path}: {reason}")]
    DirectoryFailed {
        /// Path to the directory.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Destination exists but is not a directory.
    #[error("not a directory: {path}")]
    NotADirectory {
        /// Offending path.
        path: String,
    },

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Generic(String),
}

// Implement From traits for library errors

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Generic(err.to_string()))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        // Request URLs carry the API key; never let them into messages.
        Self::Transport(err.without_url().to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(err.into())
    }
}

impl From<url::ParseError> for FetchError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::Fetch(err.into())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Api(err.into())
    }
}
