//! HTTP layer for blogger-linked-images.
//!
//! Provides the [`Fetcher`] seam used by every pipeline stage and its
//! production implementation on top of `reqwest`'s blocking client.

pub mod client;
pub mod traits;

pub use client::HttpClient;
pub use traits::{Fetcher, Response};

use url::Url;

/// Query parameter carrying the API key.
pub const API_KEY_PARAM: &str = "key";

/// Renders a URL for logs and errors with the API key masked.
///
/// # Examples
///
/// ```
/// use blogger_linked_images::http::redact;
/// use url::Url;
///
/// let url = Url::parse("https://api.example.com/blogs?key=secret&pageToken=abc").unwrap();
/// assert_eq!(redact(&url), "https://api.example.com/blogs?key=***&pageToken=abc");
/// ```
#[must_use]
pub fn redact(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == API_KEY_PARAM) {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == API_KEY_PARAM {
                "***".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();

    let mut masked = url.clone();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}
