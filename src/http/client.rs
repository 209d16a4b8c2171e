//! Blocking HTTP client backed by `reqwest`.

use crate::config::HttpConfig;
use crate::error::{FetchError, Result};
use crate::http::redact;
use crate::http::traits::{Fetcher, Response};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use url::Url;

/// [`Fetcher`] implementation using a shared `reqwest` blocking client.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Builds a client with the configured timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(FetchError::from)?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpClient {
    fn fetch(&self, url: &Url, read_body: &dyn Fn(&Response) -> bool) -> Result<Response> {
        debug!(url = %redact(url), "GET");

        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(FetchError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: redact(url),
                status: status.as_u16(),
            }
            .into());
        }

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let mut head = Response {
            url: final_url,
            content_type,
            body: Vec::new(),
        };
        if !read_body(&head) {
            // Dropping the response closes the connection without reading on.
            debug!(url = %redact(url), "body not read");
            return Ok(head);
        }

        head.body = response.bytes().map_err(FetchError::from)?.to_vec();
        Ok(head)
    }
}
