//! Fetcher trait definition.
//!
//! Every network access in the pipeline goes through [`Fetcher`], so the
//! enumerator, resolver and download sink can be driven by an in-memory
//! implementation in tests.

use crate::error::Result;
use url::Url;

/// An HTTP response.
///
/// `body` is empty when the caller chose not to read it (see
/// [`Fetcher::fetch`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Final URL after redirects.
    pub url: Url,

    /// Value of the `Content-Type` header, if present.
    pub content_type: Option<String>,

    /// Response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a response.
    #[must_use]
    pub fn new(url: Url, content_type: Option<&str>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            url,
            content_type: content_type.map(str::to_string),
            body: body.into(),
        }
    }

    /// Returns the media type without parameters, lowercased.
    ///
    /// `"text/html; charset=UTF-8"` becomes `"text/html"`.
    #[must_use]
    pub fn media_type(&self) -> Option<String> {
        self.content_type
            .as_deref()
            .and_then(|ct| ct.split(';').next())
            .map(|ct| ct.trim().to_ascii_lowercase())
            .filter(|ct| !ct.is_empty())
    }

    /// Returns true if the content type is `image/*`.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.media_type().is_some_and(|ct| ct.starts_with("image/"))
    }

    /// Returns true if the content type is an HTML document.
    #[must_use]
    pub fn is_html(&self) -> bool {
        self.media_type()
            .is_some_and(|ct| ct == "text/html" || ct == "application/xhtml+xml")
    }

    /// Returns true if the server did not say what the body is.
    #[must_use]
    pub fn is_untyped(&self) -> bool {
        self.media_type()
            .is_none_or(|ct| ct == "application/octet-stream")
    }

    /// Decodes the body as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Trait for blocking HTTP GET access.
///
/// Implementations must return an error for non-success statuses, and must
/// not include the `key` query parameter in any error message.
pub trait Fetcher {
    /// Performs a GET request, reading the body only if `read_body` accepts
    /// the response head (a [`Response`] with an empty body).
    ///
    /// A skipped body is not downloaded.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    fn fetch(&self, url: &Url, read_body: &dyn Fn(&Response) -> bool) -> Result<Response>;

    /// Performs a GET request and reads the whole body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    fn get(&self, url: &Url) -> Result<Response> {
        self.fetch(url, &|_| true)
    }
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &Url, read_body: &dyn Fn(&Response) -> bool) -> Result<Response> {
        (**self).fetch(url, read_body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(content_type: Option<&str>) -> Response {
        Response::new(
            Url::parse("https://example.com/a.jpg").unwrap(),
            content_type,
            b"data".to_vec(),
        )
    }

    #[test]
    fn test_media_type_strips_parameters() {
        let resp = response(Some("Text/HTML; charset=UTF-8"));
        assert_eq!(resp.media_type().as_deref(), Some("text/html"));
        assert!(resp.is_html());
        assert!(!resp.is_image());
    }

    #[test]
    fn test_is_image() {
        assert!(response(Some("image/jpeg")).is_image());
        assert!(!response(Some("application/json")).is_image());
        assert!(!response(None).is_image());
    }

    #[test]
    fn test_is_untyped() {
        assert!(response(None).is_untyped());
        assert!(response(Some("")).is_untyped());
        assert!(response(Some("application/octet-stream")).is_untyped());
        assert!(!response(Some("image/png")).is_untyped());
    }

    struct PngFetcher;

    impl Fetcher for PngFetcher {
        fn fetch(&self, url: &Url, read_body: &dyn Fn(&Response) -> bool) -> Result<Response> {
            let mut response = Response::new(url.clone(), Some("image/png"), Vec::new());
            if read_body(&response) {
                response.body = b"png".to_vec();
            }
            Ok(response)
        }
    }

    #[test]
    fn test_get_reads_body() {
        let url = Url::parse("https://example.com/a.png").unwrap();
        assert_eq!(PngFetcher.get(&url).unwrap().body, b"png");
    }

    #[test]
    fn test_fetch_can_skip_body() {
        let url = Url::parse("https://example.com/a.png").unwrap();
        let head = PngFetcher.fetch(&url, &Response::is_html).unwrap();
        assert!(head.is_image());
        assert!(head.body.is_empty());
    }

    #[test]
    fn test_text_is_lossy() {
        let resp = Response::new(
            Url::parse("https://example.com/").unwrap(),
            Some("text/html"),
            vec![b'o', b'k', 0xff],
        );
        assert!(resp.text().starts_with("ok"));
    }
}
