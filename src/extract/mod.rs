//! HTML scanning.
//!
//! Finds linked images in post bodies and the `<img>` elements of wrapper
//! pages, using `scraper` for parsing.

pub mod images;
pub mod links;

pub use images::{PageImage, page_images};
pub use links::find_linked_images;

use scraper::Selector;
use std::sync::LazyLock;
use url::Url;

#[allow(clippy::unwrap_used)]
pub(crate) static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img[src]").unwrap());

/// Turns an attribute value into an absolute URL.
///
/// Relative references are joined onto `base`. Protocol-relative
/// references (`//host/path`) default to `https` when there is no base.
/// Returns `None` for empty or unparseable values and non-http(s) schemes.
///
/// # Examples
///
/// ```
/// use blogger_linked_images::extract::absolute_url;
/// use url::Url;
///
/// let base = Url::parse("http://myblog.blogspot.com/2012/10/post.html").unwrap();
/// let url = absolute_url(Some(&base), "/img/a.jpg").unwrap();
/// assert_eq!(url.as_str(), "http://myblog.blogspot.com/img/a.jpg");
/// ```
#[must_use]
pub fn absolute_url(base: Option<&Url>, raw: &str) -> Option<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let parsed = match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => match base {
            Some(base) => base.join(raw).ok(),
            None if raw.starts_with("//") => Url::parse(&format!("https:{raw}")).ok(),
            None => None,
        },
        Err(_) => None,
    }?;

    matches!(parsed.scheme(), "http" | "https").then_some(parsed)
}

/// Parses a `width`/`height` attribute such as `"320"` or `"320px"`.
pub(crate) fn parse_dimension(raw: Option<&str>) -> Option<u32> {
    let raw = raw?.trim();
    let digits = raw.strip_suffix("px").unwrap_or(raw).trim();
    digits.parse().ok().filter(|v| *v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_absolute_url_passthrough() {
        let url = absolute_url(None, "https://1.bp.blogspot.com/a/s1600/x.jpg").unwrap();
        assert_eq!(url.as_str(), "https://1.bp.blogspot.com/a/s1600/x.jpg");
    }

    #[test]
    fn test_protocol_relative_without_base() {
        let url = absolute_url(None, "//1.bp.blogspot.com/x.jpg").unwrap();
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn test_protocol_relative_with_base_keeps_scheme() {
        let base = Url::parse("http://myblog.blogspot.com/").unwrap();
        let url = absolute_url(Some(&base), "//1.bp.blogspot.com/x.jpg").unwrap();
        assert_eq!(url.as_str(), "http://1.bp.blogspot.com/x.jpg");
    }

    #[test]
    fn test_rejects_unusable_references() {
        assert!(absolute_url(None, "").is_none());
        assert!(absolute_url(None, "x.jpg").is_none());
        assert!(absolute_url(None, "javascript:void(0)").is_none());
        assert!(absolute_url(None, "mailto:me@example.com").is_none());
    }

    #[test_case(Some("320"), Some(320) ; "plain")]
    #[test_case(Some(" 240px "), Some(240) ; "px suffix")]
    #[test_case(Some("50%"), None ; "percentage")]
    #[test_case(Some("0"), None ; "zero")]
    #[test_case(None, None ; "missing")]
    fn test_parse_dimension(raw: Option<&str>, expected: Option<u32>) {
        assert_eq!(parse_dimension(raw), expected);
    }
}
