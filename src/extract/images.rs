//! `<img>` enumeration for wrapper pages.

use crate::extract::{IMG_SELECTOR, absolute_url, parse_dimension};
use scraper::Html;
use url::Url;

/// An image element found on an HTML page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    /// Absolute image URL.
    pub url: Url,
    /// Declared `width`, if any.
    pub width: Option<u32>,
    /// Declared `height`, if any.
    pub height: Option<u32>,
}

/// Lists the images of an HTML document in document order.
///
/// Sources are resolved against `base` (normally the page's own URL);
/// sources that cannot be made absolute are dropped.
#[must_use]
pub fn page_images(html: &str, base: &Url) -> Vec<PageImage> {
    let document = Html::parse_document(html);
    document
        .select(&IMG_SELECTOR)
        .filter_map(|img| {
            let url = absolute_url(Some(base), img.value().attr("src")?)?;
            Some(PageImage {
                url,
                width: parse_dimension(img.value().attr("width")),
                height: parse_dimension(img.value().attr("height")),
            })
        })
        .collect()
}
