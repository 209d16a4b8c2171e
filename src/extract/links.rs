//! Linked image extraction from post bodies.
//!
//! A linked image is an `<img>` whose nearest enclosing `<a href>` points at
//! an image file or a Blogger image host:
//!
//! ```html
//! <a href="http://1.bp.blogspot.com/.../s1600/photo.jpg">
//!   <img src="http://1.bp.blogspot.com/.../s320/photo.jpg" width="320" height="240">
//! </a>
//! ```

use crate::core::{ImageLink, Post, is_image_link};
use crate::extract::{IMG_SELECTOR, absolute_url, parse_dimension};
use scraper::{ElementRef, Html};
use tracing::debug;

/// Finds every linked image in a post, in document order.
///
/// Anchors whose target is neither an image file nor on a Blogger image
/// host are ignored, as are images outside any anchor and references that
/// cannot be made absolute. An anchor wrapping several images yields one
/// link per image.
#[must_use]
pub fn find_linked_images(post: &Post) -> Vec<ImageLink> {
    let base = post.base_url();
    let document = Html::parse_fragment(&post.content);
    let mut links = Vec::new();

    for img in document.select(&IMG_SELECTOR) {
        let Some(anchor) = enclosing_anchor(img) else {
            continue;
        };
        let (Some(href), Some(src)) = (anchor.value().attr("href"), img.value().attr("src")) else {
            continue;
        };

        let Some(target) = absolute_url(base.as_ref(), href) else {
            debug!(post = post.label(), href, "skipping unusable link");
            continue;
        };
        if !is_image_link(&target) {
            continue;
        }
        let Some(thumbnail) = absolute_url(base.as_ref(), src) else {
            debug!(post = post.label(), src, "skipping unusable image source");
            continue;
        };

        let width = parse_dimension(img.value().attr("width"));
        let height = parse_dimension(img.value().attr("height"));
        links.push(ImageLink::new(&post.id, target, thumbnail).with_dimensions(width, height));
    }

    links
}

/// Nearest ancestor `<a>` carrying an `href`.
fn enclosing_anchor(img: ElementRef<'_>) -> Option<ElementRef<'_>> {
    img.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "a" && el.value().attr("href").is_some())
}
