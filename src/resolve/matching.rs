//! Picking the full-size image out of a wrapper page.
//!
//! Blogger sometimes links a thumbnail to `.../s1600-h/photo.jpg`, which
//! serves a small HTML page embedding `.../s1600/photo.jpg`. The page may
//! carry other images too (logos, tracking pixels), so a candidate is only
//! accepted when it matches the link by one of the rules below, tried in
//! order of confidence.

use crate::core::{ImageLink, aspect_ratio, file_name};
use crate::extract::PageImage;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use url::Url;

/// Blogger size segment with the wrapper-page marker, e.g. `/s1600-h/`.
#[allow(clippy::unwrap_used)]
static WRAPPER_SIZE_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(s\d+|w\d+-h\d+)-h/").unwrap());

/// Relative aspect-ratio difference still treated as the same picture.
pub const ASPECT_TOLERANCE: f64 = 0.02;

/// Rule that accepted a wrapper-page image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// Image URL is the link target without the `-h` size marker.
    SizeSegment,
    /// Image has the same file name as the link target.
    FileName,
    /// Image and thumbnail declare the same aspect ratio.
    AspectRatio,
    /// Image is the only one on the page.
    SoleImage,
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SizeSegment => "size-segment",
            Self::FileName => "file-name",
            Self::AspectRatio => "aspect-ratio",
            Self::SoleImage => "sole-image",
        };
        f.write_str(name)
    }
}

/// Returns the link target with Blogger's `-h` size marker removed, if present.
///
/// # Examples
///
/// ```
/// use blogger_linked_images::resolve::strip_wrapper_marker;
/// use url::Url;
///
/// let url = Url::parse("http://1.bp.blogspot.com/-x/s1600-h/a.jpg").unwrap();
/// let direct = strip_wrapper_marker(&url).unwrap();
/// assert_eq!(direct.as_str(), "http://1.bp.blogspot.com/-x/s1600/a.jpg");
/// ```
#[must_use]
pub fn strip_wrapper_marker(url: &Url) -> Option<Url> {
    let path = url.path();
    if !WRAPPER_SIZE_SEGMENT.is_match(path) {
        return None;
    }
    let stripped = WRAPPER_SIZE_SEGMENT.replace(path, "/$1/");
    let mut direct = url.clone();
    direct.set_path(&stripped);
    Some(direct)
}

/// Chooses the embedded image that stands for `link`, if any is convincing.
///
/// Returns the first image (in document order) matched by the strongest
/// applicable rule.
#[must_use]
pub fn select_embedded<'a>(
    link: &ImageLink,
    images: &'a [PageImage],
) -> Option<(&'a PageImage, MatchRule)> {
    if let Some(direct) = strip_wrapper_marker(&link.href)
        && let Some(image) = images.iter().find(|i| same_resource(&i.url, &direct))
    {
        return Some((image, MatchRule::SizeSegment));
    }

    if let Some(target) = file_name(&link.href)
        && let Some(image) = images
            .iter()
            .find(|i| file_name(&i.url).is_some_and(|n| n.eq_ignore_ascii_case(target)))
    {
        return Some((image, MatchRule::FileName));
    }

    if let Some(expected) = link.aspect_ratio()
        && let Some(image) = images.iter().find(|i| {
            aspect_ratio(i.width, i.height)
                .is_some_and(|actual| (actual - expected).abs() <= expected * ASPECT_TOLERANCE)
        })
    {
        return Some((image, MatchRule::AspectRatio));
    }

    match images {
        [only] => Some((only, MatchRule::SoleImage)),
        _ => None,
    }
}

/// Compares two URLs ignoring scheme, so `http` and `https` copies match.
fn same_resource(a: &Url, b: &Url) -> bool {
    a.host_str() == b.host_str() && a.path() == b.path() && a.query() == b.query()
}
