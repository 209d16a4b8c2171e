//! Linked images and their resolution outcome.

use serde::Serialize;
use url::Url;

/// File extensions treated as images when checking a link target.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "gif", "jpg", "jpeg"];

/// Hosts that only serve Blogger-uploaded images, often without an
/// extension (`.../s1600/IMG_1234`, `.../img/a/AVvX...=s1600`).
///
/// An entry matches the host itself and any subdomain of it.
pub const IMAGE_HOSTS: &[&str] = &["bp.blogspot.com", "blogger.googleusercontent.com"];

/// An `<img>` found inside an `<a>` whose target looks like an image.
///
/// `href` is the anchor target (usually the full-size image, sometimes a
/// wrapper page); `thumbnail` is the `src` of the enclosed image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageLink {
    /// Id of the post the link was found in.
    pub post_id: String,

    /// Anchor target.
    pub href: Url,

    /// Source of the enclosed image.
    pub thumbnail: Url,

    /// Declared `width` of the enclosed image.
    pub width: Option<u32>,

    /// Declared `height` of the enclosed image.
    pub height: Option<u32>,
}

impl ImageLink {
    /// Creates a link with no declared thumbnail dimensions.
    #[must_use]
    pub fn new(post_id: impl Into<String>, href: Url, thumbnail: Url) -> Self {
        Self {
            post_id: post_id.into(),
            href,
            thumbnail,
            width: None,
            height: None,
        }
    }

    /// Sets the declared thumbnail dimensions.
    #[must_use]
    pub const fn with_dimensions(mut self, width: Option<u32>, height: Option<u32>) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Width/height ratio of the thumbnail, when both are declared and non-zero.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f64> {
        aspect_ratio(self.width, self.height)
    }
}

/// Width/height ratio for a pair of optional dimensions.
#[must_use]
pub fn aspect_ratio(width: Option<u32>, height: Option<u32>) -> Option<f64> {
    match (width, height) {
        (Some(w), Some(h)) if w > 0 && h > 0 => Some(f64::from(w) / f64::from(h)),
        _ => None,
    }
}

/// Outcome of resolving one [`ImageLink`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// The link target is itself an image.
    Direct {
        /// Image URL (the link target).
        url: Url,
    },

    /// The link target was a wrapper page; `url` is the image inside it.
    Embedded {
        /// Image URL found in the page.
        url: Url,
        /// Wrapper page URL.
        page: Url,
    },

    /// No image could be found; the link is skipped.
    Unresolved {
        /// Link target that failed.
        href: Url,
        /// Human-readable reason.
        reason: String,
    },
}

impl Resolution {
    /// Returns the resolved image URL, if any.
    #[must_use]
    pub const fn url(&self) -> Option<&Url> {
        match self {
            Self::Direct { url } | Self::Embedded { url, .. } => Some(url),
            Self::Unresolved { .. } => None,
        }
    }

    /// Returns true when the link produced an image URL.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.url().is_some()
    }
}

/// Returns true if the URL path ends with a known image extension.
///
/// Query string and fragment are ignored; the comparison is case-insensitive.
///
/// # Examples
///
/// ```
/// use blogger_linked_images::core::is_image_url;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/photos/Cat.JPG?size=large").unwrap();
/// assert!(is_image_url(&url));
/// ```
#[must_use]
pub fn is_image_url(url: &Url) -> bool {
    let Some(name) = url.path_segments().and_then(|mut s| s.next_back()) else {
        return false;
    };
    let Some((_, ext)) = name.rsplit_once('.') else {
        return false;
    };
    IMAGE_EXTENSIONS
        .iter()
        .any(|known| ext.eq_ignore_ascii_case(known))
}

/// Returns true if the URL is served by one of the [`IMAGE_HOSTS`].
///
/// # Examples
///
/// ```
/// use blogger_linked_images::core::is_image_host;
/// use url::Url;
///
/// assert!(is_image_host(&Url::parse("https://3.bp.blogspot.com/-a/s1600/IMG_1").unwrap()));
/// assert!(!is_image_host(&Url::parse("https://notbp.blogspot.com/x").unwrap()));
/// ```
#[must_use]
pub fn is_image_host(url: &Url) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    let host = host.to_ascii_lowercase();
    IMAGE_HOSTS.iter().any(|known| {
        host == *known
            || host
                .strip_suffix(known)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}

/// Returns true if an anchor target should be treated as a linked image:
/// it has an image extension or lives on a Blogger image host.
#[must_use]
pub fn is_image_link(url: &Url) -> bool {
    is_image_url(url) || is_image_host(url)
}

/// Returns the last non-empty path segment of a URL, still percent-encoded.
#[must_use]
pub fn file_name(url: &Url) -> Option<&str> {
    url.path_segments()?.rev().find(|s| !s.is_empty())
}
