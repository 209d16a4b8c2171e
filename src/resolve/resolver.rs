//! Link resolution.
//!
//! Fetches each link target and decides whether it is the image itself or
//! a wrapper page around it.

use crate::core::{ImageLink, Resolution, is_image_link};
use crate::error::{ResolveError, Result};
use crate::extract::page_images;
use crate::http::{Fetcher, Response};
use crate::resolve::matching::select_embedded;
use tracing::{debug, warn};

/// Resolves [`ImageLink`]s to full-size image URLs.
#[derive(Debug, Clone)]
pub struct LinkResolver<F> {
    fetcher: F,
}

impl<F: Fetcher> LinkResolver<F> {
    /// Creates a resolver using `fetcher` for every request.
    pub const fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Resolves one link. Failures become [`Resolution::Unresolved`] and are
    /// logged as warnings; they never abort the caller.
    pub fn resolve(&self, link: &ImageLink) -> Resolution {
        match self.try_resolve(link) {
            Ok(resolution) => resolution,
            Err(err) => {
                warn!(post = %link.post_id, href = %link.href, error = %err, "skipping link");
                Resolution::Unresolved {
                    href: link.href.clone(),
                    reason: err.to_string(),
                }
            }
        }
    }

    fn try_resolve(&self, link: &ImageLink) -> Result<Resolution> {
        // Only wrapper pages need their body; images are judged by headers.
        let response = self.fetcher.fetch(&link.href, &Response::is_html)?;

        if response.is_image() || (response.is_untyped() && is_image_link(&link.href)) {
            debug!(href = %link.href, "link is a direct image");
            return Ok(Resolution::Direct {
                url: link.href.clone(),
            });
        }

        if response.is_html() {
            let images = page_images(&response.text(), &response.url);
            return match select_embedded(link, &images) {
                Some((image, rule)) => {
                    debug!(href = %link.href, image = %image.url, %rule, "found image in wrapper page");
                    Ok(Resolution::Embedded {
                        url: image.url.clone(),
                        page: response.url.clone(),
                    })
                }
                None => Err(ResolveError::NoConfidentMatch {
                    url: link.href.to_string(),
                    candidates: images.len(),
                }
                .into()),
            };
        }

        Err(ResolveError::UnsupportedContent {
            url: link.href.to_string(),
            content_type: response.media_type().unwrap_or_default(),
        }
        .into())
    }
}
