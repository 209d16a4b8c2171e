//! The end-to-end run: posts → linked images → resolved URLs → sink.

use crate::api::BloggerApi;
use crate::config::Config;
use crate::core::{Resolution, file_name};
use crate::error::Result;
use crate::extract::find_linked_images;
use crate::http::Fetcher;
use crate::resolve::LinkResolver;
use crate::sink::{Sink, SinkOutcome};
use serde::Serialize;
use tracing::{debug, info, warn};
use url::Url;

/// Counters for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Posts visited.
    pub posts: usize,
    /// Post pages fetched from the API.
    pub pages: usize,
    /// Page requests that failed and ended enumeration early.
    pub page_errors: usize,
    /// Linked images found in post bodies.
    pub links_found: usize,
    /// Links whose target was the image itself.
    pub direct: usize,
    /// Links resolved through a wrapper page.
    pub embedded: usize,
    /// Links skipped because no image could be found.
    pub unresolved: usize,
    /// Images written to disk.
    pub files_written: usize,
    /// Images not written (existing file or duplicate URL).
    pub files_skipped: usize,
    /// Downloads that failed.
    pub download_errors: usize,
    /// Total bytes written.
    pub bytes_written: u64,
}

impl RunReport {
    /// Links that produced an image URL.
    #[must_use]
    pub const fn resolved(&self) -> usize {
        self.direct + self.embedded
    }

    /// Returns true if anything was skipped or failed.
    #[must_use]
    pub const fn has_problems(&self) -> bool {
        self.page_errors + self.unresolved + self.download_errors > 0
    }

    fn record_resolution(&mut self, resolution: &Resolution) {
        match resolution {
            Resolution::Direct { .. } => self.direct += 1,
            Resolution::Embedded { .. } => self.embedded += 1,
            Resolution::Unresolved { .. } => self.unresolved += 1,
        }
    }

    fn record_outcome(&mut self, outcome: &SinkOutcome) {
        match outcome {
            SinkOutcome::Listed => {}
            SinkOutcome::Written { bytes, .. } => {
                self.files_written += 1;
                self.bytes_written += bytes;
            }
            SinkOutcome::Skipped { .. } => self.files_skipped += 1,
        }
    }
}

/// Enumerates posts, resolves their linked images and feeds the sink.
#[derive(Debug, Clone)]
pub struct Pipeline<F> {
    api: BloggerApi<F>,
    resolver: LinkResolver<F>,
}

impl<F: Fetcher + Clone> Pipeline<F> {
    /// Builds the API client and resolver from the run configuration.
    pub fn new(fetcher: F, config: &Config) -> Self {
        let api = BloggerApi::new(fetcher.clone(), config.api_base.clone(), &config.api_key)
            .with_page_size(config.page_size);
        Self {
            api,
            resolver: LinkResolver::new(fetcher),
        }
    }
}

impl<F: Fetcher> Pipeline<F> {
    /// Runs the whole pipeline for `blog_url`.
    ///
    /// Only a failed blog lookup is fatal. Page, resolution and download
    /// failures are logged, counted in the report, and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the blog id cannot be looked up.
    pub fn run<S: Sink>(&self, blog_url: &Url, sink: &mut S) -> Result<RunReport> {
        let blog_id = self.api.blog_id(blog_url)?;
        let mut report = RunReport::default();

        let mut posts = self.api.posts(blog_id);
        for post in posts.by_ref() {
            let post = match post {
                Ok(post) => post,
                Err(err) => {
                    warn!(error = %err, "could not fetch more posts");
                    report.page_errors += 1;
                    continue;
                }
            };
            report.posts += 1;

            let links = find_linked_images(&post);
            debug!(post = post.label(), links = links.len(), "scanned post");
            report.links_found += links.len();

            for link in &links {
                let resolution = self.resolver.resolve(link);
                report.record_resolution(&resolution);

                let Some(url) = resolution.url() else {
                    continue;
                };
                match sink.accept(url) {
                    Ok(outcome) => report.record_outcome(&outcome),
                    Err(err) => {
                        warn!(
                            %url,
                            file = file_name(url).unwrap_or("-"),
                            error = %err,
                            "could not save image"
                        );
                        report.download_errors += 1;
                    }
                }
            }
        }
        report.pages = posts.pages_fetched();

        info!(
            posts = report.posts,
            links = report.links_found,
            resolved = report.resolved(),
            skipped = report.unresolved,
            "run finished"
        );
        Ok(report)
    }
}
