//! Blogger API v3 client.
//!
//! Looks up a blog by its public URL and walks its paginated post list.

use crate::api::types::{BlogResponse, PostPage};
use crate::core::Post;
use crate::error::{ApiError, Error, Result};
use crate::http::{API_KEY_PARAM, Fetcher, redact};
use serde::de::DeserializeOwned;
use std::collections::{HashSet, VecDeque};
use tracing::{debug, info};
use url::Url;

/// Client for the subset of the Blogger API this tool needs.
#[derive(Debug, Clone)]
pub struct BloggerApi<F> {
    fetcher: F,
    base: Url,
    key: String,
    page_size: Option<u32>,
}

impl<F: Fetcher> BloggerApi<F> {
    /// Creates a client rooted at `base` (e.g. `https://www.googleapis.com/blogger/v3`).
    pub fn new(fetcher: F, base: Url, key: impl Into<String>) -> Self {
        Self {
            fetcher,
            base,
            key: key.into(),
            page_size: None,
        }
    }

    /// Sets the `maxResults` value sent with each post page request.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: Option<u32>) -> Self {
        self.page_size = page_size;
        self
    }

    /// Returns the underlying fetcher.
    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Looks up the numeric blog id for a public blog URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the response is not valid
    /// JSON, or it carries no id.
    pub fn blog_id(&self, blog_url: &Url) -> Result<String> {
        let mut url = self.endpoint(&["blogs", "byurl"]);
        url.query_pairs_mut().append_pair("url", blog_url.as_str());
        self.append_key(&mut url);

        let blog: BlogResponse = self.get_json(&url)?;
        if blog.id.is_empty() {
            return Err(ApiError::BlogNotFound {
                url: blog_url.to_string(),
            }
            .into());
        }

        info!(
            blog_id = %blog.id,
            name = blog.name.as_deref().unwrap_or("-"),
            "found blog"
        );
        Ok(blog.id)
    }

    /// Fetches one page of posts.
    ///
    /// `token` is the `nextPageToken` of the previous page, or `None` for
    /// the first page.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a post list.
    pub fn post_page(&self, blog_id: &str, token: Option<&str>) -> Result<PostPage> {
        let mut url = self.endpoint(&["blogs", blog_id, "posts"]);
        self.append_key(&mut url);
        {
            let mut query = url.query_pairs_mut();
            if let Some(size) = self.page_size {
                query.append_pair("maxResults", &size.to_string());
            }
            if let Some(token) = token {
                query.append_pair("pageToken", token);
            }
        }
        self.get_json(&url)
    }

    /// Returns an iterator over every post of the blog, page by page.
    pub fn posts(&self, blog_id: impl Into<String>) -> Posts<'_, F> {
        Posts {
            api: self,
            blog_id: blog_id.into(),
            buffered: VecDeque::new(),
            next: PageCursor::First,
            seen_tokens: HashSet::new(),
            pending_error: None,
            pages: 0,
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn append_key(&self, url: &mut Url) {
        url.query_pairs_mut().append_pair(API_KEY_PARAM, &self.key);
    }

    fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        let response = self.fetcher.get(url)?;
        serde_json::from_slice(&response.body).map_err(|e| {
            ApiError::InvalidResponse {
                endpoint: redact(url),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PageCursor {
    First,
    Token(String),
    Done,
}

/// Iterator over all posts of a blog.
///
/// Pages are requested lazily. A failed page request is yielded once as an
/// error and ends the iteration, since there is no token to continue from.
/// A page token that was already used also ends the iteration with
/// [`ApiError::RepeatedPageToken`], after the posts of that page.
#[derive(Debug)]
pub struct Posts<'a, F> {
    api: &'a BloggerApi<F>,
    blog_id: String,
    buffered: VecDeque<Post>,
    next: PageCursor,
    seen_tokens: HashSet<String>,
    pending_error: Option<Error>,
    pages: usize,
}

impl<F> Posts<'_, F> {
    /// Number of pages fetched so far.
    #[must_use]
    pub const fn pages_fetched(&self) -> usize {
        self.pages
    }
}

impl<F: Fetcher> Iterator for Posts<'_, F> {
    type Item = Result<Post>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(post) = self.buffered.pop_front() {
                return Some(Ok(post));
            }
            if let Some(err) = self.pending_error.take() {
                return Some(Err(err));
            }

            let token = match std::mem::replace(&mut self.next, PageCursor::Done) {
                PageCursor::Done => return None,
                PageCursor::First => None,
                PageCursor::Token(token) => Some(token),
            };

            let page = match self.api.post_page(&self.blog_id, token.as_deref()) {
                Ok(page) => page,
                Err(err) => return Some(Err(err)),
            };
            self.pages += 1;
            debug!(
                page = self.pages,
                posts = page.items.len(),
                more = page.next_page_token.is_some(),
                "fetched post page"
            );

            if let Some(next) = page.next_page_token.filter(|t| !t.is_empty()) {
                if self.seen_tokens.insert(next.clone()) {
                    self.next = PageCursor::Token(next);
                } else {
                    self.pending_error = Some(ApiError::RepeatedPageToken { token: next }.into());
                }
            }
            self.buffered.extend(page.items);
        }
    }
}
