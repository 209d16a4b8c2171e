//! Wire types for Blogger API v3 responses.

use crate::core::Post;
use serde::Deserialize;

/// Response of `GET /blogs/byurl`.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogResponse {
    /// Numeric blog id, as a string.
    #[serde(default)]
    pub id: String,

    /// Blog name.
    #[serde(default)]
    pub name: Option<String>,
}

/// One page of `GET /blogs/{id}/posts`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPage {
    /// Posts on this page. Absent when the blog has no posts.
    #[serde(default)]
    pub items: Vec<Post>,

    /// Token for the next page; absent on the last page.
    #[serde(default)]
    pub next_page_token: Option<String>,
}
