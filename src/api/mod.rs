//! Blogger JSON API access.
//!
//! Resolves a blog URL to its id and enumerates every post of the blog,
//! following `nextPageToken` until the last page.

pub mod client;
pub mod types;

pub use client::{BloggerApi, Posts};
pub use types::{BlogResponse, PostPage};
