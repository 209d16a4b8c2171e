//! Blog posts as returned by the Blogger API.

use serde::{Deserialize, Serialize};
use url::Url;

/// A single blog post.
///
/// Only the fields the pipeline needs are kept. `content` is the raw HTML
/// fragment of the post body; `url` is used as the base for relative links.
///
/// # Examples
///
/// ```
/// use blogger_linked_images::core::Post;
///
/// let post = Post::new("42", "<p>hello</p>");
/// assert_eq!(post.id, "42");
/// assert!(post.base_url().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Post {
    /// Post identifier assigned by Blogger.
    #[serde(default)]
    pub id: String,

    /// Post title, used only for log context.
    #[serde(default)]
    pub title: Option<String>,

    /// Public URL of the post.
    #[serde(default)]
    pub url: Option<String>,

    /// HTML body of the post.
    #[serde(default)]
    pub content: String,
}

impl Post {
    /// Creates a post from an id and HTML content.
    #[must_use]
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    /// Sets the public URL of the post.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Returns the post URL parsed for joining relative links, if it is valid.
    #[must_use]
    pub fn base_url(&self) -> Option<Url> {
        self.url.as_deref().and_then(|u| Url::parse(u).ok())
    }

    /// Returns a short label for log messages.
    #[must_use]
    pub fn label(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_blogger_post() {
        let json = r#"{
            "kind": "blogger#post",
            "id": "7706273476706534553",
            "url": "http://example.blogspot.com/2012/10/hello.html",
            "title": "Hello",
            "content": "<a href=\"a.jpg\"><img src=\"b.jpg\"></a>"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "7706273476706534553");
        assert_eq!(post.title.as_deref(), Some("Hello"));
        assert!(post.content.contains("a.jpg"));
        assert!(post.base_url().is_some());
    }

    #[test]
    fn test_deserialize_without_content() {
        let post: Post = serde_json::from_str(r#"{"id": "1"}"#).unwrap();
        assert!(post.content.is_empty());
        assert!(post.url.is_none());
    }

    #[test]
    fn test_label_falls_back_to_id() {
        let mut post = Post::new("99", "");
        assert_eq!(post.label(), "99");

        post.title = Some(String::new());
        assert_eq!(post.label(), "99");

        post.title = Some("Trip photos".to_string());
        assert_eq!(post.label(), "Trip photos");
    }

    #[test]
    fn test_invalid_base_url() {
        let post = Post::new("1", "").with_url("not a url");
        assert!(post.base_url().is_none());
    }
}
