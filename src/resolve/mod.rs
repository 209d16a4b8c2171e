//! Resolution of linked images to real image URLs.

pub mod matching;
pub mod resolver;

pub use matching::{ASPECT_TOLERANCE, MatchRule, select_embedded, strip_wrapper_marker};
pub use resolver::LinkResolver;
