//! Core domain models for blogger-linked-images.
//!
//! This module contains the data that flows through one run: posts pulled
//! from the API, the linked images found inside them, and the outcome of
//! resolving each link. These are pure domain models with no I/O
//! dependencies.

pub mod link;
pub mod post;

pub use link::{
    IMAGE_EXTENSIONS, IMAGE_HOSTS, ImageLink, Resolution, aspect_ratio, file_name, is_image_host,
    is_image_link, is_image_url,
};
pub use post::Post;
