//! I/O utilities for blogger-linked-images.
//!
//! Provides directory preparation and file writing for downloaded images.

pub mod writer;

pub use writer::{ensure_dir, write_bytes};
