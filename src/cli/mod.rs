//! CLI layer for blogger-linked-images.
//!
//! Provides the command-line interface using clap: argument parsing,
//! running the pipeline, and formatting the run summary.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::{execute, run};
pub use output::OutputFormat;
pub use parser::Cli;
