//! Output sinks for resolved image URLs.
//!
//! A run ends in one of two sinks:
//!
//! - **List**: prints each URL on its own line
//! - **Download**: fetches each URL and saves it into a directory

pub mod download;
pub mod list;
pub mod naming;

pub use download::DownloadSink;
pub use list::ListSink;
pub use naming::{file_name_for, numbered, sanitize, target_path};

use crate::error::Result;
use serde::Serialize;
use std::path::PathBuf;
use url::Url;

/// What a sink did with one URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SinkOutcome {
    /// URL was printed.
    Listed,
    /// Image was saved.
    Written {
        /// File written.
        path: PathBuf,
        /// Number of bytes written.
        bytes: u64,
    },
    /// Nothing was written.
    Skipped {
        /// Why the URL was skipped.
        reason: String,
    },
}

/// Consumer of resolved image URLs.
pub trait Sink {
    /// Handles one resolved URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL could not be written out. Callers log
    /// the error and carry on with the next URL.
    fn accept(&mut self, url: &Url) -> Result<SinkOutcome>;
}

/// Formats a byte count with decimal units, e.g. `"1.50 Mb"`.
///
/// # Examples
///
/// ```
/// use blogger_linked_images::sink::format_size;
///
/// assert_eq!(format_size(999), "999.00 bytes");
/// assert_eq!(format_size(1_500_000), "1.50 Mb");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["bytes", "Kb", "Mb", "Gb"];

    let bytes = bytes as f64;
    let mut factor = 1.0;
    for unit in UNITS {
        if bytes / factor < 1000.0 {
            return format!("{:.2} {unit}", bytes / factor);
        }
        factor *= 1000.0;
    }
    format!("{:.2} Tb", bytes / factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0.00 bytes");
        assert_eq!(format_size(1000), "1.00 Kb");
        assert_eq!(format_size(123_456), "123.46 Kb");
        assert_eq!(format_size(2_000_000_000), "2.00 Gb");
        assert_eq!(format_size(5_000_000_000_000), "5.00 Tb");
    }
}
