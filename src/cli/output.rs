//! Output formatting for the run summary.
//!
//! Supports text and JSON output formats.

use crate::error::Error;
use crate::pipeline::RunReport;
use crate::sink::format_size;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
}

/// Formats the summary of a finished run.
#[must_use]
pub fn format_report(report: &RunReport, download: bool, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_report_text(report, download),
        OutputFormat::Json => format_json(report),
    }
}

fn format_report_text(report: &RunReport, download: bool) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "Scanned {} posts ({} pages), found {} linked images.",
        report.posts, report.pages, report.links_found
    );
    let _ = writeln!(
        output,
        "  Resolved:      {} ({} direct, {} via page)",
        report.resolved(),
        report.direct,
        report.embedded
    );
    if report.unresolved > 0 {
        let _ = writeln!(output, "  Unresolved:    {}", report.unresolved);
    }
    if download {
        let _ = writeln!(
            output,
            "  Downloaded:    {} ({})",
            report.files_written,
            format_size(report.bytes_written)
        );
        if report.files_skipped > 0 {
            let _ = writeln!(output, "  Skipped:       {}", report.files_skipped);
        }
        if report.download_errors > 0 {
            let _ = writeln!(output, "  Failed:        {}", report.download_errors);
        }
    }
    if report.page_errors > 0 {
        output.push_str("  Post listing stopped early after an API error.\n");
    }
    output
}

/// Formats an error for output.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorResponse {
                success: bool,
                error: String,
            }
            format_json(&ErrorResponse {
                success: false,
                error: error.to_string(),
            })
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> RunReport {
        RunReport {
            posts: 12,
            pages: 2,
            links_found: 5,
            direct: 3,
            embedded: 1,
            unresolved: 1,
            files_written: 4,
            bytes_written: 2_500_000,
            ..RunReport::default()
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("json", true), Ok(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("JSON", true), Ok(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("text", false), Ok(OutputFormat::Text));
        assert!(OutputFormat::from_str("yaml", true).is_err());
    }

    #[test]
    fn test_format_report_text() {
        let text = format_report(&report(), true, OutputFormat::Text);
        assert!(text.starts_with("Scanned 12 posts (2 pages), found 5 linked images."));
        assert!(text.contains("Resolved:      4 (3 direct, 1 via page)"));
        assert!(text.contains("Unresolved:    1"));
        assert!(text.contains("Downloaded:    4 (2.50 Mb)"));
        assert!(!text.contains("Failed"));
    }

    #[test]
    fn test_list_mode_omits_download_lines() {
        let text = format_report(&report(), false, OutputFormat::Text);
        assert!(!text.contains("Downloaded"));
    }

    #[test]
    fn test_format_report_json() {
        let json = format_report(&report(), false, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["posts"], 12);
        assert_eq!(value["bytes_written"], 2_500_000);
    }

    #[test]
    fn test_format_error() {
        let err = Error::Config {
            message: "bad timeout".to_string(),
        };
        let text = format_error(&err, OutputFormat::Text);
        assert_eq!(text, "configuration error: bad timeout");

        let json = format_error(&err, OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["success"], false);
    }
}
