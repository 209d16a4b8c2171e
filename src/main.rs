//! Binary entry point for blogger-linked-images.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use blogger_linked_images::cli::output::{OutputFormat, format_error};
use blogger_linked_images::cli::{Cli, execute};
use blogger_linked_images::logging::init_logging;
use clap::Parser;
use clap::error::ErrorKind;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and are not failures
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };
    let format = cli.format;
    init_logging(cli.verbose);

    match execute(&cli) {
        Ok(summary) => {
            let written = match format {
                // JSON summary goes to stdout for programmatic parsing
                OutputFormat::Json => writeln!(io::stdout(), "{summary}"),
                OutputFormat::Text => write!(io::stderr(), "{summary}"),
            };
            // Handle broken pipe gracefully (e.g., when piped to `head`)
            if let Err(e) = written
                && e.kind() != io::ErrorKind::BrokenPipe
            {
                eprintln!("Error writing summary: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let error_output = format_error(&e, format);
            match format {
                OutputFormat::Json => println!("{error_output}"),
                OutputFormat::Text => eprintln!("Error: {error_output}"),
            }
            ExitCode::FAILURE
        }
    }
}
