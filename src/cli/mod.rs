//! CLI module for kindgen
//!
//! This module provides the command-line interface for the generator.
//!
//! ## Usage
//!
//! - `kindgen` - Read `cvc4cppkind.h`, write `Kind.rs`
//! - `kindgen --kinds-header <PATH> --kinds-file-prefix <PREFIX>` - Read `<PATH>`, write `<PREFIX>.rs`
//! - `kindgen --stdout` - Print the generated code instead of writing it
//! - `kindgen --check` - Fail if the output file is missing or out of date
//!
//! Commands return `CliResult`; `run` prints the message and exits with its status.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Process exit status. `--check` reports a stale or missing output as `FAILURE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// A failed run: the rendered diagnostic (naming the header or output path) and the status to exit with.
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Exit with status 1.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = crate::version::KINDGEN_VERSION;

/// Header read when `--kinds-header` is not given.
pub const DEFAULT_HEADER: &str = "cvc4cppkind.h";
/// Output prefix used when `--kinds-file-prefix` is not given.
pub const DEFAULT_PREFIX: &str = "Kind";
/// Extension of generated Rust files.
pub const OUTPUT_EXTENSION: &str = "rs";

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Read a kinds header file and generate a corresponding Rust file
#[derive(Parser, Debug)]
#[command(name = "kindgen")]
#[command(version = VERSION)]
#[command(about = "Read a kinds header file and generate a corresponding Rust file", long_about = None)]
pub struct Cli {
    /// The header file to read kinds from
    #[arg(long = "kinds-header", value_name = "KINDS_HEADER", default_value = DEFAULT_HEADER)]
    pub kinds_header: PathBuf,

    /// The prefix for the generated .rs file
    #[arg(long = "kinds-file-prefix", value_name = "KIND_FILE_PREFIX", default_value = DEFAULT_PREFIX)]
    pub kinds_file_prefix: String,

    /// Print the generated code to stdout instead of writing the file
    #[arg(long, conflicts_with = "check")]
    pub stdout: bool,

    /// Check that the generated file is up to date without writing it
    #[arg(long)]
    pub check: bool,
}

impl Cli {
    /// Path of the generated file: the prefix plus `.rs`.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.{}", self.kinds_file_prefix, OUTPUT_EXTENSION))
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Parse arguments, run, and exit. The only caller of `process::exit`.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Dispatch to `--stdout`, `--check`, or the default write.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let output = cli.output_path();
    if cli.stdout {
        commands::print_generated(&cli.kinds_header)
    } else if cli.check {
        commands::check_file(&cli.kinds_header, &output)
    } else {
        commands::generate_file(&cli.kinds_header, &output)
    }
}

// ============================================================================
// Tests
// ============================================================================
