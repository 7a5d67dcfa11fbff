//! Command implementations for the kindgen CLI.
//!
//! Every function here returns `CliResult`; diagnostics always name the path that failed.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::generate::{GenerateError, Generated, Generator};
use crate::output::{self, Freshness};

use super::{CliError, CliResult, ExitCode};

/// Maximum header size (16 MB)
///
/// Files larger than this are rejected before reading them into memory.
const MAX_HEADER_SIZE: u64 = 16 * 1024 * 1024;

/// Read header file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_HEADER_SIZE` (16 MB)
pub fn read_header(path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(path)
        .map_err(|e| CliError::failure(format!("Cannot access kinds header '{}': {}", path.display(), e)))?;

    if metadata.len() > MAX_HEADER_SIZE {
        return Err(CliError::failure(format!(
            "Kinds header '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_HEADER_SIZE
        )));
    }

    fs::read_to_string(path)
        .map_err(|e| CliError::failure(format!("Error reading kinds header '{}': {}", path.display(), e)))
}

/// Render a generation failure with its miette diagnostic.
fn generation_failure(header: &Path, err: GenerateError) -> CliError {
    let report = miette::Report::new(err);
    CliError::failure(format!(
        "Error generating kinds from '{}':\n{:?}",
        header.display(),
        report
    ))
}

/// Read and generate in memory.
fn generate(header: &Path) -> CliResult<Generated> {
    let text = read_header(header)?;
    let source_name = header.display().to_string();
    Generator::new()
        .generate(&text, &source_name)
        .map_err(|e| generation_failure(header, e))
}

/// Generate `output` from `header`, replacing it atomically.
pub fn generate_file(header: &Path, output: &Path) -> CliResult<ExitCode> {
    let generated = generate(header)?;
    output::write_atomic(output, &generated.code).map_err(|e| CliError::failure(format!("Error: {}", e)))?;

    tracing::info!(
        header = %header.display(),
        output = %output.display(),
        kinds = generated.table.len(),
        "generated kind enumeration"
    );
    Ok(ExitCode::SUCCESS)
}

/// Verify that `output` matches what `header` generates. Never writes.
pub fn check_file(header: &Path, output: &Path) -> CliResult<ExitCode> {
    let generated = generate(header)?;
    match output::check_output(output, &generated.code).map_err(|e| CliError::failure(format!("Error: {}", e)))? {
        Freshness::UpToDate => Ok(ExitCode::SUCCESS),
        Freshness::Stale => Err(CliError::failure(format!(
            "'{}' is out of date with '{}'; rerun kindgen",
            output.display(),
            header.display()
        ))),
        Freshness::Missing => Err(CliError::failure(format!(
            "'{}' does not exist; run kindgen to generate it from '{}'",
            output.display(),
            header.display()
        ))),
    }
}

/// Print the generated code to stdout.
pub fn print_generated(header: &Path) -> CliResult<ExitCode> {
    let generated = generate(header)?;
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(generated.code.as_bytes())
        .map_err(|e| CliError::failure(format!("Error writing to stdout: {}", e)))?;
    Ok(ExitCode::SUCCESS)
}
