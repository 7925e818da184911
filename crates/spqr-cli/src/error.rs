//! Error conversion utilities for CLI.
//!
//! Converts spqr-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use spqr_core::ExtractionError;
use spqr_core::ScaffoldError;
use std::path::Path;

/// Converts `ExtractionError` to user-friendly anyhow error with context
pub fn convert_extraction_error(err: ExtractionError, archive: &Path) -> anyhow::Error {
    match err {
        ExtractionError::PathTraversal { entry } => {
            anyhow!(
                "Security violation: Archive '{}' attempted path traversal with '{}'\n\
                 HINT: This archive may be malicious. Do not extract from untrusted sources.",
                archive.display(),
                entry
            )
        }
        ExtractionError::CorruptArchive(reason) => {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: The archive may be truncated or not a zip file. Download it again.",
                archive.display(),
                reason
            )
        }
        ExtractionError::Io(io_err) => {
            anyhow!(
                "I/O error while processing '{}': {}",
                archive.display(),
                io_err
            )
        }
    }
}

/// Converts `ScaffoldError` to user-friendly anyhow error with context
pub fn convert_scaffold_error(err: ScaffoldError, archive: Option<&Path>) -> anyhow::Error {
    match err {
        ScaffoldError::Extraction(inner) => {
            convert_extraction_error(inner, archive.unwrap_or_else(|| Path::new("starter")))
        }
        ScaffoldError::ProjectExists { path } => {
            anyhow!(
                "Project directory already exists: {}\n\
                 HINT: Choose another name or remove the directory.",
                path.display()
            )
        }
        ScaffoldError::InvalidProjectName { name } => {
            anyhow!(
                "Invalid project name {name:?}\n\
                 HINT: Use a single directory name without path separators."
            )
        }
        ScaffoldError::InvalidPackageName { name } => {
            anyhow!(
                "Invalid package name {name:?}\n\
                 HINT: Use dot-separated Java identifiers, e.g. com.example.project."
            )
        }
        ScaffoldError::UnsupportedDatabase(choice) => {
            anyhow!(
                "Unsupported database option {choice:?}\n\
                 HINT: Enter 1 for Postgres or 2 for Mariadb."
            )
        }
        ScaffoldError::ToolchainSpawn { command, source } => {
            anyhow!(
                "Failed to run `{command}`: {source}\n\
                 HINT: Install Go and make sure it is on PATH, or pass --skip-go-mod."
            )
        }
        other => anyhow::Error::from(other),
    }
}
