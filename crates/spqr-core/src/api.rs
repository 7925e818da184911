//! High-level public API for template extraction.

use std::path::Path;

use crate::ExtractionConfig;
use crate::ExtractionReport;
use crate::NoopProgress;
use crate::ProgressCallback;
use crate::Result;
use crate::formats::ArchiveFormat;
use crate::formats::ZipArchive;
use crate::types::DestDir;

/// Extracts a zip archive into an existing destination directory.
///
/// Uses [`ExtractionConfig::default`] and no progress reporting.
///
/// # Errors
///
/// - `ExtractionError::CorruptArchive` if the archive cannot be read; no
///   files are created in that case
/// - `ExtractionError::PathTraversal` if an entry escapes `destination_root`;
///   extraction stops at that entry
/// - `ExtractionError::Io` for any filesystem failure, including a missing
///   destination
///
/// # Examples
///
/// ```no_run
/// use spqr_core::extract;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = extract("starter.zip", "/tmp/demo")?;
/// println!("Extracted {} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
pub fn extract<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    destination_root: Q,
) -> Result<ExtractionReport> {
    extract_with_progress(
        archive_path,
        destination_root,
        &ExtractionConfig::default(),
        &mut NoopProgress,
    )
}

/// Extracts a zip archive, reporting progress through `progress`.
///
/// Entries are processed one at a time in archive order. On the first error
/// extraction stops; files already written are left in place.
///
/// # Errors
///
/// See [`extract`].
pub fn extract_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    destination_root: Q,
    config: &ExtractionConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<ExtractionReport> {
    let archive_path = archive_path.as_ref();
    let dest = DestDir::new(destination_root.as_ref())?;

    tracing::debug!(
        archive = %archive_path.display(),
        dest = %dest.as_path().display(),
        "extracting archive"
    );

    let mut archive = ZipArchive::open(archive_path)?;
    let report = archive.extract(&dest, config, progress)?;

    tracing::debug!(
        entries = report.total_items(),
        files = report.files_extracted,
        directories = report.directories_created,
        bytes = report.bytes_written,
        "extraction complete"
    );

    Ok(report)
}
