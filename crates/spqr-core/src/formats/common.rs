//! Entry materialization shared by archive formats.
//!
//! Both helpers take an already validated [`SafePath`]; they never look at
//! raw entry names.

use std::fs::OpenOptions;
use std::fs::create_dir_all;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;

use crate::ExtractionReport;
use crate::ProgressCallback;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_progress;
use crate::types::DestDir;
use crate::types::SafePath;

/// Writes one file entry.
///
/// Missing parent directories are created, the output is created or
/// truncated, contents are streamed through `copy_buffer`, and `mode` is
/// applied afterwards (Unix only). The output file is flushed and closed
/// before returning.
///
/// # Errors
///
/// Returns `ExtractionError::Io` if any filesystem operation or the read
/// from `reader` fails.
pub fn extract_file<R: Read>(
    reader: &mut R,
    safe_path: &SafePath,
    mode: Option<u32>,
    dest: &DestDir,
    report: &mut ExtractionReport,
    copy_buffer: &mut CopyBuffer,
    progress: &mut dyn ProgressCallback,
) -> Result<()> {
    let output_path = dest.join(safe_path);

    if let Some(parent) = output_path.parent() {
        create_dir_all(parent)?;
    }

    let output_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&output_path)?;
    let mut writer = BufWriter::with_capacity(64 * 1024, output_file);
    let bytes_written = copy_with_progress(reader, &mut writer, copy_buffer, progress)?;
    writer.flush()?;
    drop(writer);

    #[cfg(unix)]
    if let Some(mode) = mode {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&output_path, std::fs::Permissions::from_mode(mode))?;
    }
    // Permission bits have no counterpart on other platforms.
    #[cfg(not(unix))]
    let _ = mode;

    report.files_extracted += 1;
    report.bytes_written = report.bytes_written.saturating_add(bytes_written);

    Ok(())
}

/// Creates a directory entry and any missing ancestors.
///
/// Idempotent: an existing directory is not an error.
///
/// # Errors
///
/// Returns `ExtractionError::Io` if directory creation fails.
pub fn create_directory(
    safe_path: &SafePath,
    dest: &DestDir,
    report: &mut ExtractionReport,
) -> Result<()> {
    create_dir_all(dest.join(safe_path))?;
    report.directories_created += 1;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ExtractionError;
    use crate::NoopProgress;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn create_test_dest() -> (TempDir, DestDir) {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dest = DestDir::new(temp.path()).expect("failed to create dest");
        (temp, dest)
    }

    #[test]
    fn test_extract_file_creates_parents() {
        let (_temp, dest) = create_test_dest();
        let safe = SafePath::validate("a/b/c.txt", &dest).unwrap();
        let mut report = ExtractionReport::new();

        extract_file(
            &mut Cursor::new(b"nested"),
            &safe,
            None,
            &dest,
            &mut report,
            &mut CopyBuffer::new(),
            &mut NoopProgress,
        )
        .unwrap();

        let written = dest.as_path().join("a/b/c.txt");
        assert_eq!(fs::read(written).unwrap(), b"nested");
        assert_eq!(report.files_extracted, 1);
        assert_eq!(report.bytes_written, 6);
    }

    #[test]
    fn test_extract_file_truncates_existing() {
        let (_temp, dest) = create_test_dest();
        fs::write(dest.as_path().join("file.txt"), "a much longer previous body").unwrap();
        let safe = SafePath::validate("file.txt", &dest).unwrap();
        let mut report = ExtractionReport::new();

        extract_file(
            &mut Cursor::new(b"short"),
            &safe,
            None,
            &dest,
            &mut report,
            &mut CopyBuffer::new(),
            &mut NoopProgress,
        )
        .unwrap();

        assert_eq!(
            fs::read_to_string(dest.as_path().join("file.txt")).unwrap(),
            "short"
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_extract_file_applies_mode() {
        use std::os::unix::fs::PermissionsExt;

        let (_temp, dest) = create_test_dest();
        let safe = SafePath::validate("gradlew", &dest).unwrap();
        let mut report = ExtractionReport::new();

        extract_file(
            &mut Cursor::new(b"#!/bin/sh\n"),
            &safe,
            Some(0o755),
            &dest,
            &mut report,
            &mut CopyBuffer::new(),
            &mut NoopProgress,
        )
        .unwrap();

        let mode = fs::metadata(dest.as_path().join("gradlew"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn test_extract_file_onto_directory_is_io_error() {
        let (_temp, dest) = create_test_dest();
        fs::create_dir(dest.as_path().join("taken")).unwrap();
        let safe = SafePath::validate("taken", &dest).unwrap();
        let mut report = ExtractionReport::new();

        let err = extract_file(
            &mut Cursor::new(b"x"),
            &safe,
            None,
            &dest,
            &mut report,
            &mut CopyBuffer::new(),
            &mut NoopProgress,
        )
        .unwrap_err();

        assert!(matches!(err, ExtractionError::Io(_)));
        assert_eq!(report.files_extracted, 0);
    }

    #[test]
    fn test_create_directory_is_idempotent() {
        let (_temp, dest) = create_test_dest();
        let safe = SafePath::validate("empty/dir/", &dest).unwrap();
        let mut report = ExtractionReport::new();

        create_directory(&safe, &dest, &mut report).unwrap();
        create_directory(&safe, &dest, &mut report).unwrap();

        assert!(dest.as_path().join("empty/dir").is_dir());
        assert_eq!(report.directories_created, 2);
    }
}
