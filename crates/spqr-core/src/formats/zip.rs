//! ZIP archive format handler.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::Seek;
use std::path::Path;
use std::time::Instant;

use crate::ExtractionConfig;
use crate::ExtractionError;
use crate::ExtractionReport;
use crate::ProgressCallback;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::security::sanitize_permissions;
use crate::types::DestDir;
use crate::types::EntryType;
use crate::types::SafePath;

use super::common::create_directory;
use super::common::extract_file;
use super::traits::ArchiveFormat;

/// ZIP archive handler.
///
/// The central directory is read when the handler is built, so a malformed
/// archive is rejected before anything is written.
pub struct ZipArchive<R> {
    inner: zip::ZipArchive<R>,
}

impl ZipArchive<BufReader<File>> {
    /// Opens the archive at `path`.
    ///
    /// # Errors
    ///
    /// - `ExtractionError::Io` if the file cannot be opened
    /// - `ExtractionError::CorruptArchive` if its index cannot be read
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> ZipArchive<R> {
    /// Reads the archive index from `reader`.
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::CorruptArchive` if the reader does not hold
    /// a readable zip archive.
    pub fn new(reader: R) -> Result<Self> {
        let inner = zip::ZipArchive::new(reader)
            .map_err(|e| ExtractionError::CorruptArchive(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl<R: Read + Seek> ArchiveFormat for ZipArchive<R> {
    fn extract(
        &mut self,
        dest: &DestDir,
        config: &ExtractionConfig,
        progress: &mut dyn ProgressCallback,
    ) -> Result<ExtractionReport> {
        let start = Instant::now();
        let total = self.inner.len();
        let mut report = ExtractionReport::new();
        let mut copy_buffer = CopyBuffer::new();

        for index in 0..total {
            // The entry reader lives only for this iteration.
            let mut entry = self.inner.by_index(index)?;
            let name = entry.name().to_string();

            let safe_path = SafePath::validate(&name, dest).inspect_err(|e| {
                if e.is_security_violation() {
                    tracing::warn!(entry = %name, "rejecting entry outside destination");
                }
            })?;

            progress.on_entry_start(safe_path.as_path(), total, index + 1);
            tracing::trace!(entry = %name, index, "extracting entry");

            match EntryType::of(&entry) {
                EntryType::Directory => create_directory(&safe_path, dest, &mut report)?,
                EntryType::File => {
                    let mode = if config.preserve_permissions {
                        entry.unix_mode().map(sanitize_permissions)
                    } else {
                        None
                    };
                    extract_file(
                        &mut entry,
                        &safe_path,
                        mode,
                        dest,
                        &mut report,
                        &mut copy_buffer,
                        progress,
                    )?;
                }
            }

            progress.on_entry_complete(safe_path.as_path());
        }

        progress.on_complete();
        report.duration = start.elapsed();
        Ok(report)
    }
}
