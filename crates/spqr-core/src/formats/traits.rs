//! Common traits for archive format handlers.

use crate::ExtractionConfig;
use crate::ExtractionReport;
use crate::ProgressCallback;
use crate::Result;
use crate::types::DestDir;

/// Trait for archive format handlers.
pub trait ArchiveFormat {
    /// Extracts every entry of the archive beneath `dest`, in archive order.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; entries already written stay on
    /// disk.
    fn extract(
        &mut self,
        dest: &DestDir,
        config: &ExtractionConfig,
        progress: &mut dyn ProgressCallback,
    ) -> Result<ExtractionReport>;
}
