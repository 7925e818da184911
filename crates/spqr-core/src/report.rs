//! Extraction and scaffolding reports.

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

/// Report of a template archive extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Number of regular files written.
    pub files_extracted: usize,

    /// Number of directory entries materialized.
    pub directories_created: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,

    /// Duration of the extraction.
    pub duration: Duration,
}

impl ExtractionReport {
    /// Creates a new empty extraction report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns total number of entries materialized.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.files_extracted + self.directories_created
    }
}

/// Report of a generated project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Root directory of the generated project.
    pub project_path: PathBuf,

    /// Directories created by the generator (template contents excluded).
    pub directories_created: usize,

    /// Files written by the generator (template contents excluded).
    pub files_written: usize,

    /// Result of unpacking the template archive, when one was used.
    pub extraction: Option<ExtractionReport>,

    /// Non-fatal issues worth telling the user about.
    pub warnings: Vec<String>,

    /// Total duration.
    pub duration: Duration,
}

impl ScaffoldReport {
    /// Creates an empty report for a project rooted at `project_path`.
    #[must_use]
    pub fn new(project_path: impl Into<PathBuf>) -> Self {
        Self {
            project_path: project_path.into(),
            directories_created: 0,
            files_written: 0,
            extraction: None,
            warnings: Vec::new(),
            duration: Duration::ZERO,
        }
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Callback trait for progress reporting during extraction.
///
/// # Examples
///
/// ```
/// use spqr_core::ProgressCallback;
/// use std::path::Path;
///
/// struct PrintProgress;
///
/// impl ProgressCallback for PrintProgress {
///     fn on_entry_start(&mut self, path: &Path, total: usize, current: usize) {
///         println!("{current}/{total}: {}", path.display());
///     }
///
///     fn on_bytes_written(&mut self, _bytes: u64) {}
///
///     fn on_entry_complete(&mut self, _path: &Path) {}
///
///     fn on_complete(&mut self) {
///         println!("done");
///     }
/// }
/// ```
pub trait ProgressCallback {
    /// Called before an entry is processed.
    ///
    /// `current` is 1-indexed; `total` is the number of entries in the
    /// archive.
    fn on_entry_start(&mut self, path: &Path, total: usize, current: usize);

    /// Called as file contents are written.
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called when an entry has been fully written and closed.
    fn on_entry_complete(&mut self, path: &Path);

    /// Called once after the last entry.
    fn on_complete(&mut self);
}

/// Progress callback that does nothing.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _path: &Path, _total: usize, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report() {
        let report = ExtractionReport::new();
        assert_eq!(report.files_extracted, 0);
        assert_eq!(report.directories_created, 0);
        assert_eq!(report.bytes_written, 0);
    }

    #[test]
    fn test_total_items() {
        let report = ExtractionReport {
            files_extracted: 10,
            directories_created: 5,
            ..ExtractionReport::default()
        };
        assert_eq!(report.total_items(), 15);
    }

    #[test]
    fn test_scaffold_report_warnings() {
        let mut report = ScaffoldReport::new("demo");
        assert!(!report.has_warnings());
        report.add_warning("go toolchain skipped");
        assert!(report.has_warnings());
        assert_eq!(report.project_path, PathBuf::from("demo"));
    }
}
