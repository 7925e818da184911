//! Error types for template extraction and project scaffolding.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias using `ExtractionError`.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Errors that can occur while extracting a template archive.
///
/// Every variant is fatal for the extraction call: the extractor stops at
/// the first error and leaves already written files in place.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The input is not a valid zip archive, or its index cannot be read.
    #[error("corrupt archive: {0}")]
    CorruptArchive(String),

    /// An entry resolves to a location outside the destination root.
    #[error("path traversal detected: {entry}")]
    PathTraversal {
        /// Entry name as stored in the archive.
        entry: String,
    },

    /// Filesystem operation or archive read failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractionError {
    /// Returns `true` if this error signals a malicious or malformed archive
    /// trying to write outside its destination.
    ///
    /// # Examples
    ///
    /// ```
    /// use spqr_core::ExtractionError;
    ///
    /// let err = ExtractionError::PathTraversal {
    ///     entry: "../evil.txt".to_string(),
    /// };
    /// assert!(err.is_security_violation());
    ///
    /// let err = ExtractionError::CorruptArchive("truncated".to_string());
    /// assert!(!err.is_security_violation());
    /// ```
    #[must_use]
    pub const fn is_security_violation(&self) -> bool {
        matches!(self, Self::PathTraversal { .. })
    }

    /// Returns the offending entry name, if the error concerns one entry.
    #[must_use]
    pub fn entry(&self) -> Option<&str> {
        match self {
            Self::PathTraversal { entry } => Some(entry),
            _ => None,
        }
    }
}

/// Maps `zip` errors that surface while reading the archive index or an
/// entry header.
///
/// Plain I/O failures stay I/O failures; everything else means the archive
/// itself is unreadable.
impl From<zip::result::ZipError> for ExtractionError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(io) => Self::Io(io),
            other => Self::CorruptArchive(other.to_string()),
        }
    }
}

/// Result type alias using `ScaffoldError`.
pub type ScaffoldResult<T> = std::result::Result<T, ScaffoldError>;

/// Errors that can occur while generating a project.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Project name is empty or not a single path component.
    #[error("invalid project name: {name:?}")]
    InvalidProjectName {
        /// Rejected name.
        name: String,
    },

    /// Java package name is not a dot-separated list of identifiers.
    #[error("invalid package name: {name:?}")]
    InvalidPackageName {
        /// Rejected name.
        name: String,
    },

    /// Database selection is not one of the supported options.
    #[error("unsupported database option: {0:?}")]
    UnsupportedDatabase(String),

    /// Project directory already exists.
    #[error("project directory already exists: {path}")]
    ProjectExists {
        /// Existing directory.
        path: PathBuf,
    },

    /// Filesystem operation on a generated path failed.
    #[error("failed to write {path}: {source}")]
    Io {
        /// Path being created or written.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// External tool exited unsuccessfully.
    #[error("`{command}` failed with {status}")]
    Toolchain {
        /// Command line that was run.
        command: String,
        /// Exit status reported by the process.
        status: ExitStatus,
    },

    /// External tool could not be started.
    #[error("failed to run `{command}`: {source}")]
    ToolchainSpawn {
        /// Command line that was attempted.
        command: String,
        /// Spawn error.
        source: std::io::Error,
    },

    /// Reading an answer from the user failed.
    #[error("failed to read input: {0}")]
    Prompt(#[source] std::io::Error),

    /// Template archive could not be obtained.
    #[error("template archive unavailable: {reason}")]
    TemplateUnavailable {
        /// Why the archive is missing.
        reason: String,
    },

    /// Template archive extraction failed.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

impl ScaffoldError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
