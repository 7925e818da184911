//! Validated destination directory type.

use crate::ExtractionError;
use crate::Result;
use std::path::Path;
use std::path::PathBuf;

/// A validated destination directory for template extraction.
///
/// Once constructed, a `DestDir` is an existing directory represented by its
/// absolute canonical path. Every entry path is checked against this
/// canonical form, so a destination reached through a symlink is compared by
/// its real location.
///
/// # Examples
///
/// ```no_run
/// use spqr_core::types::DestDir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::new("/tmp/extraction")?;
/// println!("Extracting to: {}", dest.as_path().display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestDir(PathBuf);

impl DestDir {
    /// Creates a new `DestDir` after validating the path.
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::Io` if the path does not exist, is not a
    /// directory, or cannot be canonicalized.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let canonical = path.canonicalize().map_err(|e| {
            ExtractionError::Io(std::io::Error::new(
                e.kind(),
                format!("destination directory {}: {e}", path.display()),
            ))
        })?;

        if !canonical.is_dir() {
            return Err(ExtractionError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("path is not a directory: {}", path.display()),
            )));
        }

        Ok(Self(canonical))
    }

    /// Returns the path as a `&Path`.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Joins a `SafePath` to this destination directory.
    #[inline]
    #[must_use]
    pub fn join(&self, safe_path: &super::SafePath) -> PathBuf {
        self.0.join(safe_path.as_path())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dest_dir_valid() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dest = DestDir::new(temp.path()).expect("dest should be valid");
        assert!(dest.as_path().is_absolute());
    }

    #[test]
    fn test_dest_dir_nonexistent() {
        let result = DestDir::new("/nonexistent/directory/that/does/not/exist");
        assert!(matches!(result, Err(ExtractionError::Io(_))));
    }

    #[test]
    fn test_dest_dir_not_a_directory() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let file_path = temp.path().join("file.txt");
        fs::write(&file_path, "test").expect("failed to write file");

        let result = DestDir::new(file_path);
        assert!(matches!(result, Err(ExtractionError::Io(_))));
    }

    #[test]
    fn test_dest_dir_canonicalization() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let subdir = temp.path().join("subdir");
        fs::create_dir(&subdir).expect("failed to create subdir");

        let dest = DestDir::new(subdir.join(".").join("..")).expect("should create dest dir");
        assert_eq!(dest.as_path(), temp.path().canonicalize().unwrap());
    }

    #[test]
    #[cfg(unix)]
    fn test_dest_dir_with_symlink() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().expect("failed to create temp dir");
        let real_dir = temp.path().join("real");
        fs::create_dir(&real_dir).expect("failed to create real dir");
        let link = temp.path().join("link");
        symlink(&real_dir, &link).expect("failed to create symlink");

        let dest = DestDir::new(link).expect("should create from symlink");
        assert_eq!(dest.as_path(), real_dir.canonicalize().unwrap());
    }
}
