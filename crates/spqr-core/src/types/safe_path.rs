//! Validated safe path type for template extraction.

use crate::ExtractionError;
use crate::Result;
use crate::security::is_within;
use crate::security::normalize_path;
use std::path::Path;
use std::path::PathBuf;

use super::DestDir;

/// An archive entry path that has been proven to stay inside a destination.
///
/// The wrapped path is relative to the destination root and normalized (no
/// `.` or `..` components). There is no `From<PathBuf>`: the only way to get
/// a `SafePath` is [`SafePath::validate`].
///
/// # Examples
///
/// ```no_run
/// use spqr_core::types::DestDir;
/// use spqr_core::types::SafePath;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::new("/tmp/out")?;
///
/// let safe = SafePath::validate("foo/./bar.txt", &dest)?;
/// assert_eq!(safe.as_path(), std::path::Path::new("foo/bar.txt"));
///
/// assert!(SafePath::validate("../etc/passwd", &dest).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafePath(PathBuf);

impl SafePath {
    /// Validates an entry name against `dest`.
    ///
    /// # Validation Steps
    ///
    /// 1. Join the entry name onto the destination root
    /// 2. Normalize the result lexically (resolve `.` and `..`)
    /// 3. Require the normalized path to be the root or beneath it, compared
    ///    per component by [`is_within`]
    /// 4. Canonicalize the nearest existing ancestor and require it to be
    ///    inside the root too, so a symlink already present in the
    ///    destination cannot redirect the write
    ///
    /// Absolute entry names replace the root when joined, so they fail step 3
    /// unless they already name a path beneath the root.
    ///
    /// # Errors
    ///
    /// - `ExtractionError::PathTraversal` if the entry escapes the root
    /// - `ExtractionError::Io` if an existing ancestor cannot be resolved
    pub fn validate(entry: &str, dest: &DestDir) -> Result<Self> {
        let traversal = || ExtractionError::PathTraversal {
            entry: entry.to_string(),
        };

        let candidate = normalize_path(&dest.as_path().join(entry));
        if !is_within(&candidate, dest.as_path()) {
            return Err(traversal());
        }

        let existing = candidate
            .ancestors()
            .find(|ancestor| ancestor.symlink_metadata().is_ok())
            .unwrap_or_else(|| dest.as_path());

        match existing.canonicalize() {
            Ok(resolved) if is_within(&resolved, dest.as_path()) => {}
            Ok(_) => return Err(traversal()),
            // Dangling symlink: its target is unknown, refuse to follow it.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(traversal()),
            Err(e) => {
                return Err(ExtractionError::Io(std::io::Error::new(
                    e.kind(),
                    format!("failed to resolve {}: {e}", existing.display()),
                )));
            }
        }

        let relative = candidate
            .strip_prefix(dest.as_path())
            .map(Path::to_path_buf)
            .map_err(|_| traversal())?;

        Ok(Self(relative))
    }

    /// Returns the path relative to the destination root.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_dest() -> (TempDir, DestDir) {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dest = DestDir::new(temp.path()).expect("failed to create dest");
        (temp, dest)
    }

    #[test]
    fn test_valid_relative_path() {
        let (_temp, dest) = create_test_dest();
        let safe = SafePath::validate("foo/bar/baz.txt", &dest).expect("should be valid");
        assert_eq!(safe.as_path(), Path::new("foo/bar/baz.txt"));
    }

    #[test]
    fn test_current_dir_is_normalized() {
        let (_temp, dest) = create_test_dest();
        let safe = SafePath::validate("./foo/./bar.txt", &dest).unwrap();
        assert_eq!(safe.as_path(), Path::new("foo/bar.txt"));
    }

    #[test]
    fn test_inner_parent_dir_that_stays_inside_is_allowed() {
        let (_temp, dest) = create_test_dest();
        let safe = SafePath::validate("foo/../bar.txt", &dest).unwrap();
        assert_eq!(safe.as_path(), Path::new("bar.txt"));
    }

    #[test]
    fn test_parent_traversal_rejected() {
        let (_temp, dest) = create_test_dest();
        for entry in ["../evil.txt", "../../etc/passwd", "foo/../../evil.txt"] {
            let result = SafePath::validate(entry, &dest);
            assert!(
                matches!(result, Err(ExtractionError::PathTraversal { .. })),
                "{entry} should be rejected"
            );
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_absolute_path_rejected() {
        let (_temp, dest) = create_test_dest();
        let result = SafePath::validate("/etc/passwd", &dest);
        assert!(matches!(
            result,
            Err(ExtractionError::PathTraversal { entry }) if entry == "/etc/passwd"
        ));
    }

    #[test]
    fn test_sibling_directory_rejected() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("dest")).unwrap();
        fs::create_dir(temp.path().join("dest2")).unwrap();
        let dest = DestDir::new(temp.path().join("dest")).unwrap();

        let result = SafePath::validate("../dest2/file", &dest);
        assert!(matches!(result, Err(ExtractionError::PathTraversal { .. })));
    }

    #[test]
    fn test_prefix_sharing_sibling_rejected() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("dest")).unwrap();
        fs::create_dir(temp.path().join("destination")).unwrap();
        let dest = DestDir::new(temp.path().join("dest")).unwrap();

        for entry in ["../destination/file", "../dest2", "../dest/../destination"] {
            let result = SafePath::validate(entry, &dest);
            assert!(
                matches!(result, Err(ExtractionError::PathTraversal { .. })),
                "{entry} should be rejected"
            );
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_absolute_entry_naming_sibling_rejected() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("dest")).unwrap();
        fs::create_dir(temp.path().join("dest2")).unwrap();
        let dest = DestDir::new(temp.path().join("dest")).unwrap();

        let entry = format!("{}/file", dest.as_path().with_file_name("dest2").display());
        let result = SafePath::validate(&entry, &dest);
        assert!(matches!(result, Err(ExtractionError::PathTraversal { .. })));
    }

    #[test]
    fn test_absolute_entry_inside_root_is_relativized() {
        let (_temp, dest) = create_test_dest();
        let entry = dest.as_path().join("nested/file.txt");
        let safe = SafePath::validate(&entry.to_string_lossy(), &dest).unwrap();
        assert_eq!(safe.as_path(), Path::new("nested/file.txt"));
    }

    #[test]
    fn test_entry_resolving_to_root() {
        let (_temp, dest) = create_test_dest();
        let safe = SafePath::validate("foo/..", &dest).unwrap();
        assert_eq!(safe.as_path(), Path::new(""));
        assert_eq!(dest.join(&safe), dest.as_path());
    }

    #[test]
    #[cfg(unix)]
    fn test_symlinked_directory_escape_rejected() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().unwrap();
        let outside = temp.path().join("outside");
        let root = temp.path().join("root");
        fs::create_dir(&outside).unwrap();
        fs::create_dir(&root).unwrap();
        symlink(&outside, root.join("link")).unwrap();
        let dest = DestDir::new(&root).unwrap();

        let result = SafePath::validate("link/nested/file.txt", &dest);
        assert!(matches!(result, Err(ExtractionError::PathTraversal { .. })));
    }

    #[test]
    #[cfg(unix)]
    fn test_dangling_symlink_rejected() {
        use std::os::unix::fs::symlink;

        let (temp, dest) = create_test_dest();
        symlink(
            temp.path().join("..").join("missing-target"),
            temp.path().join("dangling"),
        )
        .unwrap();

        let result = SafePath::validate("dangling", &dest);
        assert!(matches!(result, Err(ExtractionError::PathTraversal { .. })));
    }

    #[test]
    #[cfg(unix)]
    fn test_symlink_within_destination_allowed() {
        use std::os::unix::fs::symlink;

        let (temp, dest) = create_test_dest();
        fs::create_dir(temp.path().join("real")).unwrap();
        symlink(temp.path().join("real"), temp.path().join("alias")).unwrap();

        let safe = SafePath::validate("alias/file.txt", &dest).unwrap();
        assert_eq!(safe.as_path(), Path::new("alias/file.txt"));
    }
}
