//! Lexical path normalization and containment checks.

use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

/// Resolves `.` and `..` components without touching the filesystem.
///
/// `..` directly under the root stays at the root, matching how the
/// filesystem itself resolves `/..`. Leading `..` components of a relative
/// path are kept, since nothing is known about what precedes them.
///
/// # Examples
///
/// ```
/// use spqr_core::security::normalize_path;
/// use std::path::Path;
///
/// assert_eq!(
///     normalize_path(Path::new("/tmp/dest/a/../b/./c.txt")),
///     Path::new("/tmp/dest/b/c.txt")
/// );
/// assert_eq!(
///     normalize_path(Path::new("/tmp/dest/../dest2/file")),
///     Path::new("/tmp/dest2/file")
/// );
/// ```
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component),
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => {
                    normalized.push(component);
                }
            },
            Component::Normal(name) => normalized.push(name),
        }
    }

    normalized
}

/// Returns `true` if `path` equals `root` or lies beneath it once both are
/// normalized.
///
/// Containment is decided per path component, never by string prefix, so a
/// sibling sharing a name prefix is outside.
///
/// # Examples
///
/// ```
/// use spqr_core::security::is_within;
/// use std::path::Path;
///
/// assert!(is_within(Path::new("/tmp/dest/file"), Path::new("/tmp/dest")));
/// assert!(is_within(Path::new("/tmp/dest"), Path::new("/tmp/dest/")));
/// assert!(!is_within(Path::new("/tmp/dest2/file"), Path::new("/tmp/dest")));
/// assert!(!is_within(Path::new("/tmp/dest/../x"), Path::new("/tmp/dest")));
/// ```
#[must_use]
pub fn is_within(path: &Path, root: &Path) -> bool {
    normalize_path(path).starts_with(normalize_path(root))
}
