//! Archive entry type enumeration.

/// Kind of entry in a template archive.
///
/// Zip symlink entries are not special-cased: their stored target text is
/// written out as a regular file, like any other file entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    /// Regular file entry.
    File,

    /// Directory entry.
    Directory,
}

impl EntryType {
    /// Classifies a zip entry.
    #[must_use]
    pub fn of<R: std::io::Read + std::io::Seek>(entry: &zip::read::ZipFile<'_, R>) -> Self {
        if entry.is_dir() {
            Self::Directory
        } else {
            Self::File
        }
    }
}
