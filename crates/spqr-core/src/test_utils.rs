//! Helpers for building zip archives in memory.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;
use std::path::Path;

use zip::write::SimpleFileOptions;

/// Builder for ZIP test archives.
///
/// Entry names are written verbatim, so hostile names such as
/// `../evil.txt` can be produced.
///
/// # Examples
///
/// ```
/// use spqr_core::test_utils::ZipTestBuilder;
///
/// let zip_data = ZipTestBuilder::new()
///     .add_directory("dir/")
///     .add_file("dir/file.txt", b"content")
///     .build();
/// assert!(!zip_data.is_empty());
/// ```
pub struct ZipTestBuilder {
    zip: zip::ZipWriter<Cursor<Vec<u8>>>,
}

impl ZipTestBuilder {
    /// Creates a new ZIP test builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zip: zip::ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Adds a regular file stored with mode 0o644.
    #[must_use]
    pub fn add_file(self, path: &str, data: &[u8]) -> Self {
        self.add_file_with_mode(path, data, 0o644)
    }

    /// Adds a regular file with custom mode.
    #[must_use]
    pub fn add_file_with_mode(mut self, path: &str, data: &[u8], mode: u32) -> Self {
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored)
            .unix_permissions(mode);

        self.zip.start_file(path, options).unwrap();
        self.zip.write_all(data).unwrap();
        self
    }

    /// Adds a directory entry.
    #[must_use]
    pub fn add_directory(mut self, path: &str) -> Self {
        let options = SimpleFileOptions::default().unix_permissions(0o755);
        self.zip.add_directory(path, options).unwrap();
        self
    }

    /// Builds and returns the ZIP archive data.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.zip.finish().unwrap().into_inner()
    }

    /// Builds the archive and writes it to `path`.
    pub fn write_to(self, path: &Path) {
        std::fs::write(path, self.build()).unwrap();
    }
}

impl Default for ZipTestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a minimal Spring Boot starter archive rooted at `<project>/`.
///
/// Mirrors the layout start.spring.io produces when `baseDir` is set.
#[must_use]
pub fn spring_starter_zip(project: &str) -> Vec<u8> {
    ZipTestBuilder::new()
        .add_directory(&format!("{project}/"))
        .add_file_with_mode(&format!("{project}/gradlew"), b"#!/bin/sh\n", 0o755)
        .add_file(
            &format!("{project}/build.gradle"),
            b"plugins { id 'java' }\n",
        )
        .add_directory(&format!("{project}/src/main/java/"))
        .add_file(
            &format!("{project}/src/main/resources/application.properties"),
            b"spring.application.name=starter\n",
        )
        .add_file(&format!("{project}/HELP.md"), b"# Getting Started\n")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_builder() {
        let zip_data = ZipTestBuilder::new()
            .add_file("file.txt", b"content")
            .add_directory("dir/")
            .build();
        assert!(!zip_data.is_empty());
    }

    #[test]
    fn test_spring_starter_zip_lists_project_root() {
        let data = spring_starter_zip("demo");
        let archive = zip::ZipArchive::new(Cursor::new(data)).unwrap();
        assert!(archive.file_names().all(|name| name.starts_with("demo/")));
    }
}
