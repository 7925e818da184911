//! Project generators.
//!
//! [`scaffold_go`] lays out a Go service with a hexagonal package structure
//! and docker-compose wiring. [`scaffold_spring`] unpacks a Spring Boot
//! starter archive and adds the same architecture on top of it.

mod database;
mod go;
mod prompt;
mod spring;
pub mod templates;

pub use database::Database;
pub use database::DatabaseConfig;
pub use go::GIN_MODULE;
pub use go::GoAnswers;
pub use go::GoProject;
pub use go::SystemToolchain;
pub use go::Toolchain;
pub use go::scaffold_go;
pub use prompt::Prompter;
pub use prompt::ScriptedPrompter;
pub use spring::LocalArchive;
pub use spring::STARTER_ARCHIVE;
pub use spring::SpringAnswers;
pub use spring::SpringProject;
pub use spring::TemplateSource;
pub use spring::scaffold_spring;

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use crate::ScaffoldError;
use crate::ScaffoldReport;
use crate::ScaffoldResult;

/// Checks that `name` can be used as a single directory name.
///
/// # Errors
///
/// Returns `ScaffoldError::InvalidProjectName` for empty names, `.`/`..`,
/// and names containing path separators or control characters.
///
/// # Examples
///
/// ```
/// use spqr_core::scaffold::validate_project_name;
///
/// assert!(validate_project_name("orders-api").is_ok());
/// assert!(validate_project_name("../escape").is_err());
/// ```
pub fn validate_project_name(name: &str) -> ScaffoldResult<()> {
    let valid = !name.is_empty()
        && name != "."
        && name != ".."
        && !name
            .chars()
            .any(|c| c == '/' || c == '\\' || c.is_control());

    if valid {
        Ok(())
    } else {
        Err(ScaffoldError::InvalidProjectName {
            name: name.to_string(),
        })
    }
}

/// Checks that `name` is a dot-separated list of Java identifiers.
///
/// # Errors
///
/// Returns `ScaffoldError::InvalidPackageName` otherwise.
///
/// # Examples
///
/// ```
/// use spqr_core::scaffold::validate_package_name;
///
/// assert!(validate_package_name("com.example.project").is_ok());
/// assert!(validate_package_name("com..example").is_err());
/// assert!(validate_package_name("com.1example").is_err());
/// ```
pub fn validate_package_name(name: &str) -> ScaffoldResult<()> {
    let is_identifier = |segment: &str| {
        let mut chars = segment.chars();
        chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
    };

    if name.split('.').all(is_identifier) {
        Ok(())
    } else {
        Err(ScaffoldError::InvalidPackageName {
            name: name.to_string(),
        })
    }
}

/// Writes generated directories and files, counting them in a report.
pub(crate) struct ProjectWriter<'a> {
    root: PathBuf,
    report: &'a mut ScaffoldReport,
}

impl<'a> ProjectWriter<'a> {
    pub(crate) fn new(root: impl Into<PathBuf>, report: &'a mut ScaffoldReport) -> Self {
        Self {
            root: root.into(),
            report,
        }
    }

    pub(crate) fn create_dir(&mut self, relative: impl AsRef<Path>) -> ScaffoldResult<()> {
        let path = self.root.join(relative);
        fs::create_dir_all(&path).map_err(|e| ScaffoldError::io(&path, e))?;
        tracing::trace!(path = %path.display(), "created directory");
        self.report.directories_created += 1;
        Ok(())
    }

    pub(crate) fn write_file(
        &mut self,
        relative: impl AsRef<Path>,
        contents: &str,
    ) -> ScaffoldResult<()> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
        }
        fs::write(&path, contents).map_err(|e| ScaffoldError::io(&path, e))?;
        tracing::trace!(path = %path.display(), bytes = contents.len(), "wrote file");
        self.report.files_written += 1;
        Ok(())
    }
}
