//! Spring Boot service generator.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use super::DatabaseConfig;
use super::ProjectWriter;
use super::prompt::Prompter;
use super::prompt::answer_or_ask;
use super::templates;
use super::validate_package_name;
use super::validate_project_name;
use crate::ExtractionConfig;
use crate::ProgressCallback;
use crate::ScaffoldError;
use crate::ScaffoldReport;
use crate::ScaffoldResult;
use crate::extract_with_progress;

/// File name of the starter archive while it is being unpacked.
pub const STARTER_ARCHIVE: &str = "project.zip";

const STARTER_ENDPOINT: &str = "https://start.spring.io/starter.zip";

const GREETING: &str = "Let's get started with your Spring Boot 🍃 project using SPQR 🦅 ! 🚀\n";

/// Hexagonal packages created under the base package.
const PACKAGE_DIRS: &[&str] = &[
    "adapters/in/consumer",
    "adapters/in/controllers/models",
    "adapters/out/jdbc",
    "adapters/out/jpa/models",
    "adapters/out/jpa/repository",
    "adapters/producer",
    "adapters/rest",
    "configs/handlers",
    "configs/properties",
    "core/domain/dtos",
    "core/domain/enums",
    "core/domain/exceptions",
    "core/domain/models",
    "core/domain/parser",
    "core/ports/in",
    "core/ports/out",
    "core/usecases",
];

/// Supplies the starter archive for a project.
pub trait TemplateSource {
    /// Places the starter archive for `project` at `target`.
    ///
    /// # Errors
    ///
    /// Returns `ScaffoldError::TemplateUnavailable` if no archive can be
    /// produced, or `ScaffoldError::Io` if writing `target` fails.
    fn fetch(&self, project: &SpringProject, target: &Path) -> ScaffoldResult<()>;
}

/// [`TemplateSource`] backed by an archive already on disk.
#[derive(Debug, Clone)]
pub struct LocalArchive {
    path: PathBuf,
}

impl LocalArchive {
    /// Uses the archive at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TemplateSource for LocalArchive {
    fn fetch(&self, _project: &SpringProject, target: &Path) -> ScaffoldResult<()> {
        tracing::debug!(
            from = %self.path.display(),
            to = %target.display(),
            "copying starter archive"
        );
        match fs::copy(&self.path, target) {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound && !self.path.exists() => {
                Err(ScaffoldError::TemplateUnavailable {
                    reason: format!("{} does not exist", self.path.display()),
                })
            }
            Err(e) => Err(ScaffoldError::io(target, e)),
        }
    }
}

/// Answers supplied up front; anything left `None` is asked interactively.
#[derive(Debug, Default, Clone)]
pub struct SpringAnswers {
    /// Project name.
    pub name: Option<String>,
    /// Base Java package.
    pub package: Option<String>,
}

/// Spring Boot project to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpringProject {
    /// Project directory, artifact id and Gradle root project name.
    pub name: String,
    /// Base Java package, e.g. `com.example.project`.
    pub package: String,
    /// Datasource written to `application.properties`.
    pub database: DatabaseConfig,
}

impl SpringProject {
    /// Creates a project using [`DatabaseConfig::spring_defaults`].
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            database: DatabaseConfig::spring_defaults(),
        }
    }

    /// Greets the user, then asks for whatever `answers` leaves out.
    ///
    /// # Errors
    ///
    /// Returns `ScaffoldError::Prompt` if output or input fails.
    pub fn interview(answers: SpringAnswers, prompter: &mut dyn Prompter) -> ScaffoldResult<Self> {
        if answers.name.is_none() || answers.package.is_none() {
            prompter.say(GREETING).map_err(ScaffoldError::Prompt)?;
        }
        let name = answer_or_ask(prompter, answers.name, "Enter project name: ")?;
        let package = answer_or_ask(
            prompter,
            answers.package,
            "Enter package name (e.g., com.example.project): ",
        )?;
        Ok(Self::new(name, package))
    }

    /// start.spring.io URL producing the starter archive for this project.
    ///
    /// # Examples
    ///
    /// ```
    /// use spqr_core::scaffold::SpringProject;
    ///
    /// let url = SpringProject::new("demo", "com.example.demo").starter_url();
    /// assert!(url.starts_with("https://start.spring.io/starter.zip?type=gradle-project"));
    /// assert!(url.contains("&baseDir=demo&groupId=com.example.demo&artifactId=demo"));
    /// ```
    #[must_use]
    pub fn starter_url(&self) -> String {
        let name = &self.name;
        let package = &self.package;
        format!(
            "{STARTER_ENDPOINT}?type=gradle-project&language=java&bootVersion=3.3.0\
             &baseDir={name}&groupId={package}&artifactId={name}&name={name}\
             &description={name}&packageName={package}&packaging=jar\
             &javaVersion=17&dependencies=web,data-jpa,postgresql"
        )
    }

    /// Source directory of the base package, relative to the inner project.
    #[must_use]
    pub fn source_dir(&self) -> PathBuf {
        let mut dir = PathBuf::from("src/main/java");
        dir.extend(self.package.split('.'));
        dir
    }
}

/// Generates a Spring Boot project under `base_dir/<project.name>`.
///
/// The starter archive is obtained from `source`, unpacked with the safe
/// extractor and deleted. The hexagonal layout and build files are then
/// written into `<project>/<name>`, the directory the starter unpacks to.
///
/// # Errors
///
/// - `ScaffoldError::InvalidProjectName`/`InvalidPackageName`
/// - `ScaffoldError::TemplateUnavailable` if `source` has no archive
/// - `ScaffoldError::Extraction` if the archive is corrupt or hostile
/// - `ScaffoldError::Io` naming the path that could not be written
pub fn scaffold_spring(
    project: &SpringProject,
    base_dir: &Path,
    source: &dyn TemplateSource,
    config: &ExtractionConfig,
    progress: &mut dyn ProgressCallback,
) -> ScaffoldResult<ScaffoldReport> {
    let start = Instant::now();
    validate_project_name(&project.name)?;
    validate_package_name(&project.package)?;

    let project_path = base_dir.join(&project.name);
    tracing::debug!(path = %project_path.display(), "creating Spring Boot project");
    fs::create_dir_all(&project_path).map_err(|e| ScaffoldError::io(&project_path, e))?;

    let mut report = ScaffoldReport::new(&project_path);
    report.directories_created += 1;

    let archive = project_path.join(STARTER_ARCHIVE);
    source.fetch(project, &archive)?;
    report.extraction = Some(extract_with_progress(
        &archive,
        &project_path,
        config,
        progress,
    )?);
    fs::remove_file(&archive).map_err(|e| ScaffoldError::io(&archive, e))?;

    let inner = project_path.join(&project.name);
    if !inner.is_dir() {
        report.add_warning(format!(
            "starter archive has no {}/ directory; generated files were placed there anyway",
            project.name
        ));
    }

    let source_dir = project.source_dir();
    let mut writer = ProjectWriter::new(&inner, &mut report);
    writer.write_file(
        "src/main/resources/application.properties",
        &templates::application_properties(&project.database),
    )?;
    for dir in PACKAGE_DIRS {
        writer.create_dir(source_dir.join(dir))?;
    }
    writer.create_dir("src/main/resources/db/migration")?;
    writer.create_dir("src/test/java")?;
    writer.write_file("build.gradle", &templates::build_gradle(&project.package))?;
    writer.write_file("settings.gradle", &templates::settings_gradle(&project.name))?;
    writer.write_file("Dockerfile", templates::SPRING_DOCKERFILE)?;

    report.duration = start.elapsed();
    tracing::debug!(
        directories = report.directories_created,
        files = report.files_written,
        "Spring Boot project created"
    );
    Ok(report)
}
