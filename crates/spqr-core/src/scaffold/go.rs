//! Go service generator.

use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

use super::Database;
use super::DatabaseConfig;
use super::ProjectWriter;
use super::prompt::Prompter;
use super::prompt::answer_or_ask;
use super::templates;
use super::validate_project_name;
use crate::ScaffoldError;
use crate::ScaffoldReport;
use crate::ScaffoldResult;

/// HTTP framework added to every generated module.
pub const GIN_MODULE: &str = "github.com/gin-gonic/gin";

const PACKAGE_DIRS: &[&str] = &[
    "cmd/api",
    "internal/adapters/in",
    "internal/adapters/in/models/request",
    "internal/adapters/in/models/response",
    "internal/adapters/out/repositories",
    "internal/configs",
    "internal/core/auth",
    "internal/core/domain",
    "internal/core/ports/in",
    "internal/core/ports/out",
    "internal/core/usecases",
    "internal/routing",
];

/// Stub files as (path, package).
const STUB_FILES: &[(&str, &str)] = &[
    ("cmd/api/spqr.go", "main"),
    ("internal/configs/config.go", "configs"),
    ("internal/core/domain/domain.go", "domain"),
    (
        "internal/adapters/in/models/request/request_model.go",
        "request",
    ),
    (
        "internal/adapters/in/models/response/response_model.go",
        "response",
    ),
    ("internal/adapters/in/adapter_in.go", "in"),
    (
        "internal/adapters/out/repositories/repository.go",
        "repositories",
    ),
    ("internal/core/auth/auth.go", "auth"),
    ("internal/core/ports/in/ports_in.go", "in"),
    ("internal/core/ports/out/ports_out.go", "out"),
    ("internal/core/usecases/usecases.go", "usecases"),
    ("internal/routing/router.go", "routing"),
];

/// Runs external build tools inside a project directory.
pub trait Toolchain {
    /// Runs `program` with `args` in `dir`, failing on non-zero exit.
    ///
    /// # Errors
    ///
    /// Returns `ScaffoldError::ToolchainSpawn` if the program cannot be
    /// started and `ScaffoldError::Toolchain` if it exits unsuccessfully.
    fn run(&mut self, program: &str, args: &[&str], dir: &Path) -> ScaffoldResult<()>;
}

/// [`Toolchain`] that spawns real processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemToolchain;

impl Toolchain for SystemToolchain {
    fn run(&mut self, program: &str, args: &[&str], dir: &Path) -> ScaffoldResult<()> {
        let command = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        tracing::debug!(%command, dir = %dir.display(), "running");

        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|source| ScaffoldError::ToolchainSpawn {
                command: command.clone(),
                source,
            })?;

        if output.status.success() {
            Ok(())
        } else {
            tracing::error!(
                %command,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "command failed"
            );
            Err(ScaffoldError::Toolchain {
                command,
                status: output.status,
            })
        }
    }
}

/// Answers supplied up front; anything left `None` is asked interactively.
#[derive(Debug, Default, Clone)]
pub struct GoAnswers {
    /// Project name.
    pub name: Option<String>,
    /// Database engine.
    pub database: Option<Database>,
    /// Database user.
    pub db_user: Option<String>,
    /// Database password.
    pub db_password: Option<String>,
    /// Database name.
    pub db_name: Option<String>,
    /// Database port.
    pub db_port: Option<String>,
}

/// Go project to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoProject {
    /// Project directory and module name.
    pub name: String,
    /// Database wired into docker-compose.
    pub database: DatabaseConfig,
    /// Run `go mod init` and `go get` after creating the directory.
    pub init_module: bool,
}

impl GoProject {
    /// Completes `answers` by asking `prompter` for missing values.
    ///
    /// Questions come in a fixed order: project name, database, user,
    /// password, database name, port. The host is always `localhost`.
    ///
    /// # Errors
    ///
    /// Returns `ScaffoldError::Prompt` if an answer cannot be read and
    /// `ScaffoldError::UnsupportedDatabase` for a database choice other
    /// than `1` or `2`.
    pub fn interview(answers: GoAnswers, prompter: &mut dyn Prompter) -> ScaffoldResult<Self> {
        let name = answer_or_ask(prompter, answers.name, "Enter project name: ")?;

        let kind = match answers.database {
            Some(kind) => kind,
            None => {
                let question = format!(
                    "Select database (1 for {}, 2 for {}): ",
                    Database::Postgres.label(),
                    Database::MariaDb.label()
                );
                let choice = prompter.ask(&question).map_err(ScaffoldError::Prompt)?;
                Database::from_choice(&choice)?
            }
        };

        let user = answer_or_ask(prompter, answers.db_user, "Enter DB_USER: ")?;
        let password = answer_or_ask(prompter, answers.db_password, "Enter DB_PASSWORD: ")?;
        let db_name = answer_or_ask(prompter, answers.db_name, "Enter DB_NAME: ")?;
        let port = answer_or_ask(prompter, answers.db_port, "Enter DB_PORT: ")?;

        Ok(Self {
            name,
            database: DatabaseConfig {
                kind,
                user,
                password,
                name: db_name,
                host: DatabaseConfig::DEFAULT_HOST.to_string(),
                port,
            },
            init_module: true,
        })
    }
}

/// Generates a Go project under `base_dir/<project.name>`.
///
/// # Errors
///
/// - `ScaffoldError::InvalidProjectName` for unusable names
/// - `ScaffoldError::ProjectExists` if the directory is already there
/// - `ScaffoldError::Toolchain`/`ToolchainSpawn` if `go` fails
/// - `ScaffoldError::Io` naming the path that could not be written
///
/// Whatever was created before a failure is left in place.
pub fn scaffold_go(
    project: &GoProject,
    base_dir: &Path,
    toolchain: &mut dyn Toolchain,
) -> ScaffoldResult<ScaffoldReport> {
    let start = Instant::now();
    validate_project_name(&project.name)?;

    let project_path = base_dir.join(&project.name);
    tracing::debug!(path = %project_path.display(), "creating Go project");

    fs::create_dir(&project_path).map_err(|e| match e.kind() {
        io::ErrorKind::AlreadyExists => ScaffoldError::ProjectExists {
            path: project_path.clone(),
        },
        _ => ScaffoldError::io(&project_path, e),
    })?;

    let mut report = ScaffoldReport::new(&project_path);
    report.directories_created += 1;

    if project.init_module {
        toolchain.run("go", &["mod", "init", &project.name], &project_path)?;
        toolchain.run("go", &["get", GIN_MODULE], &project_path)?;
    } else {
        report.add_warning(format!(
            "Go module not initialized; run `go mod init {}` and `go get {GIN_MODULE}`",
            project.name
        ));
    }

    let mut writer = ProjectWriter::new(&project_path, &mut report);
    for dir in PACKAGE_DIRS {
        writer.create_dir(dir)?;
    }
    for (path, package) in STUB_FILES {
        writer.write_file(path, &templates::go_stub(package))?;
    }
    writer.write_file(
        "docker-compose.yml",
        &templates::docker_compose(&project.database),
    )?;
    writer.write_file("Dockerfile", templates::GO_DOCKERFILE)?;

    report.duration = start.elapsed();
    tracing::debug!(
        directories = report.directories_created,
        files = report.files_written,
        "Go project created"
    );
    Ok(report)
}
