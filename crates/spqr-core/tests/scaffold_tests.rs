//! Project generation through the public API.

#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;

use spqr_core::ExtractionConfig;
use spqr_core::ExtractionError;
use spqr_core::NoopProgress;
use spqr_core::ScaffoldError;
use spqr_core::ScaffoldResult;
use spqr_core::scaffold::Database;
use spqr_core::scaffold::GoAnswers;
use spqr_core::scaffold::GoProject;
use spqr_core::scaffold::LocalArchive;
use spqr_core::scaffold::ScriptedPrompter;
use spqr_core::scaffold::SpringAnswers;
use spqr_core::scaffold::SpringProject;
use spqr_core::scaffold::Toolchain;
use spqr_core::scaffold::scaffold_go;
use spqr_core::scaffold::scaffold_spring;
use spqr_core::test_utils::ZipTestBuilder;
use spqr_core::test_utils::spring_starter_zip;
use tempfile::TempDir;

/// Stands in for `go`, creating the go.mod a real `go mod init` would.
struct FakeGo;

impl Toolchain for FakeGo {
    fn run(&mut self, _program: &str, args: &[&str], dir: &Path) -> ScaffoldResult<()> {
        if args.first() == Some(&"mod") {
            fs::write(dir.join("go.mod"), format!("module {}\n", args[2])).unwrap();
        }
        Ok(())
    }
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_go_project_from_interview() {
    let temp = TempDir::new().unwrap();
    let mut prompter = ScriptedPrompter::new(["orders", "1", "alice", "s3cret", "orders_db", "5432"]);
    let project = GoProject::interview(GoAnswers::default(), &mut prompter).unwrap();

    let report = scaffold_go(&project, temp.path(), &mut FakeGo).unwrap();

    let root = temp.path().join("orders");
    assert_eq!(report.project_path, root);
    assert_eq!(read(root.join("go.mod")), "module orders\n");
    assert!(read(root.join("cmd/api/spqr.go")).starts_with("package main\n"));
    assert!(read(root.join("internal/routing/router.go")).starts_with("package routing\n"));
    assert!(read(root.join("internal/core/ports/out/ports_out.go")).starts_with("package out\n"));
    assert!(root.join("internal/core/ports/in").is_dir());

    let compose = read(root.join("docker-compose.yml"));
    assert!(compose.contains("image: postgres:latest"));
    assert!(compose.contains("DB_USER: alice"));
    assert!(compose.contains("POSTGRES_PASSWORD: s3cret"));
    assert!(compose.contains("DB_HOST: localhost"));
    assert!(read(root.join("Dockerfile")).contains("AS builder"));
}

#[test]
fn test_go_project_mariadb_compose() {
    let temp = TempDir::new().unwrap();
    let answers = GoAnswers {
        name: Some("shop".into()),
        database: Some(Database::MariaDb),
        db_user: Some("bob".into()),
        db_password: Some("pw".into()),
        db_name: Some("shop".into()),
        db_port: Some("3306".into()),
    };
    let project = GoProject::interview(answers, &mut ScriptedPrompter::default()).unwrap();

    scaffold_go(&project, temp.path(), &mut FakeGo).unwrap();

    let compose = read(temp.path().join("shop/docker-compose.yml"));
    assert!(compose.contains("image: mariadb:latest"));
    assert!(compose.contains("MYSQL_USER: bob"));
    assert!(compose.contains("db-data:/var/lib/mysql"));
}

#[test]
fn test_go_project_refuses_existing_directory() {
    let temp = TempDir::new().unwrap();
    let project = GoProject::interview(
        GoAnswers {
            name: Some("svc".into()),
            database: Some(Database::Postgres),
            ..GoAnswers::default()
        },
        &mut ScriptedPrompter::new(["u", "p", "d", "5432"]),
    )
    .unwrap();

    scaffold_go(&project, temp.path(), &mut FakeGo).unwrap();
    let err = scaffold_go(&project, temp.path(), &mut FakeGo).unwrap_err();

    assert!(matches!(err, ScaffoldError::ProjectExists { .. }));
}

#[test]
fn test_spring_project_from_local_archive() {
    let temp = TempDir::new().unwrap();
    let starter = temp.path().join("starter.zip");
    fs::write(&starter, spring_starter_zip("billing")).unwrap();
    let mut prompter = ScriptedPrompter::new(["billing", "com.acme.billing"]);
    let project = SpringProject::interview(SpringAnswers::default(), &mut prompter).unwrap();

    let report = scaffold_spring(
        &project,
        temp.path(),
        &LocalArchive::new(&starter),
        &ExtractionConfig::default(),
        &mut NoopProgress,
    )
    .unwrap();

    let inner = temp.path().join("billing/billing");
    assert!(inner.join("gradlew").is_file());
    assert!(inner.join("src/main/java/com/acme/billing/core/usecases").is_dir());
    assert!(inner.join("src/main/java/com/acme/billing/adapters/out/jpa/repository").is_dir());
    assert_eq!(read(inner.join("settings.gradle")), "rootProject.name = 'billing'");
    assert!(
        read(inner.join("src/main/resources/application.properties"))
            .contains("spring.datasource.username=default_user")
    );
    assert!(!temp.path().join("billing/project.zip").exists());
    assert_eq!(report.extraction.unwrap().files_extracted, 4);
}

#[test]
fn test_spring_project_rejects_hostile_starter() {
    let temp = TempDir::new().unwrap();
    let starter = temp.path().join("starter.zip");
    ZipTestBuilder::new()
        .add_file("billing/ok.txt", b"fine")
        .add_file("../../escaped.txt", b"pwned")
        .write_to(&starter);

    let err = scaffold_spring(
        &SpringProject::new("billing", "com.acme"),
        temp.path(),
        &LocalArchive::new(&starter),
        &ExtractionConfig::default(),
        &mut NoopProgress,
    )
    .unwrap_err();

    match err {
        ScaffoldError::Extraction(ExtractionError::PathTraversal { entry }) => {
            assert_eq!(entry, "../../escaped.txt");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(temp.path().join("billing/billing/ok.txt").is_file());
    assert!(!temp.path().parent().unwrap().join("escaped.txt").exists());
}
