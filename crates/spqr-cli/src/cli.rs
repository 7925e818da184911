//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use spqr_core::scaffold::Database;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spqr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new Go project with predefined scaffolding
    Create(CreateArgs),
    /// Create a Spring Boot project with Gradle and hexagonal architecture
    Coffee(CoffeeArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct CreateArgs {
    /// Directory to create the project in (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Project and Go module name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Database engine: postgres (1) or mariadb (2)
    #[arg(long, value_parser = parse_database)]
    pub database: Option<Database>,

    /// Database user
    #[arg(long, value_name = "USER")]
    pub db_user: Option<String>,

    /// Database password
    #[arg(long, value_name = "PASSWORD")]
    pub db_password: Option<String>,

    /// Database name
    #[arg(long, value_name = "NAME")]
    pub db_name: Option<String>,

    /// Database port
    #[arg(long, value_name = "PORT")]
    pub db_port: Option<String>,

    /// Do not run `go mod init` and `go get`
    #[arg(long)]
    pub skip_go_mod: bool,
}

#[derive(clap::Args)]
pub struct CoffeeArgs {
    /// Directory to create the project in (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Project name, also used as artifact id
    #[arg(short, long)]
    pub name: Option<String>,

    /// Base Java package (e.g. com.example.project)
    #[arg(short, long)]
    pub package: Option<String>,

    /// Spring Boot starter archive downloaded from start.spring.io
    #[arg(short, long, value_name = "FILE")]
    pub archive: Option<PathBuf>,

    /// Ignore file modes stored in the starter archive
    #[arg(long)]
    pub ignore_permissions: bool,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

fn parse_database(s: &str) -> Result<Database, String> {
    Database::from_choice(s).map_err(|_| format!("expected postgres, mariadb, 1 or 2, got {s:?}"))
}
