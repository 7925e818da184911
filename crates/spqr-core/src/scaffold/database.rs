//! Database selection and connection settings.

use std::fmt;
use std::str::FromStr;

use crate::ScaffoldError;

/// Database engine wired into a generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Database {
    /// PostgreSQL.
    Postgres,
    /// MariaDB.
    MariaDb,
}

impl Database {
    /// Parses the numbered menu answer (`1` Postgres, `2` MariaDB) or an
    /// engine name.
    ///
    /// # Errors
    ///
    /// Returns `ScaffoldError::UnsupportedDatabase` for anything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use spqr_core::scaffold::Database;
    ///
    /// assert_eq!(Database::from_choice("1").unwrap(), Database::Postgres);
    /// assert_eq!(Database::from_choice("mariadb").unwrap(), Database::MariaDb);
    /// assert!(Database::from_choice("3").is_err());
    /// ```
    pub fn from_choice(choice: &str) -> Result<Self, ScaffoldError> {
        match choice.trim().to_ascii_lowercase().as_str() {
            "1" | "postgres" | "postgresql" => Ok(Self::Postgres),
            "2" | "mariadb" => Ok(Self::MariaDb),
            other => Err(ScaffoldError::UnsupportedDatabase(other.to_string())),
        }
    }

    /// Menu label shown to the user.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Postgres => "Postgres 🐘",
            Self::MariaDb => "Mariadb 🦭",
        }
    }

    /// Container image used in docker-compose.
    #[must_use]
    pub const fn image(self) -> &'static str {
        match self {
            Self::Postgres => "postgres:latest",
            Self::MariaDb => "mariadb:latest",
        }
    }

    /// Data directory inside the container.
    #[must_use]
    pub const fn data_dir(self) -> &'static str {
        match self {
            Self::Postgres => "/var/lib/postgresql/data",
            Self::MariaDb => "/var/lib/mysql",
        }
    }

    /// JDBC scheme for Spring datasource URLs.
    #[must_use]
    pub const fn jdbc_scheme(self) -> &'static str {
        match self {
            Self::Postgres => "postgresql",
            Self::MariaDb => "mariadb",
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Database {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_choice(s)
    }
}

/// Connection settings rendered into generated configuration files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Engine.
    pub kind: Database,
    /// Login user.
    pub user: String,
    /// Login password.
    pub password: String,
    /// Database name.
    pub name: String,
    /// Host name.
    pub host: String,
    /// Port.
    pub port: String,
}

impl DatabaseConfig {
    /// Host used by generated projects.
    pub const DEFAULT_HOST: &'static str = "localhost";

    /// Settings baked into Spring Boot projects.
    #[must_use]
    pub fn spring_defaults() -> Self {
        Self {
            kind: Database::Postgres,
            user: "default_user".to_string(),
            password: "default_password".to_string(),
            name: "default_db".to_string(),
            host: Self::DEFAULT_HOST.to_string(),
            port: "5432".to_string(),
        }
    }

    /// JDBC URL for this database.
    ///
    /// # Examples
    ///
    /// ```
    /// use spqr_core::scaffold::DatabaseConfig;
    ///
    /// assert_eq!(
    ///     DatabaseConfig::spring_defaults().jdbc_url(),
    ///     "jdbc:postgresql://localhost:5432/default_db"
    /// );
    /// ```
    #[must_use]
    pub fn jdbc_url(&self) -> String {
        format!(
            "jdbc:{}://{}:{}/{}",
            self.kind.jdbc_scheme(),
            self.host,
            self.port,
            self.name
        )
    }

    /// Environment variables for the database container.
    #[must_use]
    pub fn container_environment(&self) -> Vec<(&'static str, &str)> {
        match self.kind {
            Database::Postgres => vec![
                ("POSTGRES_PASSWORD", self.password.as_str()),
                ("POSTGRES_DB", self.name.as_str()),
                ("POSTGRES_USER", self.user.as_str()),
            ],
            Database::MariaDb => vec![
                ("MYSQL_ROOT_PASSWORD", self.password.as_str()),
                ("MYSQL_DATABASE", self.name.as_str()),
                ("MYSQL_USER", self.user.as_str()),
                ("MYSQL_PASSWORD", self.password.as_str()),
            ],
        }
    }

    /// docker-compose healthcheck `test` value for the database container.
    #[must_use]
    pub fn healthcheck(&self) -> String {
        match self.kind {
            Database::Postgres => format!(r#"["CMD-SHELL", "pg_isready -U {}"]"#, self.user),
            Database::MariaDb => {
                r#"["CMD", "healthcheck.sh", "--connect", "--innodb_initialized"]"#.to_string()
            }
        }
    }
}
