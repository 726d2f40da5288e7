use crate::error::{DirectoryError, Result};

/// Database flavours the directory can run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self> {
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(Backend::Postgres)
        } else if url.starts_with("sqlite:") {
            Ok(Backend::Sqlite)
        } else {
            Err(DirectoryError::UnsupportedBackend(url.to_string()))
        }
    }

    /// `CREATE TABLE IF NOT EXISTS` statements, parent table first.
    pub fn create_statements(self) -> [&'static str; 2] {
        match self {
            Backend::Postgres => [POSTGRES_CLIENT, POSTGRES_PHONE],
            Backend::Sqlite => [SQLITE_CLIENT, SQLITE_PHONE],
        }
    }
}

const POSTGRES_CLIENT: &str = r#"
    CREATE TABLE IF NOT EXISTS client (
        client_id   SERIAL      PRIMARY KEY,
        first_name  VARCHAR(20) NOT NULL,
        last_name   VARCHAR(20) NOT NULL,
        email       VARCHAR(64) UNIQUE NOT NULL
    )
"#;

const POSTGRES_PHONE: &str = r#"
    CREATE TABLE IF NOT EXISTS phone (
        phone_id     SERIAL      PRIMARY KEY,
        phone_number VARCHAR(20) UNIQUE,
        client_id    INT         REFERENCES client (client_id)
    )
"#;

const SQLITE_CLIENT: &str = r#"
    CREATE TABLE IF NOT EXISTS client (
        client_id   INTEGER     PRIMARY KEY AUTOINCREMENT,
        first_name  VARCHAR(20) NOT NULL,
        last_name   VARCHAR(20) NOT NULL,
        email       VARCHAR(64) UNIQUE NOT NULL
    )
"#;

const SQLITE_PHONE: &str = r#"
    CREATE TABLE IF NOT EXISTS phone (
        phone_id     INTEGER     PRIMARY KEY AUTOINCREMENT,
        phone_number VARCHAR(20) UNIQUE,
        client_id    INTEGER     REFERENCES client (client_id)
    )
"#;
