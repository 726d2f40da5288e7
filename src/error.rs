use sqlx::error::ErrorKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The database rejected a write because of a table constraint.
    #[error("constraint violation ({kind}): {message}")]
    Constraint {
        kind: ConstraintKind,
        message: String,
    },

    #[error("unsupported database url `{0}`: expected postgres:// or sqlite:")]
    UnsupportedBackend(String),

    #[error(transparent)]
    Database(sqlx::Error),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
    NotNull,
    Check,
}

impl std::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ConstraintKind::Unique => "unique",
            ConstraintKind::ForeignKey => "foreign key",
            ConstraintKind::NotNull => "not null",
            ConstraintKind::Check => "check",
        };
        f.write_str(name)
    }
}

impl DirectoryError {
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, DirectoryError::Constraint { .. })
    }

    pub fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            DirectoryError::Constraint { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for DirectoryError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let kind = match db_err.kind() {
                ErrorKind::UniqueViolation => Some(ConstraintKind::Unique),
                ErrorKind::ForeignKeyViolation => Some(ConstraintKind::ForeignKey),
                ErrorKind::NotNullViolation => Some(ConstraintKind::NotNull),
                ErrorKind::CheckViolation => Some(ConstraintKind::Check),
                _ => None,
            };
            if let Some(kind) = kind {
                return DirectoryError::Constraint {
                    kind,
                    message: db_err.message().to_string(),
                };
            }
        }

        DirectoryError::Database(err)
    }
}
