// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// A uniqueness constraint was violated.
    AlreadyExists(String),
    /// The requested resource was not found.
    NotFound(String),
    /// The requested player was not found in any roster pool.
    PlayerNotFound(String),
    /// The requested game was not found.
    GameNotFound(i64),
    /// The requested operator was not found.
    OperatorNotFound(String),
    /// A stored value could not be converted back into a domain type.
    InvalidStoredData(String),
    /// A general error occurred.
    Other(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::AlreadyExists(msg) => write!(f, "Already exists: {msg}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::PlayerNotFound(name) => {
                write!(f, "Player '{name}' not found in any roster pool")
            }
            Self::GameNotFound(game_id) => write!(f, "Game {game_id} not found"),
            Self::OperatorNotFound(msg) => write!(f, "Operator not found: {msg}"),
            Self::InvalidStoredData(msg) => write!(f, "Invalid stored data: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound(String::from("Record not found")),
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                info,
            ) => Self::AlreadyExists(info.message().to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<kickroster_domain::DomainError> for PersistenceError {
    fn from(err: kickroster_domain::DomainError) -> Self {
        Self::InvalidStoredData(err.to_string())
    }
}
