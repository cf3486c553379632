// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::password_policy::PasswordPolicyError;
use kickroster_domain::DomainError;
use kickroster_persistence::PersistenceError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/persistence errors and represent the API
/// contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// Invalid input was provided.
    ValidationFailed {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A uniqueness rule was violated.
    AlreadyExists {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
    /// Password policy violation.
    PasswordPolicyViolation {
        /// A human-readable description of the policy violation.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::ValidationFailed { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::AlreadyExists { message } => {
                write!(f, "Already exists: {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
            Self::PasswordPolicyViolation { message } => {
                write!(f, "Password policy violation: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::PasswordPolicyViolation {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidPlayerName(msg) => ApiError::ValidationFailed {
            field: String::from("player_name"),
            message: msg,
        },
        DomainError::InvalidTeamName(msg) => ApiError::ValidationFailed {
            field: String::from("team_name"),
            message: msg,
        },
        DomainError::InvalidInning { inning } => ApiError::ValidationFailed {
            field: String::from("inning"),
            message: format!("Invalid inning: {inning}. Must be between 1 and 7"),
        },
        DomainError::UnknownPosition(s) => ApiError::ValidationFailed {
            field: String::from("position"),
            message: format!("Unknown position: {s}"),
        },
        DomainError::InvalidAvailabilityStatus(s) => ApiError::ValidationFailed {
            field: String::from("status"),
            message: format!("Invalid availability status: {s}. Must be IN or OUT"),
        },
        DomainError::UnknownPool(s) => ApiError::ValidationFailed {
            field: String::from("pool"),
            message: format!("Unknown roster pool: {s}"),
        },
        DomainError::DuplicatePlayer { pool, name } => ApiError::AlreadyExists {
            message: format!("Player '{name}' already exists in {}", pool.as_str()),
        },
        DomainError::PlayerNotFound { name } => ApiError::ResourceNotFound {
            resource_type: String::from("Player"),
            message: format!("Player '{name}' not found in any roster pool"),
        },
        DomainError::GameNotFound(game_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Game"),
            message: format!("Game {game_id} not found"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::ValidationFailed {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::Internal {
            message: format!("Date arithmetic overflow while {operation}"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// This translation is explicit and ensures persistence errors are not leaked
/// directly.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::AlreadyExists(message) => ApiError::AlreadyExists { message },
        PersistenceError::PlayerNotFound(name) => ApiError::ResourceNotFound {
            resource_type: String::from("Player"),
            message: format!("Player '{name}' not found in any roster pool"),
        },
        PersistenceError::GameNotFound(game_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Game"),
            message: format!("Game {game_id} not found"),
        },
        PersistenceError::OperatorNotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Operator"),
            message,
        },
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message,
        },
        err => ApiError::Internal {
            message: err.to_string(),
        },
    }
}
