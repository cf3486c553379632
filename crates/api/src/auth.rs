// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use time::{Duration, OffsetDateTime};
use tracing::info;

use kickroster_persistence::{OperatorData, SessionData, SqlitePersistence};

use crate::error::{ApiError, AuthError, translate_persistence_error};
use crate::password_policy::PasswordPolicy;

/// Actor roles for authorization.
///
/// Roles determine what actions an authenticated actor may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Manager role: may edit the roster, games, availability, and lineups.
    Manager,
    /// Viewer role: read-only access to every view.
    Viewer,
}

impl Role {
    /// Parses a stored role string.
    fn parse(role: &str) -> Option<Self> {
        match role {
            "Manager" => Some(Self::Manager),
            "Viewer" => Some(Self::Viewer),
            _ => None,
        }
    }
}

/// An authenticated actor with an associated role.
///
/// This represents an operator who has been authenticated and has permission
/// to perform certain actions based on their role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor (the login name).
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }
}

/// Authorization service for enforcing role-based access control.
///
/// Every mutating engine operation authorizes before it validates input, so
/// an unauthorized caller learns nothing about the request's validity.
pub struct AuthorizationService;

impl AuthorizationService {
    fn require_manager(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        match actor.role {
            Role::Manager => Ok(()),
            Role::Viewer => Err(AuthError::Unauthorized {
                action: String::from(action),
                required_role: String::from("Manager"),
            }),
        }
    }

    /// Checks if an actor is authorized to edit the roster pools.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Manager role.
    pub fn authorize_edit_roster(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_manager(actor, "edit_roster")
    }

    /// Checks if an actor is authorized to create or edit games.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Manager role.
    pub fn authorize_edit_game(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_manager(actor, "edit_game")
    }

    /// Checks if an actor is authorized to edit the availability ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Manager role.
    pub fn authorize_edit_availability(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_manager(actor, "edit_availability")
    }

    /// Checks if an actor is authorized to edit the lineup grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Manager role.
    pub fn authorize_edit_lineup(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_manager(actor, "edit_lineup")
    }
}

/// Authentication service for session-based authentication.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Default session expiration duration (30 days).
    const DEFAULT_SESSION_EXPIRATION: Duration = Duration::days(30);

    /// Creates the first manager account.
    ///
    /// Permitted only while zero operators exist. The password is checked
    /// against the default password policy before it is hashed and stored.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `login_name` - The manager login name
    /// * `display_name` - The manager display name
    /// * `password` - The plain-text password
    /// * `confirmation` - The password confirmation
    ///
    /// # Returns
    ///
    /// The new operator's ID.
    ///
    /// # Errors
    ///
    /// Returns an error if operators already exist, the password fails the
    /// policy, or the operator cannot be stored.
    pub fn create_first_manager(
        persistence: &mut SqlitePersistence,
        login_name: &str,
        display_name: &str,
        password: &str,
        confirmation: &str,
    ) -> Result<i64, ApiError> {
        let existing: i64 = persistence
            .count_operators()
            .map_err(translate_persistence_error)?;
        if existing > 0 {
            return Err(ApiError::AlreadyExists {
                message: String::from(
                    "Operator accounts already exist; first-manager setup is closed",
                ),
            });
        }

        PasswordPolicy::default().validate(password, confirmation, login_name)?;

        let operator_id: i64 = persistence
            .create_operator(login_name, display_name, password, "Manager")
            .map_err(translate_persistence_error)?;

        info!(operator_id, "First manager account created");
        Ok(operator_id)
    }

    /// Authenticates an operator and creates a session.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `login_name` - The operator login name
    /// * `password` - The plain-text password
    ///
    /// # Returns
    ///
    /// A tuple of (`session_token`, `authenticated_actor`, `operator_data`)
    ///
    /// # Errors
    ///
    /// Returns an error if authentication fails.
    pub fn login(
        persistence: &mut SqlitePersistence,
        login_name: &str,
        password: &str,
    ) -> Result<(String, AuthenticatedActor, OperatorData), AuthError> {
        let operator: OperatorData = persistence
            .get_operator_by_login(login_name)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Unknown login name or wrong password"),
            })?;

        if operator.is_disabled {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Operator is disabled"),
            });
        }

        let password_matches: bool = persistence
            .verify_password(password, &operator.password_hash)
            .map_err(Self::map_persistence_error)?;
        if !password_matches {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Unknown login name or wrong password"),
            });
        }

        let role: Role =
            Role::parse(&operator.role).ok_or_else(|| AuthError::AuthenticationFailed {
                reason: format!("Invalid role: {}", operator.role),
            })?;

        let session_token: String = Self::generate_session_token();

        let expires_at: OffsetDateTime =
            OffsetDateTime::now_utc() + Self::DEFAULT_SESSION_EXPIRATION;
        let expires_at_str: String = expires_at
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to format expiration time: {e}"),
            })?;

        persistence
            .create_session(&session_token, operator.operator_id, &expires_at_str)
            .map_err(Self::map_persistence_error)?;

        persistence
            .update_last_login(operator.operator_id)
            .map_err(Self::map_persistence_error)?;

        info!(operator_id = operator.operator_id, "Operator logged in");

        let authenticated_actor: AuthenticatedActor =
            AuthenticatedActor::new(operator.login_name.clone(), role);

        Ok((session_token, authenticated_actor, operator))
    }

    /// Validates a session token and returns the authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `session_token` - The session token to validate
    ///
    /// # Returns
    ///
    /// A tuple of (`authenticated_actor`, `operator_data`)
    ///
    /// # Errors
    ///
    /// Returns an error if the session is invalid or expired, or if the
    /// operator has been disabled since the session was created.
    pub fn validate_session(
        persistence: &mut SqlitePersistence,
        session_token: &str,
    ) -> Result<(AuthenticatedActor, OperatorData), AuthError> {
        let session: SessionData = persistence
            .get_session_by_token(session_token)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        let expires_at: OffsetDateTime = OffsetDateTime::parse(
            &session.expires_at,
            &time::format_description::well_known::Iso8601::DEFAULT,
        )
        .map_err(|e| AuthError::AuthenticationFailed {
            reason: format!("Failed to parse session expiration: {e}"),
        })?;

        if OffsetDateTime::now_utc() > expires_at {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        let operator: OperatorData = persistence
            .get_operator_by_id(session.operator_id)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Operator not found"),
            })?;

        if operator.is_disabled {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Operator is disabled"),
            });
        }

        let role: Role =
            Role::parse(&operator.role).ok_or_else(|| AuthError::AuthenticationFailed {
                reason: format!("Invalid role: {}", operator.role),
            })?;

        persistence
            .update_session_activity(session.session_id)
            .map_err(Self::map_persistence_error)?;

        let authenticated_actor: AuthenticatedActor =
            AuthenticatedActor::new(operator.login_name.clone(), role);

        Ok((authenticated_actor, operator))
    }

    /// Logs out by deleting the session.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `session_token` - The session token to delete
    ///
    /// # Errors
    ///
    /// Returns an error if the logout fails.
    pub fn logout(
        persistence: &mut SqlitePersistence,
        session_token: &str,
    ) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to delete session: {e}"),
            })?;

        Ok(())
    }

    /// Generates a session token from the current timestamp and a random
    /// suffix.
    fn generate_session_token() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let timestamp: u128 = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos());
        format!("session_{timestamp}_{}", rand::random::<u64>())
    }

    /// Maps persistence errors to authentication errors.
    fn map_persistence_error(err: kickroster_persistence::PersistenceError) -> AuthError {
        AuthError::AuthenticationFailed {
            reason: format!("Database error: {err}"),
        }
    }
}
