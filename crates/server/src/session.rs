// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bearer-token session handling at the HTTP boundary.
//!
//! Handlers that mutate state take a [`SessionOperator`] parameter; the
//! extractor parses the `Authorization: Bearer <token>` header and runs the
//! token through `AuthenticationService::validate_session` before the
//! handler body executes. Every failure mode collapses to a 401 so a caller
//! cannot distinguish a missing header from a revoked session.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use kickroster_api::{AuthenticatedActor, AuthenticationService};
use kickroster_persistence::OperatorData;
use tracing::{debug, warn};

use crate::AppState;

/// Pulls the bearer token out of a request's headers.
///
/// Shared by the [`SessionOperator`] extractor and the logout handler, which
/// needs the raw token rather than the validated operator.
///
/// # Errors
///
/// Returns `SessionError::MissingToken` when no Authorization header is
/// present, or `SessionError::MalformedHeader` when the header is not a
/// well-formed `Bearer <token>` value.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, SessionError> {
    let header = headers
        .get("Authorization")
        .ok_or(SessionError::MissingToken)?;
    header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(SessionError::MalformedHeader)
}

/// The authenticated operator behind a request.
///
/// Destructure it in a handler signature to get the actor for authorization
/// checks and the operator row for display purposes:
///
/// ```ignore
/// async fn handler(SessionOperator(actor, operator): SessionOperator, ...)
/// ```
pub struct SessionOperator(pub AuthenticatedActor, pub OperatorData);

impl FromRequestParts<AppState> for SessionOperator {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token: &str = bearer_token(&parts.headers)?;

        let mut persistence = state.persistence.lock().await;
        match AuthenticationService::validate_session(&mut persistence, token) {
            Ok((actor, operator)) => {
                debug!(login_name = %operator.login_name, role = ?actor.role, "Session accepted");
                Ok(Self(actor, operator))
            }
            Err(e) => {
                warn!(error = %e, "Session rejected");
                Err(SessionError::Rejected(e.to_string()))
            }
        }
    }
}

/// Why a request carried no usable session. Always answered with 401.
#[derive(Debug)]
pub enum SessionError {
    /// No Authorization header on the request.
    MissingToken,
    /// The Authorization header is not a `Bearer <token>` value.
    MalformedHeader,
    /// The token failed validation (unknown, expired, or operator disabled).
    Rejected(String),
}

impl SessionError {
    /// The message sent back to the caller.
    #[must_use]
    pub fn message(self) -> String {
        match self {
            Self::MissingToken => String::from("Missing Authorization header"),
            Self::MalformedHeader => {
                String::from("Expected an 'Authorization: Bearer <token>' header")
            }
            Self::Rejected(reason) => format!("Session validation failed: {reason}"),
        }
    }
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, self.message()).into_response()
    }
}
