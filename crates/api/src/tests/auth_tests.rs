// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for bootstrap, login, and session validation.

use time::{Duration, OffsetDateTime};

use super::fresh_persistence;
use crate::auth::{AuthenticationService, Role};
use crate::error::{ApiError, AuthError};

const PASSWORD: &str = "Kick8all!Rules";

#[test]
fn test_first_manager_bootstrap_and_login() {
    let mut persistence = fresh_persistence();

    let operator_id = AuthenticationService::create_first_manager(
        &mut persistence,
        "coach",
        "Coach Taylor",
        PASSWORD,
        PASSWORD,
    )
    .unwrap();
    assert!(operator_id > 0);

    let (token, actor, operator) =
        AuthenticationService::login(&mut persistence, "coach", PASSWORD).unwrap();
    assert_eq!(actor.role, Role::Manager);
    assert_eq!(actor.id, "COACH");
    assert_eq!(operator.display_name, "Coach Taylor");

    let (validated, _) =
        AuthenticationService::validate_session(&mut persistence, &token).unwrap();
    assert_eq!(validated.id, "COACH");

    AuthenticationService::logout(&mut persistence, &token).unwrap();
    let result = AuthenticationService::validate_session(&mut persistence, &token);
    assert!(matches!(
        result,
        Err(AuthError::AuthenticationFailed { .. })
    ));
}

#[test]
fn test_bootstrap_closed_once_an_operator_exists() {
    let mut persistence = fresh_persistence();

    AuthenticationService::create_first_manager(
        &mut persistence,
        "coach",
        "Coach Taylor",
        PASSWORD,
        PASSWORD,
    )
    .unwrap();

    let result = AuthenticationService::create_first_manager(
        &mut persistence,
        "impostor",
        "Impostor",
        PASSWORD,
        PASSWORD,
    );
    assert!(matches!(result, Err(ApiError::AlreadyExists { .. })));
}

#[test]
fn test_bootstrap_rejects_weak_password() {
    let mut persistence = fresh_persistence();

    let result = AuthenticationService::create_first_manager(
        &mut persistence,
        "coach",
        "Coach Taylor",
        "weak",
        "weak",
    );
    assert!(matches!(
        result,
        Err(ApiError::PasswordPolicyViolation { .. })
    ));
    assert_eq!(persistence.count_operators().unwrap(), 0);
}

#[test]
fn test_login_rejects_wrong_password() {
    let mut persistence = fresh_persistence();
    AuthenticationService::create_first_manager(
        &mut persistence,
        "coach",
        "Coach Taylor",
        PASSWORD,
        PASSWORD,
    )
    .unwrap();

    let result = AuthenticationService::login(&mut persistence, "coach", "WrongPass123!");
    assert!(matches!(
        result,
        Err(AuthError::AuthenticationFailed { .. })
    ));
}

#[test]
fn test_login_rejects_unknown_operator() {
    let mut persistence = fresh_persistence();

    let result = AuthenticationService::login(&mut persistence, "nobody", PASSWORD);
    assert!(matches!(
        result,
        Err(AuthError::AuthenticationFailed { .. })
    ));
}

#[test]
fn test_disabled_operator_cannot_login_or_validate() {
    let mut persistence = fresh_persistence();
    let operator_id = AuthenticationService::create_first_manager(
        &mut persistence,
        "coach",
        "Coach Taylor",
        PASSWORD,
        PASSWORD,
    )
    .unwrap();

    let (token, _, _) =
        AuthenticationService::login(&mut persistence, "coach", PASSWORD).unwrap();

    persistence.disable_operator(operator_id).unwrap();

    let login_result = AuthenticationService::login(&mut persistence, "coach", PASSWORD);
    assert!(matches!(
        login_result,
        Err(AuthError::AuthenticationFailed { .. })
    ));

    // Existing sessions are rejected on the next lookup.
    let validate_result = AuthenticationService::validate_session(&mut persistence, &token);
    assert!(matches!(
        validate_result,
        Err(AuthError::AuthenticationFailed { .. })
    ));
}

#[test]
fn test_expired_session_rejected() {
    let mut persistence = fresh_persistence();
    let operator_id = persistence
        .create_operator("coach", "Coach Taylor", PASSWORD, "Manager")
        .unwrap();

    let expired_at: String = (OffsetDateTime::now_utc() - Duration::days(1))
        .format(&time::format_description::well_known::Iso8601::DEFAULT)
        .unwrap();
    persistence
        .create_session("stale-token", operator_id, &expired_at)
        .unwrap();

    let result = AuthenticationService::validate_session(&mut persistence, "stale-token");
    assert!(matches!(
        result,
        Err(AuthError::AuthenticationFailed { reason }) if reason == "Session expired"
    ));
}

#[test]
fn test_viewer_role_round_trips_through_login() {
    let mut persistence = fresh_persistence();
    persistence
        .create_operator("scout", "Scout", PASSWORD, "Viewer")
        .unwrap();

    let (_, actor, _) =
        AuthenticationService::login(&mut persistence, "scout", PASSWORD).unwrap();
    assert_eq!(actor.role, Role::Viewer);
}
