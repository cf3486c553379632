// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for operator account and session persistence operations.

use crate::{PersistenceError, SqlitePersistence};

fn create_coach(persistence: &mut SqlitePersistence) -> i64 {
    persistence
        .create_operator("coach", "Coach Taylor", "clear-eyes-full-hearts", "Manager")
        .unwrap()
}

#[test]
fn test_create_and_get_operator_by_login() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let operator_id = create_coach(&mut persistence);

    let operator = persistence.get_operator_by_login("coach").unwrap().unwrap();
    assert_eq!(operator.operator_id, operator_id);
    assert_eq!(operator.login_name, "COACH", "login names are stored uppercase");
    assert_eq!(operator.display_name, "Coach Taylor");
    assert_eq!(operator.role, "Manager");
    assert!(!operator.is_disabled);
    assert!(operator.last_login_at.is_none());
}

#[test]
fn test_login_lookup_is_case_insensitive() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    create_coach(&mut persistence);

    assert!(persistence.get_operator_by_login("CoAcH").unwrap().is_some());
    assert!(persistence.get_operator_by_login("nobody").unwrap().is_none());
}

#[test]
fn test_duplicate_login_rejected() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    create_coach(&mut persistence);

    let result = persistence.create_operator("COACH", "Impostor", "password-123456", "Viewer");
    assert!(matches!(result, Err(PersistenceError::AlreadyExists(_))));
}

#[test]
fn test_get_operator_by_id() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let operator_id = create_coach(&mut persistence);

    let operator = persistence.get_operator_by_id(operator_id).unwrap().unwrap();
    assert_eq!(operator.display_name, "Coach Taylor");
    assert!(persistence.get_operator_by_id(999).unwrap().is_none());
}

#[test]
fn test_count_operators() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    assert_eq!(persistence.count_operators().unwrap(), 0);

    create_coach(&mut persistence);
    persistence
        .create_operator("scout", "Scout", "just-watching-1", "Viewer")
        .unwrap();

    assert_eq!(persistence.count_operators().unwrap(), 2);
}

#[test]
fn test_password_is_hashed_and_verifiable() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    create_coach(&mut persistence);

    let operator = persistence.get_operator_by_login("coach").unwrap().unwrap();
    assert_ne!(operator.password_hash, "clear-eyes-full-hearts");
    assert!(persistence
        .verify_password("clear-eyes-full-hearts", &operator.password_hash)
        .unwrap());
    assert!(!persistence
        .verify_password("wrong-password", &operator.password_hash)
        .unwrap());
}

#[test]
fn test_update_last_login() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let operator_id = create_coach(&mut persistence);

    persistence.update_last_login(operator_id).unwrap();

    let operator = persistence.get_operator_by_id(operator_id).unwrap().unwrap();
    assert!(operator.last_login_at.is_some());
}

#[test]
fn test_disable_operator() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let operator_id = create_coach(&mut persistence);

    persistence.disable_operator(operator_id).unwrap();

    let operator = persistence.get_operator_by_id(operator_id).unwrap().unwrap();
    assert!(operator.is_disabled);
    assert!(operator.disabled_at.is_some());
}

#[test]
fn test_session_lifecycle() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let operator_id = create_coach(&mut persistence);

    let session_id = persistence
        .create_session("token-abc", operator_id, "2027-01-01 00:00:00")
        .unwrap();

    let session = persistence.get_session_by_token("token-abc").unwrap().unwrap();
    assert_eq!(session.session_id, session_id);
    assert_eq!(session.operator_id, operator_id);
    assert_eq!(session.expires_at, "2027-01-01 00:00:00");

    persistence.update_session_activity(session_id).unwrap();

    persistence.delete_session("token-abc").unwrap();
    assert!(persistence.get_session_by_token("token-abc").unwrap().is_none());
}

#[test]
fn test_delete_expired_sessions() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let operator_id = create_coach(&mut persistence);

    persistence
        .create_session("stale", operator_id, "2020-01-01 00:00:00")
        .unwrap();
    persistence
        .create_session("fresh", operator_id, "2099-01-01 00:00:00")
        .unwrap();

    let removed = persistence.delete_expired_sessions().unwrap();
    assert_eq!(removed, 1);
    assert!(persistence.get_session_by_token("stale").unwrap().is_none());
    assert!(persistence.get_session_by_token("fresh").unwrap().is_some());
}

#[test]
fn test_deleting_operator_sessions_cascade() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let operator_id = create_coach(&mut persistence);
    persistence
        .create_session("token-xyz", operator_id, "2099-01-01 00:00:00")
        .unwrap();

    use crate::diesel_schema::operators;
    use diesel::prelude::*;
    diesel::delete(operators::table)
        .filter(operators::operator_id.eq(operator_id))
        .execute(&mut persistence.conn)
        .unwrap();

    assert!(
        persistence.get_session_by_token("token-xyz").unwrap().is_none(),
        "sessions must be removed with their operator"
    );
}
