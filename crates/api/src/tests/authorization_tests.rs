// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for role-based authorization on every mutating engine operation.

use super::{fresh_persistence, manager, seeded_game, viewer};
use crate::engine;
use crate::error::ApiError;
use crate::request_response::{
    AddPlayerRequest, AssignPositionRequest, ClearPositionRequest, MoveOrderRequest,
    OpenGameRequest, RemovePlayerRequest, SetStatusRequest, SwapOrderRequest, UpdateGameRequest,
};

fn assert_unauthorized(result: Result<impl std::fmt::Debug, ApiError>, action: &str) {
    match result {
        Err(ApiError::Unauthorized {
            action: got,
            required_role,
        }) => {
            assert_eq!(got, action);
            assert_eq!(required_role, "Manager");
        }
        other => panic!("expected Unauthorized for '{action}', got {other:?}"),
    }
}

#[test]
fn test_viewer_cannot_mutate_anything() {
    let mut persistence = fresh_persistence();
    let game_id = seeded_game(&mut persistence, &["Alice"]);
    let viewer = viewer();

    assert_unauthorized(
        engine::add_player(
            &mut persistence,
            &viewer,
            &AddPlayerRequest {
                pool: String::from("main_roster"),
                player_name: String::from("Bob"),
            },
        ),
        "edit_roster",
    );
    assert_unauthorized(
        engine::remove_player(
            &mut persistence,
            &viewer,
            &RemovePlayerRequest {
                pool: String::from("main_roster"),
                player_name: String::from("Alice"),
            },
        ),
        "edit_roster",
    );
    assert_unauthorized(
        engine::open_game(
            &mut persistence,
            &viewer,
            &OpenGameRequest {
                game_date: String::from("2026-09-03"),
            },
        ),
        "edit_game",
    );
    assert_unauthorized(
        engine::update_game(
            &mut persistence,
            &viewer,
            &UpdateGameRequest {
                game_id,
                game_date: String::from("2026-09-03"),
                team_name: String::from("Unsolicited Kick Pics"),
                opponent_name: None,
            },
        ),
        "edit_game",
    );
    assert_unauthorized(
        engine::set_player_status(
            &mut persistence,
            &viewer,
            &SetStatusRequest {
                game_id,
                player_name: String::from("Alice"),
                status: String::from("OUT"),
                is_substitute: false,
            },
        ),
        "edit_availability",
    );
    assert_unauthorized(
        engine::swap_kicking_order(
            &mut persistence,
            &viewer,
            &SwapOrderRequest {
                game_id,
                first_player: String::from("Alice"),
                second_player: String::from("Bob"),
            },
        ),
        "edit_availability",
    );
    assert_unauthorized(
        engine::move_player_up(
            &mut persistence,
            &viewer,
            &MoveOrderRequest {
                game_id,
                player_name: String::from("Alice"),
            },
        ),
        "edit_availability",
    );
    assert_unauthorized(
        engine::assign_position(
            &mut persistence,
            &viewer,
            &AssignPositionRequest {
                game_id,
                inning: 1,
                position: String::from("Pitcher"),
                player_name: String::from("Alice"),
            },
        ),
        "edit_lineup",
    );
    assert_unauthorized(
        engine::clear_position(
            &mut persistence,
            &viewer,
            &ClearPositionRequest {
                game_id,
                inning: 1,
                position: String::from("Pitcher"),
            },
        ),
        "edit_lineup",
    );
}

#[test]
fn test_authorization_is_checked_before_validation() {
    let mut persistence = fresh_persistence();
    let game_id = seeded_game(&mut persistence, &["Alice"]);

    // Invalid inning, invalid position, and an empty name: the viewer still
    // gets an authorization error, not a validation one.
    let request = AssignPositionRequest {
        game_id,
        inning: 9,
        position: String::from("Goalkeeper"),
        player_name: String::new(),
    };

    let viewer_result = engine::assign_position(&mut persistence, &viewer(), &request);
    assert!(matches!(viewer_result, Err(ApiError::Unauthorized { .. })));

    let manager_result = engine::assign_position(&mut persistence, &manager(), &request);
    assert!(matches!(
        manager_result,
        Err(ApiError::ValidationFailed { ref field, .. }) if field == "inning"
    ));
}

#[test]
fn test_reads_require_no_actor() {
    let mut persistence = fresh_persistence();
    let game_id = seeded_game(&mut persistence, &["Alice"]);

    assert_eq!(
        engine::list_players(&mut persistence, "main_roster").unwrap(),
        vec![String::from("Alice")]
    );
    assert_eq!(engine::list_games(&mut persistence).unwrap().len(), 1);
    assert_eq!(
        engine::available_players(&mut persistence, game_id)
            .unwrap()
            .len(),
        1
    );
    assert_eq!(
        engine::incomplete_innings(&mut persistence, game_id).unwrap(),
        7
    );
    assert!(engine::sheet_view(&mut persistence, game_id).is_ok());
    assert!(engine::editor_view(&mut persistence, game_id).is_ok());
}
