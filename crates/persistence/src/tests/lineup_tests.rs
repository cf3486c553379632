// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the lineup grid: assignment, displacement, and clearing.

use super::{create_test_game, mark_all_in, player, seed_main_roster};
use crate::{PersistenceError, SqlitePersistence};
use kickroster_domain::{AvailabilityStatus, Inning, Position};

fn inning(number: u8) -> Inning {
    Inning::new(number).unwrap()
}

#[test]
fn test_assign_then_read_back() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    seed_main_roster(&mut persistence, &["Alice"]);
    let game_id = create_test_game(&mut persistence);

    persistence
        .assign_position(game_id, inning(1), Position::Pitcher, &player("Alice"))
        .unwrap();

    let occupant = persistence
        .get_cell(game_id, inning(1), Position::Pitcher)
        .unwrap();
    assert_eq!(occupant, Some(player("Alice")));
}

#[test]
fn test_assign_requires_existing_game() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let result = persistence.assign_position(999, inning(1), Position::Pitcher, &player("Alice"));
    assert!(matches!(result, Err(PersistenceError::GameNotFound(999))));
}

#[test]
fn test_no_double_booking_within_an_inning() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    seed_main_roster(&mut persistence, &["Bob"]);
    let game_id = create_test_game(&mut persistence);

    persistence
        .assign_position(game_id, inning(1), Position::Pitcher, &player("Bob"))
        .unwrap();
    persistence
        .assign_position(game_id, inning(1), Position::Catcher, &player("Bob"))
        .unwrap();

    assert_eq!(
        persistence
            .get_cell(game_id, inning(1), Position::Pitcher)
            .unwrap(),
        None,
        "the old cell must be vacated when a player moves"
    );
    assert_eq!(
        persistence
            .get_cell(game_id, inning(1), Position::Catcher)
            .unwrap(),
        Some(player("Bob"))
    );
}

#[test]
fn test_same_player_may_hold_a_position_across_innings() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    seed_main_roster(&mut persistence, &["Alice"]);
    let game_id = create_test_game(&mut persistence);

    persistence
        .assign_position(game_id, inning(1), Position::Pitcher, &player("Alice"))
        .unwrap();
    persistence
        .assign_position(game_id, inning(2), Position::Pitcher, &player("Alice"))
        .unwrap();

    assert_eq!(
        persistence
            .get_cell(game_id, inning(1), Position::Pitcher)
            .unwrap(),
        Some(player("Alice"))
    );
    assert_eq!(
        persistence
            .get_cell(game_id, inning(2), Position::Pitcher)
            .unwrap(),
        Some(player("Alice"))
    );
}

#[test]
fn test_assign_displaces_previous_occupant() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    seed_main_roster(&mut persistence, &["Alice", "Bob"]);
    let game_id = create_test_game(&mut persistence);

    persistence
        .assign_position(game_id, inning(3), Position::ShortStop, &player("Alice"))
        .unwrap();
    persistence
        .assign_position(game_id, inning(3), Position::ShortStop, &player("Bob"))
        .unwrap();

    assert_eq!(
        persistence
            .get_cell(game_id, inning(3), Position::ShortStop)
            .unwrap(),
        Some(player("Bob")),
        "last write wins"
    );
    assert_eq!(
        persistence
            .player_position(game_id, inning(3), &player("Alice"))
            .unwrap(),
        None,
        "the displaced player is unassigned for that inning"
    );
}

#[test]
fn test_clear_position() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    seed_main_roster(&mut persistence, &["Alice"]);
    let game_id = create_test_game(&mut persistence);

    persistence
        .assign_position(game_id, inning(1), Position::Out, &player("Alice"))
        .unwrap();
    persistence
        .clear_position(game_id, inning(1), Position::Out)
        .unwrap();

    assert_eq!(
        persistence.get_cell(game_id, inning(1), Position::Out).unwrap(),
        None
    );
}

#[test]
fn test_clear_empty_cell_is_a_noop() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    let game_id = create_test_game(&mut persistence);

    persistence
        .clear_position(game_id, inning(7), Position::RightField)
        .unwrap();
}

#[test]
fn test_player_position_reverse_lookup() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    seed_main_roster(&mut persistence, &["Carol"]);
    let game_id = create_test_game(&mut persistence);

    persistence
        .assign_position(game_id, inning(5), Position::LeftCenter, &player("Carol"))
        .unwrap();

    assert_eq!(
        persistence
            .player_position(game_id, inning(5), &player("Carol"))
            .unwrap(),
        Some(Position::LeftCenter)
    );
    assert_eq!(
        persistence
            .player_position(game_id, inning(6), &player("Carol"))
            .unwrap(),
        None
    );
}

#[test]
fn test_marking_out_does_not_clear_grid_cells() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    seed_main_roster(&mut persistence, &["Carol"]);
    let game_id = create_test_game(&mut persistence);
    mark_all_in(&mut persistence, game_id, &["Carol"]);

    persistence
        .assign_position(game_id, inning(2), Position::Catcher, &player("Carol"))
        .unwrap();
    persistence
        .set_player_status(game_id, &player("Carol"), AvailabilityStatus::Out, false)
        .unwrap();

    // Carol becomes a ghost occupant: gone from the ledger, still on the grid.
    assert!(persistence.list_in_order(game_id).unwrap().is_empty());
    assert_eq!(
        persistence
            .get_cell(game_id, inning(2), Position::Catcher)
            .unwrap(),
        Some(player("Carol"))
    );
}

#[test]
fn test_list_cells_returns_sparse_grid() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();
    seed_main_roster(&mut persistence, &["Alice", "Bob"]);
    let game_id = create_test_game(&mut persistence);

    persistence
        .assign_position(game_id, inning(1), Position::Pitcher, &player("Alice"))
        .unwrap();
    persistence
        .assign_position(game_id, inning(4), Position::Out, &player("Bob"))
        .unwrap();

    let cells = persistence.list_cells(game_id).unwrap();
    assert_eq!(cells.len(), 2);
}
