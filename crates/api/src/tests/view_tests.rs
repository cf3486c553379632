// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the editor and sheet view models.

use kickroster_domain::{AvailabilityStatus, Pool};

use super::{fresh_persistence, manager, player, seeded_game};
use crate::engine;
use crate::error::ApiError;
use crate::request_response::{AssignPositionRequest, GridCellView};

fn cell<'a>(view: &'a crate::request_response::EditorView, inning: u8, position: &str) -> &'a GridCellView {
    view.grid
        .iter()
        .find(|row| row.inning == inning)
        .unwrap()
        .cells
        .iter()
        .find(|cell| cell.position == position)
        .unwrap()
}

#[test]
fn test_editor_view_groups_the_roster() {
    let mut persistence = fresh_persistence();
    let game_id = seeded_game(&mut persistence, &["Alice", "Bob"]);
    persistence
        .add_player(Pool::MainRoster, &player("Carol"))
        .unwrap();
    persistence
        .add_player(Pool::Substitute, &player("Dave"))
        .unwrap();
    persistence
        .add_player(Pool::Substitute, &player("Erin"))
        .unwrap();
    persistence
        .set_player_status(game_id, &player("Bob"), AvailabilityStatus::Out, false)
        .unwrap();
    persistence
        .set_player_status(game_id, &player("Dave"), AvailabilityStatus::In, true)
        .unwrap();

    let view = engine::editor_view(&mut persistence, game_id).unwrap();

    assert_eq!(view.main_roster_in, vec![String::from("Alice")]);
    assert_eq!(view.main_roster_out, vec![String::from("Bob")]);
    assert_eq!(view.main_roster_unmarked, vec![String::from("Carol")]);

    let sub_statuses: Vec<(&str, Option<&str>)> = view
        .substitutes
        .iter()
        .map(|sub| (sub.player_name.as_str(), sub.status.as_deref()))
        .collect();
    assert_eq!(sub_statuses, vec![("Dave", Some("IN")), ("Erin", None)]);
}

#[test]
fn test_editor_view_grid_shape_and_options() {
    let mut persistence = fresh_persistence();
    let game_id = seeded_game(&mut persistence, &["Alice", "Bob"]);

    let view = engine::editor_view(&mut persistence, game_id).unwrap();

    assert_eq!(view.grid.len(), 7);
    assert!(view.grid.iter().all(|row| row.cells.len() == 12));

    let empty_cell = cell(&view, 1, "Pitcher");
    assert!(empty_cell.occupant.is_none());
    assert_eq!(
        empty_cell.options,
        vec![String::new(), String::from("Alice"), String::from("Bob")]
    );
}

#[test]
fn test_editor_view_keeps_stale_occupant_in_the_dropdown() {
    let mut persistence = fresh_persistence();
    let game_id = seeded_game(&mut persistence, &["Alice", "Carol"]);

    engine::assign_position(
        &mut persistence,
        &manager(),
        &AssignPositionRequest {
            game_id,
            inning: 2,
            position: String::from("Catcher"),
            player_name: String::from("Carol"),
        },
    )
    .unwrap();
    persistence
        .set_player_status(game_id, &player("Carol"), AvailabilityStatus::Out, false)
        .unwrap();

    let view = engine::editor_view(&mut persistence, game_id).unwrap();

    // Carol is a ghost occupant: off the available list, still in her cell,
    // and offered in that cell's dropdown so the edit round-trips.
    assert!(view
        .available_players
        .iter()
        .all(|entry| entry.player_name != "Carol"));
    let stale_cell = cell(&view, 2, "Catcher");
    assert_eq!(stale_cell.occupant.as_deref(), Some("Carol"));
    assert_eq!(
        stale_cell.options,
        vec![String::new(), String::from("Alice"), String::from("Carol")]
    );

    // Cells Carol does not occupy do not offer her.
    let other_cell = cell(&view, 2, "Pitcher");
    assert_eq!(
        other_cell.options,
        vec![String::new(), String::from("Alice")]
    );

    assert_eq!(view.unused_players, vec![String::from("Alice")]);
}

#[test]
fn test_editor_view_missing_game_fails() {
    let mut persistence = fresh_persistence();

    let result = engine::editor_view(&mut persistence, 999);
    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Game"
    ));
}

#[test]
fn test_sheet_view_spreadsheet_rows() {
    let mut persistence = fresh_persistence();
    let game_id = seeded_game(&mut persistence, &["Alice", "Bob"]);
    let manager = manager();

    for (inning, position, name) in [
        (1, "Pitcher", "Alice"),
        (1, "Catcher", "Bob"),
        (2, "Out", "Alice"),
    ] {
        engine::assign_position(
            &mut persistence,
            &manager,
            &AssignPositionRequest {
                game_id,
                inning,
                position: String::from(position),
                player_name: String::from(name),
            },
        )
        .unwrap();
    }

    let view = engine::sheet_view(&mut persistence, game_id).unwrap();

    assert_eq!(view.game.summary, "2026-08-27 - Unsolicited Kick Pics vs TBD");
    assert_eq!(view.rows.len(), 2);

    let alice = &view.rows[0];
    assert_eq!(alice.player_name, "Alice");
    assert_eq!(alice.positions.len(), 7);
    assert_eq!(alice.positions[0].as_deref(), Some("Pitcher"));
    assert_eq!(alice.positions[1].as_deref(), Some("Out"));
    assert!(alice.positions[2].is_none());

    assert_eq!(view.incomplete_innings, 7);
    assert_eq!(view.sit_out_counts.len(), 1);
    assert_eq!(view.sit_out_counts[0].player_name, "Alice");
}

#[test]
fn test_sheet_view_appends_ghost_occupants() {
    let mut persistence = fresh_persistence();
    let game_id = seeded_game(&mut persistence, &["Alice", "Carol"]);

    engine::assign_position(
        &mut persistence,
        &manager(),
        &AssignPositionRequest {
            game_id,
            inning: 1,
            position: String::from("Short Stop"),
            player_name: String::from("Carol"),
        },
    )
    .unwrap();
    persistence
        .set_player_status(game_id, &player("Carol"), AvailabilityStatus::Out, false)
        .unwrap();

    let view = engine::sheet_view(&mut persistence, game_id).unwrap();
    let names: Vec<&str> = view.rows.iter().map(|row| row.player_name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Carol"]);
}
