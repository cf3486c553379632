// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for game record persistence operations.

use crate::{PersistenceError, SqlitePersistence};
use kickroster_domain::Game;
use time::macros::date;

#[test]
fn test_find_or_create_game_is_idempotent() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let first = persistence.find_or_create_game(date!(2026 - 08 - 27)).unwrap();
    let second = persistence.find_or_create_game(date!(2026 - 08 - 27)).unwrap();

    assert_eq!(first.game_id(), second.game_id());
    assert_eq!(first.team_name(), Game::DEFAULT_TEAM_NAME);
    assert!(first.opponent_name().is_none());

    let games = persistence.list_games().unwrap();
    assert_eq!(games.len(), 1, "repeat calls must not create a second game");
}

#[test]
fn test_update_game_fields() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let game = persistence.find_or_create_game(date!(2026 - 08 - 27)).unwrap();
    let game_id = game.game_id().unwrap();

    persistence
        .update_game(
            game_id,
            date!(2026 - 09 - 03),
            "Unsolicited Kick Pics",
            Some("Ball Busters"),
        )
        .unwrap();

    let updated = persistence.get_game(game_id).unwrap();
    assert_eq!(updated.game_date(), date!(2026 - 09 - 03));
    assert_eq!(updated.opponent_name(), Some("Ball Busters"));
}

#[test]
fn test_update_missing_game_fails() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let result = persistence.update_game(999, date!(2026 - 08 - 27), "Team", None);
    assert!(matches!(result, Err(PersistenceError::GameNotFound(999))));
}

#[test]
fn test_get_missing_game_fails() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let result = persistence.get_game(42);
    assert!(matches!(result, Err(PersistenceError::GameNotFound(42))));
}

#[test]
fn test_list_games_most_recent_first() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    persistence.find_or_create_game(date!(2026 - 08 - 20)).unwrap();
    persistence.find_or_create_game(date!(2026 - 09 - 03)).unwrap();
    persistence.find_or_create_game(date!(2026 - 08 - 27)).unwrap();

    let games = persistence.list_games().unwrap();
    let dates: Vec<time::Date> = games.iter().map(Game::game_date).collect();
    assert_eq!(
        dates,
        vec![
            date!(2026 - 09 - 03),
            date!(2026 - 08 - 27),
            date!(2026 - 08 - 20)
        ]
    );
}

#[test]
fn test_game_summary_formatting_round_trips_through_storage() {
    let mut persistence = SqlitePersistence::new_in_memory().unwrap();

    let game = persistence.find_or_create_game(date!(2026 - 08 - 27)).unwrap();
    assert_eq!(
        game.summary(),
        "2026-08-27 - Unsolicited Kick Pics vs TBD"
    );
}
