// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AvailabilityStatus, DomainError, Game, Inning, PlayerName, Pool};
use time::macros::date;

#[test]
fn test_player_name_creation() {
    let name: PlayerName = PlayerName::new("Alice").unwrap();
    assert_eq!(name.value(), "Alice");
}

#[test]
fn test_player_name_trims_whitespace() {
    let name: PlayerName = PlayerName::new("  Alice  ").unwrap();
    assert_eq!(name.value(), "Alice");
}

#[test]
fn test_player_name_rejects_empty() {
    let result: Result<PlayerName, DomainError> = PlayerName::new("");
    assert!(matches!(result, Err(DomainError::InvalidPlayerName(_))));
}

#[test]
fn test_player_name_rejects_whitespace_only() {
    let result: Result<PlayerName, DomainError> = PlayerName::new("   ");
    assert!(matches!(result, Err(DomainError::InvalidPlayerName(_))));
}

#[test]
fn test_availability_status_round_trip() {
    assert_eq!(
        AvailabilityStatus::parse("IN").unwrap(),
        AvailabilityStatus::In
    );
    assert_eq!(
        AvailabilityStatus::parse("OUT").unwrap(),
        AvailabilityStatus::Out
    );
    assert_eq!(AvailabilityStatus::In.as_str(), "IN");
    assert_eq!(AvailabilityStatus::Out.as_str(), "OUT");
}

#[test]
fn test_availability_status_rejects_unknown() {
    let result: Result<AvailabilityStatus, DomainError> = AvailabilityStatus::parse("MAYBE");
    assert!(matches!(
        result,
        Err(DomainError::InvalidAvailabilityStatus(_))
    ));
}

#[test]
fn test_pool_round_trip() {
    assert_eq!(Pool::parse("main_roster").unwrap(), Pool::MainRoster);
    assert_eq!(Pool::parse("substitute").unwrap(), Pool::Substitute);
    assert_eq!(Pool::MainRoster.as_str(), "main_roster");
    assert_eq!(Pool::Substitute.as_str(), "substitute");
}

#[test]
fn test_inning_creation() {
    let inning: Result<Inning, DomainError> = Inning::new(1);
    assert!(inning.is_ok());
    assert_eq!(inning.unwrap().number(), 1);
}

#[test]
fn test_inning_validation_rejects_zero() {
    let inning: Result<Inning, DomainError> = Inning::new(0);
    assert!(matches!(
        inning,
        Err(DomainError::InvalidInning { inning: 0 })
    ));
}

#[test]
fn test_inning_validation_rejects_eight() {
    let inning: Result<Inning, DomainError> = Inning::new(8);
    assert!(matches!(
        inning,
        Err(DomainError::InvalidInning { inning: 8 })
    ));
}

#[test]
fn test_inning_validation_accepts_all_valid_values() {
    for n in 1..=7 {
        let inning: Result<Inning, DomainError> = Inning::new(n);
        assert!(inning.is_ok());
        assert_eq!(inning.unwrap().number(), n);
    }
}

#[test]
fn test_inning_all_yields_seven_in_order() {
    let numbers: Vec<u8> = Inning::all().map(|i| i.number()).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_game_creation_rejects_empty_team_name() {
    let result: Result<Game, DomainError> =
        Game::new(date!(2026 - 08 - 27), String::new(), None);
    assert!(matches!(result, Err(DomainError::InvalidTeamName(_))));
}

#[test]
fn test_game_summary_with_opponent() {
    let game: Game = Game::with_id(
        1,
        date!(2026 - 08 - 27),
        String::from("Unsolicited Kick Pics"),
        Some(String::from("Ball Busters")),
    );
    assert_eq!(
        game.summary(),
        "2026-08-27 - Unsolicited Kick Pics vs Ball Busters"
    );
}

#[test]
fn test_game_summary_without_opponent_shows_tbd() {
    let game: Game = Game::with_id(
        1,
        date!(2026 - 08 - 27),
        String::from("Unsolicited Kick Pics"),
        None,
    );
    assert_eq!(game.summary(), "2026-08-27 - Unsolicited Kick Pics vs TBD");
}
