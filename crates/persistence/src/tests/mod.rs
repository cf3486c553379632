// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test module for the persistence crate.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod game_tests;
mod lineup_tests;
mod operator_tests;

use crate::SqlitePersistence;
use kickroster_domain::{AvailabilityStatus, PlayerName, Pool};
use time::macros::date;

pub fn player(name: &str) -> PlayerName {
    PlayerName::new(name).unwrap()
}

/// Creates the standard test game (2026-08-27, a Thursday).
pub fn create_test_game(persistence: &mut SqlitePersistence) -> i64 {
    persistence
        .find_or_create_game(date!(2026 - 08 - 27))
        .unwrap()
        .game_id()
        .unwrap()
}

/// Adds the given names to the main roster.
pub fn seed_main_roster(persistence: &mut SqlitePersistence, names: &[&str]) {
    for name in names {
        persistence
            .add_player(Pool::MainRoster, &player(name))
            .unwrap();
    }
}

/// Marks the given names IN for the game, in order.
pub fn mark_all_in(persistence: &mut SqlitePersistence, game_id: i64, names: &[&str]) {
    for name in names {
        persistence
            .set_player_status(game_id, &player(name), AvailabilityStatus::In, false)
            .unwrap();
    }
}
