// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test module for the API crate.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod auth_tests;
mod authorization_tests;
mod view_tests;

use time::macros::date;

use kickroster_domain::{AvailabilityStatus, PlayerName, Pool};
use kickroster_persistence::SqlitePersistence;

use crate::auth::{AuthenticatedActor, Role};

pub fn manager() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("COACH"), Role::Manager)
}

pub fn viewer() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("SCOUT"), Role::Viewer)
}

pub fn fresh_persistence() -> SqlitePersistence {
    SqlitePersistence::new_in_memory().unwrap()
}

pub fn player(name: &str) -> PlayerName {
    PlayerName::new(name).unwrap()
}

/// Seeds the main roster, creates the standard test game (2026-08-27), and
/// marks every seeded player IN.
pub fn seeded_game(persistence: &mut SqlitePersistence, names: &[&str]) -> i64 {
    for name in names {
        persistence
            .add_player(Pool::MainRoster, &player(name))
            .unwrap();
    }
    let game_id: i64 = persistence
        .find_or_create_game(date!(2026 - 08 - 27))
        .unwrap()
        .game_id()
        .unwrap();
    for name in names {
        persistence
            .set_player_status(game_id, &player(name), AvailabilityStatus::In, false)
            .unwrap();
    }
    game_id
}
