// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod position;
mod schedule;
mod stats;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use position::Position;
pub use schedule::next_game_date;
pub use stats::{
    LineupCell, count_incomplete_innings, grid_occupants, sit_out_counts, unused_players,
};
pub use types::{AvailabilityEntry, AvailabilityStatus, Game, Inning, PlayerName, Pool};
pub use validation::{validate_player_name, validate_team_name};
