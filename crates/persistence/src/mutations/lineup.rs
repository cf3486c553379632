// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lineup grid mutations.
//!
//! The grid is sparse: an unoccupied cell has no row. Both invariants the
//! grid carries (one occupant per cell, one position per player per inning)
//! are enforced here inside a single transaction.

use diesel::dsl::count;
use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::diesel_schema::{games, lineup_cells};
use crate::error::PersistenceError;
use kickroster_domain::{Inning, PlayerName, Position};

/// Assigns a player to a grid cell.
///
/// In one transaction: any cell the player already occupies in the same
/// inning is cleared first, and any previous occupant of the target cell
/// is displaced (replace-on-write, not a swap).
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `game_id` - The game
/// * `inning` - The inning
/// * `position` - The position
/// * `player` - The player to assign
///
/// # Errors
///
/// Returns `PersistenceError::GameNotFound` if the game does not exist.
pub fn assign_position(
    conn: &mut SqliteConnection,
    game_id: i64,
    inning: Inning,
    position: Position,
    player: &PlayerName,
) -> Result<(), PersistenceError> {
    debug!(
        "Assigning '{}' to {} in inning {} of game {}",
        player, position, inning, game_id
    );

    conn.transaction(|conn| {
        let game_count: i64 = games::table
            .filter(games::game_id.eq(game_id))
            .select(count(games::game_id))
            .first(conn)?;

        if game_count == 0 {
            return Err(PersistenceError::GameNotFound(game_id));
        }

        // A player holds at most one position per inning.
        diesel::delete(lineup_cells::table)
            .filter(lineup_cells::game_id.eq(game_id))
            .filter(lineup_cells::inning.eq(i32::from(inning.number())))
            .filter(lineup_cells::player_name.eq(player.value()))
            .execute(conn)?;

        // The previous occupant of the target cell is displaced.
        diesel::delete(lineup_cells::table)
            .filter(lineup_cells::game_id.eq(game_id))
            .filter(lineup_cells::inning.eq(i32::from(inning.number())))
            .filter(lineup_cells::position.eq(position.as_str()))
            .execute(conn)?;

        diesel::insert_into(lineup_cells::table)
            .values((
                lineup_cells::game_id.eq(game_id),
                lineup_cells::inning.eq(i32::from(inning.number())),
                lineup_cells::position.eq(position.as_str()),
                lineup_cells::player_name.eq(player.value()),
            ))
            .execute(conn)?;

        Ok(())
    })
}

/// Clears a grid cell.
///
/// No-op when the cell is already empty.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `game_id` - The game
/// * `inning` - The inning
/// * `position` - The position
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn clear_position(
    conn: &mut SqliteConnection,
    game_id: i64,
    inning: Inning,
    position: Position,
) -> Result<(), PersistenceError> {
    debug!(
        "Clearing {} in inning {} of game {}",
        position, inning, game_id
    );

    diesel::delete(lineup_cells::table)
        .filter(lineup_cells::game_id.eq(game_id))
        .filter(lineup_cells::inning.eq(i32::from(inning.number())))
        .filter(lineup_cells::position.eq(position.as_str()))
        .execute(conn)?;

    Ok(())
}
