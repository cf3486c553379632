// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lineup grid queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::diesel_schema::lineup_cells;
use crate::error::PersistenceError;
use kickroster_domain::{Inning, LineupCell, PlayerName, Position};

/// Retrieves the occupant of a grid cell, if any.
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
/// Returns an error if the database query fails.
pub fn get_cell(
    conn: &mut SqliteConnection,
    game_id: i64,
    inning: Inning,
    position: Position,
) -> Result<Option<PlayerName>, PersistenceError> {
    let name: Option<String> = lineup_cells::table
        .filter(lineup_cells::game_id.eq(game_id))
        .filter(lineup_cells::inning.eq(i32::from(inning.number())))
        .filter(lineup_cells::position.eq(position.as_str()))
        .select(lineup_cells::player_name)
        .first(conn)
        .optional()?;

    name.map(|name| PlayerName::new_unchecked(&name).map_err(PersistenceError::from))
        .transpose()
}

/// Reverse lookup: the position a player holds in an inning, if any.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `game_id` - The game
/// * `inning` - The inning
/// * `player` - The player
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn player_position(
    conn: &mut SqliteConnection,
    game_id: i64,
    inning: Inning,
    player: &PlayerName,
) -> Result<Option<Position>, PersistenceError> {
    let position: Option<String> = lineup_cells::table
        .filter(lineup_cells::game_id.eq(game_id))
        .filter(lineup_cells::inning.eq(i32::from(inning.number())))
        .filter(lineup_cells::player_name.eq(player.value()))
        .select(lineup_cells::position)
        .first(conn)
        .optional()?;

    position
        .map(|position| Position::parse(&position).map_err(PersistenceError::from))
        .transpose()
}

/// Loads the full sparse grid for a game.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `game_id` - The game
///
/// # Errors
///
/// Returns an error if the database query fails or a stored value cannot
/// be converted back into a domain type.
pub fn list_cells(
    conn: &mut SqliteConnection,
    game_id: i64,
) -> Result<Vec<LineupCell>, PersistenceError> {
    debug!("Loading lineup grid for game {}", game_id);

    let rows: Vec<(i32, String, String)> = lineup_cells::table
        .filter(lineup_cells::game_id.eq(game_id))
        .select((
            lineup_cells::inning,
            lineup_cells::position,
            lineup_cells::player_name,
        ))
        .order_by((lineup_cells::inning.asc(), lineup_cells::position.asc()))
        .load(conn)?;

    rows.into_iter()
        .map(|(inning, position, player_name)| {
            let inning_number: u8 = u8::try_from(inning).map_err(|e| {
                PersistenceError::InvalidStoredData(format!("Bad inning {inning}: {e}"))
            })?;
            Ok(LineupCell::new(
                Inning::new(inning_number)?,
                Position::parse(&position)?,
                PlayerName::new_unchecked(&player_name)?,
            ))
        })
        .collect()
}
