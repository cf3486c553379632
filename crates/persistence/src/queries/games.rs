// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Game record queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use time::macros::format_description;
use tracing::debug;

use crate::diesel_schema::games;
use crate::error::PersistenceError;
use kickroster_domain::Game;

/// Converts a game row back into a domain `Game`.
///
/// # Errors
///
/// Returns `PersistenceError::InvalidStoredData` if the stored date cannot
/// be parsed.
pub fn game_from_row(
    row: (i64, String, String, Option<String>),
) -> Result<Game, PersistenceError> {
    let (game_id, game_date, team_name, opponent_name) = row;
    let date: time::Date =
        time::Date::parse(&game_date, format_description!("[year]-[month]-[day]")).map_err(
            |e| PersistenceError::InvalidStoredData(format!("Bad game date '{game_date}': {e}")),
        )?;
    Ok(Game::with_id(game_id, date, team_name, opponent_name))
}

/// Retrieves a game by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `game_id` - The game ID
///
/// # Errors
///
/// Returns `PersistenceError::GameNotFound` if the game does not exist.
pub fn get_game(conn: &mut SqliteConnection, game_id: i64) -> Result<Game, PersistenceError> {
    debug!("Looking up game by ID: {}", game_id);

    let row: Option<(i64, String, String, Option<String>)> = games::table
        .filter(games::game_id.eq(game_id))
        .select((
            games::game_id,
            games::game_date,
            games::team_name,
            games::opponent_name,
        ))
        .first(conn)
        .optional()?;

    row.map_or(Err(PersistenceError::GameNotFound(game_id)), game_from_row)
}

/// Lists all games, most recent first.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_games(conn: &mut SqliteConnection) -> Result<Vec<Game>, PersistenceError> {
    debug!("Listing games");

    let rows: Vec<(i64, String, String, Option<String>)> = games::table
        .select((
            games::game_id,
            games::game_date,
            games::team_name,
            games::opponent_name,
        ))
        .order_by(games::game_date.desc())
        .load(conn)?;

    rows.into_iter().map(game_from_row).collect()
}
