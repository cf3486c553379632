// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Game record mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::diesel_schema::games;
use crate::error::PersistenceError;
use crate::queries::games::game_from_row;
use crate::sqlite::get_last_insert_rowid;
use kickroster_domain::Game;

/// Finds the game scheduled for a date, creating it if absent.
///
/// Creation applies the default team name and leaves the opponent unset.
/// The operation is idempotent: calling it twice for the same date returns
/// the same game.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `game_date` - The target date
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn find_or_create_game(
    conn: &mut SqliteConnection,
    game_date: time::Date,
) -> Result<Game, PersistenceError> {
    let date_string: String = game_date.to_string();

    conn.transaction(|conn| {
        let existing: Option<(i64, String, String, Option<String>)> = games::table
            .filter(games::game_date.eq(&date_string))
            .select((
                games::game_id,
                games::game_date,
                games::team_name,
                games::opponent_name,
            ))
            .first(conn)
            .optional()?;

        if let Some(row) = existing {
            return game_from_row(row);
        }

        info!("Creating game for date: {}", date_string);

        diesel::insert_into(games::table)
            .values((
                games::game_date.eq(&date_string),
                games::team_name.eq(Game::DEFAULT_TEAM_NAME),
            ))
            .execute(conn)?;

        let game_id: i64 = get_last_insert_rowid(conn)?;

        info!(game_id, "Game created");

        Ok(Game::with_id(
            game_id,
            game_date,
            String::from(Game::DEFAULT_TEAM_NAME),
            None,
        ))
    })
}

/// Updates a game's date, team name, and opponent.
///
/// Bumps the `updated_at` timestamp.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `game_id` - The game to update
/// * `game_date` - The new date
/// * `team_name` - The new team name
/// * `opponent_name` - The new opponent, or `None` when unknown
///
/// # Errors
///
/// Returns `PersistenceError::GameNotFound` if the game does not exist.
pub fn update_game(
    conn: &mut SqliteConnection,
    game_id: i64,
    game_date: time::Date,
    team_name: &str,
    opponent_name: Option<&str>,
) -> Result<(), PersistenceError> {
    info!("Updating game ID: {}", game_id);

    let rows_affected: usize = diesel::update(games::table)
        .filter(games::game_id.eq(game_id))
        .set((
            games::game_date.eq(game_date.to_string()),
            games::team_name.eq(team_name),
            games::opponent_name.eq(opponent_name),
            games::updated_at
                .eq(diesel::dsl::sql::<diesel::sql_types::Text>("CURRENT_TIMESTAMP")),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::GameNotFound(game_id));
    }

    Ok(())
}
