// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster pool mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::diesel_schema::{main_roster, substitutes};
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;
use kickroster_domain::{PlayerName, Pool};

/// Adds a player to a roster pool.
///
/// Each pool is its own uniqueness namespace: the same name may exist in
/// both pools at once, but not twice within one pool.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `pool` - The pool to add the player to
/// * `name` - The player name
///
/// # Returns
///
/// The generated `player_id` for the new roster row.
///
/// # Errors
///
/// Returns `PersistenceError::AlreadyExists` if the name is already present
/// in the pool.
pub fn add_player(
    conn: &mut SqliteConnection,
    pool: Pool,
    name: &PlayerName,
) -> Result<i64, PersistenceError> {
    info!("Adding player '{}' to {}", name, pool);

    let result: Result<usize, diesel::result::Error> = match pool {
        Pool::MainRoster => diesel::insert_into(main_roster::table)
            .values(main_roster::player_name.eq(name.value()))
            .execute(conn),
        Pool::Substitute => diesel::insert_into(substitutes::table)
            .values(substitutes::player_name.eq(name.value()))
            .execute(conn),
    };

    match result {
        Ok(_) => {
            let player_id: i64 = get_last_insert_rowid(conn)?;
            info!(player_id, "Player added");
            Ok(player_id)
        }
        Err(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            _,
        )) => Err(PersistenceError::AlreadyExists(format!(
            "Player '{name}' already exists in {pool}"
        ))),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Removes a player from a roster pool.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `pool` - The pool to remove the player from
/// * `name` - The player name
///
/// # Errors
///
/// Returns `PersistenceError::PlayerNotFound` if the name is not present
/// in the pool.
pub fn remove_player(
    conn: &mut SqliteConnection,
    pool: Pool,
    name: &PlayerName,
) -> Result<(), PersistenceError> {
    info!("Removing player '{}' from {}", name, pool);

    let rows_affected: usize = match pool {
        Pool::MainRoster => diesel::delete(main_roster::table)
            .filter(main_roster::player_name.eq(name.value()))
            .execute(conn)?,
        Pool::Substitute => diesel::delete(substitutes::table)
            .filter(substitutes::player_name.eq(name.value()))
            .execute(conn)?,
    };

    if rows_affected == 0 {
        return Err(PersistenceError::PlayerNotFound(name.value().to_string()));
    }

    Ok(())
}
