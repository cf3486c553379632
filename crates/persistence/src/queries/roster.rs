// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster pool queries.

use diesel::dsl::count;
use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::diesel_schema::{main_roster, substitutes};
use crate::error::PersistenceError;
use kickroster_domain::{PlayerName, Pool};

/// Lists the players in a pool, sorted by name.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `pool` - The pool to list
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_players(
    conn: &mut SqliteConnection,
    pool: Pool,
) -> Result<Vec<PlayerName>, PersistenceError> {
    debug!("Listing players in {}", pool);

    let names: Vec<String> = match pool {
        Pool::MainRoster => main_roster::table
            .select(main_roster::player_name)
            .order_by(main_roster::player_name.asc())
            .load(conn)?,
        Pool::Substitute => substitutes::table
            .select(substitutes::player_name)
            .order_by(substitutes::player_name.asc())
            .load(conn)?,
    };

    names
        .iter()
        .map(|name| PlayerName::new_unchecked(name).map_err(PersistenceError::from))
        .collect()
}

/// Returns the pools that contain a name (zero, one, or both).
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The player name to look up
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn player_pools(
    conn: &mut SqliteConnection,
    name: &PlayerName,
) -> Result<Vec<Pool>, PersistenceError> {
    let in_main: i64 = main_roster::table
        .filter(main_roster::player_name.eq(name.value()))
        .select(count(main_roster::player_id))
        .first(conn)?;

    let in_subs: i64 = substitutes::table
        .filter(substitutes::player_name.eq(name.value()))
        .select(count(substitutes::player_id))
        .first(conn)?;

    let mut pools: Vec<Pool> = Vec::new();
    if in_main > 0 {
        pools.push(Pool::MainRoster);
    }
    if in_subs > 0 {
        pools.push(Pool::Substitute);
    }
    Ok(pools)
}
