// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability ledger queries.

use diesel::dsl::count;
use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::diesel_schema::game_availability;
use crate::error::PersistenceError;
use kickroster_domain::{AvailabilityEntry, AvailabilityStatus, PlayerName};

type AvailabilityRow = (String, String, i32, Option<i32>);

fn entry_from_row(row: AvailabilityRow) -> Result<AvailabilityEntry, PersistenceError> {
    let (player_name, status, is_substitute, kicking_order) = row;
    Ok(AvailabilityEntry::new(
        PlayerName::new_unchecked(&player_name)?,
        AvailabilityStatus::parse(&status)?,
        is_substitute != 0,
        kicking_order.map(|order| order.unsigned_abs()),
    ))
}

/// Lists every availability entry for a game, IN and OUT alike, sorted
/// by name.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `game_id` - The game
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_availability(
    conn: &mut SqliteConnection,
    game_id: i64,
) -> Result<Vec<AvailabilityEntry>, PersistenceError> {
    debug!("Listing availability for game {}", game_id);

    let rows: Vec<AvailabilityRow> = game_availability::table
        .filter(game_availability::game_id.eq(game_id))
        .select((
            game_availability::player_name,
            game_availability::status,
            game_availability::is_substitute,
            game_availability::kicking_order,
        ))
        .order_by(game_availability::player_name.asc())
        .load(conn)?;

    rows.into_iter().map(entry_from_row).collect()
}

/// Lists the IN entries for a game in kicking order.
///
/// Entries with an order come first, ascending; entries still missing an
/// order follow, sorted by name.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `game_id` - The game
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_in_order(
    conn: &mut SqliteConnection,
    game_id: i64,
) -> Result<Vec<AvailabilityEntry>, PersistenceError> {
    let rows: Vec<AvailabilityRow> = game_availability::table
        .filter(game_availability::game_id.eq(game_id))
        .filter(game_availability::status.eq(AvailabilityStatus::In.as_str()))
        .select((
            game_availability::player_name,
            game_availability::status,
            game_availability::is_substitute,
            game_availability::kicking_order,
        ))
        .load(conn)?;

    let mut entries: Vec<AvailabilityEntry> = rows
        .into_iter()
        .map(entry_from_row)
        .collect::<Result<Vec<AvailabilityEntry>, PersistenceError>>()?;

    entries.sort_by(|a, b| match (a.kicking_order, b.kicking_order) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.player.cmp(&b.player),
    });

    Ok(entries)
}

/// Returns whether any IN entry for the game lacks a kicking order.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `game_id` - The game
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn has_missing_orders(
    conn: &mut SqliteConnection,
    game_id: i64,
) -> Result<bool, PersistenceError> {
    let missing: i64 = game_availability::table
        .filter(game_availability::game_id.eq(game_id))
        .filter(game_availability::status.eq(AvailabilityStatus::In.as_str()))
        .filter(game_availability::kicking_order.is_null())
        .select(count(game_availability::availability_id))
        .first(conn)?;

    Ok(missing > 0)
}
