// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability ledger mutations.
//!
//! Kicking orders are only ever touched here: IN assigns max+1 when the
//! player has no order, OUT clears the order, backfill renumbers 1..N,
//! and swap exchanges two existing orders.

use diesel::dsl::{count, max};
use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use crate::diesel_schema::{game_availability, games, main_roster, substitutes};
use crate::error::PersistenceError;
use kickroster_domain::{AvailabilityStatus, PlayerName};

/// Ensures the game exists, for use inside a transaction.
fn ensure_game_exists(
    conn: &mut SqliteConnection,
    game_id: i64,
) -> Result<(), PersistenceError> {
    let game_count: i64 = games::table
        .filter(games::game_id.eq(game_id))
        .select(count(games::game_id))
        .first(conn)?;

    if game_count == 0 {
        return Err(PersistenceError::GameNotFound(game_id));
    }
    Ok(())
}

/// Ensures the player exists in at least one roster pool.
fn ensure_player_in_a_pool(
    conn: &mut SqliteConnection,
    player: &PlayerName,
) -> Result<(), PersistenceError> {
    let in_main: i64 = main_roster::table
        .filter(main_roster::player_name.eq(player.value()))
        .select(count(main_roster::player_id))
        .first(conn)?;

    let in_subs: i64 = substitutes::table
        .filter(substitutes::player_name.eq(player.value()))
        .select(count(substitutes::player_id))
        .first(conn)?;

    if in_main == 0 && in_subs == 0 {
        return Err(PersistenceError::PlayerNotFound(player.value().to_string()));
    }
    Ok(())
}

/// Upserts a player's availability for a game.
///
/// Only players present in the main roster or substitute pool may receive
/// a status. Transitioning to IN assigns `kicking_order = max(existing IN
/// orders) + 1` when the player has no order yet; an existing order is
/// kept. Transitioning to OUT clears the order.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `game_id` - The game
/// * `player` - The player
/// * `status` - The new status
/// * `is_substitute` - Whether the player was added from the substitute pool
///
/// # Errors
///
/// Returns `PersistenceError::GameNotFound` if the game does not exist, or
/// `PersistenceError::PlayerNotFound` if the player is in neither pool.
pub fn set_player_status(
    conn: &mut SqliteConnection,
    game_id: i64,
    player: &PlayerName,
    status: AvailabilityStatus,
    is_substitute: bool,
) -> Result<(), PersistenceError> {
    info!(
        "Setting status {} for player '{}' in game {}",
        status, player, game_id
    );

    conn.transaction(|conn| {
        ensure_game_exists(conn, game_id)?;
        ensure_player_in_a_pool(conn, player)?;

        let existing: Option<(i64, Option<i32>)> = game_availability::table
            .filter(game_availability::game_id.eq(game_id))
            .filter(game_availability::player_name.eq(player.value()))
            .select((
                game_availability::availability_id,
                game_availability::kicking_order,
            ))
            .first(conn)
            .optional()?;

        let kicking_order: Option<i32> = match status {
            AvailabilityStatus::In => match existing {
                Some((_, Some(order))) => Some(order),
                _ => {
                    let max_order: Option<i32> = game_availability::table
                        .filter(game_availability::game_id.eq(game_id))
                        .filter(game_availability::status.eq(AvailabilityStatus::In.as_str()))
                        .select(max(game_availability::kicking_order))
                        .first(conn)?;
                    Some(max_order.unwrap_or(0) + 1)
                }
            },
            AvailabilityStatus::Out => None,
        };

        if let Some((availability_id, _)) = existing {
            diesel::update(game_availability::table)
                .filter(game_availability::availability_id.eq(availability_id))
                .set((
                    game_availability::status.eq(status.as_str()),
                    game_availability::is_substitute.eq(i32::from(is_substitute)),
                    game_availability::kicking_order.eq(kicking_order),
                ))
                .execute(conn)?;
        } else {
            diesel::insert_into(game_availability::table)
                .values((
                    game_availability::game_id.eq(game_id),
                    game_availability::player_name.eq(player.value()),
                    game_availability::status.eq(status.as_str()),
                    game_availability::is_substitute.eq(i32::from(is_substitute)),
                    game_availability::kicking_order.eq(kicking_order),
                ))
                .execute(conn)?;
        }

        Ok(())
    })
}

/// Renumbers kicking orders 1..N when any IN entry lacks one.
///
/// Entries are sorted by (order if present, else name) and assigned
/// sequential orders. A game whose IN entries all carry orders is left
/// untouched, which makes the operation idempotent.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `game_id` - The game
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn backfill_kicking_orders(
    conn: &mut SqliteConnection,
    game_id: i64,
) -> Result<(), PersistenceError> {
    conn.transaction(|conn| {
        let mut rows: Vec<(i64, String, Option<i32>)> = game_availability::table
            .filter(game_availability::game_id.eq(game_id))
            .filter(game_availability::status.eq(AvailabilityStatus::In.as_str()))
            .select((
                game_availability::availability_id,
                game_availability::player_name,
                game_availability::kicking_order,
            ))
            .load(conn)?;

        if rows.iter().all(|(_, _, order)| order.is_some()) {
            return Ok(());
        }

        debug!("Backfilling kicking orders for game {}", game_id);

        rows.sort_by(|a, b| match (a.2, b.2) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.1.cmp(&b.1),
        });

        for (index, (availability_id, _, _)) in rows.iter().enumerate() {
            let order: i32 = i32::try_from(index + 1)
                .map_err(|e| PersistenceError::Other(format!("Order overflow: {e}")))?;
            diesel::update(game_availability::table)
                .filter(game_availability::availability_id.eq(availability_id))
                .set(game_availability::kicking_order.eq(Some(order)))
                .execute(conn)?;
        }

        Ok(())
    })
}

/// Exchanges the kicking orders of two players.
///
/// Silent no-op unless both players are IN for the game and both carry an
/// order. Applying the swap twice restores the original ordering.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `game_id` - The game
/// * `player_a` - The first player
/// * `player_b` - The second player
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn swap_kicking_order(
    conn: &mut SqliteConnection,
    game_id: i64,
    player_a: &PlayerName,
    player_b: &PlayerName,
) -> Result<(), PersistenceError> {
    conn.transaction(|conn| {
        let load = |conn: &mut SqliteConnection,
                    player: &PlayerName|
         -> Result<Option<(i64, Option<i32>)>, PersistenceError> {
            Ok(game_availability::table
                .filter(game_availability::game_id.eq(game_id))
                .filter(game_availability::player_name.eq(player.value()))
                .filter(game_availability::status.eq(AvailabilityStatus::In.as_str()))
                .select((
                    game_availability::availability_id,
                    game_availability::kicking_order,
                ))
                .first(conn)
                .optional()?)
        };

        let (Some((id_a, Some(order_a))), Some((id_b, Some(order_b)))) =
            (load(conn, player_a)?, load(conn, player_b)?)
        else {
            debug!(
                "Swap between '{}' and '{}' skipped for game {}",
                player_a, player_b, game_id
            );
            return Ok(());
        };

        diesel::update(game_availability::table)
            .filter(game_availability::availability_id.eq(id_a))
            .set(game_availability::kicking_order.eq(Some(order_b)))
            .execute(conn)?;

        diesel::update(game_availability::table)
            .filter(game_availability::availability_id.eq(id_b))
            .set(game_availability::kicking_order.eq(Some(order_a)))
            .execute(conn)?;

        Ok(())
    })
}
