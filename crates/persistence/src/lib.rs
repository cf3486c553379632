// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the kickball roster manager.
//!
//! This crate provides `SQLite` persistence (via Diesel with embedded
//! migrations) for the roster pools, game records, availability ledger,
//! lineup grid, and operator accounts. The invariant-preserving ledger and
//! grid operations run inside single transactions so no partial mutation
//! is ever observable.
//!
//! In-memory databases (unique per call, for tests) and file-backed
//! databases (WAL mode) are both supported. Foreign key enforcement is
//! verified at startup.

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
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use kickroster_domain::{
    AvailabilityEntry, AvailabilityStatus, Game, Inning, LineupCell, PlayerName, Pool, Position,
};

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::{OperatorData, SessionData};
pub use error::PersistenceError;

/// Type alias kept for call sites that name the backend explicitly.
pub type SqlitePersistence = Persistence;

/// Persistence adapter over a single `SQLite` connection.
pub struct Persistence {
    pub(crate) conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("memdb_test_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError(String::from("Invalid database path"))
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Roster Store
    // ========================================================================

    /// Adds a player to a roster pool.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::AlreadyExists` if the name is already in
    /// the pool.
    pub fn add_player(&mut self, pool: Pool, name: &PlayerName) -> Result<i64, PersistenceError> {
        mutations::add_player(&mut self.conn, pool, name)
    }

    /// Removes a player from a roster pool.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::PlayerNotFound` if the name is not in
    /// the pool.
    pub fn remove_player(&mut self, pool: Pool, name: &PlayerName) -> Result<(), PersistenceError> {
        mutations::remove_player(&mut self.conn, pool, name)
    }

    /// Lists the players in a pool, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_players(&mut self, pool: Pool) -> Result<Vec<PlayerName>, PersistenceError> {
        queries::list_players(&mut self.conn, pool)
    }

    /// Returns the pools that contain a name (zero, one, or both).
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn player_pools(&mut self, name: &PlayerName) -> Result<Vec<Pool>, PersistenceError> {
        queries::player_pools(&mut self.conn, name)
    }

    // ========================================================================
    // Game Record
    // ========================================================================

    /// Finds the game scheduled for a date, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn find_or_create_game(&mut self, game_date: time::Date) -> Result<Game, PersistenceError> {
        mutations::find_or_create_game(&mut self.conn, game_date)
    }

    /// Updates a game's date, team name, and opponent.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::GameNotFound` if the game does not exist.
    pub fn update_game(
        &mut self,
        game_id: i64,
        game_date: time::Date,
        team_name: &str,
        opponent_name: Option<&str>,
    ) -> Result<(), PersistenceError> {
        mutations::update_game(&mut self.conn, game_id, game_date, team_name, opponent_name)
    }

    /// Retrieves a game by ID.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::GameNotFound` if the game does not exist.
    pub fn get_game(&mut self, game_id: i64) -> Result<Game, PersistenceError> {
        queries::get_game(&mut self.conn, game_id)
    }

    /// Lists all games, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_games(&mut self) -> Result<Vec<Game>, PersistenceError> {
        queries::list_games(&mut self.conn)
    }

    // ========================================================================
    // Availability Ledger
    // ========================================================================

    /// Upserts a player's availability for a game.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::GameNotFound` or
    /// `PersistenceError::PlayerNotFound` when the referenced entities are
    /// missing.
    pub fn set_player_status(
        &mut self,
        game_id: i64,
        player: &PlayerName,
        status: AvailabilityStatus,
        is_substitute: bool,
    ) -> Result<(), PersistenceError> {
        mutations::set_player_status(&mut self.conn, game_id, player, status, is_substitute)
    }

    /// Lists every availability entry for a game, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_availability(
        &mut self,
        game_id: i64,
    ) -> Result<Vec<AvailabilityEntry>, PersistenceError> {
        queries::list_availability(&mut self.conn, game_id)
    }

    /// Lists the IN entries for a game in kicking order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_in_order(
        &mut self,
        game_id: i64,
    ) -> Result<Vec<AvailabilityEntry>, PersistenceError> {
        queries::list_in_order(&mut self.conn, game_id)
    }

    /// Returns whether any IN entry for the game lacks a kicking order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn has_missing_orders(&mut self, game_id: i64) -> Result<bool, PersistenceError> {
        queries::has_missing_orders(&mut self.conn, game_id)
    }

    /// Renumbers kicking orders 1..N when any IN entry lacks one.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn backfill_kicking_orders(&mut self, game_id: i64) -> Result<(), PersistenceError> {
        mutations::backfill_kicking_orders(&mut self.conn, game_id)
    }

    /// Exchanges the kicking orders of two players. Silent no-op unless
    /// both players are IN with orders.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn swap_kicking_order(
        &mut self,
        game_id: i64,
        player_a: &PlayerName,
        player_b: &PlayerName,
    ) -> Result<(), PersistenceError> {
        mutations::swap_kicking_order(&mut self.conn, game_id, player_a, player_b)
    }

    // ========================================================================
    // Lineup Grid
    // ========================================================================

    /// Assigns a player to a grid cell, clearing any other cell the player
    /// holds in the same inning and displacing the target cell's previous
    /// occupant.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::GameNotFound` if the game does not exist.
    pub fn assign_position(
        &mut self,
        game_id: i64,
        inning: Inning,
        position: Position,
        player: &PlayerName,
    ) -> Result<(), PersistenceError> {
        mutations::assign_position(&mut self.conn, game_id, inning, position, player)
    }

    /// Clears a grid cell. No-op when the cell is already empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn clear_position(
        &mut self,
        game_id: i64,
        inning: Inning,
        position: Position,
    ) -> Result<(), PersistenceError> {
        mutations::clear_position(&mut self.conn, game_id, inning, position)
    }

    /// Retrieves the occupant of a grid cell, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_cell(
        &mut self,
        game_id: i64,
        inning: Inning,
        position: Position,
    ) -> Result<Option<PlayerName>, PersistenceError> {
        queries::get_cell(&mut self.conn, game_id, inning, position)
    }

    /// Reverse lookup: the position a player holds in an inning, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn player_position(
        &mut self,
        game_id: i64,
        inning: Inning,
        player: &PlayerName,
    ) -> Result<Option<Position>, PersistenceError> {
        queries::player_position(&mut self.conn, game_id, inning, player)
    }

    /// Loads the full sparse grid for a game.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_cells(&mut self, game_id: i64) -> Result<Vec<LineupCell>, PersistenceError> {
        queries::list_cells(&mut self.conn, game_id)
    }

    // ========================================================================
    // Operators & Sessions
    // ========================================================================

    /// Creates a new operator.
    ///
    /// # Errors
    ///
    /// Returns an error if the operator cannot be created.
    pub fn create_operator(
        &mut self,
        login_name: &str,
        display_name: &str,
        password: &str,
        role: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::create_operator(&mut self.conn, login_name, display_name, password, role)
    }

    /// Retrieves an operator by login name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_operator_by_login(
        &mut self,
        login_name: &str,
    ) -> Result<Option<OperatorData>, PersistenceError> {
        queries::get_operator_by_login(&mut self.conn, login_name)
    }

    /// Retrieves an operator by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_operator_by_id(
        &mut self,
        operator_id: i64,
    ) -> Result<Option<OperatorData>, PersistenceError> {
        queries::get_operator_by_id(&mut self.conn, operator_id)
    }

    /// Counts the total number of operators.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn count_operators(&mut self) -> Result<i64, PersistenceError> {
        queries::count_operators(&mut self.conn)
    }

    /// Updates the last login timestamp for an operator.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub fn update_last_login(&mut self, operator_id: i64) -> Result<(), PersistenceError> {
        mutations::update_last_login(&mut self.conn, operator_id)
    }

    /// Disables an operator.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub fn disable_operator(&mut self, operator_id: i64) -> Result<(), PersistenceError> {
        mutations::disable_operator(&mut self.conn, operator_id)
    }

    /// Verifies a password against a stored hash.
    ///
    /// # Errors
    ///
    /// Returns an error if password verification fails.
    pub fn verify_password(
        &self,
        password: &str,
        password_hash: &str,
    ) -> Result<bool, PersistenceError> {
        queries::verify_password(password, password_hash)
    }

    /// Creates a new session for an operator.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be created.
    pub fn create_session(
        &mut self,
        session_token: &str,
        operator_id: i64,
        expires_at: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::create_session(&mut self.conn, session_token, operator_id, expires_at)
    }

    /// Retrieves a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_session_by_token(
        &mut self,
        session_token: &str,
    ) -> Result<Option<SessionData>, PersistenceError> {
        queries::get_session_by_token(&mut self.conn, session_token)
    }

    /// Updates the last activity timestamp for a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub fn update_session_activity(&mut self, session_id: i64) -> Result<(), PersistenceError> {
        mutations::update_session_activity(&mut self.conn, session_id)
    }

    /// Deletes a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn delete_session(&mut self, session_token: &str) -> Result<(), PersistenceError> {
        mutations::delete_session(&mut self.conn, session_token)
    }

    /// Deletes all expired sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub fn delete_expired_sessions(&mut self) -> Result<usize, PersistenceError> {
        mutations::delete_expired_sessions(&mut self.conn)
    }
}
