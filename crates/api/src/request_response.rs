// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request, response, and view-model types for the engine boundary.
//!
//! These DTOs are distinct from domain types and represent the API contract.

use serde::{Deserialize, Serialize};

/// Generic success response carrying a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// A success message.
    pub message: String,
}

/// Request to add a player to a roster pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddPlayerRequest {
    /// The pool to add to (`main_roster` or `substitute`).
    pub pool: String,
    /// The player name.
    pub player_name: String,
}

/// Request to remove a player from a roster pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovePlayerRequest {
    /// The pool to remove from (`main_roster` or `substitute`).
    pub pool: String,
    /// The player name.
    pub player_name: String,
}

/// Request to find or create the game for a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGameRequest {
    /// The game date in `YYYY-MM-DD` form.
    pub game_date: String,
}

/// Request to edit a game's fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGameRequest {
    /// The game to edit.
    pub game_id: i64,
    /// The new game date in `YYYY-MM-DD` form.
    pub game_date: String,
    /// The new team name.
    pub team_name: String,
    /// The new opponent name, if known.
    pub opponent_name: Option<String>,
}

/// One game in a game listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// The game ID.
    pub game_id: i64,
    /// "date - team vs opponent-or-TBD".
    pub summary: String,
}

/// Request to mark a player IN or OUT for a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetStatusRequest {
    /// The game.
    pub game_id: i64,
    /// The player name.
    pub player_name: String,
    /// `"IN"` or `"OUT"`.
    pub status: String,
    /// Whether the player is attending as a substitute.
    pub is_substitute: bool,
}

/// Request to exchange two players' kicking orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapOrderRequest {
    /// The game.
    pub game_id: i64,
    /// One player.
    pub first_player: String,
    /// The other player.
    pub second_player: String,
}

/// Request to move a player one step in the kicking order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOrderRequest {
    /// The game.
    pub game_id: i64,
    /// The player to move.
    pub player_name: String,
}

/// Request to assign a player to a grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignPositionRequest {
    /// The game.
    pub game_id: i64,
    /// The inning (1-7).
    pub inning: u8,
    /// The position name.
    pub position: String,
    /// The player name.
    pub player_name: String,
}

/// Request to clear a grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearPositionRequest {
    /// The game.
    pub game_id: i64,
    /// The inning (1-7).
    pub inning: u8,
    /// The position name.
    pub position: String,
}

/// Request to create the first manager account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstManagerRequest {
    /// The login name.
    pub login_name: String,
    /// The display name.
    pub display_name: String,
    /// The password.
    pub password: String,
    /// The password confirmation.
    pub confirmation: String,
}

/// Login request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The login name.
    pub login_name: String,
    /// The password.
    pub password: String,
}

/// Login response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The session token to present on subsequent requests.
    pub session_token: String,
    /// The operator's display name.
    pub display_name: String,
    /// The operator's role (`Manager` or `Viewer`).
    pub role: String,
}

/// One entry of the ordered available-players list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailablePlayerView {
    /// The player name.
    pub player_name: String,
    /// The kicking order slot.
    pub kicking_order: Option<u32>,
    /// Whether the player is attending as a substitute.
    pub is_substitute: bool,
    /// Whether this is the first entry (move-up is a no-op).
    pub is_first: bool,
    /// Whether this is the last entry (move-down is a no-op).
    pub is_last: bool,
}

/// One substitute with their per-game status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstituteView {
    /// The player name.
    pub player_name: String,
    /// `"IN"`, `"OUT"`, or `None` when not yet added to this game.
    pub status: Option<String>,
}

/// One row of the sit-out tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitOutView {
    /// The player name.
    pub player_name: String,
    /// The number of innings spent in the "Out" slot.
    pub innings_out: usize,
}

/// One cell of the editor grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCellView {
    /// The position name.
    pub position: String,
    /// The current occupant, if any.
    pub occupant: Option<String>,
    /// The dropdown choices: blank, every available player, and the current
    /// occupant when they are no longer available.
    pub options: Vec<String>,
}

/// One inning row of the editor grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRowView {
    /// The inning number (1-7).
    pub inning: u8,
    /// The twelve cells, in `Position::ALL` order.
    pub cells: Vec<GridCellView>,
}

/// Game header shared by the editor and sheet views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHeaderView {
    /// The game ID.
    pub game_id: i64,
    /// The game date in `YYYY-MM-DD` form.
    pub game_date: String,
    /// The team name.
    pub team_name: String,
    /// The opponent name, if known.
    pub opponent_name: Option<String>,
    /// "date - team vs opponent-or-TBD".
    pub summary: String,
}

/// The manager's lineup editor view for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorView {
    /// The game header.
    pub game: GameHeaderView,
    /// Main-roster players marked IN, sorted by name.
    pub main_roster_in: Vec<String>,
    /// Main-roster players marked OUT, sorted by name.
    pub main_roster_out: Vec<String>,
    /// Main-roster players without a status yet, sorted by name.
    pub main_roster_unmarked: Vec<String>,
    /// Every substitute with their per-game status.
    pub substitutes: Vec<SubstituteView>,
    /// The ordered available-players list.
    pub available_players: Vec<AvailablePlayerView>,
    /// Available players that appear nowhere in the grid.
    pub unused_players: Vec<String>,
    /// Innings with fewer than eleven field positions filled.
    pub incomplete_innings: u8,
    /// The sit-out tally.
    pub sit_out_counts: Vec<SitOutView>,
    /// The 7x12 grid.
    pub grid: Vec<GridRowView>,
}

/// One row of the read-only spreadsheet: a player and their position per
/// inning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRowView {
    /// The player name.
    pub player_name: String,
    /// The position per inning, indexed by inning 1-7.
    pub positions: Vec<Option<String>>,
}

/// The read-only sheet view for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetView {
    /// The game header.
    pub game: GameHeaderView,
    /// One row per player with a ledger entry or grid cell.
    pub rows: Vec<SheetRowView>,
    /// Innings with fewer than eleven field positions filled.
    pub incomplete_innings: u8,
    /// The sit-out tally.
    pub sit_out_counts: Vec<SitOutView>,
}
