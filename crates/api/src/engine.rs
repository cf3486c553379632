// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The lineup engine: authenticated operations over the persistence layer.
//!
//! Every mutating operation authorizes the actor before validating input.
//! Read-only views take no actor and are callable without a session.

use time::Date;

use kickroster_domain::{
    AvailabilityEntry, AvailabilityStatus, DomainError, Game, Inning, LineupCell, PlayerName,
    Pool, Position, count_incomplete_innings, next_game_date, sit_out_counts, unused_players,
};
use kickroster_persistence::SqlitePersistence;

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    AddPlayerRequest, AssignPositionRequest, AvailablePlayerView, ClearPositionRequest,
    EditorView, GameHeaderView, GameSummary, GridCellView, GridRowView, MessageResponse,
    MoveOrderRequest, OpenGameRequest, RemovePlayerRequest, SetStatusRequest, SheetRowView,
    SheetView, SitOutView, SubstituteView, SwapOrderRequest, UpdateGameRequest,
};

/// Parses a `YYYY-MM-DD` date string.
fn parse_game_date(value: &str) -> Result<Date, ApiError> {
    Date::parse(value, time::macros::format_description!("[year]-[month]-[day]")).map_err(|e| {
        translate_domain_error(DomainError::DateParseError {
            date_string: String::from(value),
            error: e.to_string(),
        })
    })
}

fn game_header(game: &Game) -> GameHeaderView {
    GameHeaderView {
        game_id: game.game_id().unwrap_or_default(),
        game_date: game.game_date().to_string(),
        team_name: String::from(game.team_name()),
        opponent_name: game.opponent_name().map(String::from),
        summary: game.summary(),
    }
}

/// Returns the IN entries in kicking order, repairing missing orders first.
fn ordered_entries(
    persistence: &mut SqlitePersistence,
    game_id: i64,
) -> Result<Vec<AvailabilityEntry>, ApiError> {
    let needs_backfill: bool = persistence
        .has_missing_orders(game_id)
        .map_err(translate_persistence_error)?;
    if needs_backfill {
        persistence
            .backfill_kicking_orders(game_id)
            .map_err(translate_persistence_error)?;
    }
    persistence
        .list_in_order(game_id)
        .map_err(translate_persistence_error)
}

// ---------------------------------------------------------------------------
// Roster pools
// ---------------------------------------------------------------------------

/// Adds a player to a roster pool.
///
/// # Errors
///
/// Returns an error if the actor is not a Manager, the pool or name is
/// invalid, or the name already exists in the pool.
pub fn add_player(
    persistence: &mut SqlitePersistence,
    actor: &AuthenticatedActor,
    request: &AddPlayerRequest,
) -> Result<MessageResponse, ApiError> {
    AuthorizationService::authorize_edit_roster(actor)?;

    let pool: Pool = Pool::parse(&request.pool).map_err(translate_domain_error)?;
    let player: PlayerName =
        PlayerName::new(&request.player_name).map_err(translate_domain_error)?;

    persistence
        .add_player(pool, &player)
        .map_err(translate_persistence_error)?;

    Ok(MessageResponse {
        message: format!("Added '{}' to {}", player.value(), pool.as_str()),
    })
}

/// Removes a player from a roster pool.
///
/// # Errors
///
/// Returns an error if the actor is not a Manager, the pool or name is
/// invalid, or the player is not in the pool.
pub fn remove_player(
    persistence: &mut SqlitePersistence,
    actor: &AuthenticatedActor,
    request: &RemovePlayerRequest,
) -> Result<MessageResponse, ApiError> {
    AuthorizationService::authorize_edit_roster(actor)?;

    let pool: Pool = Pool::parse(&request.pool).map_err(translate_domain_error)?;
    let player: PlayerName =
        PlayerName::new(&request.player_name).map_err(translate_domain_error)?;

    persistence
        .remove_player(pool, &player)
        .map_err(translate_persistence_error)?;

    Ok(MessageResponse {
        message: format!("Removed '{}' from {}", player.value(), pool.as_str()),
    })
}

/// Lists a pool's players sorted by name.
///
/// # Errors
///
/// Returns an error if the pool name is invalid or the query fails.
pub fn list_players(
    persistence: &mut SqlitePersistence,
    pool: &str,
) -> Result<Vec<String>, ApiError> {
    let pool: Pool = Pool::parse(pool).map_err(translate_domain_error)?;
    let players: Vec<PlayerName> = persistence
        .list_players(pool)
        .map_err(translate_persistence_error)?;
    Ok(players
        .into_iter()
        .map(|player| String::from(player.value()))
        .collect())
}

/// Returns the pools that contain a name (zero, one, or both).
///
/// A name may legitimately live in both pools at once; callers use this to
/// decide which `is_substitute` flag to send with a status change.
///
/// # Errors
///
/// Returns an error if the name is invalid or the query fails.
pub fn player_pools(
    persistence: &mut SqlitePersistence,
    player_name: &str,
) -> Result<Vec<String>, ApiError> {
    let player: PlayerName = PlayerName::new(player_name).map_err(translate_domain_error)?;
    let pools: Vec<Pool> = persistence
        .player_pools(&player)
        .map_err(translate_persistence_error)?;
    Ok(pools
        .into_iter()
        .map(|pool| String::from(pool.as_str()))
        .collect())
}

// ---------------------------------------------------------------------------
// Games
// ---------------------------------------------------------------------------

/// Finds or creates the game for a date.
///
/// # Errors
///
/// Returns an error if the actor is not a Manager or the date is invalid.
pub fn open_game(
    persistence: &mut SqlitePersistence,
    actor: &AuthenticatedActor,
    request: &OpenGameRequest,
) -> Result<GameSummary, ApiError> {
    AuthorizationService::authorize_edit_game(actor)?;

    let game_date: Date = parse_game_date(&request.game_date)?;
    let game: Game = persistence
        .find_or_create_game(game_date)
        .map_err(translate_persistence_error)?;

    Ok(GameSummary {
        game_id: game.game_id().unwrap_or_default(),
        summary: game.summary(),
    })
}

/// Finds or creates the game on the next occurrence of the configured game
/// weekday. A game day today rolls a full week forward.
///
/// Called by the server to auto-provision the upcoming game; not exposed as
/// an authenticated operation.
///
/// # Errors
///
/// Returns an error if the date arithmetic overflows or the game cannot be
/// stored.
pub fn ensure_upcoming_game(
    persistence: &mut SqlitePersistence,
    today: Date,
    game_weekday: time::Weekday,
) -> Result<GameSummary, ApiError> {
    let game_date: Date =
        next_game_date(today, game_weekday).map_err(translate_domain_error)?;
    let game: Game = persistence
        .find_or_create_game(game_date)
        .map_err(translate_persistence_error)?;

    Ok(GameSummary {
        game_id: game.game_id().unwrap_or_default(),
        summary: game.summary(),
    })
}

/// Edits a game's date, team name, and opponent.
///
/// # Errors
///
/// Returns an error if the actor is not a Manager, a field is invalid, or
/// the game does not exist.
pub fn update_game(
    persistence: &mut SqlitePersistence,
    actor: &AuthenticatedActor,
    request: &UpdateGameRequest,
) -> Result<MessageResponse, ApiError> {
    AuthorizationService::authorize_edit_game(actor)?;

    let game_date: Date = parse_game_date(&request.game_date)?;
    kickroster_domain::validate_team_name(&request.team_name).map_err(translate_domain_error)?;

    persistence
        .update_game(
            request.game_id,
            game_date,
            &request.team_name,
            request.opponent_name.as_deref(),
        )
        .map_err(translate_persistence_error)?;

    Ok(MessageResponse {
        message: format!("Updated game {}", request.game_id),
    })
}

/// Lists all games, most recent first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_games(persistence: &mut SqlitePersistence) -> Result<Vec<GameSummary>, ApiError> {
    let games: Vec<Game> = persistence
        .list_games()
        .map_err(translate_persistence_error)?;
    Ok(games
        .into_iter()
        .map(|game| GameSummary {
            game_id: game.game_id().unwrap_or_default(),
            summary: game.summary(),
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Availability ledger
// ---------------------------------------------------------------------------

/// Marks a player IN or OUT for a game.
///
/// # Errors
///
/// Returns an error if the actor is not a Manager, the status or name is
/// invalid, or the player is in neither roster pool.
pub fn set_player_status(
    persistence: &mut SqlitePersistence,
    actor: &AuthenticatedActor,
    request: &SetStatusRequest,
) -> Result<MessageResponse, ApiError> {
    AuthorizationService::authorize_edit_availability(actor)?;

    let player: PlayerName =
        PlayerName::new(&request.player_name).map_err(translate_domain_error)?;
    let status: AvailabilityStatus =
        AvailabilityStatus::parse(&request.status).map_err(translate_domain_error)?;

    persistence
        .set_player_status(request.game_id, &player, status, request.is_substitute)
        .map_err(translate_persistence_error)?;

    Ok(MessageResponse {
        message: format!("Marked '{}' {}", player.value(), status.as_str()),
    })
}

/// Exchanges two players' kicking orders. Silently does nothing unless both
/// players are IN with orders.
///
/// # Errors
///
/// Returns an error if the actor is not a Manager or a name is invalid.
pub fn swap_kicking_order(
    persistence: &mut SqlitePersistence,
    actor: &AuthenticatedActor,
    request: &SwapOrderRequest,
) -> Result<MessageResponse, ApiError> {
    AuthorizationService::authorize_edit_availability(actor)?;

    let first: PlayerName =
        PlayerName::new(&request.first_player).map_err(translate_domain_error)?;
    let second: PlayerName =
        PlayerName::new(&request.second_player).map_err(translate_domain_error)?;

    persistence
        .swap_kicking_order(request.game_id, &first, &second)
        .map_err(translate_persistence_error)?;

    Ok(MessageResponse {
        message: format!("Swapped '{}' and '{}'", first.value(), second.value()),
    })
}

/// Moves a player one step earlier in the kicking order. A no-op for the
/// first entry or for a player not in the list.
///
/// # Errors
///
/// Returns an error if the actor is not a Manager or the name is invalid.
pub fn move_player_up(
    persistence: &mut SqlitePersistence,
    actor: &AuthenticatedActor,
    request: &MoveOrderRequest,
) -> Result<MessageResponse, ApiError> {
    AuthorizationService::authorize_edit_availability(actor)?;

    let player: PlayerName =
        PlayerName::new(&request.player_name).map_err(translate_domain_error)?;
    let ordered: Vec<AvailabilityEntry> = ordered_entries(persistence, request.game_id)?;

    if let Some(index) = ordered.iter().position(|entry| entry.player == player) {
        if index > 0 {
            persistence
                .swap_kicking_order(request.game_id, &player, &ordered[index - 1].player)
                .map_err(translate_persistence_error)?;
        }
    }

    Ok(MessageResponse {
        message: format!("Moved '{}' up", player.value()),
    })
}

/// Moves a player one step later in the kicking order. A no-op for the last
/// entry or for a player not in the list.
///
/// # Errors
///
/// Returns an error if the actor is not a Manager or the name is invalid.
pub fn move_player_down(
    persistence: &mut SqlitePersistence,
    actor: &AuthenticatedActor,
    request: &MoveOrderRequest,
) -> Result<MessageResponse, ApiError> {
    AuthorizationService::authorize_edit_availability(actor)?;

    let player: PlayerName =
        PlayerName::new(&request.player_name).map_err(translate_domain_error)?;
    let ordered: Vec<AvailabilityEntry> = ordered_entries(persistence, request.game_id)?;

    if let Some(index) = ordered.iter().position(|entry| entry.player == player) {
        if index + 1 < ordered.len() {
            persistence
                .swap_kicking_order(request.game_id, &player, &ordered[index + 1].player)
                .map_err(translate_persistence_error)?;
        }
    }

    Ok(MessageResponse {
        message: format!("Moved '{}' down", player.value()),
    })
}

/// Returns the ordered available-players list, backfilling missing kicking
/// orders first.
///
/// # Errors
///
/// Returns an error if the query or backfill fails.
pub fn available_players(
    persistence: &mut SqlitePersistence,
    game_id: i64,
) -> Result<Vec<AvailablePlayerView>, ApiError> {
    let entries: Vec<AvailabilityEntry> = ordered_entries(persistence, game_id)?;
    let last_index: usize = entries.len().saturating_sub(1);
    Ok(entries
        .iter()
        .enumerate()
        .map(|(index, entry)| AvailablePlayerView {
            player_name: String::from(entry.player.value()),
            kicking_order: entry.kicking_order,
            is_substitute: entry.is_substitute,
            is_first: index == 0,
            is_last: index == last_index,
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Lineup grid
// ---------------------------------------------------------------------------

/// Assigns a player to a grid cell, vacating the player's other cell in the
/// same inning and displacing the cell's previous occupant.
///
/// # Errors
///
/// Returns an error if the actor is not a Manager, the inning, position, or
/// name is invalid, or the game does not exist.
pub fn assign_position(
    persistence: &mut SqlitePersistence,
    actor: &AuthenticatedActor,
    request: &AssignPositionRequest,
) -> Result<MessageResponse, ApiError> {
    AuthorizationService::authorize_edit_lineup(actor)?;

    let inning: Inning = Inning::new(request.inning).map_err(translate_domain_error)?;
    let position: Position = Position::parse(&request.position).map_err(translate_domain_error)?;
    let player: PlayerName =
        PlayerName::new(&request.player_name).map_err(translate_domain_error)?;

    persistence
        .assign_position(request.game_id, inning, position, &player)
        .map_err(translate_persistence_error)?;

    Ok(MessageResponse {
        message: format!(
            "Assigned '{}' to {} in inning {}",
            player.value(),
            position.as_str(),
            inning.number()
        ),
    })
}

/// Clears a grid cell. A no-op when the cell is already empty.
///
/// # Errors
///
/// Returns an error if the actor is not a Manager or the inning or position
/// is invalid.
pub fn clear_position(
    persistence: &mut SqlitePersistence,
    actor: &AuthenticatedActor,
    request: &ClearPositionRequest,
) -> Result<MessageResponse, ApiError> {
    AuthorizationService::authorize_edit_lineup(actor)?;

    let inning: Inning = Inning::new(request.inning).map_err(translate_domain_error)?;
    let position: Position = Position::parse(&request.position).map_err(translate_domain_error)?;

    persistence
        .clear_position(request.game_id, inning, position)
        .map_err(translate_persistence_error)?;

    Ok(MessageResponse {
        message: format!("Cleared {} in inning {}", position.as_str(), inning.number()),
    })
}

// ---------------------------------------------------------------------------
// Derived statistics
// ---------------------------------------------------------------------------

/// Returns the available players that appear nowhere in the grid.
///
/// Ghost occupants (OUT players still in cells) are intentionally left in
/// place; they surface through the grid itself, not this list.
///
/// # Errors
///
/// Returns an error if the queries fail.
pub fn list_unused_players(
    persistence: &mut SqlitePersistence,
    game_id: i64,
) -> Result<Vec<String>, ApiError> {
    let available: Vec<PlayerName> = ordered_entries(persistence, game_id)?
        .into_iter()
        .map(|entry| entry.player)
        .collect();
    let cells: Vec<LineupCell> = persistence
        .list_cells(game_id)
        .map_err(translate_persistence_error)?;
    Ok(unused_players(&available, &cells)
        .into_iter()
        .map(|player| String::from(player.value()))
        .collect())
}

/// Counts the innings with fewer than eleven field positions filled.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn incomplete_innings(
    persistence: &mut SqlitePersistence,
    game_id: i64,
) -> Result<u8, ApiError> {
    let cells: Vec<LineupCell> = persistence
        .list_cells(game_id)
        .map_err(translate_persistence_error)?;
    Ok(count_incomplete_innings(&cells))
}

/// Returns the per-player sit-out tally, most innings out first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn sit_out_tally(
    persistence: &mut SqlitePersistence,
    game_id: i64,
) -> Result<Vec<SitOutView>, ApiError> {
    let cells: Vec<LineupCell> = persistence
        .list_cells(game_id)
        .map_err(translate_persistence_error)?;
    Ok(sit_out_counts(&cells)
        .into_iter()
        .map(|(player, innings_out)| SitOutView {
            player_name: String::from(player.value()),
            innings_out,
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// Builds the manager's lineup editor view for one game.
///
/// # Errors
///
/// Returns an error if the game does not exist or any query fails.
pub fn editor_view(
    persistence: &mut SqlitePersistence,
    game_id: i64,
) -> Result<EditorView, ApiError> {
    let game: Game = persistence
        .get_game(game_id)
        .map_err(translate_persistence_error)?;

    let main_roster: Vec<PlayerName> = persistence
        .list_players(Pool::MainRoster)
        .map_err(translate_persistence_error)?;
    let substitutes: Vec<PlayerName> = persistence
        .list_players(Pool::Substitute)
        .map_err(translate_persistence_error)?;
    let ledger: Vec<AvailabilityEntry> = persistence
        .list_availability(game_id)
        .map_err(translate_persistence_error)?;

    let status_of = |player: &PlayerName, substitute: bool| -> Option<AvailabilityStatus> {
        ledger
            .iter()
            .find(|entry| entry.player == *player && entry.is_substitute == substitute)
            .map(|entry| entry.status)
    };

    let mut main_roster_in: Vec<String> = Vec::new();
    let mut main_roster_out: Vec<String> = Vec::new();
    let mut main_roster_unmarked: Vec<String> = Vec::new();
    for player in &main_roster {
        match status_of(player, false) {
            Some(AvailabilityStatus::In) => main_roster_in.push(String::from(player.value())),
            Some(AvailabilityStatus::Out) => main_roster_out.push(String::from(player.value())),
            None => main_roster_unmarked.push(String::from(player.value())),
        }
    }

    let substitute_views: Vec<SubstituteView> = substitutes
        .iter()
        .map(|player| SubstituteView {
            player_name: String::from(player.value()),
            status: status_of(player, true).map(|status| String::from(status.as_str())),
        })
        .collect();

    let available: Vec<AvailablePlayerView> = available_players(persistence, game_id)?;
    let available_names: Vec<PlayerName> = ordered_entries(persistence, game_id)?
        .into_iter()
        .map(|entry| entry.player)
        .collect();

    let cells: Vec<LineupCell> = persistence
        .list_cells(game_id)
        .map_err(translate_persistence_error)?;

    let unused: Vec<String> = unused_players(&available_names, &cells)
        .into_iter()
        .map(|player| String::from(player.value()))
        .collect();

    let sit_outs: Vec<SitOutView> = sit_out_counts(&cells)
        .into_iter()
        .map(|(player, innings_out)| SitOutView {
            player_name: String::from(player.value()),
            innings_out,
        })
        .collect();

    let grid: Vec<GridRowView> = Inning::all()
        .map(|inning| GridRowView {
            inning: inning.number(),
            cells: Position::ALL
                .iter()
                .map(|position| {
                    let occupant: Option<&PlayerName> = cells
                        .iter()
                        .find(|cell| cell.inning == inning && cell.position == *position)
                        .map(|cell| &cell.player);
                    grid_cell_view(*position, occupant, &available_names)
                })
                .collect(),
        })
        .collect();

    Ok(EditorView {
        game: game_header(&game),
        main_roster_in,
        main_roster_out,
        main_roster_unmarked,
        substitutes: substitute_views,
        available_players: available,
        unused_players: unused,
        incomplete_innings: count_incomplete_innings(&cells),
        sit_out_counts: sit_outs,
        grid,
    })
}

/// Builds one editor grid cell with its dropdown option set: blank, every
/// available player, and the current occupant when they are stale.
fn grid_cell_view(
    position: Position,
    occupant: Option<&PlayerName>,
    available: &[PlayerName],
) -> GridCellView {
    let mut options: Vec<String> = Vec::with_capacity(available.len() + 2);
    options.push(String::new());
    for player in available {
        options.push(String::from(player.value()));
    }
    if let Some(player) = occupant {
        if !available.contains(player) {
            options.push(String::from(player.value()));
        }
    }
    GridCellView {
        position: String::from(position.as_str()),
        occupant: occupant.map(|player| String::from(player.value())),
        options,
    }
}

/// Builds the read-only spreadsheet view for one game.
///
/// Rows cover the available players in kicking order, followed by any other
/// grid occupants sorted by name.
///
/// # Errors
///
/// Returns an error if the game does not exist or any query fails.
pub fn sheet_view(
    persistence: &mut SqlitePersistence,
    game_id: i64,
) -> Result<SheetView, ApiError> {
    let game: Game = persistence
        .get_game(game_id)
        .map_err(translate_persistence_error)?;

    let available_names: Vec<PlayerName> = ordered_entries(persistence, game_id)?
        .into_iter()
        .map(|entry| entry.player)
        .collect();
    let cells: Vec<LineupCell> = persistence
        .list_cells(game_id)
        .map_err(translate_persistence_error)?;

    let mut row_players: Vec<PlayerName> = available_names;
    let mut extras: Vec<PlayerName> = kickroster_domain::grid_occupants(&cells)
        .into_iter()
        .filter(|player| !row_players.contains(player))
        .collect();
    extras.sort();
    row_players.extend(extras);

    let rows: Vec<SheetRowView> = row_players
        .iter()
        .map(|player| SheetRowView {
            player_name: String::from(player.value()),
            positions: Inning::all()
                .map(|inning| {
                    cells
                        .iter()
                        .find(|cell| cell.inning == inning && cell.player == *player)
                        .map(|cell| String::from(cell.position.as_str()))
                })
                .collect(),
        })
        .collect();

    let sit_outs: Vec<SitOutView> = sit_out_counts(&cells)
        .into_iter()
        .map(|(player, innings_out)| SitOutView {
            player_name: String::from(player.value()),
            innings_out,
        })
        .collect();

    Ok(SheetView {
        game: game_header(&game),
        rows,
        incomplete_innings: count_incomplete_innings(&cells),
        sit_out_counts: sit_outs,
    })
}
