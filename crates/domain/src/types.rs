// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::{validate_player_name, validate_team_name};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The roster pool a player belongs to.
///
/// The two pools are independent uniqueness namespaces. The same name may
/// appear in both pools at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pool {
    /// The recurring main roster.
    MainRoster,
    /// The substitute pool.
    Substitute,
}

impl Pool {
    /// Parses a pool from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownPool` if the string does not match a pool.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "main_roster" => Ok(Self::MainRoster),
            "substitute" => Ok(Self::Substitute),
            _ => Err(DomainError::UnknownPool(s.to_string())),
        }
    }

    /// Returns the string representation of this pool.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MainRoster => "main_roster",
            Self::Substitute => "substitute",
        }
    }
}

impl FromStr for Pool {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated player name.
///
/// Names are trimmed at construction and must be non-empty. Player names
/// identify players everywhere in the system; there is no numeric player
/// handle outside the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerName {
    /// The trimmed name value.
    value: String,
}

impl PlayerName {
    /// Creates a new `PlayerName`, trimming surrounding whitespace.
    ///
    /// # Arguments
    ///
    /// * `value` - The raw name (will be trimmed)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPlayerName` if the trimmed name is empty.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        validate_player_name(value)?;
        Self::new_unchecked(value.trim())
    }

    /// Creates a `PlayerName` from a value already known to be valid,
    /// such as one read back from storage.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPlayerName` if the value is empty.
    pub fn new_unchecked(value: &str) -> Result<Self, DomainError> {
        if value.is_empty() {
            return Err(DomainError::InvalidPlayerName(String::from(
                "Player name cannot be empty",
            )));
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the name value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A player's availability for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    /// The player is available to play.
    In,
    /// The player is not available.
    Out,
}

impl AvailabilityStatus {
    /// Parses a status from its stored string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAvailabilityStatus` if the string is
    /// neither "IN" nor "OUT".
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "IN" => Ok(Self::In),
            "OUT" => Ok(Self::Out),
            _ => Err(DomainError::InvalidAvailabilityStatus(s.to_string())),
        }
    }

    /// Returns the stored string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::In => "IN",
            Self::Out => "OUT",
        }
    }
}

impl FromStr for AvailabilityStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An inning number.
///
/// Innings are domain constants numbered 1 through 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Inning {
    /// The inning number (1-7).
    number: u8,
}

impl Inning {
    /// The number of innings in a game.
    pub const COUNT: u8 = 7;

    /// Creates a new `Inning`.
    ///
    /// # Arguments
    ///
    /// * `number` - The inning number (must be between 1 and 7 inclusive)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInning` if the number is not in the
    /// range 1-7.
    pub const fn new(number: u8) -> Result<Self, DomainError> {
        if number >= 1 && number <= Self::COUNT {
            Ok(Self { number })
        } else {
            Err(DomainError::InvalidInning { inning: number })
        }
    }

    /// Returns the inning number.
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.number
    }

    /// Returns an iterator over all seven innings in order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=Self::COUNT).map(|number| Self { number })
    }
}

impl std::fmt::Display for Inning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number)
    }
}

/// A scheduled game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the game has not been persisted yet.
    game_id: Option<i64>,
    /// The date the game is played.
    game_date: time::Date,
    /// The home team name.
    team_name: String,
    /// The opposing team name, if known.
    opponent_name: Option<String>,
}

impl Game {
    /// The team name applied when a game is created without one.
    pub const DEFAULT_TEAM_NAME: &'static str = "Unsolicited Kick Pics";

    /// Creates a new `Game` without a persisted ID.
    ///
    /// # Arguments
    ///
    /// * `game_date` - The date the game is played
    /// * `team_name` - The home team name
    /// * `opponent_name` - The opposing team name, if known
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTeamName` if the team name is empty.
    pub fn new(
        game_date: time::Date,
        team_name: String,
        opponent_name: Option<String>,
    ) -> Result<Self, DomainError> {
        validate_team_name(&team_name)?;
        Ok(Self {
            game_id: None,
            game_date,
            team_name,
            opponent_name,
        })
    }

    /// Creates a `Game` with an existing persisted ID.
    ///
    /// # Arguments
    ///
    /// * `game_id` - The canonical numeric identifier
    /// * `game_date` - The date the game is played
    /// * `team_name` - The home team name
    /// * `opponent_name` - The opposing team name, if known
    #[must_use]
    pub const fn with_id(
        game_id: i64,
        game_date: time::Date,
        team_name: String,
        opponent_name: Option<String>,
    ) -> Self {
        Self {
            game_id: Some(game_id),
            game_date,
            team_name,
            opponent_name,
        }
    }

    /// Returns the canonical numeric identifier if persisted.
    #[must_use]
    pub const fn game_id(&self) -> Option<i64> {
        self.game_id
    }

    /// Returns the game date.
    #[must_use]
    pub const fn game_date(&self) -> time::Date {
        self.game_date
    }

    /// Returns the home team name.
    #[must_use]
    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    /// Returns the opposing team name if known.
    #[must_use]
    pub fn opponent_name(&self) -> Option<&str> {
        self.opponent_name.as_deref()
    }

    /// Returns the one-line summary used wherever games are listed,
    /// in the form "`date` - `team` vs `opponent`", with "TBD" standing
    /// in for an unknown opponent.
    #[must_use]
    pub fn summary(&self) -> String {
        let opponent: &str = self.opponent_name.as_deref().unwrap_or("TBD");
        format!("{} - {} vs {}", self.game_date, self.team_name, opponent)
    }
}

/// One player's availability ledger entry for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityEntry {
    /// The player this entry is for.
    pub player: PlayerName,
    /// The player's status for the game.
    pub status: AvailabilityStatus,
    /// Whether the player was added from the substitute pool.
    pub is_substitute: bool,
    /// The player's slot in the kicking order, if assigned.
    /// Only IN players carry an order.
    pub kicking_order: Option<u32>,
}

impl AvailabilityEntry {
    /// Creates a new `AvailabilityEntry`.
    ///
    /// # Arguments
    ///
    /// * `player` - The player this entry is for
    /// * `status` - The player's status for the game
    /// * `is_substitute` - Whether the player came from the substitute pool
    /// * `kicking_order` - The player's kicking order slot, if assigned
    #[must_use]
    pub const fn new(
        player: PlayerName,
        status: AvailabilityStatus,
        is_substitute: bool,
        kicking_order: Option<u32>,
    ) -> Self {
        Self {
            player,
            status,
            is_substitute,
            kicking_order,
        }
    }
}
