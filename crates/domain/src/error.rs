// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Pool;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Player name is empty or invalid.
    InvalidPlayerName(String),
    /// Team name is empty or invalid.
    InvalidTeamName(String),
    /// Inning number is outside the 1-7 range.
    InvalidInning {
        /// The invalid inning number.
        inning: u8,
    },
    /// Position string does not name a known position.
    UnknownPosition(String),
    /// Availability status string is not "IN" or "OUT".
    InvalidAvailabilityStatus(String),
    /// Pool string does not name a known roster pool.
    UnknownPool(String),
    /// Player already exists in the pool.
    DuplicatePlayer {
        /// The pool the duplicate was found in.
        pool: Pool,
        /// The duplicate player name.
        name: String,
    },
    /// Player does not exist in any roster pool.
    PlayerNotFound {
        /// The player name that was looked up.
        name: String,
    },
    /// Game does not exist.
    GameNotFound(i64),
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPlayerName(msg) => write!(f, "Invalid player name: {msg}"),
            Self::InvalidTeamName(msg) => write!(f, "Invalid team name: {msg}"),
            Self::InvalidInning { inning } => {
                write!(f, "Invalid inning: {inning}. Must be between 1 and 7")
            }
            Self::UnknownPosition(s) => write!(f, "Unknown position: {s}"),
            Self::InvalidAvailabilityStatus(s) => {
                write!(f, "Invalid availability status: {s}. Must be IN or OUT")
            }
            Self::UnknownPool(s) => write!(f, "Unknown roster pool: {s}"),
            Self::DuplicatePlayer { pool, name } => {
                write!(f, "Player '{name}' already exists in {}", pool.as_str())
            }
            Self::PlayerNotFound { name } => {
                write!(f, "Player '{name}' not found in any roster pool")
            }
            Self::GameNotFound(game_id) => write!(f, "Game {game_id} not found"),
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
