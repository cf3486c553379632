// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Validates a raw player name.
///
/// # Errors
///
/// Returns `DomainError::InvalidPlayerName` if the name is empty after
/// trimming surrounding whitespace.
pub fn validate_player_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidPlayerName(String::from(
            "Player name cannot be empty",
        )));
    }
    Ok(())
}

/// Validates a team name.
///
/// # Errors
///
/// Returns `DomainError::InvalidTeamName` if the name is empty after
/// trimming surrounding whitespace.
pub fn validate_team_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidTeamName(String::from(
            "Team name cannot be empty",
        )));
    }
    Ok(())
}
