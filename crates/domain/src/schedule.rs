// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::{Date, Duration, Weekday};

/// Returns the next occurrence of `game_weekday` strictly after `today`.
///
/// If today already is the game weekday, the date returned is one full
/// week out: the upcoming game rolls forward on game day itself.
///
/// # Arguments
///
/// * `today` - The reference date
/// * `game_weekday` - The weekday games are played on
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if the computed date
/// is outside the representable range.
pub fn next_game_date(today: Date, game_weekday: Weekday) -> Result<Date, DomainError> {
    let today_index: i64 = i64::from(today.weekday().number_days_from_monday());
    let target_index: i64 = i64::from(game_weekday.number_days_from_monday());
    let mut days_ahead: i64 = (target_index - today_index).rem_euclid(7);
    if days_ahead == 0 {
        days_ahead = 7;
    }
    today
        .checked_add(Duration::days(days_ahead))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: String::from("computing the next game date"),
        })
}
