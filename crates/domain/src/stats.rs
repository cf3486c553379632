// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::position::Position;
use crate::types::{Inning, PlayerName};
use std::collections::{HashMap, HashSet};

/// One occupied cell of a game's lineup grid.
///
/// The grid is sparse: an empty cell simply has no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineupCell {
    /// The inning this cell belongs to.
    pub inning: Inning,
    /// The position this cell belongs to.
    pub position: Position,
    /// The player occupying the cell.
    pub player: PlayerName,
}

impl LineupCell {
    /// Creates a new `LineupCell`.
    ///
    /// # Arguments
    ///
    /// * `inning` - The inning this cell belongs to
    /// * `position` - The position this cell belongs to
    /// * `player` - The player occupying the cell
    #[must_use]
    pub const fn new(inning: Inning, position: Position, player: PlayerName) -> Self {
        Self {
            inning,
            position,
            player,
        }
    }
}

/// Counts the innings that are not fully fielded.
///
/// An inning is complete when all eleven field positions are occupied.
/// The "Out" slot never counts toward completeness. An empty grid
/// yields 7; a fully fielded game yields 0.
#[must_use]
pub fn count_incomplete_innings(cells: &[LineupCell]) -> u8 {
    let mut filled: HashMap<u8, HashSet<Position>> = HashMap::new();
    for cell in cells {
        if !cell.position.is_out() {
            filled
                .entry(cell.inning.number())
                .or_default()
                .insert(cell.position);
        }
    }
    let mut incomplete: u8 = 0;
    for inning in Inning::all() {
        let filled_count: usize = filled
            .get(&inning.number())
            .map_or(0, std::collections::HashSet::len);
        if filled_count < Position::FIELD_POSITIONS.len() {
            incomplete += 1;
        }
    }
    incomplete
}

/// Counts, per player, the innings spent in the "Out" slot.
///
/// Only players with at least one "Out" assignment appear. The result is
/// sorted by count descending, then by name ascending.
#[must_use]
pub fn sit_out_counts(cells: &[LineupCell]) -> Vec<(PlayerName, usize)> {
    let mut counts: HashMap<PlayerName, usize> = HashMap::new();
    for cell in cells {
        if cell.position.is_out() {
            *counts.entry(cell.player.clone()).or_insert(0) += 1;
        }
    }
    let mut sorted: Vec<(PlayerName, usize)> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}

/// Returns the set of players assigned anywhere in the grid,
/// the "Out" slot included.
#[must_use]
pub fn grid_occupants(cells: &[LineupCell]) -> HashSet<PlayerName> {
    cells.iter().map(|cell| cell.player.clone()).collect()
}

/// Returns the available players that do not appear anywhere in the grid,
/// preserving the order of `available`.
#[must_use]
pub fn unused_players(available: &[PlayerName], cells: &[LineupCell]) -> Vec<PlayerName> {
    let occupants: HashSet<PlayerName> = grid_occupants(cells);
    available
        .iter()
        .filter(|player| !occupants.contains(player))
        .cloned()
        .collect()
}
