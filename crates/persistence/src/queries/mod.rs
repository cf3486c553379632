// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries over the roster, game, availability, lineup, and
//! operator tables.

pub mod availability;
pub mod games;
pub mod lineup;
pub mod operators;
pub mod roster;

pub use availability::{has_missing_orders, list_availability, list_in_order};
pub use games::{get_game, list_games};
pub use lineup::{get_cell, list_cells, player_position};
pub use operators::{
    count_operators, get_operator_by_id, get_operator_by_login, get_session_by_token,
    verify_password,
};
pub use roster::{list_players, player_pools};
