// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutations for the roster, game, availability, lineup, and operator tables.
//!
//! Every multi-statement mutation runs inside a single Diesel transaction so
//! that no partial application is ever observable.

pub mod availability;
pub mod games;
pub mod lineup;
pub mod operators;
pub mod roster;

pub use availability::{backfill_kicking_orders, set_player_status, swap_kicking_order};
pub use games::{find_or_create_game, update_game};
pub use lineup::{assign_position, clear_position};
pub use operators::{
    create_operator, create_session, delete_expired_sessions, delete_session, disable_operator,
    update_last_login, update_session_activity,
};
pub use roster::{add_player, remove_player};
