// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    main_roster (player_id) {
        player_id -> BigInt,
        player_name -> Text,
        created_at -> Text,
    }
}

diesel::table! {
    substitutes (player_id) {
        player_id -> BigInt,
        player_name -> Text,
        created_at -> Text,
    }
}

diesel::table! {
    games (game_id) {
        game_id -> BigInt,
        game_date -> Text,
        team_name -> Text,
        opponent_name -> Nullable<Text>,
        created_at -> Text,
        updated_at -> Text,
    }
}

diesel::table! {
    game_availability (availability_id) {
        availability_id -> BigInt,
        game_id -> BigInt,
        player_name -> Text,
        status -> Text,
        is_substitute -> Integer,
        kicking_order -> Nullable<Integer>,
    }
}

diesel::table! {
    lineup_cells (cell_id) {
        cell_id -> BigInt,
        game_id -> BigInt,
        inning -> Integer,
        position -> Text,
        player_name -> Text,
    }
}

diesel::table! {
    operators (operator_id) {
        operator_id -> BigInt,
        login_name -> Text,
        display_name -> Text,
        password_hash -> Text,
        role -> Text,
        is_disabled -> Integer,
        created_at -> Text,
        disabled_at -> Nullable<Text>,
        last_login_at -> Nullable<Text>,
    }
}

diesel::table! {
    sessions (session_id) {
        session_id -> BigInt,
        session_token -> Text,
        operator_id -> BigInt,
        created_at -> Text,
        last_activity_at -> Text,
        expires_at -> Text,
    }
}

diesel::joinable!(game_availability -> games (game_id));
diesel::joinable!(lineup_cells -> games (game_id));
diesel::joinable!(sessions -> operators (operator_id));

diesel::allow_tables_to_appear_in_same_query!(
    main_roster,
    substitutes,
    games,
    game_availability,
    lineup_cells,
    operators,
    sessions,
);
