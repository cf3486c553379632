// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use kickroster_api::{ApiError, AuthError, AuthenticationService, engine};
use kickroster_api::request_response::{
    AddPlayerRequest, AssignPositionRequest, AvailablePlayerView, ClearPositionRequest,
    EditorView, FirstManagerRequest, GameSummary, LoginRequest, LoginResponse, MessageResponse,
    MoveOrderRequest, OpenGameRequest, RemovePlayerRequest, SetStatusRequest, SheetView,
    SwapOrderRequest, UpdateGameRequest,
};
use kickroster_persistence::SqlitePersistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::{OffsetDateTime, Weekday};
use tokio::sync::Mutex;
use tracing::info;

mod session;

use session::{SessionError, SessionOperator, bearer_token};

/// Kickroster Server - HTTP server for the kickball roster and lineup manager
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Weekday the team plays on, used to auto-provision the upcoming game
    #[arg(short, long, default_value = "thursday")]
    game_weekday: String,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for roster, game, and lineup data.
    persistence: Arc<Mutex<SqlitePersistence>>,
}

/// Query parameters for listing players.
#[derive(Debug, Deserialize)]
struct PoolQuery {
    /// The pool name (`main_roster` or `substitute`).
    pool: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::ValidationFailed { .. } | ApiError::PasswordPolicyViolation { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::AlreadyExists { .. } => StatusCode::CONFLICT,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<AuthError> for HttpError {
    fn from(err: AuthError) -> Self {
        let status: StatusCode = match err {
            AuthError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            AuthError::Unauthorized { .. } => StatusCode::FORBIDDEN,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<SessionError> for HttpError {
    fn from(err: SessionError) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: err.message(),
        }
    }
}

/// Handler for POST `/setup` endpoint.
///
/// Creates the first manager account. Only permitted while no operator
/// accounts exist, so it needs no session.
async fn handle_setup(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<FirstManagerRequest>,
) -> Result<Json<MessageResponse>, HttpError> {
    info!(login_name = %req.login_name, "Handling setup request");

    let mut persistence = app_state.persistence.lock().await;
    let operator_id: i64 = AuthenticationService::create_first_manager(
        &mut persistence,
        &req.login_name,
        &req.display_name,
        &req.password,
        &req.confirmation,
    )?;
    drop(persistence);

    info!(operator_id = operator_id, "Created first manager account");

    Ok(Json(MessageResponse {
        message: format!("Created manager account for {}", req.display_name),
    }))
}

/// Handler for POST `/login` endpoint.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(login_name = %req.login_name, "Handling login request");

    let mut persistence = app_state.persistence.lock().await;
    let (session_token, _actor, operator) =
        AuthenticationService::login(&mut persistence, &req.login_name, &req.password)?;
    drop(persistence);

    info!(login_name = %operator.login_name, "Login succeeded");

    Ok(Json(LoginResponse {
        session_token,
        display_name: operator.display_name,
        role: operator.role,
    }))
}

/// Handler for POST `/logout` endpoint.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>, HttpError> {
    let token: &str = bearer_token(&headers)?;

    let mut persistence = app_state.persistence.lock().await;
    AuthenticationService::logout(&mut persistence, token)?;
    drop(persistence);

    Ok(Json(MessageResponse {
        message: String::from("Logged out"),
    }))
}

/// Handler for GET `/players` endpoint.
///
/// Lists the players in one pool, sorted by name.
async fn handle_list_players(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<PoolQuery>,
) -> Result<Json<Vec<String>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let players: Vec<String> = engine::list_players(&mut persistence, &query.pool)?;
    drop(persistence);

    Ok(Json(players))
}

/// Handler for GET `/players/{player_name}/pools` endpoint.
///
/// Reports which pools contain a name (zero, one, or both), so a caller can
/// pick the right `is_substitute` flag for a status change.
async fn handle_player_pools(
    AxumState(app_state): AxumState<AppState>,
    Path(player_name): Path<String>,
) -> Result<Json<Vec<String>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let pools: Vec<String> = engine::player_pools(&mut persistence, &player_name)?;
    drop(persistence);

    Ok(Json(pools))
}

/// Handler for POST `/players` endpoint.
async fn handle_add_player(
    SessionOperator(actor, _): SessionOperator,
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AddPlayerRequest>,
) -> Result<Json<MessageResponse>, HttpError> {
    info!(actor_id = %actor.id, pool = %req.pool, player = %req.player_name, "Handling add_player request");

    let mut persistence = app_state.persistence.lock().await;
    let response: MessageResponse = engine::add_player(&mut persistence, &actor, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/players/remove` endpoint.
async fn handle_remove_player(
    SessionOperator(actor, _): SessionOperator,
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RemovePlayerRequest>,
) -> Result<Json<MessageResponse>, HttpError> {
    info!(actor_id = %actor.id, pool = %req.pool, player = %req.player_name, "Handling remove_player request");

    let mut persistence = app_state.persistence.lock().await;
    let response: MessageResponse = engine::remove_player(&mut persistence, &actor, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/games` endpoint.
///
/// Lists all games, most recent first.
async fn handle_list_games(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<GameSummary>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let games: Vec<GameSummary> = engine::list_games(&mut persistence)?;
    drop(persistence);

    Ok(Json(games))
}

/// Handler for POST `/games` endpoint.
///
/// Finds or creates the game for a date.
async fn handle_open_game(
    SessionOperator(actor, _): SessionOperator,
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<OpenGameRequest>,
) -> Result<Json<GameSummary>, HttpError> {
    info!(actor_id = %actor.id, game_date = %req.game_date, "Handling open_game request");

    let mut persistence = app_state.persistence.lock().await;
    let summary: GameSummary = engine::open_game(&mut persistence, &actor, &req)?;
    drop(persistence);

    Ok(Json(summary))
}

/// Handler for POST `/games/update` endpoint.
async fn handle_update_game(
    SessionOperator(actor, _): SessionOperator,
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<UpdateGameRequest>,
) -> Result<Json<MessageResponse>, HttpError> {
    info!(actor_id = %actor.id, game_id = req.game_id, "Handling update_game request");

    let mut persistence = app_state.persistence.lock().await;
    let response: MessageResponse = engine::update_game(&mut persistence, &actor, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/availability` endpoint.
///
/// Marks a player IN or OUT for a game.
async fn handle_set_status(
    SessionOperator(actor, _): SessionOperator,
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SetStatusRequest>,
) -> Result<Json<MessageResponse>, HttpError> {
    info!(
        actor_id = %actor.id,
        game_id = req.game_id,
        player = %req.player_name,
        status = %req.status,
        "Handling set_status request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: MessageResponse = engine::set_player_status(&mut persistence, &actor, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/availability/swap` endpoint.
async fn handle_swap_order(
    SessionOperator(actor, _): SessionOperator,
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SwapOrderRequest>,
) -> Result<Json<MessageResponse>, HttpError> {
    info!(actor_id = %actor.id, game_id = req.game_id, "Handling swap_order request");

    let mut persistence = app_state.persistence.lock().await;
    let response: MessageResponse = engine::swap_kicking_order(&mut persistence, &actor, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/availability/move_up` endpoint.
async fn handle_move_up(
    SessionOperator(actor, _): SessionOperator,
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<MoveOrderRequest>,
) -> Result<Json<MessageResponse>, HttpError> {
    info!(actor_id = %actor.id, game_id = req.game_id, player = %req.player_name, "Handling move_up request");

    let mut persistence = app_state.persistence.lock().await;
    let response: MessageResponse = engine::move_player_up(&mut persistence, &actor, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/availability/move_down` endpoint.
async fn handle_move_down(
    SessionOperator(actor, _): SessionOperator,
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<MoveOrderRequest>,
) -> Result<Json<MessageResponse>, HttpError> {
    info!(actor_id = %actor.id, game_id = req.game_id, player = %req.player_name, "Handling move_down request");

    let mut persistence = app_state.persistence.lock().await;
    let response: MessageResponse = engine::move_player_down(&mut persistence, &actor, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/games/{game_id}/available` endpoint.
///
/// Returns the ordered available-players list for a game.
async fn handle_available_players(
    AxumState(app_state): AxumState<AppState>,
    Path(game_id): Path<i64>,
) -> Result<Json<Vec<AvailablePlayerView>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let available: Vec<AvailablePlayerView> =
        engine::available_players(&mut persistence, game_id)?;
    drop(persistence);

    Ok(Json(available))
}

/// Handler for POST `/lineup/assign` endpoint.
async fn handle_assign_position(
    SessionOperator(actor, _): SessionOperator,
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AssignPositionRequest>,
) -> Result<Json<MessageResponse>, HttpError> {
    info!(
        actor_id = %actor.id,
        game_id = req.game_id,
        inning = req.inning,
        position = %req.position,
        player = %req.player_name,
        "Handling assign_position request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: MessageResponse = engine::assign_position(&mut persistence, &actor, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/lineup/clear` endpoint.
async fn handle_clear_position(
    SessionOperator(actor, _): SessionOperator,
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ClearPositionRequest>,
) -> Result<Json<MessageResponse>, HttpError> {
    info!(
        actor_id = %actor.id,
        game_id = req.game_id,
        inning = req.inning,
        position = %req.position,
        "Handling clear_position request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: MessageResponse = engine::clear_position(&mut persistence, &actor, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/games/{game_id}/editor` endpoint.
///
/// Returns the full editor view model for a game.
async fn handle_editor_view(
    AxumState(app_state): AxumState<AppState>,
    Path(game_id): Path<i64>,
) -> Result<Json<EditorView>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let view: EditorView = engine::editor_view(&mut persistence, game_id)?;
    drop(persistence);

    Ok(Json(view))
}

/// Handler for GET `/games/{game_id}/sheet` endpoint.
///
/// Returns the read-only spreadsheet view for a game.
async fn handle_sheet_view(
    AxumState(app_state): AxumState<AppState>,
    Path(game_id): Path<i64>,
) -> Result<Json<SheetView>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let view: SheetView = engine::sheet_view(&mut persistence, game_id)?;
    drop(persistence);

    Ok(Json(view))
}

/// Parses a weekday name from the command line.
fn parse_weekday(value: &str) -> Result<Weekday, String> {
    match value.to_lowercase().as_str() {
        "monday" => Ok(Weekday::Monday),
        "tuesday" => Ok(Weekday::Tuesday),
        "wednesday" => Ok(Weekday::Wednesday),
        "thursday" => Ok(Weekday::Thursday),
        "friday" => Ok(Weekday::Friday),
        "saturday" => Ok(Weekday::Saturday),
        "sunday" => Ok(Weekday::Sunday),
        _ => Err(format!("Invalid weekday: '{value}'")),
    }
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/setup", post(handle_setup))
        .route("/login", post(handle_login))
        .route("/logout", post(handle_logout))
        .route("/players", get(handle_list_players))
        .route("/players", post(handle_add_player))
        .route("/players/remove", post(handle_remove_player))
        .route("/players/{player_name}/pools", get(handle_player_pools))
        .route("/games", get(handle_list_games))
        .route("/games", post(handle_open_game))
        .route("/games/update", post(handle_update_game))
        .route("/games/{game_id}/available", get(handle_available_players))
        .route("/games/{game_id}/editor", get(handle_editor_view))
        .route("/games/{game_id}/sheet", get(handle_sheet_view))
        .route("/availability", post(handle_set_status))
        .route("/availability/swap", post(handle_swap_order))
        .route("/availability/move_up", post(handle_move_up))
        .route("/availability/move_down", post(handle_move_down))
        .route("/lineup/assign", post(handle_assign_position))
        .route("/lineup/clear", post(handle_clear_position))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Kickroster Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let mut persistence: SqlitePersistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqlitePersistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqlitePersistence::new_in_memory()?
    };

    // Auto-provision the upcoming game for the configured game day
    let game_weekday: Weekday = parse_weekday(&args.game_weekday)?;
    let today = OffsetDateTime::now_utc().date();
    let upcoming: GameSummary =
        engine::ensure_upcoming_game(&mut persistence, today, game_weekday)
            .map_err(|e| e.to_string())?;
    info!(game = %upcoming.summary, "Upcoming game is ready");

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
