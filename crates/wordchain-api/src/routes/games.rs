//! Routes for the word-chain game.
//!
//! Each command maps onto one engine entry point. Rejected moves are normal
//! `200` responses carrying an `outcome` of `rejected`.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use wordchain_game::application::query_handlers::GameView;
use wordchain_game::application::stats::GameStats;
use wordchain_game::domain::outcome::Outcome;
use wordchain_game::domain::session::SessionId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /start and POST /stop.
#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    /// The conversation key.
    pub session_id: SessionId,
}

/// Request body for POST /word.
#[derive(Debug, Deserialize)]
pub struct WordRequest {
    /// The conversation key.
    pub session_id: SessionId,
    /// The word as typed by the player.
    pub text: String,
}

/// POST /start
#[instrument(skip(state, request), fields(session_id = %request.session_id))]
async fn start_game(
    State(state): State<AppState>,
    Json(request): Json<SessionRequest>,
) -> Result<Json<GameView>, ApiError> {
    info!(correlation_id = %Uuid::new_v4(), "handling start command");
    let view = state.resolver.start(&request.session_id)?;
    Ok(Json(view))
}

/// POST /stop
#[instrument(skip(state, request), fields(session_id = %request.session_id))]
async fn stop_game(
    State(state): State<AppState>,
    Json(request): Json<SessionRequest>,
) -> Result<Json<Outcome>, ApiError> {
    info!(correlation_id = %Uuid::new_v4(), "handling stop command");
    let outcome = state.resolver.stop(&request.session_id)?;
    Ok(Json(outcome))
}

/// POST /word
#[instrument(skip(state, request), fields(session_id = %request.session_id))]
async fn submit_word(
    State(state): State<AppState>,
    Json(request): Json<WordRequest>,
) -> Result<Json<Outcome>, ApiError> {
    info!(correlation_id = %Uuid::new_v4(), "handling word");
    let outcome = state
        .resolver
        .apply_human_word(&request.session_id, &request.text)?;
    Ok(Json(outcome))
}

/// GET /{session_id}
async fn get_game(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<GameView>, ApiError> {
    let view = state.resolver.game(&SessionId::from(session_id))?;
    Ok(Json(view))
}

/// GET /
async fn list_active_games(
    State(state): State<AppState>,
) -> Result<Json<Vec<GameView>>, ApiError> {
    Ok(Json(state.resolver.active_games()?))
}

/// GET /stats
async fn get_stats(State(state): State<AppState>) -> Result<Json<GameStats>, ApiError> {
    Ok(Json(state.resolver.stats()?))
}

/// Returns the router for the game context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_active_games))
        .route("/start", post(start_game))
        .route("/stop", post(stop_game))
        .route("/word", post(submit_word))
        .route("/stats", get(get_stats))
        .route("/{session_id}", get(get_game))
}
