//! Wordchain API — JSON HTTP adapter over the game engine.
//!
//! Chat transports call these endpoints with an already-parsed session key
//! and text; responses carry typed outcomes for the caller to render.

use axum::Router;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

/// Builds the application router with every route mounted.
pub fn app(state: state::AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/games", routes::games::router())
        .with_state(state)
}
