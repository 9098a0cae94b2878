//! Shared application state.

use std::sync::Arc;

use wordchain_game::application::resolver::TurnResolver;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The game engine.
    pub resolver: Arc<TurnResolver>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(resolver: TurnResolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }
}
