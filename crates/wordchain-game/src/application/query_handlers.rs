//! Query handlers for the game context.
//!
//! Queries copy session state into read-only view DTOs; no handle to a
//! session outlives the call.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;
use wordchain_core::error::DomainError;

use crate::application::registry::{SessionRegistry, lock_session};
use crate::domain::session::{GameSession, Mover, SessionId, SessionStatus};

/// Read-only view of a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// The session key.
    pub session_id: SessionId,
    /// The game identifier.
    pub game_id: Uuid,
    /// The last accepted word.
    pub current_word: String,
    /// Letter the next word must start with.
    pub next_letter: char,
    /// Every word played, sorted.
    pub used_words: Vec<String>,
    /// Human score.
    pub player_score: u32,
    /// Bot score.
    pub bot_score: u32,
    /// Who played `current_word`.
    pub last_mover: Mover,
    /// Current state.
    pub status: SessionStatus,
    /// When the game was opened.
    pub started_at: DateTime<Utc>,
    /// Number of distinct words played.
    pub total_words: usize,
}

impl From<&GameSession> for GameView {
    fn from(session: &GameSession) -> Self {
        Self {
            session_id: session.id().clone(),
            game_id: session.game_id(),
            current_word: session.current_word().to_owned(),
            next_letter: session.next_letter(),
            used_words: session.used_words().iter().cloned().collect(),
            player_score: session.player_score(),
            bot_score: session.bot_score(),
            last_mover: session.last_mover(),
            status: session.status(),
            started_at: session.started_at(),
            total_words: session.total_words(),
        }
    }
}

/// Retrieves the current or last finished game for `session_id`.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if the registry has no entry.
/// Returns `DomainError::Infrastructure` if a lock is poisoned.
pub fn get_game(registry: &SessionRegistry, session_id: &SessionId) -> Result<GameView, DomainError> {
    let shared = registry
        .get(session_id)?
        .ok_or_else(|| DomainError::SessionNotFound(session_id.to_string()))?;
    let session = lock_session(&shared)?;
    Ok(GameView::from(&*session))
}

/// Lists every game still accepting moves, oldest first.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if a lock is poisoned.
pub fn list_active_games(registry: &SessionRegistry) -> Result<Vec<GameView>, DomainError> {
    let mut views = Vec::new();
    for shared in registry.sessions()? {
        let session = lock_session(&shared)?;
        if session.status().is_active() {
            views.push(GameView::from(&*session));
        }
    }
    views.sort_by(|a, b| {
        a.started_at
            .cmp(&b.started_at)
            .then_with(|| a.session_id.cmp(&b.session_id))
    });
    Ok(views)
}
