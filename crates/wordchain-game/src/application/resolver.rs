//! The turn resolver: the game's state machine.
//!
//! Every entry point is synchronous and in-memory. The per-session mutex is
//! held for the whole resolution; the RNG mutex only while one word is chosen.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info, instrument, warn};
use wordchain_core::clock::Clock;
use wordchain_core::error::DomainError;
use wordchain_core::rng::DeterministicRng;

use crate::application::query_handlers::{self, GameView};
use crate::application::registry::{SessionRegistry, SharedSession, lock_session};
use crate::application::stats::{GameCounters, GameStats};
use crate::domain::corpus::{WordCorpus, normalize};
use crate::domain::outcome::{Outcome, Rejection};
use crate::domain::selector::BotMoveSelector;
use crate::domain::session::{GameSession, SessionId};

/// Resolves `start`, `stop` and human moves against the session registry.
pub struct TurnResolver {
    corpus: Arc<WordCorpus>,
    selector: BotMoveSelector,
    registry: SessionRegistry,
    clock: Arc<dyn Clock + Send + Sync>,
    rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    counters: GameCounters,
}

impl TurnResolver {
    /// Creates a resolver with an empty registry.
    #[must_use]
    pub fn new(
        corpus: Arc<WordCorpus>,
        registry: SessionRegistry,
        clock: Arc<dyn Clock + Send + Sync>,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    ) -> Self {
        Self {
            selector: BotMoveSelector::new(Arc::clone(&corpus)),
            corpus,
            registry,
            clock,
            rng,
            counters: GameCounters::default(),
        }
    }

    /// The vocabulary in use.
    #[must_use]
    pub fn corpus(&self) -> &WordCorpus {
        &self.corpus
    }

    fn lock_rng(&self) -> Result<MutexGuard<'_, dyn DeterministicRng + Send + 'static>, DomainError> {
        self.rng
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))
    }

    /// Opens a fresh game for `session_id`, discarding any previous one.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if a lock is poisoned.
    #[instrument(skip_all, fields(session_id = %session_id))]
    pub fn start(&self, session_id: &SessionId) -> Result<GameView, DomainError> {
        let opening_word = {
            let mut rng = self.lock_rng()?;
            self.corpus.random_word(&mut *rng).to_owned()
        };
        let session = GameSession::new(session_id.clone(), opening_word, self.clock.now());
        let view = GameView::from(&session);

        let previous = self.registry.insert(session)?;
        self.counters.record_started();
        if let Some(previous) = previous {
            self.retire_replaced(&previous);
        }

        info!(
            game_id = %view.game_id,
            opening_word = %view.current_word,
            "game started"
        );
        Ok(view)
    }

    /// Ends a game displaced by `start` so in-flight moves on it are
    /// rejected. The new game is already registered, so a poisoned lock is
    /// logged rather than returned.
    fn retire_replaced(&self, previous: &SharedSession) {
        match lock_session(previous) {
            Ok(mut old) => {
                if old.status().is_active() {
                    old.finish_stopped();
                    self.counters.record_stopped(old.total_words());
                }
                debug!(game_id = %old.game_id(), "previous game discarded");
            }
            Err(e) => warn!(error = %e, "previous game left unretired"),
        }
    }

    /// Validates and applies a human word, then lets the bot reply.
    ///
    /// Rejections are returned as `Outcome::Rejected` and leave the session
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if a lock is poisoned.
    #[instrument(skip_all, fields(session_id = %session_id))]
    pub fn apply_human_word(
        &self,
        session_id: &SessionId,
        raw_input: &str,
    ) -> Result<Outcome, DomainError> {
        let Some(shared) = self.registry.get(session_id)? else {
            debug!("no session for key");
            return Ok(Outcome::rejected(Rejection::NoActiveSession));
        };
        let mut session = lock_session(&shared)?;

        let word = normalize(raw_input);
        if let Err(reason) = session.check_move(&word, &self.corpus) {
            debug!(word = %word, reason = ?reason, "move rejected");
            return Ok(Outcome::rejected(reason));
        }
        // Nothing may change before the last fallible step.
        let mut rng = self.lock_rng()?;
        session.record_human_move(word);
        debug!(word = %session.current_word(), "move accepted");

        let next_letter = session.next_letter();
        let reply = self
            .selector
            .select(next_letter, session.used_words(), &mut *rng);
        drop(rng);

        let Some(bot_word) = reply else {
            session.finish_player_win();
            let total_words = session.total_words();
            let outcome = Outcome::PlayerWin {
                final_scores: session.final_scores(),
                elapsed_seconds: session.elapsed_seconds(self.clock.now()),
                total_words,
            };
            self.counters.record_player_win(total_words);
            info!(
                game_id = %session.game_id(),
                total_words,
                "player won, bot has no word for {next_letter:?}"
            );
            return Ok(outcome);
        };

        session.record_bot_move(bot_word);
        Ok(Outcome::Continue {
            current_word: session.current_word().to_owned(),
            next_letter: session.next_letter(),
            player_score: session.player_score(),
            bot_score: session.bot_score(),
        })
    }

    /// Ends and removes the game for `session_id`.
    ///
    /// A game the human already won is removed too and reports its final
    /// scores.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if a lock is poisoned.
    #[instrument(skip_all, fields(session_id = %session_id))]
    pub fn stop(&self, session_id: &SessionId) -> Result<Outcome, DomainError> {
        let Some(shared) = self.registry.remove(session_id)? else {
            debug!("no session to stop");
            return Ok(Outcome::rejected(Rejection::NoActiveSession));
        };
        let mut session = lock_session(&shared)?;

        if session.status().is_active() {
            session.finish_stopped();
            self.counters.record_stopped(session.total_words());
        }
        info!(game_id = %session.game_id(), status = ?session.status(), "game stopped");

        Ok(Outcome::Stopped {
            final_scores: session.final_scores(),
        })
    }

    /// The current or last finished game for `session_id`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SessionNotFound` if there is none.
    pub fn game(&self, session_id: &SessionId) -> Result<GameView, DomainError> {
        query_handlers::get_game(&self.registry, session_id)
    }

    /// Every game still accepting moves.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if a lock is poisoned.
    pub fn active_games(&self) -> Result<Vec<GameView>, DomainError> {
        query_handlers::list_active_games(&self.registry)
    }

    /// Lifetime counters plus the number of active games.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if a lock is poisoned.
    pub fn stats(&self) -> Result<GameStats, DomainError> {
        let active = self.active_games()?.len();
        Ok(self.counters.snapshot(active))
    }
}
