//! Game session state and its transitions.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::corpus::{WordCorpus, first_letter, last_letter};
use super::outcome::{FinalScores, Rejection};

/// Key identifying one conversation's game, e.g. a chat id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wraps a raw key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for SessionId {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<i64> for SessionId {
    fn from(chat_id: i64) -> Self {
        Self(chat_id.to_string())
    }
}

/// Side that contributed the most recent word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mover {
    /// The human player.
    Human,
    /// The automated opponent.
    Bot,
}

/// Session state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Accepting moves.
    Active,
    /// The bot ran out of words.
    EndedPlayerWin,
    /// Stopped on request or discarded by a new `start`.
    EndedStopped,
}

impl SessionStatus {
    /// Check if the session accepts moves.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Check if the session can no longer change.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::EndedPlayerWin | Self::EndedStopped)
    }
}

/// One game between a human and the bot.
#[derive(Debug, Clone)]
pub struct GameSession {
    id: SessionId,
    game_id: Uuid,
    current_word: String,
    used_words: BTreeSet<String>,
    player_score: u32,
    bot_score: u32,
    last_mover: Mover,
    status: SessionStatus,
    started_at: DateTime<Utc>,
}

impl GameSession {
    /// Opens a game with the bot's `opening_word` already played.
    #[must_use]
    pub fn new(id: SessionId, opening_word: String, started_at: DateTime<Utc>) -> Self {
        let used_words = BTreeSet::from([opening_word.clone()]);
        Self {
            id,
            game_id: Uuid::new_v4(),
            current_word: opening_word,
            used_words,
            player_score: 0,
            bot_score: 0,
            last_mover: Mover::Bot,
            status: SessionStatus::Active,
            started_at,
        }
    }

    /// The session key.
    #[must_use]
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Identifier of this particular game; changes on every `start`.
    #[must_use]
    pub fn game_id(&self) -> Uuid {
        self.game_id
    }

    /// The last accepted word.
    #[must_use]
    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    /// Every word played so far, opening word included.
    #[must_use]
    pub fn used_words(&self) -> &BTreeSet<String> {
        &self.used_words
    }

    /// Human score.
    #[must_use]
    pub fn player_score(&self) -> u32 {
        self.player_score
    }

    /// Bot score.
    #[must_use]
    pub fn bot_score(&self) -> u32 {
        self.bot_score
    }

    /// Who played `current_word`.
    #[must_use]
    pub fn last_mover(&self) -> Mover {
        self.last_mover
    }

    /// Current state.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// When the game was opened.
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Number of distinct words played.
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.used_words.len()
    }

    /// Letter the next word must start with.
    #[must_use]
    pub fn next_letter(&self) -> char {
        // current_word is always a non-empty corpus word.
        last_letter(&self.current_word).unwrap_or_default()
    }

    /// Scores as they stand.
    #[must_use]
    pub fn final_scores(&self) -> FinalScores {
        FinalScores {
            player_score: self.player_score,
            bot_score: self.bot_score,
        }
    }

    /// Whole seconds between `started_at` and `now`, floored at zero.
    #[must_use]
    pub fn elapsed_seconds(&self, now: DateTime<Utc>) -> u64 {
        u64::try_from((now - self.started_at).num_seconds()).unwrap_or(0)
    }

    /// Validates a normalized human word without changing anything.
    ///
    /// Checks run in order: session active, start letter, repetition,
    /// corpus membership.
    ///
    /// # Errors
    ///
    /// Returns the first `Rejection` that applies.
    pub fn check_move(&self, word: &str, corpus: &WordCorpus) -> Result<(), Rejection> {
        if !self.status.is_active() {
            return Err(Rejection::NoActiveSession);
        }
        let required_letter = self.next_letter();
        if first_letter(word) != Some(required_letter) {
            return Err(Rejection::WrongStartLetter { required_letter });
        }
        if self.used_words.contains(word) {
            return Err(Rejection::WordAlreadyUsed);
        }
        if !corpus.contains(word) {
            return Err(Rejection::UnknownWord);
        }
        Ok(())
    }

    /// Applies an accepted human word.
    pub fn record_human_move(&mut self, word: String) {
        self.play(word, Mover::Human);
        self.player_score += 1;
    }

    /// Applies the bot's reply.
    pub fn record_bot_move(&mut self, word: String) {
        self.play(word, Mover::Bot);
        self.bot_score += 1;
    }

    /// Ends the game in the human's favour.
    pub fn finish_player_win(&mut self) {
        if self.status.is_active() {
            self.status = SessionStatus::EndedPlayerWin;
        }
    }

    /// Ends an active game without a winner. Already-ended games keep their
    /// status.
    pub fn finish_stopped(&mut self) {
        if self.status.is_active() {
            self.status = SessionStatus::EndedStopped;
        }
    }

    fn play(&mut self, word: String, mover: Mover) {
        self.used_words.insert(word.clone());
        self.current_word = word;
        self.last_mover = mover;
    }
}
