//! Results of resolving a move or lifecycle command.
//!
//! Outcomes carry data only; turning them into chat text is the caller's job.

use serde::Serialize;

/// Scores at the moment a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinalScores {
    /// Words accepted from the human.
    pub player_score: u32,
    /// Words played by the bot, excluding the opening word.
    pub bot_score: u32,
}

/// Why a move was refused. The session is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum Rejection {
    /// No session exists for the key, or it has already ended.
    NoActiveSession,
    /// The word does not begin with the required letter.
    WrongStartLetter {
        /// Last letter of the current word.
        required_letter: char,
    },
    /// The word was already played in this game.
    WordAlreadyUsed,
    /// The word is not in the corpus.
    UnknownWord,
}

/// Typed result of one `start`/`stop`/word resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The human's word was accepted and the bot replied.
    Continue {
        /// The bot's reply.
        current_word: String,
        /// Letter the human must start the next word with.
        next_letter: char,
        /// Human score after this turn.
        player_score: u32,
        /// Bot score after this turn.
        bot_score: u32,
    },
    /// The bot had no word left; the human wins and the game ends.
    PlayerWin {
        /// Scores at the end of the game.
        final_scores: FinalScores,
        /// Whole seconds since the game started.
        elapsed_seconds: u64,
        /// Number of distinct words played, opening word included.
        total_words: usize,
    },
    /// The game was stopped on request.
    Stopped {
        /// Scores at the time of stopping.
        final_scores: FinalScores,
    },
    /// The move was refused.
    Rejected {
        /// The refusal reason.
        reason: Rejection,
    },
}

impl Outcome {
    /// Shorthand for `Outcome::Rejected { reason }`.
    #[must_use]
    pub fn rejected(reason: Rejection) -> Self {
        Self::Rejected { reason }
    }

    /// Returns `true` for `Rejected` outcomes.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
