//! Lifetime game counters.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use serde::Serialize;

/// Lock-free counters updated as games start and end.
#[derive(Debug, Default)]
pub struct GameCounters {
    started: AtomicU64,
    player_wins: AtomicU64,
    stopped: AtomicU64,
    longest_chain: AtomicUsize,
}

impl GameCounters {
    pub(crate) fn record_started(&self) {
        self.started.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_player_win(&self, total_words: usize) {
        self.player_wins.fetch_add(1, Ordering::Relaxed);
        self.longest_chain.fetch_max(total_words, Ordering::Relaxed);
    }

    pub(crate) fn record_stopped(&self, total_words: usize) {
        self.stopped.fetch_add(1, Ordering::Relaxed);
        self.longest_chain.fetch_max(total_words, Ordering::Relaxed);
    }

    /// Reads the counters. `active_games` comes from the registry.
    #[must_use]
    pub fn snapshot(&self, active_games: usize) -> GameStats {
        GameStats {
            games_started: self.started.load(Ordering::Relaxed),
            player_wins: self.player_wins.load(Ordering::Relaxed),
            games_stopped: self.stopped.load(Ordering::Relaxed),
            longest_chain: self.longest_chain.load(Ordering::Relaxed),
            active_games,
        }
    }
}

/// Read-only statistics view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameStats {
    /// Games opened with `start`.
    pub games_started: u64,
    /// Games the human won.
    pub player_wins: u64,
    /// Active games ended with `stop` or replaced by a new `start`.
    pub games_stopped: u64,
    /// Most words in any game that ended by win, `stop` or replacement.
    pub longest_chain: usize,
    /// Games currently accepting moves.
    pub active_games: usize,
}
