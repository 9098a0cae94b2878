//! The bot's move selection.

use std::collections::BTreeSet;
use std::sync::Arc;

use wordchain_core::rng::DeterministicRng;

use super::corpus::WordCorpus;

/// Picks the bot's reply uniformly at random among the unused corpus words
/// starting with the required letter.
#[derive(Debug, Clone)]
pub struct BotMoveSelector {
    corpus: Arc<WordCorpus>,
}

impl BotMoveSelector {
    /// Creates a selector over `corpus`.
    #[must_use]
    pub fn new(corpus: Arc<WordCorpus>) -> Self {
        Self { corpus }
    }

    /// Chooses a word starting with `letter` that is not in `used_words`.
    ///
    /// Returns `None` without touching `rng` when no candidate remains.
    pub fn select(
        &self,
        letter: char,
        used_words: &BTreeSet<String>,
        rng: &mut dyn DeterministicRng,
    ) -> Option<String> {
        let mut candidates = self.corpus.candidates_starting_with(letter, used_words);
        let count = candidates.clone().count();
        if count == 0 {
            return None;
        }

        let last = count - 1;
        let max = u32::try_from(last).unwrap_or(u32::MAX);
        let pick = usize::try_from(rng.next_u32_range(0, max)).unwrap_or(last);
        candidates.nth(pick.min(last)).map(str::to_owned)
    }
}
