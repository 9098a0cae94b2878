//! The fixed vocabulary that moves are validated against.

use std::collections::{BTreeMap, BTreeSet};

use wordchain_core::error::DomainError;
use wordchain_core::rng::DeterministicRng;

use super::vocabulary::UZBEK_WORDS;

/// Normalizes raw input the way corpus words are stored: trimmed and
/// lower-cased.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// First character of a word, if any.
#[must_use]
pub fn first_letter(word: &str) -> Option<char> {
    word.chars().next()
}

/// Last character of a word, if any.
#[must_use]
pub fn last_letter(word: &str) -> Option<char> {
    word.chars().next_back()
}

/// Immutable, normalized vocabulary indexed by first letter.
#[derive(Debug, Clone)]
pub struct WordCorpus {
    /// Every word, sorted and deduplicated.
    words: Vec<String>,
    /// Words grouped by their first character, sorted within each group.
    by_first_letter: BTreeMap<char, Vec<String>>,
}

impl WordCorpus {
    /// Builds a corpus from raw words. Each word is normalized; blanks are
    /// dropped and duplicates collapse.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyCorpus` if no word survives normalization.
    pub fn new<I, S>(words: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized: BTreeSet<String> = words
            .into_iter()
            .map(|word| normalize(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();
        if normalized.is_empty() {
            return Err(DomainError::EmptyCorpus);
        }

        let mut by_first_letter: BTreeMap<char, Vec<String>> = BTreeMap::new();
        for word in &normalized {
            if let Some(letter) = first_letter(word) {
                by_first_letter.entry(letter).or_default().push(word.clone());
            }
        }

        Ok(Self {
            words: normalized.into_iter().collect(),
            by_first_letter,
        })
    }

    /// Parses a word file: one word per line, blank lines and lines starting
    /// with `#` are skipped.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyCorpus` if the file holds no words.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// The built-in Uzbek vocabulary.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyCorpus` only if the built-in list is empty.
    pub fn builtin() -> Result<Self, DomainError> {
        Self::new(UZBEK_WORDS)
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false` for a constructed corpus.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in sorted order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Membership test after normalizing `word`.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.binary_search(&normalize(word)).is_ok()
    }

    /// Words starting with `letter` (case-insensitive) that are not in
    /// `excluding`. The iterator is lazy and can be cloned to restart it.
    pub fn candidates_starting_with<'a>(
        &'a self,
        letter: char,
        excluding: &'a BTreeSet<String>,
    ) -> impl Iterator<Item = &'a str> + Clone + 'a {
        let letter = letter.to_lowercase().next().unwrap_or(letter);
        self.by_first_letter
            .get(&letter)
            .into_iter()
            .flatten()
            .map(String::as_str)
            .filter(move |word| !excluding.contains(*word))
    }

    /// Picks any word, used to open a new game.
    pub fn random_word(&self, rng: &mut dyn DeterministicRng) -> &str {
        let last = self.words.len().saturating_sub(1);
        let max = u32::try_from(last).unwrap_or(u32::MAX);
        let index = usize::try_from(rng.next_u32_range(0, max)).unwrap_or(last);
        &self.words[index.min(last)]
    }
}
