//! Concurrent session registry.
//!
//! Sessions are spread over independently locked shards. A shard lock is held
//! only to look up, insert or remove an entry; moves lock the session's own
//! mutex, so unrelated sessions never wait on each other and operations on
//! one key are serialized.

use std::collections::HashMap;
use std::hash::{BuildHasher, RandomState};
use std::sync::{Arc, Mutex, MutexGuard, RwLock};

use wordchain_core::error::DomainError;

use crate::domain::session::{GameSession, SessionId};

/// Default number of registry shards.
pub const DEFAULT_SHARD_COUNT: usize = 16;

/// A session behind its per-key lock.
pub type SharedSession = Arc<Mutex<GameSession>>;

type Shard = RwLock<HashMap<SessionId, SharedSession>>;

/// Owns every session, keyed by session id.
#[derive(Debug)]
pub struct SessionRegistry {
    shards: Box<[Shard]>,
    hasher: RandomState,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRegistry {
    /// Creates a registry with [`DEFAULT_SHARD_COUNT`] shards.
    #[must_use]
    pub fn new() -> Self {
        Self::with_shards(DEFAULT_SHARD_COUNT)
    }

    /// Creates a registry with `count` shards (at least one).
    #[must_use]
    pub fn with_shards(count: usize) -> Self {
        let shards = (0..count.max(1))
            .map(|_| RwLock::new(HashMap::new()))
            .collect();
        Self {
            shards,
            hasher: RandomState::new(),
        }
    }

    /// Number of shards.
    #[must_use]
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    fn shard(&self, id: &SessionId) -> &Shard {
        let len = self.shards.len();
        let hash = self.hasher.hash_one(id);
        let index = usize::try_from(hash % u64::try_from(len).unwrap_or(1)).unwrap_or(0);
        &self.shards[index.min(len - 1)]
    }

    /// Stores `session` under its id, returning the session it replaced.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the shard lock is poisoned.
    pub fn insert(&self, session: GameSession) -> Result<Option<SharedSession>, DomainError> {
        let id = session.id().clone();
        let mut shard = self
            .shard(&id)
            .write()
            .map_err(|e| DomainError::Infrastructure(format!("registry shard poisoned: {e}")))?;
        Ok(shard.insert(id, Arc::new(Mutex::new(session))))
    }

    /// Looks up the session for `id`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the shard lock is poisoned.
    pub fn get(&self, id: &SessionId) -> Result<Option<SharedSession>, DomainError> {
        let shard = self
            .shard(id)
            .read()
            .map_err(|e| DomainError::Infrastructure(format!("registry shard poisoned: {e}")))?;
        Ok(shard.get(id).cloned())
    }

    /// Removes and returns the session for `id`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the shard lock is poisoned.
    pub fn remove(&self, id: &SessionId) -> Result<Option<SharedSession>, DomainError> {
        let mut shard = self
            .shard(id)
            .write()
            .map_err(|e| DomainError::Infrastructure(format!("registry shard poisoned: {e}")))?;
        Ok(shard.remove(id))
    }

    /// Handles to every registered session. Shards are read one at a time, so
    /// the result is not an atomic snapshot across shards.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if a shard lock is poisoned.
    pub fn sessions(&self) -> Result<Vec<SharedSession>, DomainError> {
        let mut all = Vec::new();
        for shard in &self.shards {
            let shard = shard
                .read()
                .map_err(|e| DomainError::Infrastructure(format!("registry shard poisoned: {e}")))?;
            all.extend(shard.values().cloned());
        }
        Ok(all)
    }

    /// Number of registered sessions, ended-but-retained ones included.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if a shard lock is poisoned.
    pub fn len(&self) -> Result<usize, DomainError> {
        let mut total = 0;
        for shard in &self.shards {
            total += shard
                .read()
                .map_err(|e| DomainError::Infrastructure(format!("registry shard poisoned: {e}")))?
                .len();
        }
        Ok(total)
    }

    /// Returns `true` when no session is registered.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if a shard lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.len()? == 0)
    }
}

/// Locks a session for the duration of one operation.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the session mutex is poisoned.
pub fn lock_session(session: &SharedSession) -> Result<MutexGuard<'_, GameSession>, DomainError> {
    session
        .lock()
        .map_err(|e| DomainError::Infrastructure(format!("session mutex poisoned: {e}")))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};

    use super::*;

    fn session(key: &str, opening: &str) -> GameSession {
        let started = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
        GameSession::new(SessionId::from(key), opening.to_owned(), started)
    }

    #[test]
    fn test_insert_then_get_returns_same_handle() {
        // Arrange
        let registry = SessionRegistry::new();

        // Act
        let replaced = registry.insert(session("a", "kitob")).unwrap();
        let first = registry.get(&SessionId::from("a")).unwrap().unwrap();
        let second = registry.get(&SessionId::from("a")).unwrap().unwrap();

        // Assert
        assert!(replaced.is_none());
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(lock_session(&first).unwrap().current_word(), "kitob");
    }

    #[test]
    fn test_insert_replaces_existing_session() {
        let registry = SessionRegistry::new();
        registry.insert(session("a", "kitob")).unwrap();

        let replaced = registry.insert(session("a", "olma")).unwrap().unwrap();

        assert_eq!(lock_session(&replaced).unwrap().current_word(), "kitob");
        let current = registry.get(&SessionId::from("a")).unwrap().unwrap();
        assert_eq!(lock_session(&current).unwrap().current_word(), "olma");
        assert_eq!(registry.len().unwrap(), 1);
    }

    #[test]
    fn test_remove_returns_session_once() {
        let registry = SessionRegistry::new();
        registry.insert(session("a", "kitob")).unwrap();
        let id = SessionId::from("a");

        assert!(registry.remove(&id).unwrap().is_some());
        assert!(registry.remove(&id).unwrap().is_none());
        assert!(registry.get(&id).unwrap().is_none());
        assert!(registry.is_empty().unwrap());
    }

    #[test]
    fn test_sessions_spans_all_shards() {
        let registry = SessionRegistry::with_shards(4);
        for key in 0..40 {
            registry.insert(session(&key.to_string(), "kitob")).unwrap();
        }

        assert_eq!(registry.sessions().unwrap().len(), 40);
        assert_eq!(registry.len().unwrap(), 40);
    }

    #[test]
    fn test_zero_shards_is_clamped_to_one() {
        let registry = SessionRegistry::with_shards(0);
        assert_eq!(registry.shard_count(), 1);
        registry.insert(session("a", "kitob")).unwrap();
        assert!(registry.get(&SessionId::from("a")).unwrap().is_some());
    }
}
