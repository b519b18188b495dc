//! In-process session store

use super::{SessionStore, StoreError};
use crate::core::Session;
use rustc_hash::FxHashMap;

/// Sessions held in a hash map for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: FxHashMap<String, Session>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of active sessions
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, player: &str) -> Result<Option<Session>, StoreError> {
        Ok(self.sessions.get(player).cloned())
    }

    fn set(&mut self, player: &str, session: Session) -> Result<(), StoreError> {
        self.sessions.insert(player.to_string(), session);
        Ok(())
    }

    fn delete(&mut self, player: &str) -> Result<bool, StoreError> {
        Ok(self.sessions.remove(player).is_some())
    }
}
