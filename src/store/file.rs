//! JSON file session store
//!
//! All sessions live in one JSON object keyed by player id. Every write rewrites
//! the whole file through a sibling temp file and a rename.

use super::{SessionStore, StoreError};
use crate::core::Session;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::debug;

type Sessions = BTreeMap<String, Session>;

/// Sessions persisted to a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by `path`; the file is created on first write
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read every stored session
    ///
    /// A missing or blank file reads as empty.
    fn load(&self) -> Result<Sessions, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Sessions::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Sessions::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, sessions: &Sessions) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(sessions)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), sessions = sessions.len(), "session store saved");
        Ok(())
    }
}

impl SessionStore for JsonFileStore {
    fn get(&self, player: &str) -> Result<Option<Session>, StoreError> {
        Ok(self.load()?.remove(player))
    }

    fn set(&mut self, player: &str, session: Session) -> Result<(), StoreError> {
        let mut sessions = self.load()?;
        sessions.insert(player.to_string(), session);
        self.save(&sessions)
    }

    fn delete(&mut self, player: &str) -> Result<bool, StoreError> {
        let mut sessions = self.load()?;
        let existed = sessions.remove(player).is_some();
        if existed {
            self.save(&sessions)?;
        }
        Ok(existed)
    }
}
