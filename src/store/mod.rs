//! Session storage keyed by player id
//!
//! The engine never touches storage; the command layer loads a session, hands
//! it to the evaluator and writes it back (or deletes it once the game ends).

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::core::Session;
use thiserror::Error;

/// Storage failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Session store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session store is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Get/set/delete access to sessions by player id
///
/// Callers must serialize access to a single player's session.
pub trait SessionStore {
    /// Load the player's session, if one exists
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the backing storage cannot be read.
    fn get(&self, player: &str) -> Result<Option<Session>, StoreError>;

    /// Create or replace the player's session
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the backing storage cannot be written.
    fn set(&mut self, player: &str, session: Session) -> Result<(), StoreError>;

    /// Remove the player's session, returning whether one existed
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the backing storage cannot be updated.
    fn delete(&mut self, player: &str) -> Result<bool, StoreError>;
}
