//! Game store trait.
//!
//! Defines the interface for persisting the full game collection.

use super::model::Game;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract store for the full ordered collection of games.
///
/// The collection is always read and written as a whole: there is no
/// partial update, indexing, or streaming. This trait decouples the
/// application's core logic from the specific storage mechanism
/// (e.g., a JSON file on disk).
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Loads the full stored collection.
    ///
    /// A missing or malformed store is a recoverable condition, not an
    /// error: implementations return an empty collection for both. Only
    /// "resource exists but cannot be read" conditions fail.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Game>)`: All stored games, in stored order
    /// - `Err(_)`: The store exists but could not be read
    async fn load_all(&self) -> Result<Vec<Game>>;

    /// Saves the full ordered collection, overwriting prior content.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Collection saved successfully
    /// - `Err(_)`: The collection could not be written; in-memory state is
    ///   untouched by a failed save
    async fn save_all(&self, games: &[Game]) -> Result<()>;
}
