//! Game lifecycle flows.
//!
//! The manager composes the load/modify/save sequences the presentation
//! layer invokes. The "current game" is always a value owned by the caller
//! and passed in explicitly; the manager holds no game state of its own.

use super::collection;
use super::model::Game;
use super::repository::GameStore;
use crate::error::Result;
use chrono::Local;
use std::sync::Arc;

/// Name given to newly started games.
pub const DEFAULT_GAME_NAME: &str = "New Game";

/// Suffix pattern appended when the default name is already taken.
const NAME_SUFFIX_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Manages game lifecycle against a storage backend.
///
/// `GameManager` is responsible for:
/// - Listing previously stored games for the home screen
/// - Starting new games with a collision-avoided default name
/// - Persisting the caller's current game back into the collection
/// - Deleting games by name
pub struct GameManager {
    /// Persistent storage backend for the game collection
    store: Arc<dyn GameStore>,
}

impl GameManager {
    /// Creates a new `GameManager` with the given storage backend.
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self { store }
    }

    /// Lists stored games, most recently created first.
    ///
    /// The descending sort is a display policy for the game list, not a
    /// property of the stored collection, which keeps its own order.
    pub async fn recent_games(&self) -> Result<Vec<Game>> {
        let mut games = self.store.load_all().await?;
        games.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(games)
    }

    /// Starts a new game, persists it, and returns it.
    ///
    /// The game is named [`DEFAULT_GAME_NAME`]; if the collection already
    /// holds a game with that exact name, the current date-time is appended
    /// so the new entry stays distinguishable.
    pub async fn start_game(&self) -> Result<Game> {
        let mut games = self.store.load_all().await?;

        let mut name = DEFAULT_GAME_NAME.to_string();
        if games.iter().any(|g| g.name == name) {
            name = format!(
                "{} {}",
                DEFAULT_GAME_NAME,
                Local::now().format(NAME_SUFFIX_FORMAT)
            );
        }

        let game = Game::new(name);
        games.push(game.clone());
        self.store.save_all(&games).await?;

        Ok(game)
    }

    /// Persists the caller's current game back into the collection
    /// (the "go back" action of the game screen).
    ///
    /// The first stored entry with a matching name is replaced; if none
    /// matches, the game is appended.
    pub async fn save_game(&self, game: &Game) -> Result<()> {
        let mut games = self.store.load_all().await?;
        collection::upsert_by_name(&mut games, game);
        self.store.save_all(&games).await
    }

    /// Deletes every stored game with this name.
    pub async fn delete_game(&self, name: &str) -> Result<()> {
        let mut games = self.store.load_all().await?;
        collection::delete_by_name(&mut games, name);
        self.store.save_all(&games).await
    }
}
