//! JSON file implementation of the game store.

use crate::dto::GameRecord;
use crate::paths::TallyPaths;
use async_trait::async_trait;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tally_core::error::Result;
use tally_core::game::{Game, GameStore};

/// A store implementation keeping the full game collection in one JSON file.
///
/// The whole collection is rewritten on every save; there is no partial
/// update. A missing or unparseable file is treated as an empty collection
/// on load, so a fresh install and a corrupted store both start the user
/// with an empty game list rather than an error.
pub struct JsonGameStore {
    path: PathBuf,
}

impl JsonGameStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file is not created until the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the default platform location
    /// (`<data_dir>/tally/games.json`), creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be determined or created.
    pub fn default_location() -> Result<Self> {
        let data_dir = TallyPaths::data_dir()?;
        fs::create_dir_all(&data_dir)?;
        Ok(Self::new(TallyPaths::games_file()?))
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl GameStore for JsonGameStore {
    async fn load_all(&self) -> Result<Vec<Game>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let records: Vec<GameRecord> = match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    "Ignoring malformed games file {:?}: {}",
                    self.path,
                    e
                );
                return Ok(Vec::new());
            }
        };

        Ok(records.into_iter().map(Game::from).collect())
    }

    async fn save_all(&self, games: &[Game]) -> Result<()> {
        let records: Vec<GameRecord> = games.iter().map(GameRecord::from).collect();
        let content = serde_json::to_string(&records)?;

        fs::write(&self.path, content)?;
        tracing::debug!("Saved {} games to {:?}", records.len(), self.path);

        Ok(())
    }
}
