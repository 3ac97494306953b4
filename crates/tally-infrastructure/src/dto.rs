//! Wire-format DTOs for the JSON game store.
//!
//! The stored document is a flat JSON array of these records. The on-disk
//! field is named `timestamp` while the domain field is `created_at`; the
//! DTO pins the stored names so domain renames cannot silently change the
//! file format.

use serde::{Deserialize, Serialize};
use tally_core::game::{Game, Roster};

/// One stored game record.
///
/// ```json
/// { "name": "New Game", "timestamp": "2024-06-01 12:00:00", "players": { "Alice": 5 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub name: String,
    pub timestamp: String,
    pub players: Roster,
}

impl From<&Game> for GameRecord {
    fn from(game: &Game) -> Self {
        Self {
            name: game.name.clone(),
            timestamp: game.created_at.clone(),
            players: game.players().clone(),
        }
    }
}

impl From<GameRecord> for Game {
    fn from(record: GameRecord) -> Self {
        Game::from_parts(record.name, record.timestamp, record.players)
    }
}
