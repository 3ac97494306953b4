//! Game domain model.
//!
//! This module contains the core Game entity that represents one scoring
//! session in the application's domain layer.

use super::roster::Roster;
use crate::error::{Result, TallyError};
use chrono::Local;
use serde::{Deserialize, Serialize};

/// Fixed pattern for game creation timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Represents one scoring session in the application's domain layer.
///
/// A game contains:
/// - A display name (the de-facto key when reconciling the game back into
///   the stored collection)
/// - A creation timestamp, captured once and immutable afterwards
/// - An insertion-ordered roster of players and their running scores
///
/// This is the "pure" domain model that business logic operates on,
/// independent of any specific storage format. All player-management
/// invariants (name uniqueness, no partial mutation on failure) are
/// enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Human-readable game name; not guaranteed unique across the collection
    pub name: String,
    /// Timestamp when the game was created (`YYYY-MM-DD HH:MM:SS`, local time)
    pub created_at: String,
    players: Roster,
}

impl Game {
    /// Creates a fresh game with an empty roster, created now.
    ///
    /// No validation is performed on `name`; the empty string is permitted.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created_at: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            players: Roster::new(),
        }
    }

    /// Rehydrates a game from stored parts.
    pub fn from_parts(name: String, created_at: String, players: Roster) -> Self {
        Self {
            name,
            created_at,
            players,
        }
    }

    /// The players of this game, in join order.
    pub fn players(&self) -> &Roster {
        &self.players
    }

    /// Adds a player with a starting score of `0`.
    ///
    /// # Errors
    ///
    /// Returns `DuplicatePlayer` if a player with this name already exists;
    /// the roster is unchanged on failure.
    pub fn add_player(&mut self, name: &str) -> Result<()> {
        if self.players.contains(name) {
            return Err(TallyError::duplicate_player(name));
        }
        self.players.push_new(name);
        Ok(())
    }

    /// Removes a player and their score.
    ///
    /// # Errors
    ///
    /// Returns `PlayerNotFound` if no such player exists.
    pub fn remove_player(&mut self, name: &str) -> Result<()> {
        if !self.players.remove(name) {
            return Err(TallyError::player_not_found(name));
        }
        Ok(())
    }

    /// Adds `delta` (positive or negative) to a player's score.
    ///
    /// Scores are unbounded in both directions.
    ///
    /// # Errors
    ///
    /// Returns `PlayerNotFound` if no such player exists.
    pub fn update_score(&mut self, name: &str, delta: i64) -> Result<()> {
        if !self.players.add_to(name, delta) {
            return Err(TallyError::player_not_found(name));
        }
        Ok(())
    }

    /// Renames a player, moving their score and keeping their roster position.
    ///
    /// Renaming a player to their current name is a successful no-op.
    ///
    /// # Errors
    ///
    /// - `InvalidName` if `new_name` is empty after trimming
    /// - `PlayerNotFound` if `old_name` is absent
    /// - `DuplicatePlayer` if `new_name` belongs to another player
    ///
    /// The roster is unchanged on any failure.
    pub fn rename_player(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(TallyError::invalid_name("player name must not be empty"));
        }
        if !self.players.contains(old_name) {
            return Err(TallyError::player_not_found(old_name));
        }
        if new_name == old_name {
            return Ok(());
        }
        if self.players.contains(new_name) {
            return Err(TallyError::duplicate_player(new_name));
        }
        self.players.rename(old_name, new_name);
        Ok(())
    }

    /// Renames the game itself. A name that is empty after trimming is
    /// ignored and the current name kept.
    pub fn rename(&mut self, new_name: &str) {
        let trimmed = new_name.trim();
        if !trimmed.is_empty() {
            self.name = trimmed.to_string();
        }
    }

    /// Sum of all current player scores; `0` for an empty roster.
    ///
    /// Always derived from the roster, never stored independently.
    pub fn total_score(&self) -> i64 {
        self.players.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with_players(pairs: &[(&str, i64)]) -> Game {
        let players = pairs
            .iter()
            .map(|(name, score)| (name.to_string(), *score))
            .collect();
        Game::from_parts("Test".to_string(), "2024-06-01 12:00:00".to_string(), players)
    }

    #[test]
    fn test_new_game_has_empty_roster_and_formatted_timestamp() {
        let game = Game::new("Friday Night");
        assert!(game.players().is_empty());
        assert_eq!(game.total_score(), 0);
        // YYYY-MM-DD HH:MM:SS
        assert_eq!(game.created_at.len(), 19);
        assert_eq!(&game.created_at[4..5], "-");
        assert_eq!(&game.created_at[10..11], " ");
    }

    #[test]
    fn test_new_game_permits_empty_name() {
        let game = Game::new("");
        assert_eq!(game.name, "");
    }

    #[test]
    fn test_add_player_starts_at_zero() {
        let mut game = Game::new("g");
        game.add_player("Alice").unwrap();
        assert_eq!(game.players().score("Alice"), Some(0));
    }

    #[test]
    fn test_add_duplicate_player_fails_without_mutation() {
        let mut game = Game::new("g");
        game.add_player("Alice").unwrap();
        game.update_score("Alice", 7).unwrap();
        let before = game.players().clone();

        let err = game.add_player("Alice").unwrap_err();
        assert!(err.is_duplicate_player());
        assert_eq!(game.players(), &before);
    }

    #[test]
    fn test_remove_player_is_fail_loud() {
        let mut game = Game::new("g");
        let err = game.remove_player("Nobody").unwrap_err();
        assert!(err.is_player_not_found());

        game.add_player("Alice").unwrap();
        game.remove_player("Alice").unwrap();
        assert!(game.players().is_empty());
    }

    #[test]
    fn test_update_score_accumulates_and_goes_negative() {
        let mut game = Game::new("g");
        game.add_player("Bob").unwrap();
        game.update_score("Bob", 5).unwrap();
        game.update_score("Bob", -12).unwrap();
        assert_eq!(game.players().score("Bob"), Some(-7));
    }

    #[test]
    fn test_update_score_for_missing_player_fails() {
        let mut game = Game::new("g");
        assert!(game.update_score("Ghost", 1).unwrap_err().is_player_not_found());
    }

    #[test]
    fn test_total_score_tracks_roster_mutations() {
        let mut game = Game::new("g");
        game.add_player("Alice").unwrap();
        game.add_player("Bob").unwrap();
        game.update_score("Alice", 5).unwrap();
        game.update_score("Bob", -2).unwrap();
        assert_eq!(game.total_score(), 3);

        game.remove_player("Alice").unwrap();
        assert_eq!(game.total_score(), -2);
    }

    #[test]
    fn test_rename_player_moves_score_and_keeps_position() {
        let mut game = game_with_players(&[("A", 1), ("B", 2), ("C", 3)]);
        game.rename_player("B", "Bea").unwrap();
        let entries: Vec<(&str, i64)> = game.players().iter().collect();
        assert_eq!(entries, vec![("A", 1), ("Bea", 2), ("C", 3)]);
    }

    #[test]
    fn test_rename_player_to_existing_name_fails_without_mutation() {
        let mut game = game_with_players(&[("A", 1), ("B", 2)]);
        let before = game.players().clone();

        let err = game.rename_player("A", "B").unwrap_err();
        assert!(err.is_duplicate_player());
        assert_eq!(game.players(), &before);
    }

    #[test]
    fn test_rename_player_to_same_name_is_noop() {
        let mut game = game_with_players(&[("A", 1), ("B", 2)]);
        let before = game.players().clone();

        game.rename_player("A", "A").unwrap();
        assert_eq!(game.players(), &before);
    }

    #[test]
    fn test_rename_player_rejects_blank_name() {
        let mut game = game_with_players(&[("A", 1)]);
        let err = game.rename_player("A", "   ").unwrap_err();
        assert!(matches!(err, TallyError::InvalidName { .. }));
        assert_eq!(game.players().score("A"), Some(1));
    }

    #[test]
    fn test_rename_player_trims_new_name() {
        let mut game = game_with_players(&[("A", 4)]);
        game.rename_player("A", "  Bea  ").unwrap();
        assert_eq!(game.players().score("Bea"), Some(4));
    }

    #[test]
    fn test_rename_missing_player_fails() {
        let mut game = Game::new("g");
        assert!(game.rename_player("Ghost", "G").unwrap_err().is_player_not_found());
    }

    #[test]
    fn test_rename_game_ignores_blank_names() {
        let mut game = Game::new("Old");
        game.rename("  ");
        assert_eq!(game.name, "Old");

        game.rename("  New Name ");
        assert_eq!(game.name, "New Name");
    }

    #[test]
    fn test_created_at_survives_mutations() {
        let mut game = game_with_players(&[("A", 1)]);
        let created = game.created_at.clone();
        game.add_player("B").unwrap();
        game.rename("Renamed");
        assert_eq!(game.created_at, created);
    }
}
