//! Reconciliation of an in-memory game back into the stored collection.
//!
//! The collection is the full ordered sequence of persisted games; it is
//! always loaded, modified, and saved as a whole. Game names are the
//! de-facto keys: they are not forced to be unique, so upsert uses
//! first-match semantics and delete removes every match.

use super::model::Game;

/// Replaces the first game whose name matches `game.name` with the given
/// state, or appends `game` to the end if no entry matches.
pub fn upsert_by_name(games: &mut Vec<Game>, game: &Game) {
    match games.iter_mut().find(|g| g.name == game.name) {
        Some(existing) => *existing = game.clone(),
        None => games.push(game.clone()),
    }
}

/// Removes every game whose name matches `name`. The sequence is unchanged
/// when nothing matches.
pub fn delete_by_name(games: &mut Vec<Game>, name: &str) {
    games.retain(|g| g.name != name);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Game {
        Game::from_parts(
            name.to_string(),
            "2024-06-01 12:00:00".to_string(),
            Default::default(),
        )
    }

    #[test]
    fn test_upsert_appends_when_name_is_new() {
        let mut games = vec![named("A")];
        upsert_by_name(&mut games, &named("B"));
        assert_eq!(games.len(), 2);
        assert_eq!(games[1].name, "B");
    }

    #[test]
    fn test_upsert_replaces_existing_entry_in_place() {
        let mut games = vec![named("A"), named("B")];

        let mut updated = named("A");
        updated.add_player("Alice").unwrap();
        updated.update_score("Alice", 5).unwrap();
        upsert_by_name(&mut games, &updated);

        assert_eq!(games.len(), 2);
        assert_eq!(games[0].name, "A");
        assert_eq!(games[0].players().score("Alice"), Some(5));
    }

    #[test]
    fn test_upsert_twice_does_not_duplicate() {
        let mut games = Vec::new();
        upsert_by_name(&mut games, &named("X"));
        upsert_by_name(&mut games, &named("X"));
        assert_eq!(games.len(), 1);
    }

    #[test]
    fn test_upsert_with_duplicate_names_touches_first_match_only() {
        let mut games = vec![named("A"), named("A")];

        let mut updated = named("A");
        updated.add_player("P").unwrap();
        upsert_by_name(&mut games, &updated);

        assert_eq!(games[0].players().len(), 1);
        assert!(games[1].players().is_empty());
    }

    #[test]
    fn test_delete_removes_all_matches() {
        let mut games = vec![named("A"), named("B"), named("A")];
        delete_by_name(&mut games, "A");
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].name, "B");
    }

    #[test]
    fn test_delete_without_match_leaves_sequence_unchanged() {
        let mut games = vec![named("A"), named("B")];
        let before = games.clone();
        delete_by_name(&mut games, "C");
        assert_eq!(games, before);
    }
}
