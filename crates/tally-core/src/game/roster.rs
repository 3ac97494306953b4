//! Insertion-ordered player roster.
//!
//! The persisted format stores players as a JSON object mapping player name
//! to score, and the presentation layer renders players in the order they
//! joined the game. A plain `HashMap` would lose that order on the round
//! trip, so the roster keeps its entries in a `Vec` and (de)serializes them
//! as a map in document order.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single scored player entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub score: i64,
}

/// The players of one game, keyed by name, with insertion order preserved.
///
/// Name uniqueness is enforced by [`Game`](super::Game), which owns all
/// validation; the roster itself only provides the ordered primitives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<Player>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of players in the roster.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no players have joined yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if a player with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|p| p.name == name)
    }

    /// Returns the score of the named player, if present.
    pub fn score(&self, name: &str) -> Option<i64> {
        self.entries.iter().find(|p| p.name == name).map(|p| p.score)
    }

    /// Iterates over `(name, score)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|p| (p.name.as_str(), p.score))
    }

    /// Sum of all scores; `0` for an empty roster.
    pub fn total(&self) -> i64 {
        self.entries.iter().map(|p| p.score).sum()
    }

    /// Appends a new player with score `0`. The caller must have checked
    /// that the name is not already present.
    pub(crate) fn push_new(&mut self, name: &str) {
        self.entries.push(Player {
            name: name.to_string(),
            score: 0,
        });
    }

    /// Removes the named player. Returns `false` if absent.
    pub(crate) fn remove(&mut self, name: &str) -> bool {
        match self.entries.iter().position(|p| p.name == name) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Adds `delta` to the named player's score. Returns `false` if absent.
    pub(crate) fn add_to(&mut self, name: &str, delta: i64) -> bool {
        match self.entries.iter_mut().find(|p| p.name == name) {
            Some(player) => {
                player.score += delta;
                true
            }
            None => false,
        }
    }

    /// Renames a player in place, keeping score and roster position.
    /// Returns `false` if absent.
    pub(crate) fn rename(&mut self, old_name: &str, new_name: &str) -> bool {
        match self.entries.iter_mut().find(|p| p.name == old_name) {
            Some(player) => {
                player.name = new_name.to_string();
                true
            }
            None => false,
        }
    }
}

impl FromIterator<(String, i64)> for Roster {
    fn from_iter<T: IntoIterator<Item = (String, i64)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, score)| Player { name, score })
                .collect(),
        }
    }
}

impl Serialize for Roster {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for player in &self.entries {
            map.serialize_entry(&player.name, &player.score)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RosterVisitor;

        impl<'de> Visitor<'de> for RosterVisitor {
            type Value = Roster;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of player names to integer scores")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Roster, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, score)) = access.next_entry::<String, i64>()? {
                    entries.push(Player { name, score });
                }
                Ok(Roster { entries })
            }
        }

        deserializer.deserialize_map(RosterVisitor)
    }
}
