//! Infrastructure layer for Tally.
//!
//! Provides the file-backed implementation of the core storage interface
//! plus platform path resolution for the default store location.

pub mod dto;
pub mod json_game_store;
pub mod paths;

pub use json_game_store::JsonGameStore;
pub use paths::TallyPaths;
