//! Game domain module.
//!
//! This module contains the game-related domain models, the storage
//! interface, and the lifecycle flows built on top of them.
//!
//! # Module Structure
//!
//! - `model`: Core game domain model (`Game`)
//! - `roster`: Insertion-ordered player roster (`Roster`, `Player`)
//! - `collection`: Reconciliation helpers for the stored collection
//! - `repository`: Storage trait for the game collection (`GameStore`)
//! - `manager`: Game lifecycle flows (`GameManager`)

pub mod collection;
mod manager;
mod model;
mod repository;
mod roster;

// Re-export public API
pub use manager::{DEFAULT_GAME_NAME, GameManager};
pub use model::{Game, TIMESTAMP_FORMAT};
pub use repository::GameStore;
pub use roster::{Player, Roster};
