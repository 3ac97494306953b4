//! Error types for the Tally application.

use thiserror::Error;

/// A shared error type for the entire Tally application.
///
/// Model-level failures (`DuplicatePlayer`, `PlayerNotFound`, `InvalidName`)
/// are local validation errors returned to the immediate caller, which is
/// expected to surface them without crashing. Store-level failures (`Io`,
/// `Serialization`) propagate from the persistence layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TallyError {
    /// A player with this name is already part of the game
    #[error("Player '{name}' already exists")]
    DuplicatePlayer { name: String },

    /// The referenced player is not part of the game
    #[error("Player '{name}' does not exist")]
    PlayerNotFound { name: String },

    /// A provided name is unusable (e.g., empty after trimming)
    #[error("Invalid name: {reason}")]
    InvalidName { reason: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl TallyError {
    /// Creates a DuplicatePlayer error
    pub fn duplicate_player(name: impl Into<String>) -> Self {
        Self::DuplicatePlayer { name: name.into() }
    }

    /// Creates a PlayerNotFound error
    pub fn player_not_found(name: impl Into<String>) -> Self {
        Self::PlayerNotFound { name: name.into() }
    }

    /// Creates an InvalidName error
    pub fn invalid_name(reason: impl Into<String>) -> Self {
        Self::InvalidName {
            reason: reason.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Check if this is a DuplicatePlayer error
    pub fn is_duplicate_player(&self) -> bool {
        matches!(self, Self::DuplicatePlayer { .. })
    }

    /// Check if this is a PlayerNotFound error
    pub fn is_player_not_found(&self) -> bool {
        matches!(self, Self::PlayerNotFound { .. })
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for TallyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, TallyError>`.
pub type Result<T> = std::result::Result<T, TallyError>;
