//! Unified path management for the Tally data files.
//!
//! All persisted data lives under the platform data directory
//! (e.g., `~/.local/share/tally/` on Linux).

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform data directory could not be determined.
    DataDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::DataDirNotFound => write!(f, "Cannot find data directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for tally_core::TallyError {
    fn from(err: PathError) -> Self {
        tally_core::TallyError::io(err.to_string())
    }
}

/// Unified path management for Tally.
///
/// # Directory Structure
///
/// ```text
/// ~/.local/share/tally/        # Data directory
/// └── games.json               # The full stored game collection
/// ```
pub struct TallyPaths;

impl TallyPaths {
    /// Returns the Tally data directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to the data directory (e.g., `~/.local/share/tally/`)
    /// - `Err(PathError::DataDirNotFound)`: Could not determine directory
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join("tally"))
            .ok_or(PathError::DataDirNotFound)
    }

    /// Returns the path to the stored game collection.
    pub fn games_file() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("games.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_games_file_lives_in_data_dir() {
        let file = TallyPaths::games_file().unwrap();
        assert!(file.ends_with("tally/games.json"));
    }
}
