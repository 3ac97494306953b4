pub mod error;
pub mod game;

// Re-export common error type
pub use error::TallyError;
